//! pdfsift-core: Extractor-independent data types and algorithms.
//!
//! This crate provides the foundational types ([`BBox`], [`Fragment`],
//! [`ElementData`], [`FontMapping`], [`ElementOrdering`]) and the error
//! taxonomy used by pdfsift. It knows nothing about PDF parsing; raw text
//! fragments come from an external extractor.

pub mod element;
pub mod error;
pub mod font;
pub mod fragment;
pub mod geometry;
pub mod layout;
pub mod ordering;

pub use element::ElementData;
pub use error::{Error, Result, SourceError};
pub use font::{FontMapping, font_string, round_font_size};
pub use fragment::{Fragment, RawFragment, RawPage};
pub use geometry::BBox;
pub use layout::LayoutParams;
pub use ordering::ElementOrdering;
