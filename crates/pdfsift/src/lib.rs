//! pdfsift: Query positioned PDF text and rebuild tables from element layout.
//!
//! This is the public API facade. It re-exports the data types of
//! pdfsift-core and adds the document model, the element query algebra,
//! sectioning and table extraction on top of them.
//!
//! # Architecture
//!
//! - **pdfsift-core**: Extractor-independent data types and algorithms
//! - **pdfsift** (this crate): [`Document`], [`ElementList`] queries, sections,
//!   tables and loading through an [`Extractor`]
//!
//! # Example
//!
//! ```
//! use pdfsift::{BBox, Document, DocumentOptions, RawFragment, RawPage, RelativeOptions};
//!
//! let fragments = vec![
//!     RawFragment::new(BBox::new(10.0, 700.0, 60.0, 712.0), "Name:", "Helvetica-Bold", 12.0),
//!     RawFragment::new(BBox::new(70.0, 700.0, 140.0, 712.0), "Jane Doe", "Helvetica", 12.0),
//! ];
//! let pages = vec![RawPage::new(612.0, 792.0, fragments)];
//! let document = Document::from_pages(pages, DocumentOptions::default()).unwrap();
//!
//! let label = document
//!     .elements()
//!     .filter_by_text_equal("Name:", true)
//!     .extract_single_element()
//!     .unwrap();
//! let value = document
//!     .elements()
//!     .to_the_right_of(&label, &RelativeOptions::default())
//!     .unwrap()
//!     .extract_single_element()
//!     .unwrap();
//! assert_eq!(value.text(), "Jane Doe");
//! ```

mod document;
mod element;
mod filtering;
mod loaders;
mod sectioning;
mod tables;

pub use pdfsift_core;
pub use pdfsift_core::{
    BBox, ElementData, ElementOrdering, Error, FontMapping, Fragment, LayoutParams, RawFragment,
    RawPage, Result, SourceError,
};

pub use document::{Document, DocumentOptions, Page, PageInfo};
pub use element::ElementRef;
pub use filtering::{ElementList, IntoIter, Iter, Reference, RelativeOptions};
#[cfg(feature = "serde")]
pub use loaders::JsonExtractor;
pub use loaders::{Extractor, LoadOptions, load, load_file};
pub use sectioning::{Section, Sectioning};
pub use tables::{
    SimpleTableOptions, Table, TableOptions, add_header_to_table, extract_simple_table,
    extract_simple_table_text, extract_table, extract_table_text, get_text_from_table,
    remove_duplicate_header_rows_from, validate_table_shape,
};
