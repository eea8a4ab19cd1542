//! Raw positioned text fragments as produced by a content extractor.

use crate::geometry::BBox;

/// A positioned run of text on a page.
///
/// This is the contract between pdfsift and whatever content extractor sits
/// upstream of it. Implementations are consumed once, when a
/// document is built, and never referenced again.
pub trait Fragment {
    /// Bounding box of the fragment in page space (bottom-left origin).
    fn bbox(&self) -> BBox;
    /// Text of the fragment, unstripped.
    fn text(&self) -> &str;
    /// Name of the font the fragment is set in.
    fn font_name(&self) -> &str;
    /// Font size in points.
    fn font_size(&self) -> f64;
}

/// Plain-data fragment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawFragment {
    pub bbox: BBox,
    pub text: String,
    pub font_name: String,
    pub font_size: f64,
}

impl RawFragment {
    pub fn new(
        bbox: BBox,
        text: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self {
            bbox,
            text: text.into(),
            font_name: font_name.into(),
            font_size,
        }
    }
}

impl Fragment for RawFragment {
    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn font_name(&self) -> &str {
        &self.font_name
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn bbox(&self) -> BBox {
        (**self).bbox()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn font_name(&self) -> &str {
        (**self).font_name()
    }

    fn font_size(&self) -> f64 {
        (**self).font_size()
    }
}

/// One page of extractor output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPage<F = RawFragment> {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Fragments in extractor order (not yet sorted).
    pub fragments: Vec<F>,
}

impl<F> RawPage<F> {
    pub fn new(width: f64, height: f64, fragments: Vec<F>) -> Self {
        Self {
            width,
            height,
            fragments,
        }
    }
}
