use crate::font::{FontMapping, font_string, round_font_size};
use crate::fragment::Fragment;
use crate::geometry::BBox;

/// Immutable attributes of one element, fixed when the document is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementData {
    /// Position in document order (0-based).
    pub index: usize,
    /// Page the element sits on (1-based).
    pub page_number: usize,
    pub bbox: BBox,
    /// Text as delivered by the extractor, unstripped.
    pub text: String,
    pub font_name: String,
    /// Font size rounded to the document's font size precision.
    pub font_size: f64,
    /// Font string after font mapping.
    pub font: String,
}

impl ElementData {
    /// Build element data from a raw fragment.
    pub fn from_fragment<F: Fragment>(
        fragment: &F,
        index: usize,
        page_number: usize,
        font_size_precision: u32,
        font_mapping: Option<&FontMapping>,
    ) -> Self {
        let font_name = fragment.font_name().to_string();
        let font_size = round_font_size(fragment.font_size(), font_size_precision);
        let raw_font = font_string(&font_name, font_size, font_size_precision);
        let font = match font_mapping {
            Some(mapping) => mapping.apply(&raw_font),
            None => raw_font,
        };
        Self {
            index,
            page_number,
            bbox: fragment.bbox(),
            text: fragment.text().to_string(),
            font_name,
            font_size,
            font,
        }
    }

    /// Text with surrounding whitespace removed.
    pub fn stripped_text(&self) -> &str {
        self.text.trim()
    }
}
