use std::fmt;
use std::hash::{Hash, Hasher};

use pdfsift_core::{BBox, ElementData};

use crate::document::Document;

/// A handle to one element of a [`Document`].
///
/// Cheap to copy. Reads of tags and the ignore flag always reflect the
/// document's current state.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    document: &'a Document,
    index: usize,
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(document: &'a Document, index: usize) -> Self {
        Self { document, index }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Position in document order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &'a ElementData {
        self.document.data(self.index)
    }

    /// Text with leading and trailing whitespace stripped.
    pub fn text(&self) -> &'a str {
        self.data().stripped_text()
    }

    /// Text exactly as extracted.
    pub fn raw_text(&self) -> &'a str {
        &self.data().text
    }

    pub fn bbox(&self) -> BBox {
        self.data().bbox
    }

    pub fn page_number(&self) -> usize {
        self.data().page_number
    }

    /// Font string after mapping, e.g. `"Helvetica,10"` or a mapped name.
    pub fn font(&self) -> &'a str {
        &self.data().font
    }

    pub fn font_name(&self) -> &'a str {
        &self.data().font_name
    }

    pub fn font_size(&self) -> f64 {
        self.data().font_size
    }

    /// Tags in the order they were first added.
    pub fn tags(&self) -> Vec<String> {
        self.document.state()[self.index].tags.iter().cloned().collect()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.document.state()[self.index].tags.contains(tag)
    }

    /// Add a tag. Adding a tag twice has no further effect.
    pub fn add_tag(&self, tag: impl Into<String>) {
        let tag = tag.into();
        self.document.update_state(self.index, |state| {
            state.tags.insert(tag);
        });
    }

    /// Mark the element as ignored. It stays in the document and in any list
    /// that already holds it.
    pub fn ignore(&self) {
        self.document
            .update_state(self.index, |state| state.ignored = true);
    }

    pub fn is_ignored(&self) -> bool {
        self.document.is_ignored(self.index)
    }

    /// Unique names of the sections containing this element.
    pub fn sections(&self) -> Vec<String> {
        self.document.state()[self.index]
            .sections
            .iter()
            .cloned()
            .collect()
    }

    /// Whether the element shares at least one point with `bbox`.
    pub fn partially_within(&self, bbox: &BBox) -> bool {
        self.bbox().overlaps(bbox)
    }

    /// Whether every edge of the element lies inside `bbox`.
    pub fn entirely_within(&self, bbox: &BBox) -> bool {
        self.bbox().within(bbox)
    }

    /// Text, font name and font size all match.
    pub(crate) fn same_content(&self, other: &ElementRef<'_>) -> bool {
        self.text() == other.text()
            && self.font_name() == other.font_name()
            && self.font_size() == other.font_size()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.index == other.index
    }
}

impl Eq for ElementRef<'_> {}

impl Hash for ElementRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.document, state);
        self.index.hash(state);
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        f.debug_struct("ElementRef")
            .field("index", &data.index)
            .field("page_number", &data.page_number)
            .field("font", &data.font)
            .field("text", &data.stripped_text())
            .field("tags", &self.tags())
            .finish()
    }
}
