//! Named, contiguous ranges of elements.

use std::collections::HashMap;

use pdfsift_core::{Error, Result};

use crate::document::Document;
use crate::element::ElementRef;
use crate::filtering::ElementList;

/// A contiguous run of elements in document order.
///
/// Sections refer to elements by index only. Their content is evaluated
/// against the document each time, so ignoring an element shrinks every
/// section containing it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    name: String,
    unique_name: String,
    start: usize,
    end: usize,
}

impl Section {
    /// Name the section was created with. Several sections may share it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<name>_<n>`, unique within the document.
    pub fn unique_name(&self) -> &str {
        &self.unique_name
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Index of the last element in the section (inclusive).
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Non-ignored elements of the section.
    pub fn elements<'a>(&self, document: &'a Document) -> ElementList<'a> {
        document.live_in_range(self.start, self.end + 1)
    }

    pub fn len(&self, document: &Document) -> usize {
        self.elements(document).len()
    }

    pub fn is_empty(&self, document: &Document) -> bool {
        self.len(document) == 0
    }

    /// Whether `element` belongs to `document`, lies in the section's range
    /// and is not ignored.
    pub fn contains(&self, document: &Document, element: &ElementRef<'_>) -> bool {
        std::ptr::eq(element.document(), document)
            && self.contains_index(element.index())
            && !element.is_ignored()
    }

    pub(crate) fn contains_index(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Registry of the sections of one document, append-only.
#[derive(Debug, Default)]
pub struct Sectioning {
    sections: Vec<Section>,
    name_counts: HashMap<String, usize>,
}

impl Sectioning {
    pub(crate) fn create_section(
        &mut self,
        name: &str,
        start: usize,
        end: usize,
        include_last_element: bool,
    ) -> Result<Section> {
        if start > end {
            return Err(Error::InvalidSection(
                "start element must come before end element".to_string(),
            ));
        }
        let end = if include_last_element {
            end
        } else if start == end {
            return Err(Error::InvalidSection(
                "cannot exclude the last element when start and end are the same element"
                    .to_string(),
            ));
        } else {
            end - 1
        };
        let count = self.name_counts.entry(name.to_string()).or_insert(0);
        let unique_name = format!("{name}_{count}");
        *count += 1;
        let section = Section {
            name: name.to_string(),
            unique_name,
            start,
            end,
        };
        self.sections.push(section.clone());
        Ok(section)
    }

    pub fn get_section(&self, unique_name: &str) -> Result<&Section> {
        self.sections
            .iter()
            .find(|s| s.unique_name == unique_name)
            .ok_or_else(|| Error::SectionNotFound(unique_name.to_string()))
    }

    pub fn sections_with_name<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Section> {
        self.sections.iter().filter(move |s| s.name == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
