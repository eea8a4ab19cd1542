//! The document model: ordered elements, their mutable state, pages and sections.

use std::cell::{Ref, RefCell};
use std::fmt;

use indexmap::IndexSet;
use pdfsift_core::{
    ElementData, ElementOrdering, Error, FontMapping, Fragment, RawFragment, RawPage, Result,
};
use tracing::debug;

use crate::element::ElementRef;
use crate::filtering::ElementList;
use crate::sectioning::{Section, Sectioning};

/// Options controlling how raw pages become a [`Document`].
pub struct DocumentOptions<F = RawFragment> {
    /// Optional renaming of font strings.
    pub font_mapping: Option<FontMapping>,
    /// Decimal places font sizes are rounded to.
    pub font_size_precision: u32,
    /// Reading order applied to each page.
    pub element_ordering: ElementOrdering<F>,
}

impl<F> Default for DocumentOptions<F> {
    fn default() -> Self {
        Self {
            font_mapping: None,
            font_size_precision: 1,
            element_ordering: ElementOrdering::default(),
        }
    }
}

impl<F> fmt::Debug for DocumentOptions<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentOptions")
            .field("font_mapping", &self.font_mapping)
            .field("font_size_precision", &self.font_size_precision)
            .field("element_ordering", &self.element_ordering)
            .finish()
    }
}

/// Mutable per-element state shared by every view of the document.
#[derive(Debug, Clone, Default)]
pub(crate) struct ElementState {
    pub(crate) tags: IndexSet<String>,
    pub(crate) ignored: bool,
    pub(crate) sections: IndexSet<String>,
}

/// Page dimensions and the contiguous range of elements on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInfo {
    /// 1-based page number.
    pub page_number: usize,
    pub width: f64,
    pub height: f64,
    /// Index of the first element on the page.
    pub start: usize,
    /// One past the index of the last element on the page.
    pub end: usize,
}

/// A single page of a [`Document`].
#[derive(Clone, Copy)]
pub struct Page<'a> {
    document: &'a Document,
    info: &'a PageInfo,
}

impl<'a> Page<'a> {
    pub fn page_number(&self) -> usize {
        self.info.page_number
    }

    pub fn width(&self) -> f64 {
        self.info.width
    }

    pub fn height(&self) -> f64 {
        self.info.height
    }

    /// Dimensions and element range of the page.
    pub fn info(&self) -> &'a PageInfo {
        self.info
    }

    /// Non-ignored elements on this page.
    pub fn elements(&self) -> ElementList<'a> {
        self.document.live_in_range(self.info.start, self.info.end)
    }

    /// First element on the page, ignored or not.
    pub fn start_element(&self) -> Option<ElementRef<'a>> {
        (self.info.start < self.info.end).then(|| ElementRef::new(self.document, self.info.start))
    }

    /// Last element on the page, ignored or not.
    pub fn end_element(&self) -> Option<ElementRef<'a>> {
        (self.info.start < self.info.end)
            .then(|| ElementRef::new(self.document, self.info.end - 1))
    }
}

impl fmt::Debug for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("page_number", &self.info.page_number)
            .field("width", &self.info.width)
            .field("height", &self.info.height)
            .finish()
    }
}

/// An ordered collection of elements spread over pages.
///
/// The document owns every element and its mutable state (tags, ignore flag,
/// section membership). [`ElementRef`] and [`ElementList`] borrow it and refer
/// to elements by index, so a tag added through one view is visible through
/// every other. State lives in [`RefCell`]s; a document is not `Sync`.
pub struct Document {
    elements: Vec<ElementData>,
    state: RefCell<Vec<ElementState>>,
    pages: Vec<PageInfo>,
    sectioning: RefCell<Sectioning>,
}

impl Document {
    /// Build a document from extractor output.
    ///
    /// Pages are numbered from 1 in the order given. Each page's fragments
    /// are arranged by `options.element_ordering` and the pages concatenated.
    /// A page without fragments is not an error: it keeps its page number and
    /// holds no elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElementOrdering`] if a custom ordering does not
    /// return a permutation of a page's fragments.
    pub fn from_pages<F: Fragment>(
        pages: Vec<RawPage<F>>,
        options: DocumentOptions<F>,
    ) -> Result<Self> {
        let mut elements = Vec::new();
        let mut page_infos = Vec::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            let page_number = i + 1;
            let start = elements.len();
            for position in options.element_ordering.order(&page.fragments)? {
                let data = ElementData::from_fragment(
                    &page.fragments[position],
                    elements.len(),
                    page_number,
                    options.font_size_precision,
                    options.font_mapping.as_ref(),
                );
                elements.push(data);
            }
            page_infos.push(PageInfo {
                page_number,
                width: page.width,
                height: page.height,
                start,
                end: elements.len(),
            });
        }
        debug!(
            pages = page_infos.len(),
            elements = elements.len(),
            ordering = ?options.element_ordering,
            "built document"
        );
        let state = vec![ElementState::default(); elements.len()];
        Ok(Self {
            elements,
            state: RefCell::new(state),
            pages: page_infos,
            sectioning: RefCell::new(Sectioning::default()),
        })
    }

    /// Every element that is not currently ignored.
    pub fn elements(&self) -> ElementList<'_> {
        self.live_in_range(0, self.elements.len())
    }

    /// Every element, including ignored ones.
    pub fn all_elements(&self) -> ElementList<'_> {
        ElementList::from_sorted(self, (0..self.elements.len()).collect())
    }

    /// Element at position `index` in document order.
    pub fn element(&self, index: usize) -> Option<ElementRef<'_>> {
        (index < self.elements.len()).then(|| ElementRef::new(self, index))
    }

    /// Total number of elements, including ignored ones.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`Error::PageNotFound`] if there is no such page.
    pub fn get_page(&self, page_number: usize) -> Result<Page<'_>> {
        self.page_info(page_number).map(|info| Page {
            document: self,
            info,
        })
    }

    pub fn pages(&self) -> Vec<Page<'_>> {
        self.pages
            .iter()
            .map(|info| Page {
                document: self,
                info,
            })
            .collect()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.pages.iter().map(|p| p.page_number).collect()
    }

    pub fn number_of_pages(&self) -> usize {
        self.pages.len()
    }

    /// Create a section spanning `start` to `end` in document order.
    ///
    /// The section's unique name is `<name>_<n>` where `n` counts the sections
    /// previously created with the same name, starting at 0. With
    /// `include_last_element` false the section stops just before `end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSection`] if `start` comes after `end`, if
    /// excluding `end` would leave the section empty, or if either element
    /// belongs to another document.
    pub fn create_section(
        &self,
        name: &str,
        start: ElementRef<'_>,
        end: ElementRef<'_>,
        include_last_element: bool,
    ) -> Result<Section> {
        if !std::ptr::eq(start.document(), self) || !std::ptr::eq(end.document(), self) {
            return Err(Error::InvalidSection(
                "section boundaries must belong to this document".to_string(),
            ));
        }
        let section = self.sectioning.borrow_mut().create_section(
            name,
            start.index(),
            end.index(),
            include_last_element,
        )?;
        let mut state = self.state.borrow_mut();
        for element in &mut state[section.start_index()..=section.end_index()] {
            element.sections.insert(section.unique_name().to_string());
        }
        debug!(
            unique_name = section.unique_name(),
            start = section.start_index(),
            end = section.end_index(),
            "created section"
        );
        Ok(section)
    }

    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if no section has this unique name.
    pub fn get_section(&self, unique_name: &str) -> Result<Section> {
        self.sectioning.borrow().get_section(unique_name).cloned()
    }

    /// Sections created with `name`, in creation order.
    pub fn sections_with_name(&self, name: &str) -> Vec<Section> {
        self.sectioning
            .borrow()
            .sections_with_name(name)
            .cloned()
            .collect()
    }

    /// All sections, in creation order.
    pub fn sections(&self) -> Vec<Section> {
        self.sectioning.borrow().sections().to_vec()
    }

    pub(crate) fn data(&self, index: usize) -> &ElementData {
        &self.elements[index]
    }

    pub(crate) fn state(&self) -> Ref<'_, Vec<ElementState>> {
        self.state.borrow()
    }

    pub(crate) fn update_state<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut ElementState) -> R,
    ) -> R {
        f(&mut self.state.borrow_mut()[index])
    }

    pub(crate) fn is_ignored(&self, index: usize) -> bool {
        self.state.borrow()[index].ignored
    }

    pub(crate) fn page_info(&self, page_number: usize) -> Result<&PageInfo> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .ok_or(Error::PageNotFound(page_number))
    }

    pub(crate) fn sectioning(&self) -> Ref<'_, Sectioning> {
        self.sectioning.borrow()
    }

    /// Non-ignored elements with index in `start..end`.
    pub(crate) fn live_in_range(&self, start: usize, end: usize) -> ElementList<'_> {
        let state = self.state.borrow();
        let indexes = (start..end).filter(|&i| !state[i].ignored).collect();
        ElementList::from_sorted(self, indexes)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.elements.len())
            .field("pages", &self.pages.len())
            .finish()
    }
}
