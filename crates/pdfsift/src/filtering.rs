//! Set-like queries over the elements of a document.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use pdfsift_core::{BBox, Error, Result};
use regex::Regex;

use crate::document::Document;
use crate::element::ElementRef;

/// Options for the geometric navigation filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeOptions {
    /// Keep the reference element(s) in the result.
    pub inclusive: bool,
    /// Shrinks the reference band on both sides, capped at half its size.
    pub tolerance: f64,
    /// Also search other pages where the relation allows it.
    pub all_pages: bool,
}

impl Default for RelativeOptions {
    fn default() -> Self {
        Self {
            inclusive: false,
            tolerance: 0.0,
            all_pages: false,
        }
    }
}

impl RelativeOptions {
    pub fn inclusive() -> Self {
        Self {
            inclusive: true,
            ..Self::default()
        }
    }

    pub fn all_pages() -> Self {
        Self {
            all_pages: true,
            ..Self::default()
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

/// Something geometric navigation can be measured from: a single element or
/// a list of them.
pub trait Reference<'a> {
    fn reference_document(&self) -> &'a Document;

    /// Bounding box and page number of the reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoElementFound`] for an empty list.
    fn reference_bbox(&self) -> Result<(BBox, usize)>;

    /// Indexes excluded from non-inclusive results.
    fn reference_indexes(&self) -> Vec<usize>;
}

impl<'a> Reference<'a> for ElementRef<'a> {
    fn reference_document(&self) -> &'a Document {
        self.document()
    }

    fn reference_bbox(&self) -> Result<(BBox, usize)> {
        Ok((self.bbox(), self.page_number()))
    }

    fn reference_indexes(&self) -> Vec<usize> {
        vec![self.index()]
    }
}

impl<'a> Reference<'a> for ElementList<'a> {
    fn reference_document(&self) -> &'a Document {
        self.document
    }

    /// Union of the members' boxes, on the page of the first member.
    fn reference_bbox(&self) -> Result<(BBox, usize)> {
        let first = self.first()?;
        let bbox = self
            .iter()
            .map(|e| e.bbox())
            .fold(first.bbox(), |acc, b| acc.union(&b));
        Ok((bbox, first.page_number()))
    }

    fn reference_indexes(&self) -> Vec<usize> {
        self.indexes.clone()
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Right,
    Left,
    Above,
    Below,
    HorizontallyInLine,
    VerticallyInLine,
}

impl Direction {
    fn matches(
        self,
        bbox: &BBox,
        page: usize,
        reference: &BBox,
        ref_page: usize,
        options: &RelativeOptions,
    ) -> bool {
        let tolerance = options.tolerance;
        if page == ref_page {
            return match self {
                Direction::Right => bbox.is_right_of(reference, tolerance),
                Direction::Left => bbox.is_left_of(reference, tolerance),
                Direction::Above => bbox.is_above(reference, tolerance),
                Direction::Below => bbox.is_below(reference, tolerance),
                Direction::HorizontallyInLine => {
                    bbox.is_horizontally_in_line_with(reference, tolerance)
                }
                Direction::VerticallyInLine => {
                    bbox.is_vertically_in_line_with(reference, tolerance)
                }
            };
        }
        if !options.all_pages {
            return false;
        }
        // Off the reference page only the column band matters.
        let in_column = bbox.is_vertically_in_line_with(reference, tolerance);
        match self {
            Direction::Above => page < ref_page && in_column,
            Direction::Below => page > ref_page && in_column,
            Direction::VerticallyInLine => in_column,
            Direction::Right | Direction::Left | Direction::HorizontallyInLine => false,
        }
    }
}

/// An ordered set of elements from one [`Document`].
///
/// Lists never hold duplicates and always iterate in document order. Every
/// filter returns a new list and leaves the receiver untouched; membership is
/// fixed when the list is built.
#[derive(Clone)]
pub struct ElementList<'a> {
    document: &'a Document,
    indexes: Vec<usize>,
}

impl<'a> ElementList<'a> {
    /// `indexes` must be strictly increasing.
    pub(crate) fn from_sorted(document: &'a Document, indexes: Vec<usize>) -> Self {
        debug_assert!(indexes.windows(2).all(|w| w[0] < w[1]));
        Self { document, indexes }
    }

    pub(crate) fn from_unsorted(document: &'a Document, mut indexes: Vec<usize>) -> Self {
        indexes.sort_unstable();
        indexes.dedup();
        Self { document, indexes }
    }

    /// An empty list over `document`.
    pub fn empty(document: &'a Document) -> Self {
        Self::from_sorted(document, Vec::new())
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Member indexes in document order.
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn iter(&self) -> Iter<'a, '_> {
        Iter {
            document: self.document,
            inner: self.indexes.iter(),
        }
    }

    pub fn contains(&self, element: &ElementRef<'_>) -> bool {
        std::ptr::eq(element.document(), self.document)
            && self.indexes.binary_search(&element.index()).is_ok()
    }

    /// Element at `position`; negative positions count from the end.
    pub fn get(&self, position: isize) -> Option<ElementRef<'a>> {
        let position = if position < 0 {
            self.indexes.len().checked_sub(position.unsigned_abs())?
        } else {
            position as usize
        };
        self.indexes
            .get(position)
            .map(|&i| ElementRef::new(self.document, i))
    }

    /// # Errors
    ///
    /// Returns [`Error::NoElementFound`] if the list is empty.
    pub fn first(&self) -> Result<ElementRef<'a>> {
        self.get(0).ok_or(Error::NoElementFound)
    }

    /// # Errors
    ///
    /// Returns [`Error::NoElementFound`] if the list is empty.
    pub fn last(&self) -> Result<ElementRef<'a>> {
        self.get(-1).ok_or(Error::NoElementFound)
    }

    /// Sub-list by position. Out-of-range bounds are clamped.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> ElementList<'a> {
        let len = self.indexes.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .clamp(start, len);
        Self::from_sorted(self.document, self.indexes[start..end].to_vec())
    }

    /// Union of the members' bounding boxes, or `None` if empty.
    pub fn bbox(&self) -> Option<BBox> {
        self.iter().map(|e| e.bbox()).reduce(|a, b| a.union(&b))
    }

    /// Returns the only element of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoElementFound`] if the list is empty and
    /// [`Error::MultipleElementsFound`] if it holds more than one element.
    pub fn extract_single_element(&self) -> Result<ElementRef<'a>> {
        match self.indexes.as_slice() {
            [] => Err(Error::NoElementFound),
            [index] => Ok(ElementRef::new(self.document, *index)),
            many => Err(Error::MultipleElementsFound(many.len())),
        }
    }

    fn retain(&self, mut keep: impl FnMut(ElementRef<'a>) -> bool) -> ElementList<'a> {
        let indexes = self
            .indexes
            .iter()
            .copied()
            .filter(|&i| keep(ElementRef::new(self.document, i)))
            .collect();
        Self::from_sorted(self.document, indexes)
    }

    fn check_same_document(&self, document: &Document) -> Result<()> {
        if std::ptr::eq(self.document, document) {
            Ok(())
        } else {
            Err(Error::IncompatibleDocuments)
        }
    }

    // ---- set algebra ----

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `other` belongs to another document.
    pub fn union(&self, other: &ElementList<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(other.document)?;
        let mut indexes = self.indexes.clone();
        indexes.extend_from_slice(&other.indexes);
        Ok(Self::from_unsorted(self.document, indexes))
    }

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `other` belongs to another document.
    pub fn intersection(&self, other: &ElementList<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(other.document)?;
        Ok(self.retain(|e| other.indexes.binary_search(&e.index()).is_ok()))
    }

    /// Members of `self` that are not in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `other` belongs to another document.
    pub fn difference(&self, other: &ElementList<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(other.document)?;
        Ok(self.retain(|e| other.indexes.binary_search(&e.index()).is_err()))
    }

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `other` belongs to another document.
    pub fn symmetric_difference(&self, other: &ElementList<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(other.document)?;
        let mut indexes: Vec<usize> = self
            .indexes
            .iter()
            .copied()
            .filter(|i| other.indexes.binary_search(i).is_err())
            .collect();
        indexes.extend(
            other
                .indexes
                .iter()
                .copied()
                .filter(|i| self.indexes.binary_search(i).is_err()),
        );
        Ok(Self::from_unsorted(self.document, indexes))
    }

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `element` belongs to another document.
    pub fn add_element(&self, element: ElementRef<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(element.document())?;
        let mut indexes = self.indexes.clone();
        if let Err(position) = indexes.binary_search(&element.index()) {
            indexes.insert(position, element.index());
        }
        Ok(Self::from_sorted(self.document, indexes))
    }

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if any element belongs to another document.
    pub fn add_elements<'b>(
        &self,
        elements: impl IntoIterator<Item = ElementRef<'b>>,
    ) -> Result<ElementList<'a>> {
        let mut indexes = self.indexes.clone();
        for element in elements {
            self.check_same_document(element.document())?;
            indexes.push(element.index());
        }
        Ok(Self::from_unsorted(self.document, indexes))
    }

    /// Removing a non-member is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if `element` belongs to another document.
    pub fn remove_element(&self, element: ElementRef<'_>) -> Result<ElementList<'a>> {
        self.check_same_document(element.document())?;
        Ok(self.retain(|e| e.index() != element.index()))
    }

    /// # Errors
    ///
    /// Returns [`Error::IncompatibleDocuments`] if any element belongs to another document.
    pub fn remove_elements<'b>(
        &self,
        elements: impl IntoIterator<Item = ElementRef<'b>>,
    ) -> Result<ElementList<'a>> {
        let mut removed = Vec::new();
        for element in elements {
            self.check_same_document(element.document())?;
            removed.push(element.index());
        }
        Ok(self.retain(|e| !removed.contains(&e.index())))
    }

    // ---- attribute filters ----

    /// Keep elements for which `predicate` returns true.
    pub fn filter(&self, predicate: impl Fn(ElementRef<'a>) -> bool) -> ElementList<'a> {
        self.retain(predicate)
    }

    /// Drop members that are currently ignored.
    pub fn exclude_ignored(&self) -> ElementList<'a> {
        let state = self.document.state();
        let indexes = self
            .indexes
            .iter()
            .copied()
            .filter(|&i| !state[i].ignored)
            .collect();
        Self::from_sorted(self.document, indexes)
    }

    pub fn filter_by_tag(&self, tag: &str) -> ElementList<'a> {
        self.retain(|e| e.has_tag(tag))
    }

    /// Elements carrying any of `tags`.
    pub fn filter_by_tags(&self, tags: &[&str]) -> ElementList<'a> {
        self.retain(|e| tags.iter().any(|tag| e.has_tag(tag)))
    }

    /// Elements whose text equals `text`. `stripped` compares the stripped text.
    pub fn filter_by_text_equal(&self, text: &str, stripped: bool) -> ElementList<'a> {
        self.retain(|e| element_text(&e, stripped) == text)
    }

    pub fn filter_by_text_contains(&self, text: &str, stripped: bool) -> ElementList<'a> {
        self.retain(|e| element_text(&e, stripped).contains(text))
    }

    /// Elements whose text matches `regex` starting at its first character.
    pub fn filter_by_regex(&self, regex: &Regex, stripped: bool) -> ElementList<'a> {
        self.retain(|e| {
            regex
                .find(element_text(&e, stripped))
                .is_some_and(|m| m.start() == 0)
        })
    }

    /// Elements whose (mapped) font string equals `font`.
    pub fn filter_by_font(&self, font: &str) -> ElementList<'a> {
        self.retain(|e| e.font() == font)
    }

    pub fn filter_by_fonts(&self, fonts: &[&str]) -> ElementList<'a> {
        self.retain(|e| fonts.contains(&e.font()))
    }

    /// Elements whose rounded font size equals `size`.
    pub fn filter_by_font_size(&self, size: f64) -> ElementList<'a> {
        self.retain(|e| e.font_size() == size)
    }

    /// # Errors
    ///
    /// Returns [`Error::PageNotFound`] if the document has no such page.
    pub fn filter_by_page(&self, page_number: usize) -> Result<ElementList<'a>> {
        self.filter_by_pages(&[page_number])
    }

    /// # Errors
    ///
    /// Returns [`Error::PageNotFound`] if the document lacks any of the pages.
    pub fn filter_by_pages(&self, page_numbers: &[usize]) -> Result<ElementList<'a>> {
        let mut ranges = Vec::with_capacity(page_numbers.len());
        for &page_number in page_numbers {
            let info = self.document.page_info(page_number)?;
            ranges.push(info.start..info.end);
        }
        Ok(self.retain(|e| ranges.iter().any(|r| r.contains(&e.index()))))
    }

    /// Elements inside any section created with `name`.
    pub fn filter_by_section_name(&self, name: &str) -> ElementList<'a> {
        self.filter_by_section_names(&[name])
    }

    pub fn filter_by_section_names(&self, names: &[&str]) -> ElementList<'a> {
        let sections: Vec<_> = {
            let sectioning = self.document.sectioning();
            names
                .iter()
                .flat_map(|name| sectioning.sections_with_name(name).cloned().collect::<Vec<_>>())
                .collect()
        };
        self.retain(|e| sections.iter().any(|s| s.contains_index(e.index())))
    }

    /// Elements inside the section with unique name `unique_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if no section has this unique name.
    pub fn filter_by_section(&self, unique_name: &str) -> Result<ElementList<'a>> {
        self.filter_by_sections(&[unique_name])
    }

    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if any unique name is unknown.
    pub fn filter_by_sections(&self, unique_names: &[&str]) -> Result<ElementList<'a>> {
        let sections = unique_names
            .iter()
            .map(|name| self.document.get_section(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.retain(|e| sections.iter().any(|s| s.contains_index(e.index()))))
    }

    /// Elements on `page_number` that share at least one point with `bbox`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageNotFound`] if the document has no such page.
    pub fn filter_partially_within_bounding_box(
        &self,
        bbox: &BBox,
        page_number: usize,
    ) -> Result<ElementList<'a>> {
        self.document.page_info(page_number)?;
        Ok(self.retain(|e| e.page_number() == page_number && e.partially_within(bbox)))
    }

    /// Drop elements lying entirely above `y` (bottom edge at or above it).
    pub fn filter_out_header(&self, y: f64) -> ElementList<'a> {
        self.retain(|e| e.bbox().y0 < y)
    }

    /// Drop elements lying entirely below `y` (top edge at or below it).
    pub fn filter_out_footer(&self, y: f64) -> ElementList<'a> {
        self.retain(|e| e.bbox().y1 > y)
    }

    // ---- geometric navigation ----

    fn relative<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
        direction: Direction,
    ) -> Result<ElementList<'a>> {
        self.check_same_document(reference.reference_document())?;
        let (ref_bbox, ref_page) = reference.reference_bbox()?;
        let excluded = if options.inclusive {
            Vec::new()
        } else {
            reference.reference_indexes()
        };
        Ok(self.retain(|e| {
            !excluded.contains(&e.index())
                && direction.matches(&e.bbox(), e.page_number(), &ref_bbox, ref_page, options)
        }))
    }

    /// Elements reaching to the right of the reference, in its row band.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoElementFound`] for an empty reference list and
    /// [`Error::IncompatibleDocuments`] for a reference from another document.
    pub fn to_the_right_of<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::Right)
    }

    /// # Errors
    ///
    /// As [`ElementList::to_the_right_of`].
    pub fn to_the_left_of<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::Left)
    }

    /// Elements above the reference in its column band. With `all_pages`,
    /// the whole column of every earlier page is included too.
    ///
    /// # Errors
    ///
    /// As [`ElementList::to_the_right_of`].
    pub fn above<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::Above)
    }

    /// Elements below the reference in its column band. With `all_pages`,
    /// the whole column of every later page is included too.
    ///
    /// # Errors
    ///
    /// As [`ElementList::to_the_right_of`].
    pub fn below<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::Below)
    }

    /// Elements overlapping the reference's row band on its page.
    ///
    /// # Errors
    ///
    /// As [`ElementList::to_the_right_of`].
    pub fn horizontally_in_line_with<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::HorizontallyInLine)
    }

    /// Elements overlapping the reference's column band, on every page when
    /// `all_pages` is set.
    ///
    /// # Errors
    ///
    /// As [`ElementList::to_the_right_of`].
    pub fn vertically_in_line_with<R: Reference<'a> + ?Sized>(
        &self,
        reference: &R,
        options: &RelativeOptions,
    ) -> Result<ElementList<'a>> {
        self.relative(reference, options, Direction::VerticallyInLine)
    }

    // ---- sequence navigation ----

    /// Members before `element` in document order.
    pub fn before(&self, element: ElementRef<'_>, inclusive: bool) -> ElementList<'a> {
        let index = element.index();
        self.retain(|e| e.index() < index || (inclusive && e.index() == index))
    }

    /// Members after `element` in document order.
    pub fn after(&self, element: ElementRef<'_>, inclusive: bool) -> ElementList<'a> {
        let index = element.index();
        self.retain(|e| e.index() > index || (inclusive && e.index() == index))
    }

    /// Members strictly between `start` and `end`, or including them when
    /// `inclusive` is set.
    pub fn between(
        &self,
        start: ElementRef<'_>,
        end: ElementRef<'_>,
        inclusive: bool,
    ) -> ElementList<'a> {
        let (start, end) = (start.index(), end.index());
        self.retain(|e| {
            let i = e.index();
            (start < i && i < end) || (inclusive && (i == start || i == end))
        })
    }

    /// Step `count` members forwards from `element`, skipping members that
    /// are currently ignored. A negative count steps backwards. `element` need
    /// not be a member itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] when stepping past either end of
    /// the list, unless `capped` is set, in which case the first or last
    /// reachable member is returned instead.
    pub fn move_forwards_from(
        &self,
        element: ElementRef<'_>,
        count: isize,
        capped: bool,
    ) -> Result<ElementRef<'a>> {
        self.check_same_document(element.document())?;
        if count == 0 {
            return Ok(ElementRef::new(self.document, element.index()));
        }
        let live = self.exclude_ignored();
        let target = match live.indexes.binary_search(&element.index()) {
            Ok(position) => position as isize + count,
            // `position` is the first live member after `element`.
            Err(position) if count > 0 => position as isize + count - 1,
            Err(position) => position as isize + count,
        };
        if target >= 0 {
            if let Some(found) = live.get(target) {
                return Ok(found);
            }
        }
        if !capped {
            return Err(Error::ElementOutOfRange);
        }
        let edge = if target < 0 { live.first() } else { live.last() };
        edge.map_err(|_| Error::ElementOutOfRange)
    }

    /// Step `count` members backwards from `element`. See
    /// [`ElementList::move_forwards_from`].
    ///
    /// # Errors
    ///
    /// As [`ElementList::move_forwards_from`].
    pub fn move_backwards_from(
        &self,
        element: ElementRef<'_>,
        count: isize,
        capped: bool,
    ) -> Result<ElementRef<'a>> {
        self.move_forwards_from(element, -count, capped)
    }

    // ---- bulk mutation ----

    /// Tag every member. Affects the shared document state.
    pub fn add_tag_to_elements(&self, tag: &str) {
        for element in self.iter() {
            element.add_tag(tag);
        }
    }

    /// Mark every member as ignored.
    pub fn ignore_elements(&self) {
        for element in self.iter() {
            element.ignore();
        }
    }
}

fn element_text<'a>(element: &ElementRef<'a>, stripped: bool) -> &'a str {
    if stripped {
        element.text()
    } else {
        element.raw_text()
    }
}

impl PartialEq for ElementList<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.indexes == other.indexes
    }
}

impl fmt::Debug for ElementList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementList")
            .field("len", &self.indexes.len())
            .field("indexes", &self.indexes)
            .finish()
    }
}

/// Borrowing iterator over an [`ElementList`].
pub struct Iter<'a, 'l> {
    document: &'a Document,
    inner: std::slice::Iter<'l, usize>,
}

impl<'a> Iterator for Iter<'a, '_> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|&i| ElementRef::new(self.document, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|&i| ElementRef::new(self.document, i))
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl<'a, 'l> IntoIterator for &'l ElementList<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = Iter<'a, 'l>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over an [`ElementList`].
pub struct IntoIter<'a> {
    document: &'a Document,
    inner: std::vec::IntoIter<usize>,
}

impl<'a> Iterator for IntoIter<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|i| ElementRef::new(self.document, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for ElementList<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = IntoIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            document: self.document,
            inner: self.indexes.into_iter(),
        }
    }
}
