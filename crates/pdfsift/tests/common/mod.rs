//! Shared fixture builders for the integration tests.
//!
//! Documents are built straight from [`RawFragment`]s, the same shape an
//! extractor hands over, so no PDF files are involved.

#![allow(dead_code)]

use pdfsift::{BBox, Document, DocumentOptions, ElementList, RawFragment, RawPage, Table};

pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

/// A Helvetica 10pt fragment.
pub fn frag(text: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> RawFragment {
    RawFragment::new(BBox::new(x0, y0, x1, y1), text, "Helvetica", 10.0)
}

/// A fragment with an explicit font.
pub fn frag_font(text: &str, bbox: BBox, font_name: &str, font_size: f64) -> RawFragment {
    RawFragment::new(bbox, text, font_name, font_size)
}

/// Bounding box of grid cell (`row`, `column`).
///
/// Cells are 50pt wide and 10pt tall with 10pt gutters; row 0 is at the top
/// of the page.
pub fn cell_bbox(row: usize, column: usize) -> BBox {
    let x0 = 10.0 + 60.0 * column as f64;
    let y1 = 700.0 - 20.0 * row as f64;
    BBox::new(x0, y1 - 10.0, x0 + 50.0, y1)
}

/// Fragments for a grid of cells; `None` leaves the cell empty.
pub fn grid(rows: &[&[Option<&str>]]) -> Vec<RawFragment> {
    let mut fragments = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if let Some(text) = text {
                fragments.push(RawFragment::new(cell_bbox(r, c), *text, "Helvetica", 10.0));
            }
        }
    }
    fragments
}

/// A full grid where cell (r, c) reads `"r{r}c{c}"`.
pub fn full_grid(rows: usize, columns: usize) -> Vec<RawFragment> {
    let mut fragments = Vec::new();
    for r in 0..rows {
        for c in 0..columns {
            fragments.push(RawFragment::new(
                cell_bbox(r, c),
                format!("r{r}c{c}"),
                "Helvetica",
                10.0,
            ));
        }
    }
    fragments
}

/// Letter-sized page.
pub fn page(fragments: Vec<RawFragment>) -> RawPage {
    RawPage::new(PAGE_WIDTH, PAGE_HEIGHT, fragments)
}

pub fn single_page(fragments: Vec<RawFragment>) -> Document {
    document(vec![page(fragments)])
}

pub fn document(pages: Vec<RawPage>) -> Document {
    Document::from_pages(pages, DocumentOptions::default()).unwrap()
}

/// Stripped texts of a list, in document order.
pub fn texts(list: &ElementList<'_>) -> Vec<String> {
    list.iter().map(|e| e.text().to_string()).collect()
}

/// Cell texts of a table; empty cells are `""`.
pub fn table_texts(table: &Table<'_>) -> Vec<Vec<String>> {
    pdfsift::get_text_from_table(table, true)
}

/// Owned rows from string slices, for comparing against table text.
pub fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}
