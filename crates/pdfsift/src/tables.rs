//! Table reconstruction from element positions.
//!
//! Both algorithms take the elements of one table (already delimited by the
//! caller) and arrange them into rows and columns purely from their bounding
//! boxes:
//!
//! - [`extract_simple_table`] reads the grid off a reference element's row
//!   and column. Fast, but the first row and column must be complete.
//! - [`extract_table`] derives every row and column from every element. It
//!   tolerates gaps anywhere and can resolve merged cells.

use indexmap::IndexMap;
use pdfsift_core::{Error, Result};
use tracing::debug;

use crate::document::Document;
use crate::element::ElementRef;
use crate::filtering::{ElementList, RelativeOptions};

/// Rows top to bottom, cells left to right. Empty cells are `None`.
pub type Table<'a> = Vec<Vec<Option<ElementRef<'a>>>>;

/// Options for [`extract_simple_table`].
#[derive(Debug, Clone, Default)]
pub struct SimpleTableOptions<'a> {
    /// Allow empty cells outside the reference row and column.
    pub allow_gaps: bool,
    /// Element whose row and column define the grid. Defaults to the first
    /// element; it should sit in a complete row and a complete column.
    pub reference_element: Option<ElementRef<'a>>,
    /// Tolerance passed to the in-line tests.
    pub tolerance: f64,
    /// Drop later rows that repeat the first row.
    pub remove_duplicate_header_rows: bool,
}

/// Options for [`extract_table`].
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Tolerance passed to the in-line tests.
    pub tolerance: f64,
    /// Resolve elements spanning several rows by keeping them in the top-most.
    pub fix_element_in_multiple_rows: bool,
    /// Resolve elements spanning several columns by keeping them in the left-most.
    pub fix_element_in_multiple_cols: bool,
    /// Drop later rows that repeat the first row.
    pub remove_duplicate_header_rows: bool,
}

fn in_line(tolerance: f64) -> RelativeOptions {
    RelativeOptions {
        inclusive: true,
        tolerance,
        all_pages: false,
    }
}

fn in_column(tolerance: f64) -> RelativeOptions {
    RelativeOptions {
        inclusive: true,
        tolerance,
        all_pages: true,
    }
}

/// Members of both sorted index slices.
fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::new();
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Top-to-bottom order of a row: page first, then descending top edge.
fn row_key(element: &ElementRef<'_>) -> (usize, f64) {
    (element.page_number(), -element.bbox().y1)
}

fn cell<'a>(
    elements: &ElementList<'a>,
    candidates: Vec<usize>,
    row: usize,
    column: usize,
) -> Result<Option<ElementRef<'a>>> {
    match candidates.as_slice() {
        [] => Ok(None),
        [index] => Ok(elements.document().element(*index)),
        many => Err(Error::TableExtraction(format!(
            "{} elements found in cell at row {row}, column {column}",
            many.len()
        ))),
    }
}

/// Build a table from a reference element's row and column.
///
/// The reference row gives the columns and the reference column (searched
/// across pages) gives the rows. A cell holds the element in line with both
/// its row head and its column head.
///
/// # Errors
///
/// - [`Error::TableGap`] if a cell is empty and `allow_gaps` is not set.
/// - [`Error::TableExtraction`] if a cell holds more than one element.
/// - [`Error::TableReferenceMismatch`] if the grid does not place every input
///   element exactly once (usually a gap in the reference row or column).
pub fn extract_simple_table<'a>(
    elements: &ElementList<'a>,
    options: &SimpleTableOptions<'a>,
) -> Result<Table<'a>> {
    let reference = match options.reference_element {
        Some(reference) => reference,
        None => match elements.first() {
            Ok(first) => first,
            Err(_) => return Ok(Vec::new()),
        },
    };
    let tolerance = options.tolerance;

    let mut row_heads: Vec<ElementRef<'a>> = elements
        .vertically_in_line_with(&reference, &in_column(tolerance))?
        .into_iter()
        .collect();
    row_heads.sort_by(|a, b| {
        let (pa, ya) = row_key(a);
        let (pb, yb) = row_key(b);
        pa.cmp(&pb).then_with(|| ya.total_cmp(&yb))
    });
    let mut column_heads: Vec<ElementRef<'a>> = elements
        .horizontally_in_line_with(&reference, &in_line(tolerance))?
        .into_iter()
        .collect();
    column_heads.sort_by(|a, b| a.bbox().x0.total_cmp(&b.bbox().x0));

    let rows = row_heads
        .iter()
        .map(|head| {
            elements
                .horizontally_in_line_with(head, &in_line(tolerance))
                .map(|l| l.indexes().to_vec())
        })
        .collect::<Result<Vec<_>>>()?;
    let columns = column_heads
        .iter()
        .map(|head| {
            elements
                .vertically_in_line_with(head, &in_column(tolerance))
                .map(|l| l.indexes().to_vec())
        })
        .collect::<Result<Vec<_>>>()?;

    let mut table = Vec::with_capacity(rows.len());
    let mut placed = Vec::with_capacity(elements.len());
    for (r, row) in rows.iter().enumerate() {
        let mut table_row = Vec::with_capacity(columns.len());
        for (c, column) in columns.iter().enumerate() {
            let found = cell(elements, intersect(row, column), r, c)?;
            match found {
                Some(element) => placed.push(element.index()),
                None if !options.allow_gaps => {
                    return Err(Error::TableGap { row: r, column: c });
                }
                None => {}
            }
            table_row.push(found);
        }
        table.push(table_row);
    }

    let placed_count = placed.len();
    placed.sort_unstable();
    placed.dedup();
    if placed_count != elements.len() || placed.len() != placed_count {
        return Err(Error::TableReferenceMismatch {
            placed: placed_count,
            expected: elements.len(),
        });
    }

    finish_table(table, options.remove_duplicate_header_rows)
}

/// Resolve elements appearing in more than one band.
///
/// Bands that strictly contain another band are dropped while every member
/// stays covered, then each element is kept only in the first band (in
/// sorted order) that holds it. Empty bands are removed.
fn resolve_bands(
    mut bands: Vec<Vec<usize>>,
    sort: impl Fn(&mut Vec<Vec<usize>>),
) -> Vec<Vec<usize>> {
    bands.sort_by_key(|b| std::cmp::Reverse(b.len()));
    let mut i = 0;
    while i < bands.len() {
        let band = &bands[i];
        let contains_other = bands.iter().enumerate().any(|(j, other)| {
            j != i
                && other.len() < band.len()
                && other.iter().all(|x| band.binary_search(x).is_ok())
        });
        let covered = band.iter().all(|x| {
            bands
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.binary_search(x).is_ok())
        });
        if contains_other && covered {
            bands.remove(i);
        } else {
            i += 1;
        }
    }
    sort(&mut bands);
    let mut assigned: Vec<usize> = Vec::new();
    for band in &mut bands {
        band.retain(|x| match assigned.binary_search(x) {
            Ok(_) => false,
            Err(position) => {
                assigned.insert(position, *x);
                true
            }
        });
    }
    bands.retain(|b| !b.is_empty());
    bands
}

/// First element present in more than one band, if any.
fn element_in_multiple_bands(bands: &[Vec<usize>]) -> Option<usize> {
    let mut seen: Vec<usize> = bands.iter().flatten().copied().collect();
    seen.sort_unstable();
    seen.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}

fn distinct(mut bands: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    bands.sort();
    bands.dedup();
    bands
}

/// Build a table by deriving rows and columns from every element.
///
/// Each element's row (page-local) and column (across pages) are computed;
/// the distinct groups become the table's rows and columns. Gaps are allowed
/// anywhere. An element belonging to several columns or rows is a merged
/// cell; columns are checked and resolved before rows.
///
/// # Errors
///
/// - [`Error::ElementInMultipleColumns`] / [`Error::ElementInMultipleRows`]
///   for merged cells unless the matching fix option is set.
/// - [`Error::TableExtraction`] if a cell holds more than one element.
pub fn extract_table<'a>(elements: &ElementList<'a>, options: &TableOptions) -> Result<Table<'a>> {
    let document = elements.document();
    let tolerance = options.tolerance;
    let mut rows = Vec::with_capacity(elements.len());
    let mut columns = Vec::with_capacity(elements.len());
    for element in elements {
        rows.push(
            elements
                .horizontally_in_line_with(&element, &in_line(tolerance))?
                .indexes()
                .to_vec(),
        );
        columns.push(
            elements
                .vertically_in_line_with(&element, &in_column(tolerance))?
                .indexes()
                .to_vec(),
        );
    }
    let mut rows = distinct(rows);
    let mut columns = distinct(columns);

    let sort_columns = |bands: &mut Vec<Vec<usize>>| {
        bands.sort_by(|a, b| column_left(document, a).total_cmp(&column_left(document, b)));
    };
    let sort_rows = |bands: &mut Vec<Vec<usize>>| {
        bands.sort_by(|a, b| {
            let (pa, ya) = row_top(document, a);
            let (pb, yb) = row_top(document, b);
            pa.cmp(&pb).then_with(|| yb.total_cmp(&ya))
        });
    };

    if let Some(index) = element_in_multiple_bands(&columns) {
        if !options.fix_element_in_multiple_cols {
            return Err(Error::ElementInMultipleColumns(index));
        }
        columns = resolve_bands(columns, sort_columns);
    } else {
        sort_columns(&mut columns);
    }
    if let Some(index) = element_in_multiple_bands(&rows) {
        if !options.fix_element_in_multiple_rows {
            return Err(Error::ElementInMultipleRows(index));
        }
        rows = resolve_bands(rows, sort_rows);
    } else {
        sort_rows(&mut rows);
    }

    let mut table = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let table_row = columns
            .iter()
            .enumerate()
            .map(|(c, column)| cell(elements, intersect(row, column), r, c))
            .collect::<Result<Vec<_>>>()?;
        table.push(table_row);
    }
    finish_table(table, options.remove_duplicate_header_rows)
}

/// Tightest left edge of a column: the right-most left edge of its members.
fn column_left(document: &Document, band: &[usize]) -> f64 {
    band.iter()
        .map(|&i| document.data(i).bbox.x0)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Page and tightest top edge of a row: the lowest top edge of its members.
fn row_top(document: &Document, band: &[usize]) -> (usize, f64) {
    let page = band.first().map_or(0, |&i| document.data(i).page_number);
    let top = band
        .iter()
        .map(|&i| document.data(i).bbox.y1)
        .fold(f64::INFINITY, f64::min);
    (page, top)
}

fn finish_table<'a>(table: Table<'a>, remove_duplicate_header_rows: bool) -> Result<Table<'a>> {
    let table = if remove_duplicate_header_rows {
        remove_duplicate_header_rows_from(table)
    } else {
        table
    };
    validate_table_shape(&table)?;
    debug!(
        rows = table.len(),
        columns = table.first().map_or(0, Vec::len),
        "extracted table"
    );
    Ok(table)
}

/// Drop rows after the first whose cells all match the first row's cells.
///
/// Cells match when both are empty or both hold elements with the same
/// stripped text, font name and font size.
pub fn remove_duplicate_header_rows_from(table: Table<'_>) -> Table<'_> {
    let mut rows = table.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let mut out: Table<'_> = rows
        .filter(|row| {
            row.len() != header.len()
                || !row.iter().zip(&header).all(|(a, b)| match (a, b) {
                    (None, None) => true,
                    (Some(a), Some(b)) => a.same_content(b),
                    _ => false,
                })
        })
        .collect();
    out.insert(0, header);
    out
}

/// Replace every cell with its text; empty cells become `""`.
pub fn get_text_from_table(table: &Table<'_>, strip_text: bool) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(element) if strip_text => element.text().to_string(),
                    Some(element) => element.raw_text().to_string(),
                    None => String::new(),
                })
                .collect()
        })
        .collect()
}

/// [`extract_simple_table`] followed by [`get_text_from_table`].
///
/// # Errors
///
/// As [`extract_simple_table`].
pub fn extract_simple_table_text<'a>(
    elements: &ElementList<'a>,
    options: &SimpleTableOptions<'a>,
    strip_text: bool,
) -> Result<Vec<Vec<String>>> {
    Ok(get_text_from_table(&extract_simple_table(elements, options)?, strip_text))
}

/// [`extract_table`] followed by [`get_text_from_table`].
///
/// # Errors
///
/// As [`extract_table`].
pub fn extract_table_text(
    elements: &ElementList<'_>,
    options: &TableOptions,
    strip_text: bool,
) -> Result<Vec<Vec<String>>> {
    Ok(get_text_from_table(&extract_table(elements, options)?, strip_text))
}

/// Turn a text table into one map per row, keyed by column header.
///
/// With `header` unset the first row is the header and is not returned as
/// data. With `skip_duplicate_headers`, data rows identical to the header are
/// dropped.
///
/// # Errors
///
/// - [`Error::InvalidTable`] if the table is not rectangular.
/// - [`Error::InvalidTableHeader`] if the header width differs from the
///   table width or a label repeats.
pub fn add_header_to_table(
    table: &[Vec<String>],
    header: Option<&[&str]>,
    skip_duplicate_headers: bool,
) -> Result<Vec<IndexMap<String, String>>> {
    validate_table_shape(table)?;
    let (labels, data): (Vec<String>, &[Vec<String>]) = match header {
        Some(header) => {
            if let Some(first) = table.first() {
                if first.len() != header.len() {
                    return Err(Error::InvalidTableHeader(format!(
                        "header length of {} does not match the width of the table ({})",
                        header.len(),
                        first.len()
                    )));
                }
            }
            (header.iter().map(|s| s.to_string()).collect(), table)
        }
        None => match table.split_first() {
            Some((first, rest)) => (first.clone(), rest),
            None => return Ok(Vec::new()),
        },
    };
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(Error::InvalidTableHeader(format!(
                "duplicate header label {label:?}"
            )));
        }
    }
    Ok(data
        .iter()
        .filter(|row| !(skip_duplicate_headers && **row == labels))
        .map(|row| labels.iter().cloned().zip(row.iter().cloned()).collect())
        .collect())
}

/// # Errors
///
/// Returns [`Error::InvalidTable`] if rows differ in length.
pub fn validate_table_shape<T>(table: &[Vec<T>]) -> Result<()> {
    let Some(first) = table.first() else {
        return Ok(());
    };
    for (i, row) in table.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(Error::InvalidTable(format!(
                "table not rectangular, row 0 has {} elements but row {i} has {}",
                first.len(),
                row.len()
            )));
        }
    }
    Ok(())
}
