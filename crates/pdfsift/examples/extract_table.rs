//! Rebuild the table stored in a JSON layout file and print it row by row.
//!
//! The layout is an array of pages as produced by an extractor, see
//! `JsonExtractor`. Elements above the optional heading text are dropped.
//!
//! Usage: `cargo run --example extract_table --features serde -- <layout.json> [heading]`

use pdfsift::{
    JsonExtractor, LoadOptions, RelativeOptions, TableOptions, extract_table_text, load_file,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: extract_table <layout.json> [heading]");
        std::process::exit(1);
    });
    let heading = args.next();

    let document = load_file(&JsonExtractor, &path, LoadOptions::default()).unwrap_or_else(|e| {
        eprintln!("Error loading layout: {e}");
        std::process::exit(1);
    });

    let mut elements = document.elements();
    if let Some(heading) = heading {
        let found = elements
            .filter_by_text_equal(&heading, true)
            .extract_single_element()
            .and_then(|h| elements.below(&h, &RelativeOptions::all_pages()));
        elements = found.unwrap_or_else(|e| {
            eprintln!("Error finding heading {heading:?}: {e}");
            std::process::exit(1);
        });
    }

    let options = TableOptions {
        fix_element_in_multiple_rows: true,
        fix_element_in_multiple_cols: true,
        ..TableOptions::default()
    };
    let table = extract_table_text(&elements, &options, true).unwrap_or_else(|e| {
        eprintln!("Error extracting table: {e}");
        std::process::exit(1);
    });

    println!(
        "--- {} row(s) from {} page(s) ---",
        table.len(),
        document.number_of_pages()
    );
    for row in &table {
        println!("    {:?}", row);
    }
}
