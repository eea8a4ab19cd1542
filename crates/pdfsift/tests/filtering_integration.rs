//! Integration tests for the element query algebra.

mod common;

use common::{document, frag, frag_font, full_grid, single_page, texts};
use pdfsift::{BBox, Document, ElementList, Error, RawPage, RelativeOptions};
use regex::RegexBuilder;

/// Three 100x100 pages around a reference element `R` on page 2:
///
/// - page 1: `A` in R's column
/// - page 2: `D` above R, `C` right of R, `B` below R
/// - page 3: `E` in R's column, `F` outside it
///
/// Document order is A, D, R, C, B, E, F.
fn compass() -> Document {
    document(vec![
        RawPage::new(100.0, 100.0, vec![frag("A", 50.0, 10.0, 51.0, 20.0)]),
        RawPage::new(
            100.0,
            100.0,
            vec![
                frag("R", 50.0, 50.0, 51.0, 51.0),
                frag("B", 50.0, 10.0, 51.0, 20.0),
                frag("C", 80.0, 50.0, 90.0, 51.0),
                frag("D", 50.0, 80.0, 51.0, 90.0),
            ],
        ),
        RawPage::new(
            100.0,
            100.0,
            vec![
                frag("E", 50.0, 60.0, 51.0, 70.0),
                frag("F", 0.0, 20.0, 10.0, 30.0),
            ],
        ),
    ])
}

fn find<'a>(list: &ElementList<'a>, text: &str) -> pdfsift::ElementRef<'a> {
    list.filter_by_text_equal(text, true)
        .extract_single_element()
        .unwrap()
}

#[test]
fn compass_document_order() {
    let doc = compass();
    assert_eq!(texts(&doc.elements()), ["A", "D", "R", "C", "B", "E", "F"]);
}

#[test]
fn below_and_above() {
    let doc = compass();
    let all = doc.elements();
    let r = find(&all, "R");

    assert_eq!(texts(&all.below(&r, &RelativeOptions::default()).unwrap()), ["B"]);
    assert_eq!(texts(&all.below(&r, &RelativeOptions::inclusive()).unwrap()), ["R", "B"]);
    assert_eq!(texts(&all.below(&r, &RelativeOptions::all_pages()).unwrap()), ["B", "E"]);

    assert_eq!(texts(&all.above(&r, &RelativeOptions::default()).unwrap()), ["D"]);
    assert_eq!(texts(&all.above(&r, &RelativeOptions::all_pages()).unwrap()), ["A", "D"]);
}

#[test]
fn left_and_right() {
    let doc = compass();
    let all = doc.elements();
    let r = find(&all, "R");
    assert_eq!(texts(&all.to_the_right_of(&r, &RelativeOptions::default()).unwrap()), ["C"]);
    assert!(all.to_the_left_of(&r, &RelativeOptions::default()).unwrap().is_empty());
    let c = find(&all, "C");
    assert_eq!(texts(&all.to_the_left_of(&c, &RelativeOptions::default()).unwrap()), ["R"]);
    // Horizontal relations never leave the reference page.
    assert_eq!(
        texts(&all.to_the_right_of(&r, &RelativeOptions::all_pages()).unwrap()),
        ["C"]
    );
}

#[test]
fn in_line_with() {
    let doc = compass();
    let all = doc.elements();
    let r = find(&all, "R");
    assert_eq!(
        texts(&all.horizontally_in_line_with(&r, &RelativeOptions::default()).unwrap()),
        ["C"]
    );
    assert_eq!(
        texts(&all.vertically_in_line_with(&r, &RelativeOptions::default()).unwrap()),
        ["D", "B"]
    );
    assert_eq!(
        texts(&all.vertically_in_line_with(&r, &RelativeOptions::all_pages()).unwrap()),
        ["A", "D", "B", "E"]
    );
}

#[test]
fn tolerance_excludes_slight_overlaps() {
    let doc = single_page(vec![
        frag("ref", 50.0, 50.0, 60.0, 60.0),
        frag("nudging", 59.0, 10.0, 70.0, 20.0),
        frag("under", 52.0, 10.0, 58.0, 20.0),
    ]);
    let all = doc.elements();
    let r = find(&all, "ref");
    assert_eq!(
        texts(&all.below(&r, &RelativeOptions::default()).unwrap()),
        ["under", "nudging"]
    );
    assert_eq!(
        texts(&all.below(&r, &RelativeOptions::with_tolerance(1.0)).unwrap()),
        ["under"]
    );
    // A huge tolerance is capped at half the reference width.
    assert_eq!(
        texts(&all.below(&r, &RelativeOptions::with_tolerance(100.0)).unwrap()),
        ["under"]
    );
}

#[test]
fn shared_edges_are_not_in_line() {
    let doc = single_page(vec![
        frag("ref", 50.0, 50.0, 60.0, 60.0),
        frag("beside", 60.0, 10.0, 70.0, 20.0),
        frag("on top", 50.0, 60.0, 60.0, 70.0),
        frag("next", 60.0, 50.0, 70.0, 60.0),
    ]);
    let all = doc.elements();
    let r = find(&all, "ref");
    assert!(all.below(&r, &RelativeOptions::default()).unwrap().is_empty());
    assert!(
        all.horizontally_in_line_with(&find(&all, "on top"), &RelativeOptions::default())
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        texts(&all.to_the_right_of(&r, &RelativeOptions::default()).unwrap()),
        ["next"]
    );
    // Bounding box filters still count edge contact.
    let region = BBox::new(60.0, 0.0, 100.0, 100.0);
    assert_eq!(
        texts(&all.filter_partially_within_bounding_box(&region, 1).unwrap()),
        ["on top", "ref", "next", "beside"]
    );
}

#[test]
fn list_as_reference() {
    let doc = compass();
    let all = doc.elements();
    let reference = all.filter(|e| e.text() == "R" || e.text() == "D");
    assert_eq!(
        texts(&all.to_the_right_of(&reference, &RelativeOptions::default()).unwrap()),
        ["C"]
    );
    assert_eq!(
        texts(&all.below(&reference, &RelativeOptions::inclusive()).unwrap()),
        ["R", "B"]
    );
    let empty = all.filter_by_tag("missing");
    assert_eq!(
        all.below(&empty, &RelativeOptions::default()).unwrap_err(),
        Error::NoElementFound
    );
}

#[test]
fn set_algebra() {
    let doc = single_page(full_grid(2, 3));
    let all = doc.elements();
    let top = all.filter(|e| e.text().starts_with("r0"));
    let first_column = all.filter(|e| e.text().ends_with("c0"));

    assert_eq!(texts(&top.union(&first_column).unwrap()), ["r0c0", "r0c1", "r0c2", "r1c0"]);
    assert_eq!(texts(&top.intersection(&first_column).unwrap()), ["r0c0"]);
    assert_eq!(texts(&top.difference(&first_column).unwrap()), ["r0c1", "r0c2"]);
    assert_eq!(
        texts(&top.symmetric_difference(&first_column).unwrap()),
        ["r0c1", "r0c2", "r1c0"]
    );
    // Receivers are untouched.
    assert_eq!(top.len(), 3);
    assert_eq!(first_column.len(), 2);

    assert!(top.contains(&all.first().unwrap()));
    assert!(!top.contains(&all.last().unwrap()));
    assert_eq!(top.union(&top).unwrap(), top);
}

#[test]
fn set_algebra_laws() {
    let doc = single_page(full_grid(3, 3));
    let all = doc.elements();
    let a = all.filter(|e| e.text().starts_with("r1") || e.text().ends_with("c2"));
    let b = all.filter(|e| e.text().ends_with("c1"));

    assert!(a.difference(&a).unwrap().is_empty());
    assert_eq!(a.intersection(&a).unwrap(), a);
    assert_eq!(a.union(&a.difference(&a).unwrap()).unwrap(), a);
    assert!(a.symmetric_difference(&a).unwrap().is_empty());

    assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
    assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
    assert_eq!(
        a.symmetric_difference(&b).unwrap(),
        a.union(&b)
            .unwrap()
            .difference(&a.intersection(&b).unwrap())
            .unwrap()
    );
    assert_eq!(a.difference(&b).unwrap().intersection(&b).unwrap().len(), 0);
}

#[test]
fn set_algebra_requires_same_document() {
    let doc = single_page(full_grid(1, 2));
    let other = single_page(full_grid(1, 2));
    let result = doc.elements().union(&other.elements());
    assert_eq!(result.unwrap_err(), Error::IncompatibleDocuments);
    assert_eq!(
        doc.elements()
            .add_element(other.element(0).unwrap())
            .unwrap_err(),
        Error::IncompatibleDocuments
    );
    // Same indexes, different documents.
    assert_ne!(doc.elements(), other.elements());
}

#[test]
fn text_filters() {
    let doc = single_page(vec![
        frag("foo 1", 0.0, 90.0, 10.0, 100.0),
        frag("foo", 0.0, 70.0, 10.0, 80.0),
        frag("foo 987 ", 0.0, 50.0, 10.0, 60.0),
        frag(" Foo 100", 0.0, 30.0, 10.0, 40.0),
    ]);
    let all = doc.elements();
    assert_eq!(texts(&all.filter_by_text_equal("foo", true)), ["foo"]);
    assert_eq!(all.filter_by_text_contains("foo", true).len(), 3);
    assert!(all.filter_by_text_equal("hello", true).is_empty());

    let regex = RegexBuilder::new(r"^foo \d+$").build().unwrap();
    assert_eq!(texts(&all.filter_by_regex(&regex, true)), ["foo 1", "foo 987"]);
    assert_eq!(texts(&all.filter_by_regex(&regex, false)), ["foo 1"]);

    let insensitive = RegexBuilder::new(r"^foo \d+$")
        .case_insensitive(true)
        .build()
        .unwrap();
    assert_eq!(all.filter_by_regex(&insensitive, true).len(), 3);
    let spaced = RegexBuilder::new(r"^ foo \d+$")
        .case_insensitive(true)
        .build()
        .unwrap();
    assert_eq!(texts(&all.filter_by_regex(&spaced, false)), ["Foo 100"]);
}

#[test]
fn font_filters() {
    let doc = single_page(vec![
        frag_font("a", BBox::new(0.0, 90.0, 10.0, 100.0), "foo", 1.0),
        frag_font("b", BBox::new(0.0, 70.0, 10.0, 80.0), "bar", 2.0),
        frag_font("c", BBox::new(0.0, 50.0, 10.0, 60.0), "bat", 2.0),
        frag_font("d", BBox::new(0.0, 30.0, 10.0, 40.0), "baz", 3.0),
    ]);
    let all = doc.elements();
    assert!(all.filter_by_font("hello,1").is_empty());
    assert_eq!(texts(&all.filter_by_font("foo,1")), ["a"]);
    assert_eq!(texts(&all.filter_by_fonts(&["foo,1", "baz,3"])), ["a", "d"]);
    assert_eq!(texts(&all.filter_by_font_size(2.0)), ["b", "c"]);
}

#[test]
fn tag_filters() {
    let doc = single_page(full_grid(1, 3));
    let all = doc.elements();
    all.get(0).unwrap().add_tag("foo");
    all.get(1).unwrap().add_tag("bar");
    all.slice(1..).add_tag_to_elements("baz");
    assert_eq!(texts(&all.filter_by_tag("foo")), ["r0c0"]);
    assert_eq!(texts(&all.filter_by_tags(&["foo", "bar"])), ["r0c0", "r0c1"]);
    assert_eq!(texts(&all.filter_by_tag("baz")), ["r0c1", "r0c2"]);
}

#[test]
fn page_filters() {
    let doc = compass();
    let all = doc.elements();
    assert_eq!(texts(&all.filter_by_page(1).unwrap()), ["A"]);
    assert_eq!(texts(&all.filter_by_pages(&[1, 3]).unwrap()), ["A", "E", "F"]);
    assert_eq!(all.filter_by_page(4).unwrap_err(), Error::PageNotFound(4));
}

#[test]
fn bounding_box_filter() {
    let doc = compass();
    let all = doc.elements();
    let region = BBox::new(40.0, 40.0, 100.0, 60.0);
    assert_eq!(
        texts(&all.filter_partially_within_bounding_box(&region, 2).unwrap()),
        ["R", "C"]
    );
    assert_eq!(
        texts(&all.filter_partially_within_bounding_box(&region, 3).unwrap()),
        ["E"]
    );
    assert!(all.filter_partially_within_bounding_box(&region, 9).is_err());
}

#[test]
fn header_and_footer() {
    let doc = single_page(vec![
        frag("header", 20.0, 75.0, 30.0, 80.0),
        frag("body", 20.0, 25.0, 30.0, 75.0),
        frag("footer", 20.0, 10.0, 30.0, 20.0),
    ]);
    let all = doc.elements();
    assert_eq!(texts(&all.filter_out_header(50.0)), ["body", "footer"]);
    assert_eq!(texts(&all.filter_out_footer(50.0)), ["header", "body"]);
}

#[test]
fn sequence_navigation() {
    let doc = single_page(full_grid(1, 6));
    let all = doc.elements();
    let e2 = all.get(2).unwrap();
    let e3 = all.get(3).unwrap();
    let e5 = all.get(5).unwrap();

    assert_eq!(texts(&all.before(e2, false)), ["r0c0", "r0c1"]);
    assert_eq!(all.before(e2, true).len(), 3);
    assert_eq!(texts(&all.after(e3, false)), ["r0c4", "r0c5"]);
    assert_eq!(all.after(e3, true).len(), 3);
    assert_eq!(texts(&all.between(e2, e5, false)), ["r0c3", "r0c4"]);
    assert_eq!(texts(&all.between(e2, e5, true)), ["r0c2", "r0c3", "r0c4", "r0c5"]);
}

#[test]
fn move_from_with_ignored_elements() {
    let doc = single_page(full_grid(1, 6));
    let all = doc.elements();
    all.get(1).unwrap().ignore();
    all.get(2).unwrap().ignore();
    let e0 = all.get(0).unwrap();
    assert_eq!(all.move_forwards_from(e0, 1, false).unwrap().text(), "r0c3");
    assert_eq!(
        all.move_backwards_from(all.get(3).unwrap(), 1, false).unwrap().text(),
        "r0c0"
    );
    assert_eq!(
        all.move_forwards_from(e0, 4, false).unwrap_err(),
        Error::ElementOutOfRange
    );
    assert_eq!(all.move_forwards_from(e0, 4, true).unwrap().text(), "r0c5");
}

#[test]
fn ignore_elements_through_a_list() {
    let doc = single_page(full_grid(2, 2));
    let all = doc.elements();
    all.filter(|e| e.text().starts_with("r0")).ignore_elements();
    assert_eq!(texts(&doc.elements()), ["r1c0", "r1c1"]);
    assert_eq!(texts(&all.exclude_ignored()), ["r1c0", "r1c1"]);
    assert_eq!(all.len(), 4);
}

#[test]
fn first_last_and_single() {
    let doc = single_page(full_grid(1, 3));
    let all = doc.elements();
    assert_eq!(all.first().unwrap().text(), "r0c0");
    assert_eq!(all.last().unwrap().text(), "r0c2");
    let empty = all.filter_by_tag("none");
    assert_eq!(empty.first().unwrap_err(), Error::NoElementFound);
    assert_eq!(empty.last().unwrap_err(), Error::NoElementFound);
    assert_eq!(
        all.extract_single_element().unwrap_err(),
        Error::MultipleElementsFound(3)
    );
}

#[test]
fn filters_leave_receiver_untouched() {
    let doc = single_page(full_grid(2, 2));
    let all = doc.elements();
    let before = all.clone();
    let _ = all.filter_by_text_equal("r0c0", true);
    let _ = all.remove_element(all.get(0).unwrap()).unwrap();
    let _ = all.below(&all.get(0).unwrap(), &RelativeOptions::default()).unwrap();
    assert_eq!(all, before);
}
