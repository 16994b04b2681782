//! Integration tests for combining selectors with combinators.

use cssb::{Combinator, SelectorBuilder, facade};

// ============================================================================
// SIMPLE COMBINATIONS
// ============================================================================

#[test]
fn test_adjacent_sibling() {
    let combined = facade::combine(
        &facade::element("div").unwrap().id("main").unwrap(),
        "+",
        &facade::element("table").unwrap().id("data").unwrap(),
    );
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_child_with_enum() {
    let combined = facade::combine(
        &facade::element("ul").unwrap(),
        Combinator::Child,
        &facade::element("li").unwrap(),
    );
    assert_eq!(combined.stringify(), "ul > li");
}

#[test]
fn test_general_sibling_method_form() {
    let a = facade::element("h1").unwrap();
    let b = facade::element("p").unwrap();
    assert_eq!(a.combine(&b, "~").stringify(), "h1 ~ p");
}

#[test]
fn test_opaque_combinator_text() {
    let combined = facade::combine(
        &facade::element("col").unwrap(),
        "||",
        &facade::element("td").unwrap(),
    );
    assert_eq!(combined.stringify(), "col || td");
}

#[test]
fn test_combine_with_empty_builder() {
    let combined = facade::combine(&SelectorBuilder::new(), ">", &facade::element("p").unwrap());
    assert_eq!(combined.stringify(), " > p");
}

#[test]
fn test_combine_matches_operand_stringify() {
    let a = facade::class("x").unwrap().pseudo_class("hover").unwrap();
    let b = facade::attr("lang").unwrap();
    let combined = facade::combine(&a, "+", &b);
    assert_eq!(
        combined.stringify(),
        format!("{} + {}", a.stringify(), b.stringify())
    );
}

// ============================================================================
// NESTED COMBINATIONS
// ============================================================================

#[test]
fn test_nested_combination() {
    let combined = facade::combine(
        &facade::element("div")
            .unwrap()
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("draggable")
            .unwrap(),
        "+",
        &facade::combine(
            &facade::element("table").unwrap().id("data").unwrap(),
            "~",
            &facade::combine(
                &facade::element("tr")
                    .unwrap()
                    .pseudo_class("nth-of-type(even)")
                    .unwrap(),
                " ",
                &facade::element("td")
                    .unwrap()
                    .pseudo_class("nth-of-type(even)")
                    .unwrap(),
            ),
        ),
    );

    insta::assert_snapshot!(
        combined.stringify(),
        @"div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combined_on_left() {
    let left = facade::combine(
        &facade::element("nav").unwrap(),
        ">",
        &facade::element("ul").unwrap(),
    );
    let combined = left.combine(&facade::element("li").unwrap(), ">");
    assert_eq!(combined.stringify(), "nav > ul > li");
}

#[test]
fn test_combined_on_both_sides() {
    let left = facade::combine(&facade::element("a").unwrap(), "+", &facade::element("b").unwrap());
    let right = facade::combine(&facade::element("c").unwrap(), "~", &facade::element("d").unwrap());
    let combined = facade::combine(&left, ">", &right);
    assert_eq!(combined.stringify(), "a + b > c ~ d");
    assert_eq!(combined.to_string(), combined.stringify());
}

#[test]
fn test_operands_unchanged_after_combine() {
    let a = facade::element("div").unwrap();
    let b = facade::element("p").unwrap();
    let _ = facade::combine(&a, " ", &b);
    assert_eq!(a.stringify(), "div");
    assert_eq!(b.class("x").unwrap().stringify(), "p.x");
}
