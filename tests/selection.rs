use pretty_assertions::assert_eq;

use xmlsieve::{Attribute, Element, Error, Handler, Lexer, Parser};

fn parse(input: &str, close: &[&str], attributes: &[&str]) -> Vec<Element> {
    let mut parser = Parser::new();
    for tag in close {
        parser.emit_on_close(tag);
    }
    for tag in attributes {
        parser.emit_on_attributes(tag);
    }
    let mut lexer = Lexer::new(parser);
    lexer.write(input).unwrap();
    lexer.finish();
    assert!(lexer.handler().is_closed());

    let mut out = Vec::new();
    while let Some(element) = lexer.handler_mut().pop_element() {
        out.push(element);
    }
    out
}

fn parse_err(input: &str, close: &[&str]) -> Error {
    let mut parser = Parser::new();
    for tag in close {
        parser.emit_on_close(tag);
    }
    let mut lexer = Lexer::new(parser);
    lexer.write(input).unwrap_err()
}

fn leaf(tag: &str, text: &str) -> Element {
    Element {
        tag: tag.to_owned(),
        text: Some(text.to_owned()),
        ..Element::default()
    }
}

#[test]
fn selected_leaves_come_out_in_document_order() {
    assert_eq!(
        parse("<a><b>1</b><c>2</c></a>", &["b", "c"], &[]),
        vec![leaf("b", "1"), leaf("c", "2")]
    );
}

#[test]
fn selected_root_collects_its_subtree() {
    assert_eq!(
        parse("<a><b>1</b><c>2</c></a>", &["a"], &[]),
        vec![Element {
            tag: "a".to_owned(),
            children: vec![leaf("b", "1"), leaf("c", "2")],
            ..Element::default()
        }]
    );
}

#[test]
fn unselected_elements_are_never_emitted() {
    let out = parse("<a><x>enormous</x><b>1</b></a>", &["b"], &[]);
    assert_eq!(out, vec![leaf("b", "1")]);
}

#[test]
fn selection_without_matches_yields_nothing() {
    assert_eq!(parse("<a><b>1</b></a>", &["zzz"], &[]), vec![]);
}

#[test]
fn no_selection_still_checks_well_formedness() {
    assert_eq!(parse("<a><b>1</b></a>", &[], &[]), vec![]);
    let error = parse_err("<a></b>", &[]);
    assert_eq!(error.as_str(), "mismatched-close");
}

#[test]
fn attribute_snapshot_is_emitted_before_content_is_parsed() {
    // "a" is emitted at end-of-attributes, so it precedes "b" in the queue
    // even though </a> comes last
    assert_eq!(
        parse("<a foo=\"1\"><b>2</b></a>", &["b"], &["a"]),
        vec![
            Element {
                tag: "a".to_owned(),
                attrs: vec![Attribute {
                    key: "foo".to_owned(),
                    value: "1".to_owned(),
                }],
                ..Element::default()
            },
            leaf("b", "2"),
        ]
    );
}

#[test]
fn attribute_snapshot_never_carries_content() {
    let out = parse("<a foo=\"1\"><b>2</b>text</a>", &[], &["a"]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tag, "a");
    assert_eq!(out[0].children, vec![]);
    assert_eq!(out[0].text, None);
}

#[test]
fn tag_in_both_sets_is_emitted_twice() {
    assert_eq!(
        parse("<a x=\"1\"><b>2</b></a>", &["a"], &["a"]),
        vec![
            Element {
                tag: "a".to_owned(),
                attrs: vec![Attribute {
                    key: "x".to_owned(),
                    value: "1".to_owned(),
                }],
                ..Element::default()
            },
            Element {
                tag: "a".to_owned(),
                attrs: vec![Attribute {
                    key: "x".to_owned(),
                    value: "1".to_owned(),
                }],
                children: vec![leaf("b", "2")],
                ..Element::default()
            },
        ]
    );
}

#[test]
fn selected_element_nested_in_collecting_subtree_is_emitted_and_retained() {
    assert_eq!(
        parse("<a><b>1</b></a>", &["a", "b"], &[]),
        vec![
            leaf("b", "1"),
            Element {
                tag: "a".to_owned(),
                children: vec![leaf("b", "1")],
                ..Element::default()
            },
        ]
    );
}

#[test]
fn collection_scope_closes_with_its_element() {
    // d closes after the first b's scope ended and before the second began,
    // so it is dropped; both b subtrees are intact
    assert_eq!(
        parse("<a><b><c>1</c></b><d/><b>2</b></a>", &["b"], &[]),
        vec![
            Element {
                tag: "b".to_owned(),
                children: vec![leaf("c", "1")],
                ..Element::default()
            },
            leaf("b", "2"),
        ]
    );
}

#[test]
fn nested_selected_tag_does_not_open_a_second_scope() {
    assert_eq!(
        parse("<b><b>inner</b></b>", &["b"], &[]),
        vec![
            leaf("b", "inner"),
            Element {
                tag: "b".to_owned(),
                children: vec![leaf("b", "inner")],
                ..Element::default()
            },
        ]
    );
}

#[test]
fn text_and_children_interleave() {
    assert_eq!(
        parse("<a>x<b/>y</a>", &["a"], &[]),
        vec![Element {
            tag: "a".to_owned(),
            children: vec![Element::new("b".to_owned())],
            text: Some("xy".to_owned()),
            ..Element::default()
        }]
    );
}

#[test]
fn cdata_joins_surrounding_text() {
    assert_eq!(
        parse("<a>x<![CDATA[y]]>z</a>", &["a"], &[]),
        vec![leaf("a", "xyz")]
    );
}

#[test]
fn comments_leave_no_trace_in_the_tree() {
    assert_eq!(
        parse("<a>x<!-- y -->z</a>", &["a"], &[]),
        vec![leaf("a", "xz")]
    );
}

#[test]
fn attribute_without_value_defaults_to_empty() {
    assert_eq!(
        parse("<a disabled/>", &["a"], &[]),
        vec![Element {
            tag: "a".to_owned(),
            attrs: vec![Attribute {
                key: "disabled".to_owned(),
                value: String::new(),
            }],
            ..Element::default()
        }]
    );
}

#[test]
fn consecutive_documents_reset_cleanly() {
    assert_eq!(
        parse("<a>1</a> <a>2</a>", &["a"], &[]),
        vec![leaf("a", "1"), leaf("a", "2")]
    );
}

#[test]
fn mismatched_close_is_fatal() {
    let error = parse_err("<a></b>", &["a"]);
    assert_eq!(
        error,
        Error::MismatchedClose {
            expected: "a".to_owned(),
            found: "b".to_owned(),
        }
    );
    assert_eq!(error.as_str(), "mismatched-close");
}

#[test]
fn close_without_open_is_fatal() {
    let error = parse_err("<a></a></a>", &["a"]);
    assert_eq!(error, Error::UnbalancedClose);
    assert_eq!(error.as_str(), "unbalanced-close");
}

#[test]
fn parser_rejects_events_without_an_open_element() {
    // driving the handler interface directly, the way a custom lexer might
    let mut parser = Parser::new();
    assert_eq!(parser.attribute_name("x".to_owned()), Err(Error::NoOpenElement));
    assert_eq!(parser.text_node("x".to_owned()), Err(Error::NoOpenElement));

    parser.start_element("a".to_owned());
    // a value with no preceding attribute name is just as wrong
    assert_eq!(
        parser.attribute_value("x".to_owned()),
        Err(Error::NoOpenElement)
    );
    assert_eq!(Error::NoOpenElement.as_str(), "no-open-element");
}

#[test]
fn pop_element_drains_in_order_and_then_stalls() {
    let mut parser = Parser::new();
    parser.emit_on_close("b");
    let mut lexer = Lexer::new(parser);
    lexer.write("<a><b>1</b><b>2</b>").unwrap();

    assert!(!lexer.handler().is_closed());
    assert_eq!(lexer.handler_mut().pop_element(), Some(leaf("b", "1")));
    assert_eq!(lexer.handler_mut().pop_element(), Some(leaf("b", "2")));
    assert_eq!(lexer.handler_mut().pop_element(), None);

    lexer.write("<b>3</b></a>").unwrap();
    lexer.finish();
    assert!(lexer.handler().is_closed());
    assert_eq!(lexer.handler_mut().pop_element(), Some(leaf("b", "3")));
    assert_eq!(lexer.handler_mut().pop_element(), None);
}
