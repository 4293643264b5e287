use super::*;

// =============================================================
// Queries
// =============================================================

#[test]
fn query_all_returns_document_order() {
    let doc = MemoryDocument::new();
    let first = MemoryElement::new("li").with_marker("[data-filter-item]").with_attr("data-category", "web");
    let nested = MemoryElement::new("li").with_marker("[data-filter-item]").with_attr("data-category", "app");
    let last = MemoryElement::new("li").with_marker("[data-filter-item]").with_attr("data-category", "web");
    doc.append(MemoryElement::new("ul").with_child(first.clone()).with_child(MemoryElement::new("div").with_child(nested.clone())));
    doc.append(last.clone());

    assert_eq!(doc.query_all("[data-filter-item]"), vec![first, nested, last]);
}

#[test]
fn query_matches_roots_and_descendants() {
    let doc = MemoryDocument::new();
    let root = doc.append(MemoryElement::new("aside").with_marker("[data-sidebar]"));
    assert_eq!(doc.query("[data-sidebar]"), Some(root));
    assert_eq!(doc.query("[data-missing]"), None);
}

#[test]
fn element_query_excludes_self() {
    let child = MemoryElement::new("p").with_marker("[data-x]");
    let parent = MemoryElement::new("div").with_marker("[data-x]").with_child(child.clone());
    assert_eq!(parent.query("[data-x]"), Some(child));
}

#[test]
fn query_first_prefers_earlier_selector() {
    let doc = MemoryDocument::new();
    let plain = doc.append(MemoryElement::new("span").with_marker("[data-select-value]"));
    assert_eq!(doc.query_first(&["[data-selecct-value]", "[data-select-value]"]), Some(plain));

    let typo = doc.append(MemoryElement::new("span").with_marker("[data-selecct-value]"));
    assert_eq!(doc.query_first(&["[data-selecct-value]", "[data-select-value]"]), Some(typo));
}

#[test]
fn non_presence_selector_matches_nothing() {
    let doc = MemoryDocument::new();
    doc.append(MemoryElement::new("div").with_class("active"));
    assert!(doc.query_all(".active").is_empty());
}

// =============================================================
// Classes, text, markup
// =============================================================

#[test]
fn toggle_class_flips_presence() {
    let el = MemoryElement::new("div");
    assert_eq!(el.toggle_class("active"), Ok(true));
    assert!(el.has_class("active"));
    assert_eq!(el.toggle_class("active"), Ok(false));
    assert!(!el.has_class("active"));
}

#[test]
fn add_class_is_idempotent() {
    let el = MemoryElement::new("div");
    el.add_class("active").unwrap();
    el.add_class("active").unwrap();
    el.remove_class("active").unwrap();
    assert!(!el.has_class("active"));
}

#[test]
fn inner_html_round_trips_markup_and_strips_text() {
    let el = MemoryElement::new("h4").with_html("<b>Ann</b>");
    assert_eq!(el.inner_html(), "<b>Ann</b>");
    assert_eq!(el.text_content(), "Ann");
}

#[test]
fn set_inner_text_escapes_markup() {
    let el = MemoryElement::new("p").with_text("a < b");
    assert_eq!(el.inner_html(), "a &lt; b");
    assert_eq!(el.inner_text(), "a < b");
}

#[test]
fn text_content_concatenates_children() {
    let el = MemoryElement::new("button")
        .with_text("  ")
        .with_child(MemoryElement::new("span").with_text("About"))
        .with_child(MemoryElement::new("span").with_text(" "));
    assert_eq!(el.text_content(), "  About ");
}

// =============================================================
// Images and forms
// =============================================================

#[test]
fn image_source_reads_src_and_alt() {
    let img = MemoryElement::new("img").with_attr("src", "a.jpg");
    assert_eq!(img.image_source(), Ok(ImageSource { src: "a.jpg".into(), alt: String::new() }));
}

#[test]
fn image_source_fails_on_non_image() {
    let div = MemoryElement::new("div");
    assert!(matches!(div.image_source(), Err(BindError::Dom(_))));
    assert!(div.set_image_source(&ImageSource::default()).is_err());
}

#[test]
fn form_validity_tracks_required_and_email_fields() {
    let name = MemoryElement::new("input").with_attr("required", "");
    let email = MemoryElement::new("input").with_attr("required", "").with_attr("type", "email");
    let form = MemoryElement::new("form").with_child(name.clone()).with_child(email.clone());

    assert!(!form.check_validity());
    name.set_value("Ann");
    assert!(!form.check_validity());
    email.set_value("ann");
    assert!(!form.check_validity());
    email.set_value("ann@example.com");
    assert!(form.check_validity());
    name.set_value("   ");
    assert!(!form.check_validity());
}

#[test]
fn optional_email_may_be_empty() {
    let email = MemoryElement::new("input").with_attr("type", "email");
    let form = MemoryElement::new("form").with_child(email);
    assert!(form.check_validity());
}

#[test]
fn non_form_is_always_valid() {
    let div = MemoryElement::new("div").with_child(MemoryElement::new("input").with_attr("required", ""));
    assert!(div.check_validity());
}

// =============================================================
// Events
// =============================================================

#[test]
fn dispatch_runs_only_matching_handlers_in_order() {
    let el = MemoryElement::new("button");
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b"] {
        let log = Rc::clone(&log);
        el.listen(EventKind::Click, Box::new(move || log.borrow_mut().push(tag))).unwrap();
    }
    let input_log = Rc::clone(&log);
    el.listen(EventKind::Input, Box::new(move || input_log.borrow_mut().push("input"))).unwrap();

    el.click();
    assert_eq!(*log.borrow(), vec!["a", "b"]);
    assert_eq!(el.listener_count(EventKind::Click), 2);
    assert_eq!(el.listener_count(EventKind::Input), 1);
}

#[test]
fn handler_may_mutate_its_own_element() {
    let el = MemoryElement::new("div");
    let target = el.clone();
    el.listen(EventKind::Click, Box::new(move || {
        target.toggle_class("active").unwrap();
    }))
    .unwrap();
    el.click();
    assert!(el.has_class("active"));
}

#[test]
fn type_value_sets_value_then_fires_input() {
    let el = MemoryElement::new("input");
    let seen = Rc::new(RefCell::new(None));
    let (target, sink) = (el.clone(), Rc::clone(&seen));
    el.listen(EventKind::Input, Box::new(move || *sink.borrow_mut() = target.attribute("value"))).unwrap();
    el.type_value("hello");
    assert_eq!(*seen.borrow(), Some("hello".to_owned()));
}

#[test]
fn scroll_to_top_is_counted() {
    let doc = MemoryDocument::new();
    doc.scroll_to_top();
    doc.clone().scroll_to_top();
    assert_eq!(doc.scroll_count(), 2);
}

#[test]
fn event_names_match_dom() {
    assert_eq!(EventKind::Click.as_str(), "click");
    assert_eq!(EventKind::Input.as_str(), "input");
}
