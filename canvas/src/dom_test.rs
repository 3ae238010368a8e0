use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_builds_nested_elements() {
    let dom = FragmentDom::parse("<div><h1>Title</h1><p>Body</p></div>");
    let div = dom.children(dom.root());
    assert_eq!(div.len(), 1);
    assert_eq!(dom.tag(div[0]), Some("div"));
    let inner = dom.children(div[0]);
    assert_eq!(inner.len(), 2);
    assert_eq!(dom.tag(inner[0]), Some("h1"));
    assert_eq!(dom.tag(inner[1]), Some("p"));
}

#[test]
fn parse_lowercases_tags_and_attribute_names() {
    let dom = FragmentDom::parse(r#"<DIV Data-Editable="yes">x</DIV>"#);
    let div = dom.children(dom.root())[0];
    assert_eq!(dom.tag(div), Some("div"));
    assert_eq!(dom.attr(div, "data-editable"), Some("yes"));
}

#[test]
fn parse_reads_quoted_unquoted_and_bare_attributes() {
    let dom = FragmentDom::parse(r#"<img src='a.png' width=400 hidden>"#);
    let img = dom.children(dom.root())[0];
    assert_eq!(dom.attr(img, "src"), Some("a.png"));
    assert_eq!(dom.attr(img, "width"), Some("400"));
    assert_eq!(dom.attr(img, "hidden"), Some(""));
}

#[test]
fn parse_void_element_takes_no_children() {
    let dom = FragmentDom::parse("<img src=\"x.png\"><p>after</p>");
    let top = dom.children(dom.root());
    assert_eq!(top.len(), 2);
    assert_eq!(dom.tag(top[0]), Some("img"));
    assert!(dom.children(top[0]).is_empty());
    assert_eq!(dom.tag(top[1]), Some("p"));
}

#[test]
fn parse_self_closing_element_closes_immediately() {
    let dom = FragmentDom::parse("<div/><p>x</p>");
    let top = dom.children(dom.root());
    assert_eq!(top.len(), 2);
    assert!(dom.children(top[0]).is_empty());
}

#[test]
fn parse_keeps_text_verbatim() {
    let dom = FragmentDom::parse("<p>Tom &amp; Jerry</p>");
    let p = dom.children(dom.root())[0];
    assert_eq!(dom.text_content(p), "Tom &amp; Jerry");
}

#[test]
fn parse_keeps_comments() {
    let dom = FragmentDom::parse("<div><!-- marker -->text</div>");
    let serialized = dom.serialize_inner(dom.root());
    assert_eq!(serialized, "<div><!-- marker -->text</div>");
}

#[test]
fn parse_script_content_is_raw_text() {
    let dom = FragmentDom::parse("<script>if (a < b) { go(); }</script>");
    let script = dom.children(dom.root())[0];
    assert_eq!(dom.tag(script), Some("script"));
    assert_eq!(dom.text_content(script), "if (a < b) { go(); }");
}

#[test]
fn parse_ignores_unmatched_end_tag() {
    let dom = FragmentDom::parse("<div>a</span>b</div>");
    let div = dom.children(dom.root())[0];
    assert_eq!(dom.text_content(div), "ab");
}

#[test]
fn parse_unclosed_elements_close_at_end_of_input() {
    let dom = FragmentDom::parse("<div><p>dangling");
    let div = dom.children(dom.root())[0];
    let p = dom.children(div)[0];
    assert_eq!(dom.text_content(p), "dangling");
}

#[test]
fn parse_empty_fragment_has_only_root() {
    let dom = FragmentDom::parse("");
    assert!(dom.children(dom.root()).is_empty());
    assert_eq!(dom.node_count(), 1);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn serialize_round_trips_simple_markup() {
    let html = r#"<div style="padding: 8px;"><h1>Hi</h1><p>Body</p></div>"#;
    let dom = FragmentDom::parse(html);
    assert_eq!(dom.serialize_inner(dom.root()), html);
}

#[test]
fn serialize_is_idempotent() {
    let dom = FragmentDom::parse("<div class=\"card\"><p>x</p><img src=\"a.png\"></div>");
    let first = dom.serialize_inner(dom.root());
    let second = dom.serialize_inner(dom.root());
    assert_eq!(first, second);
}

#[test]
fn serialize_escapes_double_quotes_in_attribute_values() {
    let mut dom = FragmentDom::parse("<p>x</p>");
    let p = dom.children(dom.root())[0];
    dom.set_attr(p, "title", "say \"hi\"");
    let out = dom.serialize_inner(dom.root());
    assert!(out.contains("title=\"say &quot;hi&quot;\""));
}

#[test]
fn serialize_normalizes_bare_attributes_to_empty_values() {
    let dom = FragmentDom::parse("<p data-editable>x</p>");
    assert_eq!(dom.serialize_inner(dom.root()), "<p data-editable=\"\">x</p>");
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn set_attr_replaces_in_place() {
    let mut dom = FragmentDom::parse(r#"<p class="a" id="b">x</p>"#);
    let p = dom.children(dom.root())[0];
    dom.set_attr(p, "class", "c");
    assert_eq!(
        dom.serialize_inner(dom.root()),
        r#"<p class="c" id="b">x</p>"#
    );
}

#[test]
fn remove_attr_drops_declaration() {
    let mut dom = FragmentDom::parse(r#"<p class="a">x</p>"#);
    let p = dom.children(dom.root())[0];
    dom.remove_attr(p, "class");
    assert_eq!(dom.serialize_inner(dom.root()), "<p>x</p>");
}

#[test]
fn set_text_replaces_children() {
    let mut dom = FragmentDom::parse("<p>old <b>markup</b></p>");
    let p = dom.children(dom.root())[0];
    let b = dom.children(p)[1];
    dom.set_text(p, "new text");
    assert_eq!(dom.serialize_inner(dom.root()), "<p>new text</p>");
    assert!(!dom.is_connected(b));
}

#[test]
fn detach_removes_subtree_from_serialization() {
    let mut dom = FragmentDom::parse("<div><h1>gone</h1><p>stays</p></div>");
    let div = dom.children(dom.root())[0];
    let h1 = dom.children(div)[0];
    dom.detach(h1);
    assert_eq!(dom.serialize_inner(dom.root()), "<div><p>stays</p></div>");
}

#[test]
fn detach_disconnects_descendants() {
    let mut dom = FragmentDom::parse("<div><p><span>x</span></p></div>");
    let div = dom.children(dom.root())[0];
    let p = dom.children(div)[0];
    let span = dom.children(p)[0];
    dom.detach(p);
    assert!(!dom.is_connected(p));
    assert!(!dom.is_connected(span));
    assert!(dom.is_connected(div));
}

#[test]
fn detach_root_is_a_no_op() {
    let mut dom = FragmentDom::parse("<p>x</p>");
    dom.detach(dom.root());
    assert!(dom.is_connected(dom.root()));
    assert_eq!(dom.serialize_inner(dom.root()), "<p>x</p>");
}

#[test]
fn inline_style_round_trip() {
    let mut dom = FragmentDom::parse(r#"<p style="color: red;">x</p>"#);
    let p = dom.children(dom.root())[0];
    let mut style = dom.inline_style(p);
    style.set("left", "40px");
    dom.set_inline_style(p, &style);
    assert_eq!(
        dom.serialize_inner(dom.root()),
        r#"<p style="color: red; left: 40px;">x</p>"#
    );
}

#[test]
fn empty_inline_style_removes_attribute() {
    let mut dom = FragmentDom::parse(r#"<p style="color: red;">x</p>"#);
    let p = dom.children(dom.root())[0];
    let mut style = dom.inline_style(p);
    style.remove("color");
    dom.set_inline_style(p, &style);
    assert_eq!(dom.serialize_inner(dom.root()), "<p>x</p>");
}

// =============================================================
// Queries
// =============================================================

#[test]
fn is_connected_rejects_unknown_ids() {
    let dom = FragmentDom::parse("<p>x</p>");
    assert!(!dom.is_connected(9999));
}

#[test]
fn find_by_tag_returns_first_in_document_order() {
    let dom = FragmentDom::parse("<div><p>one</p></div><p>two</p>");
    let p = dom.find_by_tag("p").expect("p exists");
    assert_eq!(dom.text_content(p), "one");
}

#[test]
fn descendants_walk_in_document_order() {
    let dom = FragmentDom::parse("<div><h1>a</h1><p>b</p></div>");
    let tags: Vec<_> = dom
        .descendants(dom.root())
        .into_iter()
        .filter_map(|id| dom.tag(id))
        .collect();
    assert_eq!(tags, ["div", "h1", "p"]);
}

#[test]
fn text_content_concatenates_nested_text() {
    let dom = FragmentDom::parse("<p>a<b>b</b>c</p>");
    let p = dom.children(dom.root())[0];
    assert_eq!(dom.text_content(p), "abc");
}
