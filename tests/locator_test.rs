use rs_htmlextract::dom;
use rs_htmlextract::selector::locator::{find_elements_by_classes, find_sub_containers};
use rs_htmlextract::selector::{parse_class_names, SubContainer};
use rs_htmlextract::text::extract_text_by_class;

fn texts(found: &[dom::Selection]) -> Vec<String> {
    found
        .iter()
        .map(|el| dom::text_content(el).trim().to_string())
        .collect()
}

#[test]
fn selector_tokens_survive_rejoin() {
    for raw in ["news-title", "post, body", "item  list main", " a ,b,, c "] {
        let once = parse_class_names(raw);
        let twice = parse_class_names(&once.join(" "));
        assert_eq!(once, twice, "tokens changed for {raw:?}");
    }
}

#[test]
fn exact_combination_beats_single_class() {
    let doc = dom::parse(
        r#"
        <div class="a">first, only a</div>
        <div class="a b">both</div>
        <div class="b a extra">both plus extra</div>
    "#,
    );
    let root = dom::document_root(&doc);
    let tokens = parse_class_names("a b");

    let found = find_elements_by_classes(&root, &tokens, None);
    assert_eq!(texts(&found), vec!["both", "both plus extra"]);
}

#[test]
fn single_token_uses_first_token_that_matches() {
    let doc = dom::parse(
        r#"
        <div class="second">second</div>
        <div class="third">third</div>
    "#,
    );
    let root = dom::document_root(&doc);
    let tokens = parse_class_names("first second third");

    let found = find_elements_by_classes(&root, &tokens, None);
    assert_eq!(texts(&found), vec!["second"]);
}

#[test]
fn substring_tier_is_last_resort() {
    let doc = dom::parse(
        r#"
        <div class="article-title-wrapper">wrapped</div>
        <div class="Title">capitalised</div>
    "#,
    );
    let root = dom::document_root(&doc);

    let found = find_elements_by_classes(&root, &parse_class_names("title"), None);
    assert_eq!(texts(&found), vec!["wrapped"]);
}

#[test]
fn no_tier_matches() {
    let doc = dom::parse(r#"<div class="content">x</div><p>no class</p>"#);
    let root = dom::document_root(&doc);

    assert!(find_elements_by_classes(&root, &parse_class_names("sidebar"), None).is_empty());
    assert!(find_elements_by_classes(&root, &[], None).is_empty());
}

#[test]
fn results_follow_document_order_without_duplicates() {
    let doc = dom::parse(
        r#"
        <section class="box">
            <div class="box">inner</div>
        </section>
        <div class="box">last</div>
    "#,
    );
    let root = dom::document_root(&doc);

    let found = find_elements_by_classes(&root, &parse_class_names("box, box"), None);
    assert_eq!(found.len(), 3);
    assert_eq!(texts(&found)[1], "inner");
    assert_eq!(texts(&found)[2], "last");
}

#[test]
fn tag_constraint_filters_candidates() {
    let doc = dom::parse(
        r#"
        <span class="link">span</span>
        <a class="link" href="/x">anchor</a>
    "#,
    );
    let root = dom::document_root(&doc);

    let found = find_elements_by_classes(&root, &parse_class_names("link"), Some("a"));
    assert_eq!(texts(&found), vec!["anchor"]);
}

#[test]
fn search_is_scoped_to_subtree() {
    let doc = dom::parse(
        r#"
        <div class="item">outside</div>
        <div class="list"><div class="item">inside</div></div>
    "#,
    );
    let root = dom::document_root(&doc);
    let containers = find_elements_by_classes(&root, &parse_class_names("list"), None);
    assert_eq!(containers.len(), 1);

    let items = find_elements_by_classes(&containers[0], &parse_class_names("item"), None);
    assert_eq!(texts(&items), vec!["inside"]);
}

#[test]
fn sub_container_tag_bypasses_tiers() {
    let doc = dom::parse(
        r#"<ul class="list"><li class="x">one</li><li>two</li></ul><li>outside</li>"#,
    );
    let root = dom::document_root(&doc);
    let containers = find_elements_by_classes(&root, &parse_class_names("list"), None);

    let sub = SubContainer::parse("<LI>");
    assert_eq!(sub, Some(SubContainer::Tag("li".to_string())));

    let items = match sub {
        Some(sub) => find_sub_containers(&containers[0], &sub),
        None => panic!("expected a tag sub-container"),
    };
    assert_eq!(texts(&items), vec!["one", "two"]);
}

#[test]
fn title_text_extraction() {
    let doc = dom::parse(r#"<div class="title">Hello</div>"#);
    let root = dom::document_root(&doc);

    assert_eq!(extract_text_by_class(&root, "title"), "Hello");
    assert_eq!(extract_text_by_class(&root, ""), "");
    assert_eq!(extract_text_by_class(&root, "missing"), "");
}

#[test]
fn text_extraction_skips_scripts_and_collapses_whitespace() {
    let doc = dom::parse(
        r#"<div class="body">
            <p>First   line</p>
            <script>var hidden = 1;</script>
            <style>.x { color: red }</style>
            <p>Second
               line</p>
        </div>"#,
    );
    let root = dom::document_root(&doc);

    assert_eq!(extract_text_by_class(&root, "body"), "First lineSecond line");
}
