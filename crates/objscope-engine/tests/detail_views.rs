use objscope_engine::{DetailKind, browse, default_details};
use objscope_testing::{opaque, raising_property, sample_graph, self_referential, small_graph};

#[test]
fn test_default_detail_order() {
    let names: Vec<&str> = default_details().iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        vec!["representation", "pretty", "documentation", "type info"]
    );
}

#[test]
fn test_doc_detail() {
    let mut model = browse(sample_graph(), "sample");
    let root = model.root();

    assert_eq!(model.detail(root, DetailKind::Doc), "Top-level sample object.");

    model.expand(root).expect("expand");
    let answer = model.node_at(&[0]).expect("resolve").expect("answer exists");
    assert_eq!(model.detail(answer, DetailKind::Doc), "<no documentation>");
}

#[test]
fn test_repr_detail_is_unbounded_by_summary_config() {
    let long = objscope_types::Scalar::str("z".repeat(500));
    let model = browse(long, "text");
    let root = model.root();

    let text = model.detail(root, DetailKind::Repr);
    assert!(text.chars().count() > 80);
}

#[test]
fn test_pretty_detail_marks_cycles() {
    let model = browse(self_referential(), "a");
    let text = model.detail(model.root(), DetailKind::Pretty);

    assert!(text.contains("<cycle>"));
    assert!(text.contains("itself = "));
}

#[test]
fn test_pretty_detail_reports_member_failures_inline() {
    let model = browse(raising_property(), "obj");
    let text = model.detail(model.root(), DetailKind::Pretty);

    assert!(text.contains("visible = 1"));
    assert!(text.contains("access denied"));
}

#[test]
fn test_pretty_small_graph() {
    let model = browse(small_graph(), "data");
    let text = model.detail(model.root(), DetailKind::Pretty);

    insta::assert_snapshot!(text, @r#"
    {"a": 1, "b": [...]}:
        a = 1
        b = [1, 2, 3]:
            0 = 1
            1 = 2
            2 = 3
    "#);
}

#[test]
fn test_type_info_detail() {
    let model = browse(small_graph(), "data");
    let text = model.detail(model.root(), DetailKind::TypeInfo);

    assert!(text.contains("type: dict"));
    assert!(text.contains("size: 2"));
    assert!(text.contains("callable: false"));
    assert!(text.contains("id: 0x"));
}

#[test]
fn test_type_info_carries_enumeration_note() {
    let mut model = browse(opaque(), "blob");
    let root = model.root();
    model.expand(root).expect("expand");

    let text = model.detail(root, DetailKind::TypeInfo);
    assert!(text.contains("note: "));
    assert!(text.contains("introspection disabled"));
}

#[test]
fn test_error_node_detail_is_the_captured_error() {
    let mut model = browse(raising_property(), "obj");
    let root = model.root();
    model.expand(root).expect("expand");
    let hidden = model.node_at(&[1]).expect("resolve").expect("hidden exists");

    for detail in default_details() {
        let text = model.detail(hidden, detail.kind);
        assert!(text.contains("access denied"), "{} detail", detail.name);
    }
}
