use objscope_engine::{Filters, ObjectTree, TreeConfig};
use objscope_types::{Callable, ObjRef, Object, Scalar};

fn mixed_object() -> ObjRef {
    let object = Object::new("Mixed");
    object.set_attr("alpha", Scalar::int(1));
    object.set_attr("__class__", Scalar::str("Mixed"));
    object.set_attr("run", Callable::new("run", "()"));
    object.set_attr("beta", Scalar::int(2));
    object.set_attr("__repr__", Callable::new("__repr__", "()"));
    object
}

fn expanded_names(tree: &mut ObjectTree) -> Vec<String> {
    let root = tree.root();
    tree.expand(root).expect("expand");
    tree.children(root)
        .iter()
        .map(|child| tree.node(*child).name.clone())
        .collect()
}

#[test]
fn test_special_members_hidden_at_extraction() {
    let filters = Filters {
        show_callables: true,
        show_special: false,
    };
    let mut tree = ObjectTree::new(mixed_object(), "obj", filters, TreeConfig::default());

    assert_eq!(expanded_names(&mut tree), vec!["alpha", "run", "beta"]);
    // Hidden members never became nodes at all.
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_callables_hidden_at_extraction() {
    let filters = Filters {
        show_callables: false,
        show_special: true,
    };
    let mut tree = ObjectTree::new(mixed_object(), "obj", filters, TreeConfig::default());

    // __repr__ is both special and callable; hiding callables wins.
    assert_eq!(expanded_names(&mut tree), vec!["alpha", "__class__", "beta"]);
}

#[test]
fn test_filter_toggle_rebuilds_from_root() {
    let mut tree = ObjectTree::new(
        mixed_object(),
        "obj",
        Filters::default(),
        TreeConfig::default(),
    );
    let root = tree.root();
    tree.expand(root).expect("expand");
    assert_eq!(tree.len(), 6);

    tree.set_filters(Filters {
        show_callables: true,
        show_special: false,
    });

    // Everything fetched so far is discarded; only a fresh root is left.
    assert_eq!(tree.len(), 1);
    assert!(!tree.node(tree.root()).expanded);
}

#[test]
fn test_toggle_back_restores_members_in_order() {
    let no_special = Filters {
        show_callables: true,
        show_special: false,
    };
    let mut tree = ObjectTree::new(mixed_object(), "obj", no_special, TreeConfig::default());
    assert_eq!(expanded_names(&mut tree), vec!["alpha", "run", "beta"]);

    tree.set_filters(Filters::default());
    assert_eq!(
        expanded_names(&mut tree),
        vec!["alpha", "__class__", "run", "beta", "__repr__"]
    );

    tree.set_filters(no_special);
    assert_eq!(expanded_names(&mut tree), vec!["alpha", "run", "beta"]);
}

#[test]
fn test_stable_order_across_repeated_builds() {
    let value = mixed_object();
    let mut first = ObjectTree::new(value.clone(), "obj", Filters::default(), TreeConfig::default());
    let mut second = ObjectTree::new(value, "obj", Filters::default(), TreeConfig::default());

    assert_eq!(expanded_names(&mut first), expanded_names(&mut second));
}

#[test]
fn test_indexed_children_ignore_special_filter() {
    // Mapping keys are elements, not attributes; the special-name
    // convention only applies to attribute members.
    let dict = objscope_types::Dict::new();
    dict.insert("__weird__", Scalar::int(1));
    let filters = Filters {
        show_callables: true,
        show_special: false,
    };
    let mut tree = ObjectTree::new(dict, "d", filters, TreeConfig::default());
    assert_eq!(expanded_names(&mut tree), vec!["__weird__"]);
}
