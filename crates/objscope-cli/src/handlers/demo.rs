use anyhow::Result;

use crate::config::Config;
use crate::ui::tui::BrowserApp;
use objscope_engine::{BrowserModel, Filters, TreeConfig};
use objscope_types::{AccessError, Callable, Dict, List, ObjRef, Object, Scalar};

pub fn handle(config: &Config) -> Result<()> {
    let filters = Filters {
        show_callables: config.show_callables,
        show_special: config.show_special,
    };
    let tree_config = TreeConfig {
        max_summary_len: config.max_summary_len,
        ..TreeConfig::default()
    };
    let model = BrowserModel::new(demo_graph(), "demo", filters, tree_config)
        .with_show_root(config.show_root_node);

    BrowserApp::new(model).run()
}

/// A small graph exercising every shape the browser can render.
fn demo_graph() -> ObjRef {
    let root = Object::with_doc("Demo", "Built-in demonstration object.");

    root.set_attr("answer", Scalar::int(42));
    root.set_attr("ratio", Scalar::float(1.618));
    root.set_attr("message", Scalar::str("hello from objscope"));
    root.set_attr(
        "primes",
        List::new(vec![
            Scalar::int(2),
            Scalar::int(3),
            Scalar::int(5),
            Scalar::int(7),
        ]),
    );

    let settings = Dict::new();
    settings.insert("debug", Scalar::bool(false));
    settings.insert("retries", Scalar::int(3));
    root.set_attr("settings", settings);

    root.set_attr(
        "greet",
        Callable::with_doc("greet", "(name)", "Greets someone by name."),
    );
    root.set_attr("__version__", Scalar::str("0.2.1"));
    root.set_computed("flaky", || {
        Err(AccessError::new("this attribute always fails to load"))
    });

    let loops = Object::new("Loop");
    loops.set_attr("back", loops.clone());
    root.set_attr("cycle", loops);

    root
}
