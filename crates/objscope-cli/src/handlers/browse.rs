use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::loader::load_json_file;
use crate::ui::tui::BrowserApp;
use objscope_engine::{BrowserModel, Filters, TreeConfig};

pub fn handle(config: &Config, file: &Path, name: &str) -> Result<()> {
    let root_value = load_json_file(file)?;

    let filters = Filters {
        show_callables: config.show_callables,
        show_special: config.show_special,
    };
    let tree_config = TreeConfig {
        max_summary_len: config.max_summary_len,
        ..TreeConfig::default()
    };
    let model = BrowserModel::new(root_value, name, filters, tree_config)
        .with_show_root(config.show_root_node);

    BrowserApp::new(model).run()
}
