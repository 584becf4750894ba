use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::loader::load_json_file;
use crate::types::OutputFormat;
use crate::views::tree::{TreeDump, TreeTableView, color_enabled};
use objscope_engine::{BrowserModel, Filters, TreeConfig};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    file: &Path,
    name: &str,
    depth: usize,
    no_callables: bool,
    no_special: bool,
    hide_root: bool,
    format: OutputFormat,
) -> Result<()> {
    let root_value = load_json_file(file)?;

    let filters = Filters {
        show_callables: config.show_callables && !no_callables,
        show_special: config.show_special && !no_special,
    };
    let tree_config = TreeConfig {
        max_summary_len: config.max_summary_len,
        ..TreeConfig::default()
    };
    let mut model = BrowserModel::new(root_value, name, filters, tree_config)
        .with_show_root(config.show_root_node && !hide_root);

    // expand_to_depth(root, n) materializes n + 1 levels of children;
    // --depth counts the levels of rows below the root.
    let root = model.root();
    model.expand_to_depth(root, depth.saturating_sub(1))?;

    match format {
        OutputFormat::Json => {
            let dump = TreeDump::from_model(&model);
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        OutputFormat::Plain => {
            let view = TreeTableView::new(&model, color_enabled());
            print!("{}", view);
        }
    }

    Ok(())
}
