use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Show {
            file,
            name,
            depth,
            no_callables,
            no_special,
            hide_root,
        } => handlers::show::handle(
            &config,
            &file,
            &name,
            depth,
            no_callables,
            no_special,
            hide_root,
            cli.format,
        ),

        Commands::Browse { file, name } => handlers::browse::handle(&config, &file, &name),

        Commands::Demo => handlers::demo::handle(&config),
    }
}

fn show_guidance() {
    println!("objscope - browse arbitrary object graphs as a lazy tree");
    println!();
    println!("Usage:");
    println!("  objscope show <file.json>      Print an expanded tree");
    println!("  objscope browse <file.json>    Browse interactively");
    println!("  objscope demo                  Browse a built-in sample graph");
    println!();
    println!("Run 'objscope --help' for all options.");
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
