mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show depscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("depscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Rank {
            path,
            nodes,
            top,
            parallel,
        } => commands::rank::run(path, *nodes, *top, *parallel, &cli.global),
        Command::Reach { path, node } => commands::reach::run(path, *node, &cli.global),
        Command::Closure {
            path,
            nodes,
            row,
            all,
        } => commands::closure::run(path, *nodes, (!*all).then_some(*row), &cli.global),
        Command::Paths { path, source } => commands::paths::run(path, *source, &cli.global),
        Command::Report {
            path,
            nodes,
            source,
            node,
        } => commands::report::run(path, *nodes, *source, *node, &cli.global),
    }
}
