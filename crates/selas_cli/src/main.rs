//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `selas_core` linkage.
//! - Run built-in catalog searches from a terminal.
//!
//! Usage: `selas_cli` prints ping/version; `selas_cli search <query...>`
//! prints `kind<TAB>image_key<TAB>display_name` lines.

use selas_core::{init_logging_from_config, CatalogService, CoreConfig, InMemoryCatalogRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match args.split_first() {
        Some((command, rest)) if command == "search" => run_search(&rest.join(" ")),
        Some((command, _)) => {
            eprintln!("unknown command `{command}`; expected `search <query>`");
            ExitCode::FAILURE
        }
        None => {
            println!("selas_core ping={}", selas_core::ping());
            println!("selas_core version={}", selas_core::core_version());
            ExitCode::SUCCESS
        }
    }
}

fn run_search(query: &str) -> ExitCode {
    let repo = match InMemoryCatalogRepository::builtin() {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("catalog load failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = CatalogService::new(repo);
    for item in service.search(query) {
        println!(
            "{}\t{}\t{}",
            item.kind(),
            item.image_key(),
            item.display_name()
        );
    }
    ExitCode::SUCCESS
}
