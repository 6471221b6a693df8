// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use moneychat::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    let taxonomy = matches.get_one::<String>("taxonomy").map(PathBuf::from);

    match matches.subcommand() {
        Some(("parse", sub)) => {
            let parser = commands::load_parser(taxonomy.as_deref())?;
            commands::parse::handle(&parser, sub)?
        }
        Some(("batch", sub)) => {
            let parser = commands::load_parser(taxonomy.as_deref())?;
            commands::batch::handle(&parser, sub)?
        }
        Some(("category", sub)) => {
            let parser = commands::load_parser(taxonomy.as_deref())?;
            commands::categories::handle(&parser, sub)?
        }
        Some(("allocate", sub)) => commands::allocate::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(taxonomy.as_deref(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
