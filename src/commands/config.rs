// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{taxonomy_path, write_default_taxonomy};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle(explicit: Option<&Path>, m: &clap::ArgMatches) -> Result<()> {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => taxonomy_path()?,
    };
    match m.subcommand() {
        Some(("path", _)) => {
            let state = if path.exists() { "" } else { " (not created, using built-ins)" };
            println!("{}{}", path.display(), state);
        }
        Some(("init", sub)) => {
            write_default_taxonomy(&path, sub.get_flag("force"))?;
            println!("Wrote default taxonomy to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
