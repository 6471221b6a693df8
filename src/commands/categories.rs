// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::parser::TransactionParser;
use crate::utils::{maybe_print_json, parse_direction, pretty_table};
use anyhow::Result;

pub fn handle(parser: &TransactionParser, m: &clap::ArgMatches) -> Result<()> {
    let registry = parser.classifier().registry();
    match m.subcommand() {
        Some(("list", sub)) => {
            let direction = parse_direction(sub.get_one::<String>("direction").unwrap())?;
            let cats = registry.get_all(direction);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let fallback = registry.fallback(direction);
                let data = cats
                    .iter()
                    .map(|c| {
                        let mark = if c.id == fallback.id { "*" } else { "" };
                        vec![
                            c.id.clone(),
                            format!("{} {}", c.emoji, c.name),
                            c.keywords.join(", "),
                            mark.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["ID", "Category", "Keywords", "Fallback"], data)
                );
            }
        }
        Some(("match", sub)) => {
            let direction = parse_direction(sub.get_one::<String>("direction").unwrap())?;
            let text = sub.get_one::<String>("text").unwrap();
            let c = parser.classifier().classify(direction, text);
            println!("{} {} ({})", c.emoji, c.name, c.id);
        }
        _ => {}
    }
    Ok(())
}
