// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionDraft;
use crate::parser::TransactionParser;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(parser: &TransactionParser, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let text = m.get_one::<String>("text").unwrap();

    let draft = parser
        .parse(text)
        .map_err(|e| anyhow!("Couldn't understand that: {}", e))?;

    if !maybe_print_json(json_flag, jsonl_flag, &draft)? {
        println!(
            "{}",
            pretty_table(
                &["Type", "Amount", "Category", "Date", "Description"],
                vec![draft_row(&draft)],
            )
        );
    }
    Ok(())
}

pub fn draft_row(d: &TransactionDraft) -> Vec<String> {
    vec![
        d.direction.to_string(),
        fmt_money(&d.amount),
        format!("{} {}", d.category_emoji, d.category_name),
        d.date.map(|x| x.to_string()).unwrap_or_else(|| "today".into()),
        d.description.clone(),
    ]
}
