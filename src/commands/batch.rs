// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::parser::TransactionParser;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub line: usize,
    pub text: String,
    pub status: String,
    pub direction: String,
    pub amount: String,
    pub category: String,
    pub emoji: String,
    pub date: String,
}

pub fn handle(parser: &TransactionParser, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let rows = run_batch(parser, Path::new(path))?;
    let parsed = rows.iter().filter(|r| r.status == "ok").count();

    if let Some(out) = m.get_one::<String>("out") {
        write_csv(Path::new(out.trim()), &rows)?;
        println!("Wrote {} rows ({} parsed) to {}", rows.len(), parsed, out.trim());
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.line.to_string(),
                    r.status.clone(),
                    r.direction.clone(),
                    r.amount.clone(),
                    format!("{} {}", r.emoji, r.category).trim().to_string(),
                    r.date.clone(),
                    r.text.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["#", "Status", "Type", "Amount", "Category", "Date", "Text"],
                data
            )
        );
        println!("{} of {} rows parsed", parsed, rows.len());
    }
    Ok(())
}

/// Reads the `text` column (or the first column when there is no such
/// header) and parses every row. Failures are reported per row.
pub fn run_batch(parser: &TransactionParser, path: &Path) -> Result<Vec<BatchRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;
    let col = rdr
        .headers()?
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("text"))
        .unwrap_or(0);

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result.with_context(|| format!("Read CSV row {}", i + 1))?;
        let text = rec.get(col).unwrap_or("").trim().to_string();
        let row = match parser.parse(&text) {
            Ok(d) => BatchRow {
                line: i + 1,
                status: "ok".into(),
                direction: d.direction.to_string(),
                amount: format!("{:.2}", d.amount),
                category: d.category_name,
                emoji: d.category_emoji,
                date: d.date.map(|x| x.to_string()).unwrap_or_default(),
                text,
            },
            Err(e) => BatchRow {
                line: i + 1,
                status: e.to_string(),
                direction: String::new(),
                amount: String::new(),
                category: String::new(),
                emoji: String::new(),
                date: String::new(),
                text,
            },
        };
        out.push(row);
    }
    Ok(out)
}

fn write_csv(out: &Path, rows: &[BatchRow]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(out).with_context(|| format!("Create CSV {}", out.display()))?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}
