// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod allocate;
pub mod batch;
pub mod categories;
pub mod config;
pub mod parse;

use crate::classifier::CategoryClassifier;
use crate::config::load_taxonomy;
use crate::parser::TransactionParser;
use anyhow::{Context, Result};
use std::path::Path;

pub fn load_parser(taxonomy: Option<&Path>) -> Result<TransactionParser> {
    let t = load_taxonomy(taxonomy)?;
    let classifier = CategoryClassifier::from_taxonomy(&t).context("Invalid taxonomy")?;
    Ok(TransactionParser::new(classifier))
}
