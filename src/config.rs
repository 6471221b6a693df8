// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::DirectionRule;
use crate::models::Direction;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Moneychat", "moneychat"));

const TAXONOMY_FILE: &str = "taxonomy.json";

/// One configured category; order within a direction is match precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

/// Configuration table for the registry and the direction rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub income: Vec<CategorySpec>,
    pub expense: Vec<CategorySpec>,
    #[serde(default = "default_direction_rules")]
    pub direction_rules: Vec<DirectionRule>,
}

impl Taxonomy {
    pub fn specs(&self, direction: Direction) -> &[CategorySpec] {
        match direction {
            Direction::Income => &self.income,
            Direction::Expense => &self.expense,
        }
    }
}

fn spec(id: &str, name: &str, emoji: &str, keywords: &[&str]) -> CategorySpec {
    CategorySpec {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        fallback: false,
    }
}

fn fallback(id: &str, emoji: &str, keywords: &[&str]) -> CategorySpec {
    CategorySpec {
        fallback: true,
        ..spec(id, "Other", emoji, keywords)
    }
}

pub fn default_direction_rules() -> Vec<DirectionRule> {
    vec![
        DirectionRule::new(
            Direction::Income,
            &[
                "received", "earned", "got paid", "salary", "income", "payment", "bonus",
            ],
        ),
        DirectionRule::new(
            Direction::Expense,
            &["spent", "bought", "paid", "purchased", "cost"],
        ),
    ]
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            income: vec![
                spec("salary", "Salary", "💰", &["salary", "wage", "paycheck"]),
                spec("freelance", "Freelance", "💻", &["freelance", "contract", "gig"]),
                spec("investments", "Investments", "📈", &["dividend", "stock", "crypto"]),
                spec("gifts", "Gifts", "🎁", &["gift", "present"]),
                spec("rental", "Rental", "🏠", &["rent", "property"]),
                fallback("other_income", "💎", &["other"]),
            ],
            expense: vec![
                spec("housing", "Housing", "🏠", &["rent", "mortgage"]),
                spec("utilities", "Utilities", "💡", &["electric", "water", "gas"]),
                spec("food", "Food", "🍔", &["grocery", "groceries", "restaurant"]),
                spec("transport", "Transport", "🚗", &["uber", "bus", "fuel"]),
                spec("shopping", "Shopping", "🛍️", &["clothes", "retail"]),
                spec("health", "Health", "⚕️", &["medical", "fitness"]),
                spec("fun", "Fun", "🎮", &["entertainment", "movie"]),
                spec("education", "Education", "📚", &["course", "books"]),
                spec("travel", "Travel", "✈️", &["holiday", "vacation"]),
                spec("subscriptions", "Subscriptions", "📱", &["netflix", "spotify"]),
                spec("pets", "Pets", "🐾", &["vet", "pet food"]),
                spec("beauty", "Beauty", "💅", &["salon", "spa"]),
                spec("gifts_given", "Gifts", "🎁", &["present", "donation"]),
                fallback("other_expense", "📦", &["misc", "other"]),
            ],
            direction_rules: default_direction_rules(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn taxonomy_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(TAXONOMY_FILE))
}

pub fn read_taxonomy(path: &Path) -> Result<Taxonomy> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read taxonomy at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid taxonomy JSON in {}", path.display()))
}

/// Explicit path must exist; otherwise the config file is used when present,
/// falling back to the built-in taxonomy.
pub fn load_taxonomy(explicit: Option<&Path>) -> Result<Taxonomy> {
    if let Some(p) = explicit {
        return read_taxonomy(p);
    }
    match taxonomy_path() {
        Ok(p) if p.exists() => read_taxonomy(&p),
        _ => Ok(Taxonomy::default()),
    }
}

pub fn write_default_taxonomy(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Taxonomy already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    let body = serde_json::to_string_pretty(&Taxonomy::default())?;
    fs::write(path, body).with_context(|| format!("Write taxonomy to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fallbacks_are_last() {
        let t = Taxonomy::default();
        for d in Direction::ALL {
            let specs = t.specs(d);
            assert!(specs.last().unwrap().fallback);
            assert_eq!(specs.iter().filter(|s| s.fallback).count(), 1);
        }
    }

    #[test]
    fn missing_direction_rules_use_defaults() {
        let json = r#"{
            "income": [{"id":"a","name":"A","emoji":"x","keywords":["a"]}],
            "expense": [{"id":"b","name":"B","emoji":"y","keywords":["b"]}]
        }"#;
        let t: Taxonomy = serde_json::from_str(json).unwrap();
        assert_eq!(t.direction_rules, default_direction_rules());
        assert!(!t.income[0].fallback);
    }
}
