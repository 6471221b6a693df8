// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ordered, immutable category taxonomy.
//!
//! Within a direction the configured order is the match precedence: the first
//! category with a keyword contained in the text wins, and the designated
//! fallback is returned when nothing matches.

use crate::config::{CategorySpec, Taxonomy};
use crate::error::TaxonomyError;
use crate::models::{Category, Direction};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone)]
struct Bucket {
    categories: Vec<Category>,
    fallback: usize,
}

impl Bucket {
    fn build(
        direction: Direction,
        specs: &[CategorySpec],
        seen: &mut HashSet<String>,
    ) -> Result<Self, TaxonomyError> {
        if specs.is_empty() {
            return Err(TaxonomyError::Empty(direction));
        }
        let mut categories = Vec::with_capacity(specs.len());
        let mut flagged: Option<usize> = None;
        for (idx, s) in specs.iter().enumerate() {
            if !seen.insert(s.id.clone()) {
                return Err(TaxonomyError::DuplicateId(s.id.clone()));
            }
            if s.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(TaxonomyError::EmptyKeyword(s.id.clone()));
            }
            if s.fallback {
                if let Some(prev) = flagged {
                    return Err(TaxonomyError::MultipleFallbacks {
                        direction,
                        first: specs[prev].id.clone(),
                        second: s.id.clone(),
                    });
                }
                flagged = Some(idx);
            }
            categories.push(Category {
                id: s.id.clone(),
                name: s.name.clone(),
                emoji: s.emoji.clone(),
                direction,
                keywords: s.keywords.iter().map(|k| k.to_lowercase()).collect(),
            });
        }
        let fallback = flagged.unwrap_or(categories.len() - 1);
        Ok(Self {
            categories,
            fallback,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    income: Bucket,
    expense: Bucket,
}

impl CategoryRegistry {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::new();
        let income = Bucket::build(Direction::Income, &taxonomy.income, &mut seen)?;
        let expense = Bucket::build(Direction::Expense, &taxonomy.expense, &mut seen)?;
        Ok(Self { income, expense })
    }

    fn bucket(&self, direction: Direction) -> &Bucket {
        match direction {
            Direction::Income => &self.income,
            Direction::Expense => &self.expense,
        }
    }

    /// Categories for a direction in configured order.
    pub fn get_all(&self, direction: Direction) -> &[Category] {
        &self.bucket(direction).categories
    }

    pub fn fallback(&self, direction: Direction) -> &Category {
        let b = self.bucket(direction);
        &b.categories[b.fallback]
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        Direction::ALL
            .iter()
            .flat_map(|d| self.get_all(*d))
            .find(|c| c.id == id)
    }

    /// First-match lookup; `lowered` must already be lowercase.
    pub fn find_by_keyword(&self, direction: Direction, lowered: &str) -> &Category {
        match self.get_all(direction).iter().find(|c| c.matches(lowered)) {
            Some(c) => c,
            None => {
                let fb = self.fallback(direction);
                debug!(%direction, fallback = %fb.id, "no keyword matched");
                fb
            }
        }
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(&Taxonomy::default())
            .unwrap_or_else(|e| unreachable!("built-in taxonomy is valid: {e}"))
    }
}
