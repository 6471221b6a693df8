// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword classification for direction and category.
//!
//! Direction rules are evaluated top to bottom and the first rule with a
//! trigger present wins. The default table lists income before expense, so
//! "got paid" resolves to income even though "paid" is also an expense trigger.

use crate::config::Taxonomy;
use crate::error::TaxonomyError;
use crate::models::{Category, Direction};
use crate::registry::CategoryRegistry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRule {
    pub direction: Direction,
    pub triggers: Vec<String>,
}

impl DirectionRule {
    pub fn new(direction: Direction, triggers: &[&str]) -> Self {
        Self {
            direction,
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    registry: CategoryRegistry,
    rules: Vec<DirectionRule>,
}

impl CategoryClassifier {
    pub fn new(registry: CategoryRegistry, rules: Vec<DirectionRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| DirectionRule {
                direction: r.direction,
                triggers: r.triggers.iter().map(|t| t.to_lowercase()).collect(),
            })
            .collect();
        Self { registry, rules }
    }

    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        let registry = CategoryRegistry::new(taxonomy)?;
        Ok(Self::new(registry, taxonomy.direction_rules.clone()))
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Direction rules in evaluation order.
    pub fn rules(&self) -> &[DirectionRule] {
        &self.rules
    }

    pub fn classify_direction(&self, lowered: &str) -> Option<Direction> {
        self.rules
            .iter()
            .find(|r| r.matches(lowered))
            .map(|r| r.direction)
    }

    pub fn classify(&self, direction: Direction, text: &str) -> &Category {
        self.registry
            .find_by_keyword(direction, &text.to_lowercase())
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(
            CategoryRegistry::default(),
            crate::config::default_direction_rules(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_rule_is_evaluated_first() {
        let c = CategoryClassifier::default();
        assert_eq!(c.rules()[0].direction, Direction::Income);
        assert_eq!(
            c.classify_direction("got paid for the gig"),
            Some(Direction::Income)
        );
        assert_eq!(c.classify_direction("paid the bill"), Some(Direction::Expense));
        assert_eq!(c.classify_direction("hello"), None);
    }

    #[test]
    fn reordered_rules_flip_precedence() {
        let rules = vec![
            DirectionRule::new(Direction::Expense, &["paid"]),
            DirectionRule::new(Direction::Income, &["got paid"]),
        ];
        let c = CategoryClassifier::new(CategoryRegistry::default(), rules);
        assert_eq!(c.classify_direction("got paid"), Some(Direction::Expense));
    }

    #[test]
    fn triggers_are_lowercased() {
        let rules = vec![DirectionRule {
            direction: Direction::Income,
            triggers: vec!["REFUND".into()],
        }];
        let c = CategoryClassifier::new(CategoryRegistry::default(), rules);
        assert_eq!(c.classify_direction("a refund"), Some(Direction::Income));
    }

    #[test]
    fn classify_lowercases_text() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify(Direction::Expense, "NETFLIX monthly").id, "subscriptions");
    }
}
