// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Percentage allocation of disposable income across budget buckets.
//!
//! Moving one slider redistributes the change over the other buckets in
//! proportion to their current share. Each bucket is clamped to 0..=100 on its
//! own, so the total can drift away from 100; [`SumPolicy`] selects whether
//! that drift is kept or corrected.

use crate::error::AllocationError;
use crate::models::{BudgetCategory, FixedExpense};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// Decimal places kept on a percentage. Rounding residue is put back on one
// bucket so an unclamped move keeps the total.
const PCT_DP: u32 = 10;

fn clamp_pct(v: Decimal) -> Decimal {
    v.round_dp(PCT_DP).clamp(Decimal::ZERO, HUNDRED)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SumPolicy {
    /// Keep whatever total the independent clamping produces.
    #[default]
    PreserveDrift,
    /// Rescale the untouched buckets so the total returns to 100.
    Normalize,
}

#[derive(Debug, Clone)]
pub struct BudgetAllocationEngine {
    categories: Vec<BudgetCategory>,
    policy: SumPolicy,
}

impl BudgetAllocationEngine {
    pub fn new(
        categories: Vec<BudgetCategory>,
        policy: SumPolicy,
    ) -> Result<Self, AllocationError> {
        if categories.is_empty() {
            return Err(AllocationError::Empty);
        }
        let mut seen = HashSet::new();
        for c in &categories {
            if !seen.insert(c.id.as_str()) {
                return Err(AllocationError::DuplicateId(c.id.clone()));
            }
            if c.percentage < Decimal::ZERO || c.percentage > HUNDRED {
                return Err(AllocationError::OutOfRange {
                    id: c.id.clone(),
                    percentage: c.percentage.to_string(),
                });
            }
        }
        let total: Decimal = categories.iter().map(|c| c.percentage).sum();
        if total != HUNDRED {
            return Err(AllocationError::BadTotal(total.to_string()));
        }
        Ok(Self { categories, policy })
    }

    pub fn with_policy(mut self, policy: SumPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SumPolicy {
        self.policy
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn total(&self) -> Decimal {
        self.categories.iter().map(|c| c.percentage).sum()
    }

    /// Display order only; the engine state keeps its configured order.
    pub fn sorted_by_percentage(&self) -> Vec<BudgetCategory> {
        let mut v = self.categories.clone();
        v.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        v
    }

    /// Sets `id` to `requested` (clamped) and redistributes the difference.
    /// Unknown ids leave the state untouched.
    pub fn adjust(&mut self, id: &str, requested: Decimal) -> &[BudgetCategory] {
        let requested = clamp_pct(requested);
        let Some(idx) = self.categories.iter().position(|c| c.id == id) else {
            debug!(id, "adjust ignored: unknown allocation id");
            return &self.categories;
        };

        let delta = requested - self.categories[idx].percentage;
        let sum_others = self.sum_others(idx);

        if sum_others > Decimal::ZERO {
            let mut clamped = false;
            let mut last = None;
            for (i, c) in self.categories.iter_mut().enumerate() {
                if i == idx {
                    continue;
                }
                let share = c.percentage / sum_others;
                let next = (c.percentage - delta * share).round_dp(PCT_DP);
                clamped |= next < Decimal::ZERO || next > HUNDRED;
                c.percentage = next.clamp(Decimal::ZERO, HUNDRED);
                if !c.percentage.is_zero() {
                    last = Some(i);
                }
            }
            // Rounding residual only; clamping drift is left to the policy.
            if let Some(j) = last.filter(|_| !clamped) {
                let residual = sum_others - delta - self.sum_others(idx);
                let c = &mut self.categories[j];
                c.percentage = clamp_pct(c.percentage + residual);
            }
        }
        self.categories[idx].percentage = requested;

        if self.policy == SumPolicy::Normalize {
            self.normalize_others(idx);
        }
        &self.categories
    }

    fn sum_others(&self, idx: usize) -> Decimal {
        self.categories
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, c)| c.percentage)
            .sum()
    }

    // Target stays fixed; the residual from division lands on the last
    // non-zero bucket so the total is exact and a repeat call is a no-op.
    fn normalize_others(&mut self, idx: usize) {
        let target = HUNDRED - self.categories[idx].percentage;
        let sum = self.sum_others(idx);
        if sum.is_zero() || sum == target {
            return;
        }
        let factor = target / sum;
        let mut last = None;
        for (i, c) in self.categories.iter_mut().enumerate() {
            if i == idx {
                continue;
            }
            c.percentage = clamp_pct(c.percentage * factor);
            if !c.percentage.is_zero() {
                last = Some(i);
            }
        }
        if let Some(j) = last {
            let residual = target - self.sum_others(idx);
            let c = &mut self.categories[j];
            c.percentage = clamp_pct(c.percentage + residual);
        }
    }
}

impl Default for BudgetAllocationEngine {
    fn default() -> Self {
        Self {
            categories: vec![
                BudgetCategory::new("needs", "Needs", "🏠", Decimal::from(50), "#8b5cf6"),
                BudgetCategory::new("desires", "Desires", "🎮", Decimal::from(20), "#ec4899"),
                BudgetCategory::new("savings", "Savings", "💰", Decimal::from(20), "#10b981"),
                BudgetCategory::new("goals", "Goals", "🎯", Decimal::from(10), "#f59e0b"),
            ],
            policy: SumPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationLine {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub percentage: Decimal,
    pub amount: Decimal,
}

/// Monthly income minus fixed expenses, split by the allocation engine.
#[derive(Debug, Clone)]
pub struct BudgetPlan {
    pub monthly_income: Decimal,
    fixed_expenses: Vec<FixedExpense>,
    next_id: u64,
    pub engine: BudgetAllocationEngine,
}

impl BudgetPlan {
    pub fn new(monthly_income: Decimal, engine: BudgetAllocationEngine) -> Self {
        Self {
            monthly_income,
            fixed_expenses: Vec::new(),
            next_id: 1,
            engine,
        }
    }

    pub fn fixed_expenses(&self) -> &[FixedExpense] {
        &self.fixed_expenses
    }

    pub fn add_fixed_expense(
        &mut self,
        name: &str,
        amount: Decimal,
        emoji: &str,
    ) -> Result<&FixedExpense, AllocationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AllocationError::EmptyName);
        }
        if amount < Decimal::ZERO {
            return Err(AllocationError::NegativeAmount(amount.to_string()));
        }
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.fixed_expenses.push(FixedExpense {
            id,
            name: name.to_string(),
            amount,
            emoji: emoji.to_string(),
        });
        Ok(&self.fixed_expenses[self.fixed_expenses.len() - 1])
    }

    pub fn remove_fixed_expense(&mut self, id: &str) -> bool {
        let before = self.fixed_expenses.len();
        self.fixed_expenses.retain(|e| e.id != id);
        self.fixed_expenses.len() != before
    }

    pub fn total_fixed_expenses(&self) -> Result<Decimal, AllocationError> {
        self.fixed_expenses
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
            .ok_or(AllocationError::Overflow)
    }

    /// May be negative when fixed costs exceed income.
    pub fn remaining_income(&self) -> Result<Decimal, AllocationError> {
        self.monthly_income
            .checked_sub(self.total_fixed_expenses()?)
            .ok_or(AllocationError::Overflow)
    }

    /// `None` for an unknown bucket id.
    pub fn amount_for(&self, id: &str) -> Result<Option<Decimal>, AllocationError> {
        let Some(c) = self.engine.get(id) else {
            return Ok(None);
        };
        share_of(self.remaining_income()?, c.percentage).map(Some)
    }

    pub fn breakdown(&self) -> Result<Vec<AllocationLine>, AllocationError> {
        let remaining = self.remaining_income()?;
        self.engine
            .categories()
            .iter()
            .map(|c| {
                Ok(AllocationLine {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    emoji: c.emoji.clone(),
                    color: c.color.clone(),
                    percentage: c.percentage,
                    amount: share_of(remaining, c.percentage)?,
                })
            })
            .collect()
    }
}

fn share_of(amount: Decimal, percentage: Decimal) -> Result<Decimal, AllocationError> {
    (percentage / HUNDRED)
        .checked_mul(amount)
        .ok_or(AllocationError::Overflow)
}

impl Default for BudgetPlan {
    fn default() -> Self {
        let mut plan = Self::new(Decimal::from(3000), BudgetAllocationEngine::default());
        for (name, amount, emoji) in [
            ("Rent", 1200, "🏠"),
            ("Utilities", 150, "💡"),
            ("Internet", 45, "🌐"),
        ] {
            plan.fixed_expenses.push(FixedExpense {
                id: plan.next_id.to_string(),
                name: name.to_string(),
                amount: Decimal::from(amount),
                emoji: emoji.to_string(),
            });
            plan.next_id += 1;
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(id: &str, p: i64) -> BudgetCategory {
        BudgetCategory::new(id, id, "", Decimal::from(p), "#000000")
    }

    #[test]
    fn normalize_cannot_rescale_all_zero_others() {
        let mut e = BudgetAllocationEngine::new(
            vec![pct("a", 100), pct("b", 0), pct("c", 0)],
            SumPolicy::Normalize,
        )
        .unwrap();
        // others are all zero: nothing to rescale
        e.adjust("a", Decimal::from(40));
        assert_eq!(e.total(), Decimal::from(40));
    }

    #[test]
    fn unclamped_move_keeps_total_exact() {
        let mut e = BudgetAllocationEngine::new(
            vec![pct("a", 1), pct("b", 33), pct("c", 33), pct("d", 33)],
            SumPolicy::PreserveDrift,
        )
        .unwrap();
        e.adjust("a", Decimal::ZERO);
        assert_eq!(e.total(), HUNDRED);
        assert_eq!(e.get("b").unwrap().percentage, Decimal::new(333333333333, 10));
        let snapshot = e.categories().to_vec();
        e.adjust("a", Decimal::ZERO);
        assert_eq!(e.categories(), snapshot.as_slice());
    }

    #[test]
    fn plan_arithmetic_overflow_is_an_error() {
        let mut plan = BudgetPlan::new(Decimal::MIN, BudgetAllocationEngine::default());
        plan.add_fixed_expense("Rent", Decimal::ONE, "").unwrap();
        assert_eq!(plan.remaining_income(), Err(AllocationError::Overflow));
        assert_eq!(plan.breakdown(), Err(AllocationError::Overflow));

        plan.monthly_income = Decimal::MAX;
        assert!(plan.breakdown().is_ok());
    }

    #[test]
    fn normalize_total_is_exact() {
        let mut e = BudgetAllocationEngine::new(
            vec![pct("a", 1), pct("b", 33), pct("c", 66)],
            SumPolicy::Normalize,
        )
        .unwrap();
        e.adjust("a", Decimal::ZERO);
        assert!(e.get("a").unwrap().percentage.is_zero());
        assert_eq!(e.total(), HUNDRED);
        let snapshot = e.categories().to_vec();
        e.adjust("a", Decimal::ZERO);
        assert_eq!(e.categories(), snapshot.as_slice());
    }
}
