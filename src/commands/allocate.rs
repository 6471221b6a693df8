// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::allocation::{BudgetPlan, SumPolicy};
use crate::utils::{
    fmt_money, fmt_pct, maybe_print_json, parse_decimal, parse_key_value, pretty_table,
};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

#[derive(Serialize)]
struct PlanReport<'a> {
    monthly_income: String,
    fixed_expenses: String,
    remaining: String,
    total_percentage: String,
    buckets: &'a [crate::allocation::AllocationLine],
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let plan = build_plan(m)?;
    let fixed_total = plan.total_fixed_expenses()?;
    let remaining = plan.remaining_income()?;
    let mut lines = plan
        .breakdown()
        .with_context(|| format!("Cannot split {}", fmt_money(&remaining)))?;
    if m.get_flag("sort") {
        lines.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    }

    let report = PlanReport {
        monthly_income: format!("{:.2}", plan.monthly_income),
        fixed_expenses: format!("{:.2}", fixed_total),
        remaining: format!("{:.2}", remaining),
        total_percentage: format!("{:.2}", plan.engine.total()),
        buckets: &lines,
    };
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &report)? {
        return Ok(());
    }

    let fixed = plan
        .fixed_expenses()
        .iter()
        .map(|e| {
            vec![
                format!("{} {}", e.emoji, e.name).trim().to_string(),
                fmt_money(&e.amount),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Fixed expense", "Amount"], fixed));
    println!(
        "Income {}  Fixed {}  Remaining for allocation {}",
        fmt_money(&plan.monthly_income),
        fmt_money(&fixed_total),
        fmt_money(&remaining)
    );

    let rows = lines
        .iter()
        .map(|l| {
            vec![
                format!("{} {}", l.emoji, l.name),
                fmt_pct(&l.percentage),
                fmt_money(&l.amount),
                l.color.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Bucket", "Share", "Amount", "Color"], rows));
    if plan.engine.total().round_dp(2) != rust_decimal::Decimal::ONE_HUNDRED {
        eprintln!(
            "warning: shares sum to {} (use --normalize to rescale)",
            fmt_pct(&plan.engine.total())
        );
    }
    Ok(())
}

/// Default plan with the CLI's income, fixed expenses and slider moves applied.
pub fn build_plan(m: &clap::ArgMatches) -> Result<BudgetPlan> {
    let defaults = BudgetPlan::default();
    let fixed = m.get_many::<String>("fixed");
    let mut plan = if fixed.is_some() {
        BudgetPlan::new(defaults.monthly_income, defaults.engine)
    } else {
        defaults
    };
    if m.get_flag("normalize") {
        plan.engine = plan.engine.with_policy(SumPolicy::Normalize);
    }
    if let Some(income) = m.get_one::<String>("income") {
        plan.monthly_income = parse_decimal(income)?;
    }
    if let Some(fixed) = fixed {
        for raw in fixed {
            let (name, amount) = parse_key_value(raw)?;
            plan.add_fixed_expense(&name, amount, "")?;
        }
    }
    plan.remaining_income().context("Income and fixed expenses are out of range")?;
    if let Some(sets) = m.get_many::<String>("set") {
        for raw in sets {
            let (id, pct) = parse_key_value(raw)?;
            if plan.engine.get(&id).is_none() {
                return Err(anyhow!("Unknown bucket '{}'", id));
            }
            plan.engine.adjust(&id, pct);
        }
    }
    Ok(plan)
}
