// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneychat::{Direction, ParseFailure, TransactionParser};
use rust_decimal::Decimal;

#[test]
fn spent_on_groceries_is_food_expense() {
    let p = TransactionParser::default();
    let d = p.parse("Spent £45.50 on groceries").unwrap();
    assert_eq!(d.direction, Direction::Expense);
    assert_eq!(d.amount, Decimal::new(4550, 2));
    assert_eq!(d.category_name, "Food");
    assert_eq!(d.category_emoji, "🍔");
    assert_eq!(d.description, "Spent £45.50 on groceries");
    assert_eq!(d.date, None);
}

#[test]
fn received_salary_is_income() {
    let p = TransactionParser::default();
    let d = p.parse("Received £2000 salary payment").unwrap();
    assert_eq!(d.direction, Direction::Income);
    assert_eq!(d.amount, Decimal::from(2000));
    assert_eq!(d.category_name, "Salary");
}

#[test]
fn amount_without_trigger_is_ambiguous() {
    let p = TransactionParser::default();
    assert_eq!(p.parse("£10"), Err(ParseFailure::DirectionAmbiguous));
}

#[test]
fn trigger_without_amount_has_no_amount() {
    let p = TransactionParser::default();
    assert_eq!(p.parse("spent some money"), Err(ParseFailure::AmountNotFound));
}

#[test]
fn income_wins_when_both_triggers_present() {
    let p = TransactionParser::default();
    let texts = [
        "Got paid £300 for the gig",
        "spent 20 but received 50 back",
        "bought a gift card with my bonus 25",
        "paid 10 towards my salary advance",
        "purchased stock 99.99 with dividend income",
    ];
    for t in texts {
        let d = p.parse(t).unwrap();
        assert_eq!(d.direction, Direction::Income, "text: {}", t);
    }
}

#[test]
fn date_is_attached_when_present() {
    let p = TransactionParser::default();
    let d = p.parse("paid £12.00 for 2024-02-29 bus pass").unwrap();
    assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(d.category_name, "Transport");
}

#[test]
fn unmatched_category_falls_back_to_other() {
    let p = TransactionParser::default();
    let d = p.parse("spent 5 on something").unwrap();
    assert_eq!(d.category_name, "Other");
    assert_eq!(d.category_emoji, "📦");

    let d = p.parse("earned 5 somehow").unwrap();
    assert_eq!(d.category_name, "Other");
    assert_eq!(d.category_emoji, "💎");
}

#[test]
fn rent_depends_on_direction() {
    let p = TransactionParser::default();
    assert_eq!(p.parse("paid rent 900").unwrap().category_name, "Housing");
    assert_eq!(p.parse("received rent 900").unwrap().category_name, "Rental");
}

#[test]
fn parse_is_deterministic() {
    let p = TransactionParser::default();
    let a = p.parse("Bought clothes for £30.00 on 2025-01-15");
    let b = p.parse("Bought clothes for £30.00 on 2025-01-15");
    assert_eq!(a, b);
    assert_eq!(a.unwrap().category_name, "Shopping");
}

#[test]
fn parse_many_keeps_order_and_failures() {
    let p = TransactionParser::default();
    let out = p.parse_many(["spent 3 on the bus", "£10", "nothing"]);
    assert_eq!(out.len(), 3);
    assert!(out[0].is_ok());
    assert_eq!(out[1], Err(ParseFailure::DirectionAmbiguous));
    assert_eq!(out[2], Err(ParseFailure::AmountNotFound));
}

#[test]
fn non_ascii_digits_are_not_amounts() {
    let p = TransactionParser::default();
    let d = p.parse("spent \u{0663} items for £20").unwrap();
    assert_eq!(d.amount, Decimal::from(20));
    assert_eq!(d.direction, Direction::Expense);
    assert_eq!(
        p.parse("spent \u{ff11}\u{ff12} on lunch"),
        Err(ParseFailure::AmountNotFound)
    );
}
