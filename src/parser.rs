// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::CategoryClassifier;
use crate::error::ParseFailure;
use crate::models::TransactionDraft;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

// ASCII digits only; `\d` would also match other scripts.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[£$€]?\s*([0-9]+(?:\.[0-9]{2})?)").expect("amount regex"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:on|for)\s+([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("date regex"));

/// Turns one free-text utterance into a [`TransactionDraft`].
#[derive(Debug, Clone, Default)]
pub struct TransactionParser {
    classifier: CategoryClassifier,
}

impl TransactionParser {
    pub fn new(classifier: CategoryClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn parse(&self, text: &str) -> Result<TransactionDraft, ParseFailure> {
        let amount = extract_amount(text)?;

        let lowered = text.to_lowercase();
        let direction = self
            .classifier
            .classify_direction(&lowered)
            .ok_or(ParseFailure::DirectionAmbiguous)?;

        let category = self.classifier.registry().find_by_keyword(direction, &lowered);

        Ok(TransactionDraft {
            direction,
            amount,
            category_name: category.name.clone(),
            category_emoji: category.emoji.clone(),
            description: text.to_string(),
            date: extract_date(text),
        })
    }

    /// Parses each line independently, preserving input order.
    pub fn parse_many<'a, I>(&self, lines: I) -> Vec<Result<TransactionDraft, ParseFailure>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|l| self.parse(l)).collect()
    }
}

fn extract_amount(text: &str) -> Result<Decimal, ParseFailure> {
    let caps = AMOUNT_RE
        .captures(text)
        .ok_or(ParseFailure::AmountNotFound)?;
    let raw = &caps[1];
    let amount =
        Decimal::from_str(raw).map_err(|_| ParseFailure::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() {
        return Err(ParseFailure::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

fn extract_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(text)?;
    let raw = &caps[1];
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(err) => {
            debug!(date = raw, %err, "ignoring malformed date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_takes_first_match() {
        assert_eq!(extract_amount("£12 then £30").unwrap(), Decimal::new(12, 0));
        assert_eq!(extract_amount("$ 7.25 coffee").unwrap(), Decimal::new(725, 2));
    }

    #[test]
    fn amount_skips_non_ascii_digits() {
        assert_eq!(
            extract_amount("spent \u{0663} items for £20").unwrap(),
            Decimal::new(20, 0)
        );
        assert!(matches!(
            extract_amount("spent \u{ff11}\u{ff12} on lunch"),
            Err(ParseFailure::AmountNotFound)
        ));
    }

    #[test]
    fn amount_ignores_single_decimal_digit() {
        // "\.\d{2}" needs two digits, so only the integer part matches
        assert_eq!(extract_amount("spent 4.5").unwrap(), Decimal::new(4, 0));
    }

    #[test]
    fn amount_overflow_is_invalid() {
        let huge = "spent 99999999999999999999999999999999";
        assert!(matches!(
            extract_amount(huge),
            Err(ParseFailure::InvalidAmount(_))
        ));
    }

    #[test]
    fn date_requires_prefix_and_calendar_validity() {
        assert_eq!(
            extract_date("bought lunch on 2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(extract_date("bought lunch 2024-03-05"), None);
        assert_eq!(extract_date("paid rent for 2024-13-40"), None);
        assert_eq!(extract_date("paid rent for \u{0662}024-03-05"), None);
    }
}
