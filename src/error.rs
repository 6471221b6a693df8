// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Direction;
use thiserror::Error;

/// Why a piece of text did not produce a transaction draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no amount found")]
    AmountNotFound,

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("could not tell whether this is income or an expense")]
    DirectionAmbiguous,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("no {0} categories configured")]
    Empty(Direction),

    #[error("duplicate category id '{0}'")]
    DuplicateId(String),

    #[error("more than one {direction} fallback category: '{first}' and '{second}'")]
    MultipleFallbacks {
        direction: Direction,
        first: String,
        second: String,
    },

    #[error("category '{0}' has an empty keyword")]
    EmptyKeyword(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("allocation needs at least one category")]
    Empty,

    #[error("duplicate allocation id '{0}'")]
    DuplicateId(String),

    #[error("percentage {percentage} for '{id}' is outside 0..=100")]
    OutOfRange { id: String, percentage: String },

    #[error("percentages sum to {0}, expected 100")]
    BadTotal(String),

    #[error("fixed expense name is empty")]
    EmptyName,

    #[error("fixed expense amount {0} is negative")]
    NegativeAmount(String),

    #[error("amounts are too large to allocate")]
    Overflow,
}
