// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod allocation;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod registry;
pub mod utils;

pub use allocation::{BudgetAllocationEngine, BudgetPlan, SumPolicy};
pub use classifier::{CategoryClassifier, DirectionRule};
pub use error::{AllocationError, ParseFailure, TaxonomyError};
pub use models::{BudgetCategory, Category, Direction, TransactionDraft};
pub use parser::TransactionParser;
pub use registry::CategoryRegistry;
