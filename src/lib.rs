// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod charwithposition;
mod collector;
mod grammar;
mod stack;

pub mod ast;
pub mod bracetable;
pub mod error;
pub mod errorprinter;
pub mod location;
pub mod mirror;
pub mod options;
pub mod printer;
pub mod process;
pub mod token;

pub use bracetable::BraceTable;
pub use collector::MatchCollector;
pub use error::BraceError;
pub use mirror::unicode_mirror;
pub use options::{GrammarConfig, ParseOptions};
pub use process::{parse_braced_subexpressions, BraceMatcher, ParseResult, ParseTree};
