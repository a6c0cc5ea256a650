// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::{bracetable::BraceTable, error::BraceError};

pub const DEFAULT_OPERATORS: &str = "+-*/";

#[derive(Debug, PartialEq, Clone)]
pub struct ParseOptions {
    /// The infix operator chars that separate the terms of an expression.
    pub operators: Vec<char>,

    /// When false, whitespace between tokens is skipped.
    pub significant_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            operators: DEFAULT_OPERATORS.chars().collect(),
            significant_whitespace: false,
        }
    }
}

impl ParseOptions {
    pub fn new(operators: &str, significant_whitespace: bool) -> Self {
        Self {
            operators: operators.chars().collect(),
            significant_whitespace,
        }
    }

    pub fn is_operator(&self, c: char) -> bool {
        self.operators.contains(&c)
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Static,
    Mirror,
}

/// The grammar settings as written in a TOML file, e.g.
///
/// ```toml
/// strategy = "static"
/// operators = "+-*/"
/// significant_whitespace = false
///
/// [braces]
/// "(" = ")"
/// "<{" = "}>"
/// ```
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    pub strategy: Strategy,
    pub operators: Option<String>,
    pub significant_whitespace: bool,
    pub braces: BTreeMap<String, String>,
}

impl GrammarConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, BraceError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, BraceError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Build the brace table, an empty `[braces]` table of the static
    /// strategy falls back to `()`, `[]` and `{}`.
    pub fn brace_table(&self) -> Result<BraceTable, BraceError> {
        match self.strategy {
            Strategy::Mirror => {
                if !self.braces.is_empty() {
                    return Err(BraceError::Config(
                        "The \"braces\" table is not used by the mirror strategy.".to_owned(),
                    ));
                }
                Ok(BraceTable::mirror())
            }
            Strategy::Static if self.braces.is_empty() => Ok(BraceTable::default_static()),
            Strategy::Static => BraceTable::new_static(
                self.braces
                    .iter()
                    .map(|(opening, closing)| (opening.as_str(), closing.as_str())),
            ),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new(
            self.operators.as_deref().unwrap_or(DEFAULT_OPERATORS),
            self.significant_whitespace,
        )
    }
}
