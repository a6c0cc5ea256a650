// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::location::Location;

#[derive(Debug, thiserror::Error)]
pub enum BraceError {
    /// The static brace table has no entry for the opening delimiter.
    #[error("No closing delimiter registered for \"{opening}\".")]
    NotFound { opening: String },

    /// An opening delimiter was matched but its closer never followed.
    #[error("Unmatched opening delimiter \"{opening}\" at {location}, expect \"{closing}\".")]
    UnmatchedOpen {
        opening: String,
        closing: String,
        location: Location,
    },

    /// The top-level expression could not consume the whole input.
    #[error("Parse failed at {location}, expect {expected}.")]
    ParseFailure { expected: String, location: Location },

    #[error("Invalid brace table: {0}")]
    InvalidTable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BraceError {
    /// The location the error refers to, if any.
    pub fn location(&self) -> Option<&Location> {
        match self {
            BraceError::UnmatchedOpen { location, .. }
            | BraceError::ParseFailure { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for BraceError {
    fn from(e: toml::de::Error) -> Self {
        BraceError::Config(e.to_string())
    }
}
