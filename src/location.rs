// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use serde::Serialize;

use crate::charwithposition::CharsWithPositionIter;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Location {
    pub index: usize,  // The byte offset in the text
    pub line: usize,   // The line number (0-based index)
    pub column: usize, // The column number in chars (0-based index)
    pub length: usize, // The length (in bytes) of the text range; 0 for a single position
}

impl Location {
    /// Create a new `Location` representing a single position.
    pub fn new_position(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
            length: 0,
        }
    }

    /// Create a new `Location` representing a range of text.
    pub fn new_range(index: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            index,
            line,
            column,
            length,
        }
    }

    /// Create a range `Location` from a starting position and a length.
    pub fn from_position_and_length(position: &Location, length: usize) -> Self {
        Self::new_range(position.index, position.line, position.column, length)
    }

    /// Resolve the line and column of the byte `offset` in `text`.
    ///
    /// An offset past the end of the text resolves to the end position.
    pub fn locate(text: &str, offset: usize) -> Self {
        let mut chars = text.chars();
        let mut last = Location::new_position(0, 0, 0);
        for item in CharsWithPositionIter::new(&mut chars) {
            if item.position.index >= offset {
                return item.position;
            }
            last = item.position;
            if item.character == '\n' {
                last = Location::new_position(last.index + 1, last.line + 1, 0);
            } else {
                last = Location::new_position(
                    last.index + item.character.len_utf8(),
                    last.line,
                    last.column + 1,
                );
            }
        }
        last
    }

    /// Resolve a byte range `start..end` of `text`.
    pub fn locate_range(text: &str, start: usize, end: usize) -> Self {
        let position = Self::locate(text, start);
        Self::from_position_and_length(&position, end.saturating_sub(start))
    }
}

impl Display for Location {
    // human readable, 1-based
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
