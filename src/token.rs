// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

use serde::Serialize;

use crate::location::Location;

/// A byte range of the input text, end excluded.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Span {
    pub start: usize, // position included
    pub end: usize,   // position excluded
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Open,     // opening delimiter, e.g. `(`, `<{`
    Close,    // closing delimiter, e.g. `)`, `}>`
    Letters,  // a run of letters
    Digits,   // a run of digits
    Operator, // one infix operator char
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Slice `start..end` out of `source` as a token.
    pub fn from_source(kind: TokenKind, source: &'a str, start: usize, end: usize) -> Self {
        Token {
            kind,
            text: &source[start..end],
            span: Span::new(start, end),
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn location(&self, source: &str) -> Location {
        Location::locate_range(source, self.span.start, self.span.end)
    }
}
