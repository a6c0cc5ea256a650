// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use rustc_hash::FxHashSet;

use crate::ast::BracedMatch;

/// Records the brace pairs completed during one parse.
///
/// Matches are keyed by the offset of their opening delimiter, only the
/// first match recorded for an offset is kept. Backtracking may complete
/// the same brace pair several times, and a completed pair is kept even
/// when the branch that produced it is abandoned later.
#[derive(Debug, Default)]
pub struct MatchCollector<'a> {
    seen_offsets: FxHashSet<usize>,
    matches: Vec<BracedMatch<'a>>,
}

impl<'a> MatchCollector<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a match with the same offset was recorded before.
    pub fn record(&mut self, braced: BracedMatch<'a>) -> bool {
        if !self.seen_offsets.insert(braced.start()) {
            return false;
        }

        self.matches.push(braced);
        true
    }

    /// The kept matches, in the order they were first recorded.
    pub fn results(&self) -> &[BracedMatch<'a>] {
        &self.matches
    }

    pub fn into_results(self) -> Vec<BracedMatch<'a>> {
        self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
