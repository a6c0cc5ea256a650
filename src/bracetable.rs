// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::borrow::Cow;

use crate::{error::BraceError, mirror::unicode_mirror, options::ParseOptions};

/// Resolves the closing delimiter of an opening delimiter.
#[derive(Debug, PartialEq, Clone)]
pub enum BraceTable {
    /// A fixed table of `opening -> closing` pairs.
    Static(StaticBraces),

    /// Any run of punctuation or symbol chars opens a brace, the
    /// closer is guessed by `unicode_mirror`.
    Mirror,
}

#[derive(Debug, PartialEq, Clone)]
pub struct StaticBraces {
    // sorted by the length of the opening delimiter, longest first,
    // pairs with the same length keep the insertion order.
    pairs: Vec<(String, String)>,
}

impl StaticBraces {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl BraceTable {
    /// Build a static table. A repeated opening delimiter replaces the
    /// previous pair.
    pub fn new_static<I, S, T>(pairs: I) -> Result<Self, BraceError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut items: Vec<(String, String)> = vec![];

        for (opening, closing) in pairs {
            let opening = opening.into();
            let closing = closing.into();

            if opening.is_empty() {
                return Err(BraceError::InvalidTable(
                    "The opening delimiter can not be empty.".to_owned(),
                ));
            }

            if closing.is_empty() {
                return Err(BraceError::InvalidTable(format!(
                    "The closing delimiter of \"{}\" can not be empty.",
                    opening
                )));
            }

            match items.iter_mut().find(|(key, _)| *key == opening) {
                Some(item) => item.1 = closing,
                None => items.push((opening, closing)),
            }
        }

        // longest match first
        items.sort_by(|left, right| right.0.len().cmp(&left.0.len()));

        Ok(BraceTable::Static(StaticBraces { pairs: items }))
    }

    /// `()`, `[]` and `{}`.
    pub fn default_static() -> Self {
        BraceTable::Static(StaticBraces {
            pairs: vec![
                ("(".to_owned(), ")".to_owned()),
                ("[".to_owned(), "]".to_owned()),
                ("{".to_owned(), "}".to_owned()),
            ],
        })
    }

    pub fn mirror() -> Self {
        BraceTable::Mirror
    }

    /// The closing delimiter of `opening`.
    pub fn closing_for<'a>(&'a self, opening: &str) -> Result<Cow<'a, str>, BraceError> {
        match self {
            BraceTable::Static(braces) => braces
                .pairs
                .iter()
                .find(|(key, _)| key == opening)
                .map(|(_, closing)| Cow::Borrowed(closing.as_str()))
                .ok_or_else(|| BraceError::NotFound {
                    opening: opening.to_owned(),
                }),
            BraceTable::Mirror => Ok(Cow::Owned(unicode_mirror(opening))),
        }
    }

    /// The end positions of the opening delimiters that can be matched
    /// at `position`, longest first.
    pub fn openers_at(&self, text: &str, position: usize, options: &ParseOptions) -> Vec<usize> {
        let rest = &text[position..];

        match self {
            BraceTable::Static(braces) => braces
                .pairs
                .iter()
                .filter(|(opening, _)| rest.starts_with(opening.as_str()))
                .map(|(opening, _)| position + opening.len())
                .collect(),
            BraceTable::Mirror => {
                // the maximal run of opener chars, then every shorter prefix of it
                let mut ends: Vec<usize> = rest
                    .char_indices()
                    .take_while(|(_, c)| is_opener_char(*c, options))
                    .map(|(idx, c)| position + idx + c.len_utf8())
                    .collect();
                ends.reverse();
                ends
            }
        }
    }
}

impl Default for BraceTable {
    fn default() -> Self {
        BraceTable::default_static()
    }
}

/// Chars that may form an opening delimiter in the mirror strategy:
/// punctuation and symbols, except the infix operators.
pub fn is_opener_char(c: char, options: &ParseOptions) -> bool {
    !(c.is_alphanumeric() || c.is_whitespace() || c.is_control() || options.is_operator(c))
}
