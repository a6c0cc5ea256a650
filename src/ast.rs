// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use serde::Serialize;

use crate::token::{Span, Token};

/// `term (operator term)*`
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Expr<'a> {
    pub span: Span,

    // the matched text, excluding the whitespace around it
    pub text: &'a str,

    pub terms: Vec<Term<'a>>,

    // `operators[i]` sits between `terms[i]` and `terms[i + 1]`
    pub operators: Vec<Token<'a>>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Term<'a> {
    Letters(Token<'a>),
    Digits(Token<'a>),
    Braced(Box<BracedMatch<'a>>),
}

/// One matched brace pair and the expression between them.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct BracedMatch<'a> {
    pub opening: Token<'a>,
    pub closing: Token<'a>,
    pub expr: Expr<'a>,
}

impl<'a> BracedMatch<'a> {
    pub fn new(opening: Token<'a>, closing: Token<'a>, expr: Expr<'a>) -> Self {
        Self {
            opening,
            closing,
            expr,
        }
    }

    /// The offset of the opening delimiter.
    pub fn start(&self) -> usize {
        self.opening.start()
    }

    /// The text between the delimiters.
    pub fn inner(&self) -> &'a str {
        self.expr.text
    }

    /// From the opening delimiter to the closing delimiter, both included.
    pub fn span(&self) -> Span {
        Span::new(self.opening.start(), self.closing.end())
    }
}

impl<'a> Term<'a> {
    pub fn span(&self) -> Span {
        match self {
            Term::Letters(token) | Term::Digits(token) => token.span,
            Term::Braced(braced) => braced.span(),
        }
    }
}

impl<'a> Expr<'a> {
    /// All brace pairs of this expression tree, innermost first.
    pub fn braced_matches(&self) -> Vec<&BracedMatch<'a>> {
        let mut matches = vec![];
        collect_braced(self, &mut matches);
        matches
    }

    /// The deepest brace nesting level, 0 for an expression without braces.
    pub fn depth(&self) -> usize {
        self.terms
            .iter()
            .map(|term| match term {
                Term::Braced(braced) => braced.expr.depth() + 1,
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

fn collect_braced<'a, 'b>(expr: &'b Expr<'a>, matches: &mut Vec<&'b BracedMatch<'a>>) {
    for term in &expr.terms {
        if let Term::Braced(braced) = term {
            collect_braced(&braced.expr, matches);
            matches.push(braced);
        }
    }
}
