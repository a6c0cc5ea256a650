// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{Display, Write};

use crate::{
    ast::{BracedMatch, Expr, Term},
    process::{ParseResult, ParseTree},
};

impl Display for BracedMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Braces: {} * {} ||| Subexpr: {}",
            self.opening.text,
            self.closing.text,
            self.inner()
        )
    }
}

impl Display for Term<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Letters(token) | Term::Digits(token) => f.write_str(token.text),
            Term::Braced(braced) => {
                write!(f, "{}{}{}", braced.opening.text, braced.expr, braced.closing.text)
            }
        }
    }
}

impl Display for Expr<'_> {
    // normalized, one space around each operator
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, term) in self.terms.iter().enumerate() {
            if idx > 0 {
                write!(f, " {} ", self.operators[idx - 1].text)?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

/// One `Braces: <opening> * <closing> ||| Subexpr: <inner>` line per
/// match, or `FAILED`.
pub fn report(result: &ParseResult) -> String {
    match result {
        ParseResult::Success(tree) => {
            let lines: Vec<String> = tree.matches.iter().map(|m| m.to_string()).collect();
            lines.join("\n")
        }
        ParseResult::Failure(_) => "FAILED".to_owned(),
    }
}

impl Display for ParseTree<'_> {
    // an indented dump of the tree, for debug
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_expr(f, &self.expr, 0)
    }
}

/// An indented dump of the parse tree, for debug.
pub fn tree(tree: &ParseTree) -> String {
    tree.to_string()
}

fn write_expr(w: &mut dyn Write, expr: &Expr, indent: usize) -> std::fmt::Result {
    let pad = "  ".repeat(indent);
    writeln!(w, "{}expr {}..{} \"{}\"", pad, expr.span.start, expr.span.end, expr.text)?;

    for (idx, term) in expr.terms.iter().enumerate() {
        if idx > 0 {
            let operator = &expr.operators[idx - 1];
            writeln!(w, "{}  operator \"{}\"", pad, operator.text)?;
        }

        match term {
            Term::Letters(token) => writeln!(w, "{}  letters \"{}\"", pad, token.text)?,
            Term::Digits(token) => writeln!(w, "{}  digits \"{}\"", pad, token.text)?,
            Term::Braced(braced) => {
                writeln!(
                    w,
                    "{}  braced \"{}\" \"{}\"",
                    pad, braced.opening.text, braced.closing.text
                )?;
                write_expr(w, &braced.expr, indent + 2)?;
            }
        }
    }

    Ok(())
}
