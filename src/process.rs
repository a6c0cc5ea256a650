// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use serde::Serialize;
use tracing::debug;

use crate::{
    ast::{BracedMatch, Expr},
    bracetable::BraceTable,
    error::BraceError,
    grammar::Grammar,
    options::ParseOptions,
};

/// A brace table and the parse options, ready to match texts.
///
/// The matcher holds no state between parses, parsing the same text
/// twice gives the same result.
#[derive(Debug, Clone, Default)]
pub struct BraceMatcher {
    pub table: BraceTable,
    pub options: ParseOptions,
}

impl BraceMatcher {
    pub fn new(table: BraceTable, options: ParseOptions) -> Self {
        Self { table, options }
    }

    /// `()`, `[]` and `{}` with the default options.
    pub fn with_static_braces() -> Self {
        Self::new(BraceTable::default_static(), ParseOptions::default())
    }

    /// The mirror heuristic with the default options.
    pub fn with_mirror_braces() -> Self {
        Self::new(BraceTable::mirror(), ParseOptions::default())
    }

    pub fn parse<'a>(&self, text: &'a str) -> ParseResult<'a> {
        parse_braced_subexpressions(text, &self.table, &self.options)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.parse(text).is_success()
    }
}

/// Match `text` as one expression and collect all braced subexpressions.
pub fn parse_braced_subexpressions<'a>(
    text: &'a str,
    table: &BraceTable,
    options: &ParseOptions,
) -> ParseResult<'a> {
    let outcome = Grammar::new(text, table, options).run();

    match outcome.expr {
        Ok(expr) => {
            let matches = outcome.collector.into_results();
            debug!(matches = matches.len(), "parse succeeded");
            ParseResult::Success(ParseTree { expr, matches })
        }
        Err(e) => {
            // the matches collected before the failure are dropped
            debug!(error = %e, "parse failed");
            ParseResult::Failure(e)
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ParseTree<'a> {
    pub expr: Expr<'a>,

    // every braced subexpression completed during the parse, deduplicated
    // by the offset of the opening delimiter, in the order of completion.
    pub matches: Vec<BracedMatch<'a>>,
}

#[derive(Debug)]
pub enum ParseResult<'a> {
    Success(ParseTree<'a>),
    Failure(BraceError),
}

impl<'a> ParseResult<'a> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn tree(&self) -> Option<&ParseTree<'a>> {
        match self {
            ParseResult::Success(tree) => Some(tree),
            ParseResult::Failure(_) => None,
        }
    }

    /// The braced matches of a successful parse, empty on failure.
    pub fn matches(&self) -> &[BracedMatch<'a>] {
        match self {
            ParseResult::Success(tree) => &tree.matches,
            ParseResult::Failure(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&BraceError> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<ParseTree<'a>, BraceError> {
        match self {
            ParseResult::Success(tree) => Ok(tree),
            ParseResult::Failure(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::{parse_braced_subexpressions, BraceMatcher, ParseResult};
    use crate::{
        bracetable::BraceTable, error::BraceError, options::ParseOptions, token::Span,
    };

    fn new_match<'a>(opening: &'a str, closing: &'a str, inner: &'a str) -> (&'a str, &'a str, &'a str) {
        (opening, closing, inner)
    }

    fn matches_of<'a>(result: &ParseResult<'a>) -> Vec<(&'a str, &'a str, &'a str)> {
        result
            .matches()
            .iter()
            .map(|m| (m.opening.text, m.closing.text, m.inner()))
            .collect()
    }

    #[test]
    fn test_worked_example() {
        let matcher = BraceMatcher::with_static_braces();
        let text = "([b - (a + 1)] * 7)";
        let result = matcher.parse(text);

        assert!(result.is_success());
        assert_eq!(
            matches_of(&result),
            vec![
                new_match("(", ")", "a + 1"),
                new_match("[", "]", "b - (a + 1)"),
                new_match("(", ")", "[b - (a + 1)] * 7"),
            ]
        );

        let spans: Vec<Span> = result.matches().iter().map(|m| m.span()).collect();
        assert_eq!(
            spans,
            vec![Span::new(6, 13), Span::new(1, 14), Span::new(0, 19)]
        );

        let tree = result.tree().unwrap();
        assert_eq!(tree.expr.text, text);
        assert_eq!(tree.expr.depth(), 3);
    }

    #[test]
    fn test_unmatched_mirror_braces() {
        // three openers and two closers
        let matcher = BraceMatcher::with_mirror_braces();
        let result = matcher.parse("<<<123>>");

        assert!(!result.is_success());
        assert!(result.matches().is_empty());
        assert!(matches!(
            result.error(),
            Some(BraceError::UnmatchedOpen { opening, closing, .. })
                if opening == "<" && closing == ">"
        ));
    }

    #[test]
    fn test_matched_mirror_braces() {
        let matcher = BraceMatcher::with_mirror_braces();

        let result = matcher.parse("<<<123>>>");
        assert_eq!(matches_of(&result), vec![new_match("<<<", ">>>", "123")]);

        let result = matcher.parse("<{ x + 1 }> * [y]");
        assert_eq!(
            matches_of(&result),
            vec![new_match("<{", "}>", "x + 1"), new_match("[", "]", "y")]
        );
    }

    #[test]
    fn test_static_table_rejects_unknown_braces() {
        let matcher = BraceMatcher::with_static_braces();
        assert!(!matcher.is_match("<a>"));
        assert!(matcher.is_match("(a)"));
    }

    #[test]
    fn test_custom_static_table() {
        let table = BraceTable::new_static([("<", ">"), ("<{", "}>"), ("begin", "end")]).unwrap();
        let options = ParseOptions::new("+-|", false);

        let result = parse_braced_subexpressions("begin <{a | b}> + <c> end", &table, &options);
        assert_eq!(
            matches_of(&result),
            vec![
                new_match("<{", "}>", "a | b"),
                new_match("<", ">", "c"),
                new_match("begin", "end", "<{a | b}> + <c>"),
            ]
        );
    }

    #[test]
    fn test_failure_drops_matches() {
        let matcher = BraceMatcher::with_static_braces();
        let result = matcher.parse("(a) + (b");

        assert!(matches!(result, ParseResult::Failure(_)));
        assert!(result.tree().is_none());
        assert!(result.matches().is_empty());
        assert!(result.into_result().is_err());
    }

    #[test]
    fn test_idempotence() {
        let matcher = BraceMatcher::with_mirror_braces();
        let text = "«a + ⟨1⟩» / (b)";

        let first = matcher.parse(text).into_result().unwrap();
        let second = matcher.parse(text).into_result().unwrap();
        assert_eq!(first, second);
    }

    fn arb_expression() -> impl Strategy<Value = String> {
        let leaf = prop_oneof!["[a-z]{1,3}", "[0-9]{1,3}"];
        leaf.prop_recursive(5, 48, 4, |inner| {
            prop_oneof![
                (inner.clone(), "[-+*/]", inner.clone())
                    .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
                (
                    inner,
                    prop::sample::select(vec![("(", ")"), ("[", "]"), ("{", "}")])
                )
                    .prop_map(|(e, (opening, closing))| format!("{}{}{}", opening, e, closing)),
            ]
        })
    }

    proptest! {
        #[test]
        fn balanced_braces_are_all_reported(text in arb_expression()) {
            let matcher = BraceMatcher::with_static_braces();
            let result = matcher.parse(&text);

            prop_assert!(result.is_success(), "failed to parse {}", text);

            // one match per opening brace
            let openings: Vec<usize> = text
                .char_indices()
                .filter(|(_, c)| matches!(c, '(' | '[' | '{'))
                .map(|(idx, _)| idx)
                .collect();
            let mut starts: Vec<usize> = result.matches().iter().map(|m| m.start()).collect();
            starts.sort_unstable();
            prop_assert_eq!(starts, openings);

            // the innermost pair is completed first
            let ends: Vec<usize> = result.matches().iter().map(|m| m.span().end).collect();
            let mut sorted_ends = ends.clone();
            sorted_ends.sort_unstable();
            prop_assert_eq!(ends, sorted_ends);

            // every pair of the final tree is reported, in the same order
            let tree_matches = result
                .tree()
                .map(|tree| tree.expr.braced_matches())
                .unwrap_or_default();
            let reported: Vec<_> = result.matches().iter().collect();
            prop_assert_eq!(tree_matches, reported);

            for m in result.matches() {
                prop_assert_eq!(
                    &text[m.span().range()],
                    format!("{}{}{}", m.opening.text, m.inner(), m.closing.text)
                );
            }
        }

        #[test]
        fn parsing_twice_gives_the_same_result(text in arb_expression()) {
            let matcher = BraceMatcher::with_static_braces();
            let first = matcher.parse(&text).into_result().ok();
            let second = matcher.parse(&text).into_result().ok();
            prop_assert_eq!(first, second);
        }
    }
}
