// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// the grammar:
//
// top    := ^ expr $
// expr   := term (operator term)*
// term   := braced | letters | digits
// braced := opening expr closing
//
// - `opening` is one of the opening delimiters offered by the brace table
//   at the current position, longest first.
// - `closing` is the literal returned by the brace table for the matched
//   opening delimiter.
// - `letters` and `digits` are greedy runs, shorter runs are tried when
//   the rest of the text fails to match.
//
// every rule takes a continuation, which is called with each candidate
// match of the rule (the most greedy one first) and reports whether the
// rest of the text matched. a rule succeeds as soon as a continuation
// succeeds, returning false from a continuation backtracks into the rule,
// so there is no explicit backtracking stack, and the nesting of braces
// lives in the call stack of `braced -> expr -> term -> braced`.

use tracing::trace;

use crate::{
    ast::{BracedMatch, Expr, Term},
    bracetable::BraceTable,
    collector::MatchCollector,
    error::BraceError,
    location::Location,
    options::ParseOptions,
    stack::ensure_sufficient_stack,
    token::{Span, Token, TokenKind},
};

#[derive(Debug, PartialEq, Clone)]
enum Expectation<'a> {
    Term,
    End,
    Closing { opening: Token<'a>, closing: String },
}

#[derive(Debug, PartialEq, Clone)]
struct Failure<'a> {
    position: usize,
    expectation: Expectation<'a>,
}

pub struct Grammar<'a, 't> {
    text: &'a str,
    table: &'t BraceTable,
    options: &'t ParseOptions,
    collector: MatchCollector<'a>,

    // the furthest position the matching failed at, for error reporting only
    furthest_failure: Option<Failure<'a>>,
}

/// The outcome of running the top rule once.
pub struct GrammarOutcome<'a> {
    pub expr: Result<Expr<'a>, BraceError>,
    pub collector: MatchCollector<'a>,
}

impl<'a, 't> Grammar<'a, 't> {
    pub fn new(text: &'a str, table: &'t BraceTable, options: &'t ParseOptions) -> Self {
        Self {
            text,
            table,
            options,
            collector: MatchCollector::new(),
            furthest_failure: None,
        }
    }

    /// Match the whole text as one expression.
    pub fn run(mut self) -> GrammarOutcome<'a> {
        let mut top: Option<Expr<'a>> = None;

        let matched = self.match_expr(0, &mut |grammar: &mut Self, expr: Expr<'a>| {
            let end = grammar.skip_whitespace(expr.span.end);
            if end == grammar.text.len() {
                top = Some(expr);
                true
            } else {
                grammar.fail(end, Expectation::End);
                false
            }
        });

        let expr = match top {
            Some(expr) if matched => Ok(expr),
            _ => Err(self.to_error()),
        };

        GrammarOutcome {
            expr,
            collector: self.collector,
        }
    }

    /// expr := term (operator term)*
    fn match_expr(
        &mut self,
        position: usize,
        k: &mut dyn FnMut(&mut Self, Expr<'a>) -> bool,
    ) -> bool {
        let start = self.skip_whitespace(position);
        let mut terms = vec![];
        let mut operators = vec![];
        self.match_expr_rest(start, &mut terms, &mut operators, k)
    }

    // `terms` and `operators` hold the expression matched so far, they are
    // restored to their previous content whenever this returns false.
    fn match_expr_rest(
        &mut self,
        position: usize,
        terms: &mut Vec<Term<'a>>,
        operators: &mut Vec<Token<'a>>,
        k: &mut dyn FnMut(&mut Self, Expr<'a>) -> bool,
    ) -> bool {
        self.match_term(position, &mut |grammar: &mut Self, term: Term<'a>| {
            let term_end = term.span().end;
            terms.push(term);

            // greedy, try to take one more operator and term first
            let after_term = grammar.skip_whitespace(term_end);
            if let Some(operator) = grammar.match_operator(after_term) {
                let next_position = grammar.skip_whitespace(operator.end());
                operators.push(operator);

                if ensure_sufficient_stack(|| {
                    grammar.match_expr_rest(next_position, terms, operators, k)
                }) {
                    return true;
                }

                operators.pop();
            }

            let expr = grammar.build_expr(terms, operators);
            if ensure_sufficient_stack(|| k(grammar, expr)) {
                return true;
            }

            terms.pop();
            false
        })
    }

    /// term := braced | letters | digits
    fn match_term(
        &mut self,
        position: usize,
        k: &mut dyn FnMut(&mut Self, Term<'a>) -> bool,
    ) -> bool {
        if self.match_braced(position, &mut |grammar: &mut Self, braced: BracedMatch<'a>| {
            k(grammar, Term::Braced(Box::new(braced)))
        }) {
            return true;
        }

        for end in self.run_ends(position, char::is_alphabetic) {
            let token = Token::from_source(TokenKind::Letters, self.text, position, end);
            if ensure_sufficient_stack(|| k(self, Term::Letters(token))) {
                return true;
            }
        }

        for end in self.run_ends(position, |c: char| c.is_ascii_digit()) {
            let token = Token::from_source(TokenKind::Digits, self.text, position, end);
            if ensure_sufficient_stack(|| k(self, Term::Digits(token))) {
                return true;
            }
        }

        self.fail(position, Expectation::Term);
        false
    }

    /// braced := opening expr closing
    fn match_braced(
        &mut self,
        position: usize,
        k: &mut dyn FnMut(&mut Self, BracedMatch<'a>) -> bool,
    ) -> bool {
        ensure_sufficient_stack(|| {
            let table = self.table;
            let text = self.text;

            for opening_end in table.openers_at(text, position, self.options) {
                let opening = Token::from_source(TokenKind::Open, text, position, opening_end);

                // the closer is resolved once per opening delimiter, and then
                // matched literally
                let closing_text = match table.closing_for(opening.text) {
                    Ok(closing_text) => closing_text,
                    Err(_) => continue,
                };

                trace!(
                    position,
                    opening = opening.text,
                    closing = &*closing_text,
                    "try braced"
                );

                let mut on_expr = |grammar: &mut Self, expr: Expr<'a>| {
                    let closing_start = grammar.skip_whitespace(expr.span.end);
                    if !grammar.text[closing_start..].starts_with(&*closing_text) {
                        grammar.fail(
                            closing_start,
                            Expectation::Closing {
                                opening: opening.clone(),
                                closing: closing_text.to_string(),
                            },
                        );
                        return false;
                    }

                    let closing = Token::from_source(
                        TokenKind::Close,
                        grammar.text,
                        closing_start,
                        closing_start + closing_text.len(),
                    );
                    let braced = BracedMatch::new(opening.clone(), closing, expr);

                    trace!(
                        start = braced.span().start,
                        end = braced.span().end,
                        inner = braced.inner(),
                        "braced matched"
                    );

                    // recorded even if the rest of the text fails later
                    grammar.collector.record(braced.clone());
                    ensure_sufficient_stack(|| k(grammar, braced))
                };

                if self.match_expr(opening_end, &mut on_expr) {
                    return true;
                }
            }

            false
        })
    }

    fn match_operator(&self, position: usize) -> Option<Token<'a>> {
        let c = self.text[position..].chars().next()?;
        if self.options.is_operator(c) {
            Some(Token::from_source(
                TokenKind::Operator,
                self.text,
                position,
                position + c.len_utf8(),
            ))
        } else {
            None
        }
    }

    /// The end positions of the run of chars satisfying `predicate` at
    /// `position`, the longest first.
    fn run_ends(&self, position: usize, predicate: impl Fn(char) -> bool) -> Vec<usize> {
        let mut ends: Vec<usize> = self.text[position..]
            .char_indices()
            .take_while(|(_, c)| predicate(*c))
            .map(|(idx, c)| position + idx + c.len_utf8())
            .collect();
        ends.reverse();
        ends
    }

    fn skip_whitespace(&self, position: usize) -> usize {
        if self.options.significant_whitespace {
            return position;
        }

        let rest = &self.text[position..];
        position + (rest.len() - rest.trim_start().len())
    }

    fn build_expr(&self, terms: &[Term<'a>], operators: &[Token<'a>]) -> Expr<'a> {
        // there is at least one term
        let start = terms.first().map_or(0, |term| term.span().start);
        let end = terms.last().map_or(start, |term| term.span().end);
        Expr {
            span: Span::new(start, end),
            text: &self.text[start..end],
            terms: terms.to_vec(),
            operators: operators.to_vec(),
        }
    }

    fn fail(&mut self, position: usize, expectation: Expectation<'a>) {
        let replace = match &self.furthest_failure {
            None => true,
            Some(last) if position > last.position => true,
            // a missing closing delimiter explains a failure better than
            // anything else at the same position
            Some(last) if position == last.position => {
                matches!(expectation, Expectation::Closing { .. })
                    && !matches!(last.expectation, Expectation::Closing { .. })
            }
            Some(_) => false,
        };

        if replace {
            self.furthest_failure = Some(Failure {
                position,
                expectation,
            });
        }
    }

    fn to_error(&self) -> BraceError {
        let Some(failure) = &self.furthest_failure else {
            return BraceError::ParseFailure {
                expected: describe(&Expectation::Term).to_owned(),
                location: Location::locate(self.text, 0),
            };
        };

        match &failure.expectation {
            Expectation::Closing { opening, closing } => BraceError::UnmatchedOpen {
                opening: opening.text.to_owned(),
                closing: closing.clone(),
                location: opening.location(self.text),
            },
            expectation => BraceError::ParseFailure {
                expected: describe(expectation).to_owned(),
                location: Location::locate(self.text, failure.position),
            },
        }
    }
}

fn describe(expectation: &Expectation) -> &'static str {
    match expectation {
        Expectation::Term => "letters, digits or an opening delimiter",
        Expectation::End => "an operator or the end of text",
        Expectation::Closing { .. } => "a closing delimiter",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Grammar;
    use crate::{
        ast::{Expr, Term},
        bracetable::BraceTable,
        error::BraceError,
        location::Location,
        options::ParseOptions,
        token::{Span, TokenKind},
    };

    fn run<'a>(
        text: &'a str,
        table: &BraceTable,
        options: &ParseOptions,
    ) -> (Result<Expr<'a>, BraceError>, Vec<(String, String, String)>) {
        let outcome = Grammar::new(text, table, options).run();
        let matches = outcome
            .collector
            .results()
            .iter()
            .map(|m| {
                (
                    m.opening.text.to_owned(),
                    m.closing.text.to_owned(),
                    m.inner().to_owned(),
                )
            })
            .collect();
        (outcome.expr, matches)
    }

    fn triple(opening: &str, closing: &str, inner: &str) -> (String, String, String) {
        (opening.to_owned(), closing.to_owned(), inner.to_owned())
    }

    #[test]
    fn test_terms_and_operators() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let (expr, matches) = run("ab + 12*c", &table, &options);
        let expr = expr.unwrap();

        assert_eq!(expr.text, "ab + 12*c");
        assert_eq!(expr.span, Span::new(0, 9));
        assert_eq!(expr.terms.len(), 3);
        assert!(matches!(&expr.terms[0], Term::Letters(t) if t.text == "ab"));
        assert!(matches!(&expr.terms[1], Term::Digits(t) if t.text == "12"));
        assert!(matches!(&expr.terms[2], Term::Letters(t) if t.text == "c"));

        let operators: Vec<&str> = expr.operators.iter().map(|t| t.text).collect();
        assert_eq!(operators, vec!["+", "*"]);
        assert!(expr
            .operators
            .iter()
            .all(|t| t.kind == TokenKind::Operator));

        assert!(matches.is_empty());
    }

    #[test]
    fn test_surrounding_whitespace() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let (expr, matches) = run("  ( a )  ", &table, &options);
        let expr = expr.unwrap();

        assert_eq!(expr.text, "( a )");
        assert_eq!(matches, vec![triple("(", ")", "a")]);
    }

    #[test]
    fn test_nested() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let (expr, matches) = run("{[(x)]}", &table, &options);

        assert_eq!(expr.unwrap().depth(), 3);
        assert_eq!(
            matches,
            vec![
                triple("(", ")", "x"),
                triple("[", "]", "(x)"),
                triple("{", "}", "[(x)]"),
            ]
        );
    }

    #[test]
    fn test_letters_backtracking() {
        // the greedy run "ab" leaves no room for the closer "b)"
        let table = BraceTable::new_static([("(", "b)")]).unwrap();
        let options = ParseOptions::default();

        let (expr, matches) = run("(ab)", &table, &options);

        assert!(expr.is_ok());
        assert_eq!(matches, vec![triple("(", "b)", "a")]);
    }

    #[test]
    fn test_digits_backtracking() {
        let table = BraceTable::new_static([("<", "9>")]).unwrap();
        let options = ParseOptions::default();

        let (expr, matches) = run("<1299>", &table, &options);

        assert!(expr.is_ok());
        assert_eq!(matches, vec![triple("<", "9>", "129")]);
    }

    #[test]
    fn test_longest_opening_first() {
        let table = BraceTable::new_static([("<", ">"), ("<{", "}>")]).unwrap();
        let options = ParseOptions::default();

        let (expr, matches) = run("<{a}>", &table, &options);
        assert!(expr.is_ok());
        assert_eq!(matches, vec![triple("<{", "}>", "a")]);

        // "<{" can not be closed, and "{" is not an opening delimiter
        let (expr, _) = run("<{a>", &table, &options);
        assert!(expr.is_err());
    }

    #[test]
    fn test_opening_backtracking() {
        // "((" is tried first and fails, then "(" nests another "("
        let table = BraceTable::mirror();
        let options = ParseOptions::default();

        let (expr, matches) = run("((a)+b)", &table, &options);

        assert!(expr.is_ok());
        assert_eq!(
            matches,
            vec![triple("(", ")", "a"), triple("(", ")", "(a)+b")]
        );
    }

    #[test]
    fn test_mirror() {
        let table = BraceTable::mirror();
        let options = ParseOptions::default();

        let (expr, matches) = run("<{1 + a}>", &table, &options);
        assert!(expr.is_ok());
        assert_eq!(matches, vec![triple("<{", "}>", "1 + a")]);

        let (expr, matches) = run("«x * ⟦y⟧»", &table, &options);
        assert!(expr.is_ok());
        assert_eq!(
            matches,
            vec![triple("⟦", "⟧", "y"), triple("«", "»", "x * ⟦y⟧")]
        );

        // no mirror glyph, the opener closes itself
        let (expr, matches) = run("|a|", &table, &options);
        assert!(expr.is_ok());
        assert_eq!(matches, vec![triple("|", "|", "a")]);
    }

    #[test]
    fn test_significant_whitespace() {
        let table = BraceTable::default_static();
        let options = ParseOptions::new("+-*/", true);

        let (expr, _) = run("(a+1)", &table, &options);
        assert!(expr.is_ok());

        let (expr, _) = run("(a + 1)", &table, &options);
        assert!(matches!(
            expr,
            Err(BraceError::UnmatchedOpen { .. }) | Err(BraceError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_unmatched_open() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let (expr, _) = run("a + (b * [c)", &table, &options);
        match expr {
            Err(BraceError::UnmatchedOpen {
                opening,
                closing,
                location,
            }) => {
                assert_eq!(opening, "[");
                assert_eq!(closing, "]");
                assert_eq!(location, Location::new_range(9, 0, 9, 1));
            }
            _ => panic!("expect an unmatched open error"),
        }
    }

    #[test]
    fn test_parse_failure() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let (expr, _) = run("a +", &table, &options);
        assert!(matches!(
            expr,
            Err(BraceError::ParseFailure { location, .. }) if location.index == 3
        ));

        let (expr, _) = run("a b", &table, &options);
        assert!(matches!(
            expr,
            Err(BraceError::ParseFailure { location, .. }) if location.index == 2
        ));

        let (expr, _) = run("", &table, &options);
        assert!(matches!(
            expr,
            Err(BraceError::ParseFailure { location, .. }) if location.index == 0
        ));

        // a closer without an opener
        let (expr, _) = run("a)", &table, &options);
        assert!(matches!(expr, Err(BraceError::ParseFailure { .. })));
    }

    #[test]
    fn test_deep_nesting() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let depth = 500;
        let text = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let (expr, matches) = run(&text, &table, &options);

        assert_eq!(expr.unwrap().depth(), depth);
        assert_eq!(matches.len(), depth);
        assert_eq!(matches[0], triple("(", ")", "x"));
    }

    #[test]
    fn test_long_flat_expression() {
        let table = BraceTable::default_static();
        let options = ParseOptions::default();

        let count = 20000;
        let text = format!("{}a", "a+".repeat(count));
        let (expr, matches) = run(&text, &table, &options);

        let expr = expr.unwrap();
        assert_eq!(expr.terms.len(), count + 1);
        assert_eq!(expr.operators.len(), count);
        assert!(matches.is_empty());

        // the same inside a brace pair
        let text = format!("({}a)", "a+".repeat(count));
        let (expr, matches) = run(&text, &table, &options);

        assert_eq!(expr.unwrap().depth(), 1);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].2.len(), count * 2 + 1);
    }

    #[test]
    fn test_abandoned_braced_match_is_kept() {
        // "<<" closes after "a" first, then the rest of the text fails, and
        // the text is matched again as "<" nesting "<a>". the first match
        // recorded at offset 0 wins.
        let table = BraceTable::new_static([("<", ">"), ("<<", ">")]).unwrap();
        let options = ParseOptions::default();

        let (expr, matches) = run("<<a>>", &table, &options);
        let expr = expr.unwrap();

        assert_eq!(expr.text, "<<a>>");
        assert!(matches!(&expr.terms[0], Term::Braced(b) if b.opening.text == "<"));
        assert_eq!(
            matches,
            vec![triple("<<", ">", "a"), triple("<", ">", "a")]
        );
    }
}
