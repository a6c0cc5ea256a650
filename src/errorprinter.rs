// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{error::BraceError, location::Location};

/// Render `error` with the line of `text` it refers to, and a caret
/// under the location, e.g.
///
/// ```text
/// Unmatched opening delimiter "[" at 1:10, expect "]".
/// a + (b * [c)
///          ^
/// ```
pub fn print_error(text: &str, error: &BraceError) -> String {
    match error.location() {
        Some(location) => format!("{}\n{}", error, print_source_and_caret(text, location)),
        None => error.to_string(),
    }
}

fn print_source_and_caret(text: &str, location: &Location) -> String {
    let line = text.split('\n').nth(location.line).unwrap_or("");
    let line = line.strip_suffix('\r').unwrap_or(line);

    // the caret spans the chars of the range, at least one
    let width = text
        .get(location.index..location.index + location.length)
        .map_or(1, |s| s.chars().count().max(1));

    format!(
        "{}\n{}{}",
        line,
        " ".repeat(location.column),
        "^".repeat(width)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use super::print_error;
    use crate::{error::BraceError, process::BraceMatcher};

    #[test]
    fn test_print_unmatched_open() {
        let text = "a + (b * [c)";
        let matcher = BraceMatcher::with_static_braces();
        let result = matcher.parse(text);

        assert_str_eq!(
            print_error(text, result.error().unwrap()),
            "\
Unmatched opening delimiter \"[\" at 1:10, expect \"]\".
a + (b * [c)
         ^"
        );
    }

    #[test]
    fn test_print_parse_failure_on_second_line() {
        let text = "x +\n  * y";
        let matcher = BraceMatcher::with_static_braces();
        let result = matcher.parse(text);

        assert_str_eq!(
            print_error(text, result.error().unwrap()),
            "\
Parse failed at 2:3, expect letters, digits or an opening delimiter.
  * y
  ^"
        );
    }

    #[test]
    fn test_print_without_location() {
        let error = BraceError::NotFound {
            opening: "<".to_owned(),
        };
        assert_str_eq!(
            print_error("", &error),
            "No closing delimiter registered for \"<\"."
        );
    }
}
