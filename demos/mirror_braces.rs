// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use brace_match::{errorprinter::print_error, printer, unicode_mirror, BraceMatcher};

pub fn main() {
    // the closer is guessed from the opener
    for opening in ["(", "<{", "«⟨", "/*"] {
        println!("{} -> {}", opening, unicode_mirror(opening));
    }
    println!();

    let matcher = BraceMatcher::with_mirror_braces();

    for text in ["<{ x + 1 }> * [y]", "<<<123>>>", "<<<123>>", "«a / ⟦b⟧»"] {
        println!("{}", text);

        let result = matcher.parse(text);
        match result.error() {
            Some(e) => println!("{}", print_error(text, e)),
            None => println!("{}", printer::report(&result)),
        }
        println!();
    }
}
