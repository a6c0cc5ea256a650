// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use brace_match::{printer, BraceMatcher};

pub fn main() {
    let matcher = BraceMatcher::with_static_braces();

    for text in ["([b - (a + 1)] * 7)", "{x} + [y * (z)]", "(a + 1", "<a>"] {
        println!("{}", text);

        let result = matcher.parse(text);
        println!("{}", printer::report(&result));
        println!();
    }
}
