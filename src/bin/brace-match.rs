// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use brace_match::{
    errorprinter::print_error, printer, BraceError, BraceMatcher, BraceTable, GrammarConfig,
    ParseOptions, ParseResult,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "brace-match")]
#[command(about = "Match nested braced subexpressions and report each brace pair")]
struct Args {
    /// The texts to parse, one line of stdin per text when omitted
    texts: Vec<String>,

    /// Guess the closing delimiters by mirroring the opening ones
    #[arg(long)]
    mirror: bool,

    /// The infix operator chars
    #[arg(long)]
    operators: Option<String>,

    /// Do not skip whitespace between tokens
    #[arg(long)]
    significant_whitespace: bool,

    /// A TOML file with the grammar settings, flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Report)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `Braces: ( * ) ||| Subexpr: ...` lines, or `FAILED`
    Report,
    /// The indented parse tree
    Tree,
    /// The parse tree as JSON
    Json,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

// enabled by `RUST_LOG`, e.g. `RUST_LOG=brace_match=trace`
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn build_matcher(args: &Args) -> Result<BraceMatcher, BraceError> {
    let config = match &args.config {
        Some(path) => GrammarConfig::from_file(path)?,
        None => GrammarConfig::default(),
    };

    let table = if args.mirror {
        BraceTable::mirror()
    } else {
        config.brace_table()?
    };

    let mut options: ParseOptions = config.parse_options();
    if let Some(operators) = &args.operators {
        options.operators = operators.chars().collect();
    }
    if args.significant_whitespace {
        options.significant_whitespace = true;
    }

    Ok(BraceMatcher::new(table, options))
}

/// Returns whether every text was parsed.
fn run(args: &Args) -> Result<bool, BraceError> {
    let matcher = build_matcher(args)?;

    let texts: Vec<String> = if args.texts.is_empty() {
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        args.texts.clone()
    };

    let mut all_success = true;
    for text in &texts {
        let result = matcher.parse(text);
        all_success &= result.is_success();
        print_result(text, &result, args.format)?;
    }

    Ok(all_success)
}

fn print_result(text: &str, result: &ParseResult, format: Format) -> Result<(), BraceError> {
    match format {
        Format::Report => {
            let report = printer::report(result);
            if !report.is_empty() {
                println!("{}", report);
            }
        }
        Format::Tree => match result {
            ParseResult::Success(tree) => print!("{}", printer::tree(tree)),
            ParseResult::Failure(e) => println!("{}", print_error(text, e)),
        },
        Format::Json => {
            let s = match result {
                ParseResult::Success(tree) => serde_json::to_string_pretty(tree),
                ParseResult::Failure(e) => serde_json::to_string_pretty(&serde_json::json!({
                    "error": e.to_string(),
                    "location": e.location(),
                })),
            }?;
            println!("{}", s);
        }
    }

    Ok(())
}
