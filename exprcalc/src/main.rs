use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use embedded_io_adapters::std::FromStd;
use exprcalc::{evaluate_str, parse_expression, CalcError, Options, Tokenizer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "exprcalc")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Expressions to evaluate (one per line from stdin if none are given)
    expressions: Vec<String>,

    /// Evaluate the whole file as a single expression
    #[arg(short, long, conflicts_with = "expressions")]
    input: Option<String>,

    /// Maximum nesting of parentheses and unary signs
    #[arg(long, default_value_t = Options::default().max_depth)]
    max_depth: usize,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("EXPRCALC_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn report(source: &str, result: Result<i64, CalcError>) -> bool {
    match result {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(CalcError::Parse(err)) => {
            eprintln!("{source}: parse error: {err}");
            false
        }
        Err(CalcError::Eval(err)) => {
            eprintln!("{source}: evaluation error: {err}");
            false
        }
    }
}

fn evaluate_file(path: &str, options: &Options) -> io::Result<Result<i64, CalcError>> {
    let file = std::fs::File::open(path)?;
    let mut reader = FromStd::new(file);
    let mut tokenizer = Tokenizer::new(&mut reader);
    Ok(parse_expression(&mut tokenizer, options)
        .map_err(CalcError::from)
        .and_then(|expr| expr.evaluate().map_err(CalcError::from)))
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let options = Options {
        max_depth: args.max_depth,
    };

    let mut all_ok = true;
    if let Some(path) = &args.input {
        match evaluate_file(path, &options) {
            Ok(result) => all_ok = report(path, result),
            Err(err) => {
                eprintln!("{path}: {err}");
                all_ok = false;
            }
        }
    } else if args.expressions.is_empty() {
        for (number, line) in io::stdin().lock().lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("stdin: {err}");
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            tracing::trace!(line = number + 1, "evaluating");
            let source = format!("line {}", number + 1);
            all_ok &= report(&source, evaluate_str(&line, &options));
        }
    } else {
        for expression in &args.expressions {
            all_ok &= report(expression, evaluate_str(expression, &options));
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
