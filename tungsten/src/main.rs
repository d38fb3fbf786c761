mod error;
mod report;

use clap::Parser;
use error::Error;
use report::Report;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tungsten_compute::{
    fmt::dot,
    symbolic::{derivative, expand, simplify_rounds},
};
use tungsten_parser::{parse_expression, Node, VariableTable};

/// Differentiates an expression and expands it into a Taylor series.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The expression to process. If omitted, it is read from stdin when piped, or prompted for
    /// interactively.
    expression: Option<String>,

    /// Number of terms of the Taylor series.
    #[arg(short = 'n', long, default_value_t = 5)]
    terms: usize,

    /// Point around which the Taylor series is expanded.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    point: f64,

    /// Variable to differentiate with respect to.
    #[arg(short, long, default_value = "x")]
    var: String,

    /// Write a LaTeX report to this file.
    #[arg(long, value_name = "FILE")]
    tex: Option<PathBuf>,

    /// Write a Graphviz dump of the parsed expression to this file.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Only show the payload of each node in the Graphviz dump.
    #[arg(long)]
    minified: bool,
}

/// Parses the input, reporting the error to stderr if it is malformed.
fn parse(input: &str) -> Option<(Node, VariableTable)> {
    let mut vars = VariableTable::new();
    match parse_expression(input, &mut vars) {
        Ok(tree) => Some((tree, vars)),
        Err(err) => {
            err.report_to_stderr("input", input);
            None
        },
    }
}

/// Prompts for expressions until one parses. Returns [`None`] if the user exits the prompt.
fn prompt() -> Result<Option<(String, Node, VariableTable)>, ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(None),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        if let Some((tree, vars)) = parse(&input) {
            return Ok(Some((input, tree, vars)));
        }
    }
}

/// Differentiates and expands the parsed expression, printing the results and writing the
/// requested output files.
fn process(args: &Args, input: &Node, vars: &mut VariableTable) -> Result<(), Error> {
    let var = match vars.find(&args.var) {
        Some(var) => var,
        None if vars.is_empty() => vars.insert(&args.var),
        None => vars.resolve(&args.var)?,
    };
    debug!(var = %args.var, index = var, "differentiating");

    let (simplified, rounds) = simplify_rounds(input);
    let (derivative, derivative_rounds) = simplify_rounds(&derivative(&simplified, var)?);
    let expansion = expand(&simplified, var, args.point, args.terms, vars)?;
    let vars = &*vars;

    let name = &args.var;
    println!("f({}) = {}", name, input.display(vars));
    if !rounds.is_empty() {
        println!("      = {}", simplified.display(vars));
    }
    println!("f'({}) = {}", name, derivative.display(vars));
    println!(
        "f({}) ≈ {}    ({} terms at {} = {})",
        name,
        expansion.polynomial.display(vars),
        args.terms,
        name,
        args.point,
    );

    if let Some(path) = &args.tex {
        let report = Report {
            vars,
            var: name,
            input,
            rounds: &rounds,
            derivative_rounds: &derivative_rounds,
            derivative: &derivative,
            point: args.point,
            expansion: &expansion,
        };
        fs::write(path, report.to_string()).map_err(|err| Error::Write(path.clone(), err))?;
    }

    if let Some(path) = &args.dot {
        fs::write(path, dot::dump(input, vars, args.minified))
            .map_err(|err| Error::Write(path.clone(), err))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let (input, tree, mut vars) = if let Some(input) = args.expression.clone() {
        // expression given as an argument
        let Some((tree, vars)) = parse(&input) else {
            return ExitCode::FAILURE;
        };
        (input, tree, vars)
    } else if !io::stdin().is_terminal() {
        // read the expression from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            Error::from(err).report_to_stderr(&input);
            return ExitCode::FAILURE;
        }

        let input = input.trim().to_string();
        let Some((tree, vars)) = parse(&input) else {
            return ExitCode::FAILURE;
        };
        (input, tree, vars)
    } else {
        // prompt until a well-formed expression is entered
        match prompt() {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        }
    };

    match process(&args, &tree, &mut vars) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(&input);
            ExitCode::FAILURE
        },
    }
}
