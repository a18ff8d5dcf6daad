use std::{
    error::Error,
    io::{self, BufRead},
    path::PathBuf,
};

use blossy::{
    compile_and_trace_in, evaluate_expression,
    interpreter::{domain::Domain, stepper::Stepper},
    tools::{
        count::{CharCountOptions, count_chars, count_lines},
        percentage::solve_percentage,
        random::random_numbers,
        standardize::standardize,
    },
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// A lil' bud that helps you with stuff (it's a utility CLI).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or
    /// `blossy=trace`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the value of an expression whose result is a number.
    ///
    /// Numbers are written as integers (123) or decimals (12.34). Available
    /// operations are grouping, unary + and -, and binary ^ * / + -.
    Calc {
        /// Expression to be calculated.
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Show a visualization using postfix notation and a stack.
        #[arg(short, long)]
        visualize:  bool,
    },
    /// Calculate the value of an expression whose result is a time.
    ///
    /// Times are written as 43:21 (43 minutes, 21 seconds) or 65:43:21 (65
    /// hours, 43 minutes, 21 seconds). Time + Time, Time - Time, Time * Number,
    /// Number * Time and Time / Number give a time.
    Calct {
        /// Expression to be calculated.
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Show a visualization using postfix notation and a stack.
        #[arg(short, long)]
        visualize:  bool,
    },
    /// Count the amount of characters in a text file.
    Countc {
        /// Relative path to the file.
        file:         PathBuf,
        /// Ignore unnecessary (repeated) whitespace.
        #[arg(long)]
        ignore_unnec: bool,
        /// Ignore all whitespace.
        #[arg(long)]
        ignore_ws:    bool,
        /// Print only the number.
        #[arg(long)]
        short:        bool,
    },
    /// Count the amount of lines in a source file.
    Countl {
        /// Relative path to the file.
        file:       PathBuf,
        /// Count blank lines too.
        #[arg(long)]
        keep_blank: bool,
        /// Print only the number.
        #[arg(long)]
        short:      bool,
    },
    /// Take two of the three percentage quantities and calculate the
    /// remaining one.
    Perc {
        #[arg(short, long, allow_negative_numbers = true)]
        whole: Option<f64>,
        #[arg(short, long, allow_negative_numbers = true)]
        part:  Option<f64>,
        #[arg(short, long, allow_negative_numbers = true)]
        ratio: Option<f64>,
        /// Print only the number.
        #[arg(long)]
        short: bool,
    },
    /// Generate random numbers between LOWER and UPPER (inclusive).
    #[command(name = "rand")]
    Random {
        #[arg(allow_negative_numbers = true)]
        lower:    i64,
        #[arg(allow_negative_numbers = true)]
        upper:    i64,
        /// Quantity of random numbers to generate.
        #[arg(short, long, default_value_t = 1)]
        quantity: usize,
    },
    /// Rename all files in DIRECTORY to '{PREFIX}-{ID}', in which the ID is
    /// calculated incrementally.
    Stddz {
        /// Prefix of the files.
        prefix:    String,
        /// Relative path to the directory.
        directory: PathBuf,
        /// Starting number for the IDs.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        start:     i64,
        /// Quantity of digits used to represent the ID.
        #[arg(short, long, default_value_t = 3)]
        digits:    usize,
    },
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Calc { expression,
                        visualize, } => calculate(&expression, Domain::Number, visualize)?,
        Command::Calct { expression,
                         visualize, } => calculate(&expression, Domain::Time, visualize)?,
        Command::Countc { file,
                          ignore_unnec,
                          ignore_ws,
                          short, } => {
            let options = CharCountOptions { ignore_unnecessary: ignore_unnec,
                                             ignore_whitespace:  ignore_ws, };
            let count = count_chars(&file, options)?;
            if short { println!("{count}") } else { println!("Character count: {count}") }
        },
        Command::Countl { file,
                          keep_blank,
                          short, } => {
            let count = count_lines(&file, !keep_blank)?;
            if short { println!("{count}") } else { println!("Line count: {count}") }
        },
        Command::Perc { whole,
                        part,
                        ratio,
                        short, } => {
            let solved = solve_percentage(whole, part, ratio)?;
            if short { println!("{:?}", solved.value()) } else { println!("{solved}") }
        },
        Command::Random { lower,
                          upper,
                          quantity, } => {
            let numbers = random_numbers(lower, upper, quantity, &mut rand::thread_rng())?;
            let line: Vec<_> = numbers.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        },
        Command::Stddz { prefix,
                         directory,
                         start,
                         digits, } => {
            let outcome = standardize(&directory, &prefix, start, digits, &mut rand::thread_rng())?;
            if outcome.readjusted {
                println!("Quantity of digits had to be readjusted.");
            }
        },
    }
    Ok(())
}

fn calculate(expression: &str, domain: Domain, visualize: bool) -> Result<(), Box<dyn Error>> {
    if visualize {
        return show_trace(compile_and_trace_in(expression, domain)?);
    }
    println!("{}", evaluate_expression(expression, domain)?);
    Ok(())
}

/// Prints one trace record at a time, waiting for Enter after each.
fn show_trace(stepper: Stepper) -> Result<(), Box<dyn Error>> {
    let width = crossterm::terminal::size().map_or(80, |(columns, _)| usize::from(columns));
    let mut stdin = io::stdin().lock();
    let mut line = String::new();

    for record in stepper {
        let record = record?;
        if let Some(operation) = &record.operation {
            println!("> {operation}");
        }
        if let (Some(stack), Some(input)) = (&record.stack, &record.input) {
            println!();
            println!("{}", pad_between(stack, input, width));
        }
        line.clear();
        stdin.read_line(&mut line)?;
    }
    Ok(())
}

/// Puts `left` and `right` on one line, pushing `right` to the edge of a
/// terminal `width` columns wide, or two spaces apart when they do not fit.
fn pad_between(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = match width.checked_sub(used) {
        Some(free) if free > 0 => free,
        _ => 2,
    };
    format!("{left}{}{right}", " ".repeat(padding))
}
