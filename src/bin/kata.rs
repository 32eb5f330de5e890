use std::{
    io::{self, Read},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kata::{KataError, Repl, calculator, fizzbuzz, repl::decode_escapes};

#[derive(Parser)]
#[command(author, version, about = "FizzBuzz and string calculator kata")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the FizzBuzz labels for 1..=N, one per line
    Fizzbuzz { n: usize },
    /// Sum delimited numbers; reads stdin when INPUT is omitted
    Add {
        /// Numbers separated by commas or newlines, or `//<delim>\n` followed
        /// by numbers separated by <delim>. `\n` is accepted as an escape.
        input: Option<String>,
    },
    /// Start an interactive shell
    Repl,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args.command.unwrap_or(Command::Repl)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), KataError> {
    match command {
        Command::Fizzbuzz { n } => {
            for label in fizzbuzz::sequence(n) {
                println!("{label}");
            }
        }
        Command::Add { input } => {
            let input = match input {
                Some(arg) => decode_escapes(&arg),
                None => read_stdin()?,
            };
            println!("{}", calculator::add(&input)?);
        }
        Command::Repl => Repl::new().run()?,
    }
    Ok(())
}

fn read_stdin() -> Result<String, KataError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
