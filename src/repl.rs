use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    calculator,
    diagnostics::{KataError, Result},
    fizzbuzz,
};

const PROMPT: &str = ">> ";

const HELP: &str = "\
commands:
  fizzbuzz <n>    print the labels for 1..=n
  add <input>     sum delimited numbers (write newlines as \\n)
  :help, :h       show this message
  :quit, :q       leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    FizzBuzz(usize),
    Add(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line of shell input into a command.
///
/// The argument of `add` is taken verbatim after the first space, with `\n`
/// escapes decoded. An empty `add` sums the empty string.
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        return match cmd {
            "q" | "quit" | "exit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        };
    }

    let (head, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    match head {
        "fizzbuzz" => match rest.trim().parse() {
            Ok(n) => ReplCommand::FizzBuzz(n),
            Err(_) => ReplCommand::Unknown(trimmed.to_string()),
        },
        "add" => ReplCommand::Add(decode_escapes(rest)),
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

/// Replaces the two-character sequence `\n` with a newline, and `\\` with a
/// single backslash. Any other escape is left untouched.
pub fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            _ => out.push('\\'),
        }
    }
    out
}

#[derive(Default)]
pub struct Repl;

impl Repl {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor =
            DefaultEditor::new().map_err(|err| KataError::from(std::io::Error::other(err)))?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let command = parse_repl_input(&line);
                    if !matches!(command, ReplCommand::Empty) {
                        editor.add_history_entry(line.trim()).ok();
                    }
                    match command {
                        ReplCommand::Quit => break,
                        ReplCommand::Empty => continue,
                        ReplCommand::Help => println!("{HELP}"),
                        ReplCommand::FizzBuzz(n) => {
                            for label in fizzbuzz::sequence(n) {
                                println!("{label}");
                            }
                        }
                        ReplCommand::Add(input) => match calculator::add(&input) {
                            Ok(sum) => println!("{sum}"),
                            Err(err) => eprintln!("error: {err}"),
                        },
                        ReplCommand::Unknown(text) => {
                            eprintln!("unknown command `{text}` (try :help)");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(KataError::from(std::io::Error::other(err))),
            }
        }
        Ok(())
    }
}
