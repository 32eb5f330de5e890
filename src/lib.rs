//! FizzBuzz and string calculator kata, with a small CLI and interactive
//! shell on top. Design notes live in `DESIGN.md`.

pub mod calculator;
pub mod diagnostics;
pub mod fizzbuzz;
pub mod repl;

pub use calculator::{Delimiter, add};
pub use diagnostics::{InvalidInputError, KataError};
pub use fizzbuzz::{Label, label_for, labels, sequence};
pub use repl::Repl;
