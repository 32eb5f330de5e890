use std::fmt;

/// The label emitted for one position of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(usize),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fizz => f.write_str("Fizz"),
            Label::Buzz => f.write_str("Buzz"),
            Label::FizzBuzz => f.write_str("FizzBuzz"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

pub fn label_for(i: usize) -> Label {
    if i % 15 == 0 {
        Label::FizzBuzz
    } else if i % 3 == 0 {
        Label::Fizz
    } else if i % 5 == 0 {
        Label::Buzz
    } else {
        Label::Number(i)
    }
}

/// Lazily yields the labels for `1..=n`.
pub fn sequence(n: usize) -> impl Iterator<Item = Label> {
    (1..=n).map(label_for)
}

/// Returns exactly `n` labels rendered as strings, in ascending order.
pub fn labels(n: usize) -> Vec<String> {
    tracing::trace!(bound = n, "labelling sequence");
    sequence(n).map(|label| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_divisors() {
        assert_eq!(label_for(1), Label::Number(1));
        assert_eq!(label_for(3), Label::Fizz);
        assert_eq!(label_for(5), Label::Buzz);
        assert_eq!(label_for(15), Label::FizzBuzz);
        assert_eq!(label_for(30), Label::FizzBuzz);
    }

    #[test]
    fn zero_is_empty() {
        assert!(labels(0).is_empty());
        assert_eq!(sequence(0).count(), 0);
    }

    #[test]
    fn renders_labels() {
        assert_eq!(Label::Number(14).to_string(), "14");
        assert_eq!(Label::FizzBuzz.to_string(), "FizzBuzz");
    }
}
