//! String calculator: sums delimited integers with an optional custom
//! delimiter header of the form `//<delim>\n`.

use crate::diagnostics::InvalidInputError;

const HEADER_PREFIX: &str = "//";
const MAX_SUMMED: i64 = 1000;

/// Separator used to split the content into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma or newline.
    Default,
    Custom(String),
}

/// Splits an input into its active delimiter and the content to parse.
///
/// A header without a terminating newline consumes the rest of the input as
/// the delimiter, leaving nothing to parse. An empty custom delimiter splits
/// the content into single characters.
pub fn parse_header(input: &str) -> (Delimiter, &str) {
    let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
        return (Delimiter::Default, input);
    };
    let (delimiter, content) = match rest.split_once('\n') {
        Some((delimiter, content)) => (delimiter, content),
        None => (rest, ""),
    };
    tracing::debug!(delimiter, "custom delimiter header");
    (Delimiter::Custom(delimiter.to_string()), content)
}

/// Yields the trimmed tokens of `content` split on `delimiter`.
pub fn tokens<'a>(
    content: &'a str,
    delimiter: &'a Delimiter,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match delimiter {
        Delimiter::Default => Box::new(content.split([',', '\n']).map(str::trim)),
        Delimiter::Custom(sep) => Box::new(content.split(sep.as_str()).map(str::trim)),
    }
}

/// Reads the leading integer of `token`: an optional sign followed by ASCII
/// digits. Trailing text is ignored. Magnitudes beyond `i64` saturate.
pub fn parse_token(token: &str) -> Option<i64> {
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Every numeric token of `input`, in order. Non-numeric tokens are dropped.
pub fn parse_numbers(input: &str) -> Vec<i64> {
    let (delimiter, content) = parse_header(input);
    tokens(content, &delimiter).filter_map(parse_token).collect()
}

/// Sums the numbers encoded in `input`.
///
/// Fails if any numeric token is negative; the whole input is inspected
/// before summing. Values above 1000 are ignored.
pub fn add(input: &str) -> Result<i64, InvalidInputError> {
    if input.is_empty() {
        return Ok(0);
    }

    let numbers = parse_numbers(input);
    tracing::trace!(count = numbers.len(), "parsed numeric tokens");

    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
    if !negatives.is_empty() {
        tracing::debug!(?negatives, "rejecting negative input");
        return Err(InvalidInputError::new(negatives));
    }

    Ok(numbers.into_iter().filter(|n| *n <= MAX_SUMMED).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header() {
        assert_eq!(parse_header("1,2"), (Delimiter::Default, "1,2"));
    }

    #[test]
    fn custom_header() {
        assert_eq!(
            parse_header("//;\n1;2"),
            (Delimiter::Custom(";".to_string()), "1;2")
        );
        assert_eq!(
            parse_header("//***\n1***2"),
            (Delimiter::Custom("***".to_string()), "1***2")
        );
    }

    #[test]
    fn header_without_newline_has_no_content() {
        assert_eq!(parse_header("//;"), (Delimiter::Custom(";".to_string()), ""));
        assert_eq!(add("//;"), Ok(0));
    }

    #[test]
    fn empty_custom_delimiter_splits_characters() {
        assert_eq!(
            parse_header("//\n123"),
            (Delimiter::Custom(String::new()), "123")
        );
        assert_eq!(add("//\n123"), Ok(6));
        assert_eq!(add("//\n1,2\n3"), Ok(6));
    }

    #[test]
    fn tokens_are_trimmed() {
        let tokens: Vec<_> = tokens(" 1 , 2\n 3", &Delimiter::Default).collect();
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn custom_delimiter_does_not_split_on_commas() {
        assert_eq!(parse_numbers("//;\n1,2;3"), vec![1, 3]);
    }

    #[test]
    fn drops_empty_and_non_numeric_tokens() {
        assert_eq!(parse_numbers("1,,2,x7,-,+"), vec![1, 2]);
    }

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_token("12abc"), Some(12));
        assert_eq!(parse_token("1.5"), Some(1));
        assert_eq!(parse_token("+8"), Some(8));
        assert_eq!(parse_token("-2abc"), Some(-2));
        assert_eq!(parse_token("abc12"), None);
        assert_eq!(parse_token(""), None);
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(parse_token("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_token("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(add("1,99999999999999999999"), Ok(1));
    }

    #[test]
    fn leading_integer_counts_towards_sum() {
        assert_eq!(add("12abc,1"), Ok(13));
        assert_eq!(add("1.5,2"), Ok(3));
    }

    #[test]
    fn negative_prefixed_token_is_rejected() {
        let err = add("1,-2abc").unwrap_err();
        assert_eq!(err.negatives, vec![-2]);
    }

    #[test]
    fn negatives_checked_before_filtering_large_values() {
        let err = add("2000,-1").unwrap_err();
        assert_eq!(err.negatives, vec![-1]);
    }
}
