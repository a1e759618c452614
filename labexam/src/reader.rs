//! Whitespace-separated token input, consumed in the fixed positional order
//! each program expects.

use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("malformed input at token {position}: expected {expected}, found `{token}`")]
    Malformed {
        expected: &'static str,
        token: String,
        position: usize,
    },
    #[error("{what} of {len} exceeds the supported maximum of {max}")]
    CapacityExceeded {
        what: &'static str,
        len: usize,
        max: usize,
    },
}

pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    pub fn next_token(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        let token = self
            .tokens
            .next()
            .ok_or(InputError::UnexpectedEof { expected })?;
        self.position += 1;
        Ok(token)
    }

    fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| InputError::Malformed {
            expected,
            token: token.to_string(),
            position: self.position,
        })
    }

    pub fn next_i64(&mut self, expected: &'static str) -> Result<i64, InputError> {
        self.parse(expected)
    }

    /// Non-negative integer; a leading minus is malformed.
    pub fn next_usize(&mut self, expected: &'static str) -> Result<usize, InputError> {
        self.parse(expected)
    }

    pub fn next_u64(&mut self, expected: &'static str) -> Result<u64, InputError> {
        self.parse(expected)
    }

    /// Reads a count and rejects it when it exceeds `max`.
    pub fn next_len(&mut self, what: &'static str, max: usize) -> Result<usize, InputError> {
        let len = self.next_usize(what)?;
        check_capacity(what, len, max)?;
        Ok(len)
    }

    pub fn next_word(&mut self, what: &'static str, max_len: usize) -> Result<&'a str, InputError> {
        let word = self.next_token(what)?;
        check_capacity(what, word.len(), max_len)?;
        Ok(word)
    }

    pub fn i64s(&mut self, n: usize, expected: &'static str) -> Result<Vec<i64>, InputError> {
        (0..n).map(|_| self.next_i64(expected)).collect()
    }

    pub fn usizes(&mut self, n: usize, expected: &'static str) -> Result<Vec<usize>, InputError> {
        (0..n).map(|_| self.next_usize(expected)).collect()
    }

    pub fn u64s(&mut self, n: usize, expected: &'static str) -> Result<Vec<u64>, InputError> {
        (0..n).map(|_| self.next_u64(expected)).collect()
    }

    /// Parses every token left in the input.
    pub fn rest_usizes(&mut self, expected: &'static str) -> Result<Vec<usize>, InputError> {
        let mut out = Vec::new();
        for token in self.tokens.by_ref() {
            self.position += 1;
            out.push(token.parse().map_err(|_| InputError::Malformed {
                expected,
                token: token.to_string(),
                position: self.position,
            })?);
        }
        Ok(out)
    }
}

pub fn check_capacity(what: &'static str, len: usize, max: usize) -> Result<(), InputError> {
    if len > max {
        Err(InputError::CapacityExceeded { what, len, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_across_lines_and_spaces() {
        let mut r = TokenReader::new("3\n 5  -2\t7\n");
        assert_eq!(r.next_len("n", 10), Ok(3));
        assert_eq!(r.i64s(3, "value"), Ok(vec![5, -2, 7]));
        assert_eq!(
            r.next_i64("target"),
            Err(InputError::UnexpectedEof { expected: "target" })
        );
    }

    #[test]
    fn malformed_token_reports_position() {
        let mut r = TokenReader::new("2 1 x");
        r.next_usize("n").unwrap();
        r.next_i64("value").unwrap();
        assert_eq!(
            r.next_i64("value"),
            Err(InputError::Malformed {
                expected: "value",
                token: "x".into(),
                position: 3
            })
        );
    }

    #[test]
    fn negative_count_is_malformed() {
        let mut r = TokenReader::new("-1");
        assert!(matches!(r.next_len("n", 10), Err(InputError::Malformed { .. })));
    }

    #[test]
    fn count_over_capacity_is_rejected() {
        let mut r = TokenReader::new("101");
        assert_eq!(
            r.next_len("n", 100),
            Err(InputError::CapacityExceeded { what: "n", len: 101, max: 100 })
        );
    }

    #[test]
    fn long_word_is_rejected() {
        let mut r = TokenReader::new("abcdef");
        assert!(matches!(
            r.next_word("first string", 5),
            Err(InputError::CapacityExceeded { len: 6, .. })
        ));
    }

    #[test]
    fn rest_collects_trailing_tokens() {
        let mut r = TokenReader::new("1 2 3");
        r.next_usize("n").unwrap();
        assert_eq!(r.rest_usizes("rank"), Ok(vec![2, 3]));
        assert_eq!(r.rest_usizes("rank"), Ok(vec![]));
    }
}
