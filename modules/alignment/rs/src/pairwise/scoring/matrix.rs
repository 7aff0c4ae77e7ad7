use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;

use super::symbols::{self, Scorer};
use crate::pairwise::scoring::Score;
use crate::{Error, GAP};

/// Symmetric substitution matrix (BLOSUM, PAM, ...) over a declared alphabet.
///
/// The expected text format is a whitespace-delimited square table:
/// - lines starting with `#` and blank lines are ignored;
/// - the first line declares the alphabet, one single-character symbol per column;
/// - each following row starts with its symbol (in header order) followed by the scores.
///
/// ```text
/// #  Comment
///    A  R  N
/// A  4 -1 -2
/// R -1  5  0
/// N -2  0  6
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct SubstitutionMatrix<S: Score = f64> {
    alphabet: Vec<u8>,
    // Position of each byte in the alphabet
    index: [Option<u8>; 256],
    scores: Vec<S>,
}

impl<S: Score> SubstitutionMatrix<S> {
    /// Build a matrix from an alphabet and a row-major table of scores.
    pub fn new(alphabet: Vec<u8>, scores: Vec<S>) -> Result<Self, Error> {
        let index = Self::index(&alphabet)?;
        let k = alphabet.len();
        if scores.len() != k * k {
            return Err(Error::format(format!(
                "expected {} scores for an alphabet of {k} symbols, got {}",
                k * k,
                scores.len()
            )));
        }
        if let Some(score) = scores.iter().find(|x| !x.is_finite()) {
            return Err(Error::format(format!("score {score} is not a finite number")));
        }

        for (row, col) in (0..k).tuple_combinations() {
            if scores[row * k + col] != scores[col * k + row] {
                return Err(Error::format(format!(
                    "the table is not symmetric: ({}, {}) = {}, but ({}, {}) = {}",
                    alphabet[row] as char,
                    alphabet[col] as char,
                    scores[row * k + col],
                    alphabet[col] as char,
                    alphabet[row] as char,
                    scores[col * k + row]
                )));
            }
        }

        Ok(Self {
            alphabet,
            index,
            scores,
        })
    }

    fn index(alphabet: &[u8]) -> Result<[Option<u8>; 256], Error> {
        if alphabet.is_empty() {
            return Err(Error::format("the header doesn't declare any symbols"));
        }
        if alphabet.len() > u8::MAX as usize {
            return Err(Error::format("the alphabet is too large"));
        }

        let mut index = [None; 256];
        for (ind, &symbol) in alphabet.iter().enumerate() {
            if symbol == GAP {
                return Err(Error::format(format!(
                    "gap marker '{}' can't be a part of the alphabet",
                    GAP as char
                )));
            }
            if !symbol.is_ascii_graphic() {
                return Err(Error::format(format!(
                    "symbol {:?} is not a printable ASCII character",
                    symbol as char
                )));
            }
            if index[symbol as usize].replace(ind as u8).is_some() {
                return Err(Error::format(format!(
                    "symbol '{}' is declared twice",
                    symbol as char
                )));
            }
        }
        Ok(index)
    }

    /// Declared symbols in the order of the table columns.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    /// Score of substituting `a` with `b`.
    pub fn score(&self, a: u8, b: u8) -> Result<S, Error> {
        let row = self.index[a as usize].ok_or_else(|| symbols::unknown(a))?;
        let col = self.index[b as usize].ok_or_else(|| symbols::unknown(b))?;
        Ok(self.scores[row as usize * self.alphabet.len() + col as usize])
    }
}

impl<S: Score + FromStr> SubstitutionMatrix<S> {
    /// Parse a substitution matrix table from the given reader.
    pub fn parse(reader: impl BufRead) -> Result<Self, Error> {
        let mut header: Option<Vec<u8>> = None;
        let mut scores = Vec::new();
        let mut rows = 0;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| Error::format(format!("failed to read: {err}")))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens = line.split_whitespace().collect_vec();

            let Some(alphabet) = header.as_ref() else {
                header = Some(Self::parse_header(&tokens, lineno)?);
                continue;
            };

            if rows == alphabet.len() {
                return Err(Error::format(format!(
                    "line {}: unexpected row, all {} rows were already read",
                    lineno + 1,
                    alphabet.len()
                )));
            }
            let values = if tokens.len() == alphabet.len() + 1 {
                let expected = alphabet[rows] as char;
                if tokens[0].len() != 1 || tokens[0].as_bytes()[0] != alphabet[rows] {
                    return Err(Error::format(format!(
                        "line {}: expected row '{expected}', got '{}'",
                        lineno + 1,
                        tokens[0]
                    )));
                }
                &tokens[1..]
            } else if tokens.len() == alphabet.len() {
                &tokens[..]
            } else {
                return Err(Error::format(format!(
                    "line {}: expected {} scores, got {} columns",
                    lineno + 1,
                    alphabet.len(),
                    tokens.len()
                )));
            };

            for token in values {
                let value = token.parse::<S>().map_err(|_| {
                    Error::format(format!("line {}: '{token}' is not a number", lineno + 1))
                })?;
                scores.push(value);
            }
            rows += 1;
        }

        let alphabet = header.ok_or_else(|| Error::format("the input is empty"))?;
        if rows != alphabet.len() {
            return Err(Error::format(format!(
                "expected {} rows, got {rows}",
                alphabet.len()
            )));
        }
        Self::new(alphabet, scores)
    }

    fn parse_header(tokens: &[&str], lineno: usize) -> Result<Vec<u8>, Error> {
        tokens
            .iter()
            .map(|token| match token.as_bytes() {
                [symbol] => Ok(*symbol),
                _ => Err(Error::format(format!(
                    "line {}: header symbols must be single characters, got '{token}'",
                    lineno + 1
                ))),
            })
            .collect()
    }
}

impl<S: Score + FromStr> FromStr for SubstitutionMatrix<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl<S: Score> Scorer for SubstitutionMatrix<S> {
    type Score = S;

    #[inline(always)]
    fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize].is_some()
    }

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score, Error> {
        SubstitutionMatrix::score(self, s1, s2)
    }
}
