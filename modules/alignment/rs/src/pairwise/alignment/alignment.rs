use derive_getters::{Dissolve, Getters};

use crate::{Score, GAP};

use super::op::Op;
use super::step::Step;

/// A global alignment between two sequences.
///
/// Both aligned strings have the same length and use [`GAP`] for gap columns. Removing the gaps
/// from `seq1`/`seq2` yields the original sequences.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    seq1: String,
    seq2: String,
    steps: Vec<Step>,
}

impl<S: Score> Alignment<S> {
    pub(crate) fn new(score: S, seq1: String, seq2: String, steps: Vec<Step>) -> Self {
        debug_assert_eq!(seq1.len(), seq2.len());
        Self {
            score,
            seq1,
            seq2,
            steps,
        }
    }

    /// Checks if the alignment is empty, i.e. both input sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the total number of alignment columns.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len()).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Number of columns with identical symbols.
    pub fn matches(&self) -> usize {
        self.count(|op| op == Op::Match)
    }

    /// Number of gap columns in either sequence.
    pub fn gaps(&self) -> usize {
        self.count(|op| !op.is_diagonal())
    }

    /// Fraction of columns with identical symbols, zero for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            len => self.matches() as f64 / len as f64,
        }
    }

    /// The same alignment with the roles of the sequences swapped.
    pub fn inverted(self) -> Self {
        let steps = self.steps.iter().map(Step::inverted).collect();
        Self::new(self.score, self.seq2, self.seq1, steps)
    }

    fn count(&self, predicate: impl Fn(Op) -> bool) -> usize {
        self.steps
            .iter()
            .filter(|x| predicate(*x.op()))
            .map(|x| *x.len())
            .sum()
    }

    /// The aligned string with gap markers removed.
    pub fn ungapped(aligned: &str) -> String {
        aligned.chars().filter(|x| *x != GAP as char).collect()
    }
}
