use derive_getters::{Dissolve, Getters};

use crate::pairwise::scoring::Score;
use crate::Error;

// Gap scoring MUST be additive: the cost of a gap run is open + (len - 1) * extend.
pub trait Scorer {
    type Score: Score;

    /// Gap in the first sequence, i.e. a symbol of the second sequence aligned against nothing.
    fn seq1_gap_open(&self) -> Self::Score;
    fn seq1_gap_extend(&self) -> Self::Score;

    /// Gap in the second sequence.
    fn seq2_gap_open(&self) -> Self::Score;
    fn seq2_gap_extend(&self) -> Self::Score;
}

/// Gap costs that don't depend on the sequence carrying the gap.
pub trait SymmetricScorer {
    type GapScore: Score;

    fn gap_open(&self) -> Self::GapScore;
    fn gap_extend(&self) -> Self::GapScore;
}

impl<T: SymmetricScorer> Scorer for T {
    type Score = <Self as SymmetricScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }
}

/// Affine gap penalty. The first column of a gap run costs `open`, every following one `extend`.
/// Linear gap penalty is the special case `open == extend`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Getters, Dissolve)]
pub struct Affine<S: Score> {
    open: S,
    extend: S,
}

impl<S: Score> Affine<S> {
    /// Both penalties must be finite and non-positive.
    pub fn new(open: S, extend: S) -> Result<Self, Error> {
        for (name, value) in [("open", open), ("extend", extend)] {
            if !value.is_finite() {
                return Err(Error::configuration(format!(
                    "gap {name} penalty must be finite, got {value}"
                )));
            }
            if value > S::zero() {
                return Err(Error::configuration(format!(
                    "gap {name} penalty must be <= 0, got {value}"
                )));
            }
        }
        if extend < open {
            log::warn!(
                "Gap extension ({extend}) is penalized harder than gap opening ({open}), \
                 alignments will favour fragmented gaps"
            );
        }
        Ok(Self { open, extend })
    }

    /// Linear gap penalty: every gap column costs `penalty`.
    pub fn linear(penalty: S) -> Result<Self, Error> {
        Self::new(penalty, penalty)
    }

    pub fn is_linear(&self) -> bool {
        self.open == self.extend
    }

    /// Total cost of a gap run of the given length.
    pub fn cost(&self, len: usize) -> S {
        match len {
            0 => S::zero(),
            _ => {
                let extensions: S = num::cast(len - 1).unwrap_or_else(S::infinity);
                self.open + extensions * self.extend
            }
        }
    }
}

impl<S: Score> SymmetricScorer for Affine<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.extend
    }
}
