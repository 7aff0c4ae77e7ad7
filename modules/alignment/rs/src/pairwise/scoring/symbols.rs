use crate::pairwise::scoring::Score;
use crate::{Error, Origin};

/// Scores a pair of aligned symbols.
pub trait Scorer {
    type Score: Score;

    /// Whether the symbol belongs to the scorer's alphabet.
    fn contains(&self, symbol: u8) -> bool;

    /// Score of aligning `s1` against `s2`. Fails for symbols outside of the alphabet.
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score, Error>;
}

/// Fixed scores for identical and different symbols. Accepts any printable ASCII symbol.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Equality<S: Score> {
    pub equal: S,
    pub different: S,
}

impl<S: Score> Equality<S> {
    pub fn new(equal: S, different: S) -> Self {
        Self { equal, different }
    }
}

impl<S: Score> Scorer for Equality<S> {
    type Score = S;

    #[inline(always)]
    fn contains(&self, symbol: u8) -> bool {
        symbol.is_ascii_graphic()
    }

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score, Error> {
        Ok(if s1 == s2 { self.equal } else { self.different })
    }
}

impl<T: Scorer + ?Sized> Scorer for &T {
    type Score = T::Score;

    #[inline(always)]
    fn contains(&self, symbol: u8) -> bool {
        (**self).contains(symbol)
    }

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score, Error> {
        (**self).score(s1, s2)
    }
}

pub(crate) fn unknown(symbol: u8) -> Error {
    Error::UnknownSymbol {
        symbol: symbol as char,
        origin: Origin::Lookup,
    }
}
