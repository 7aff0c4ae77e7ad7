use std::marker::PhantomData;

use crate::pairwise::scoring::{gaps, symbols, Score};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub symbols: S,
    pub gaps: G,
    score: PhantomData<ScoreType>,
}

impl<ScoreType, S, G> Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub fn new(symbols: S, gaps: G) -> Self {
        Delegate {
            symbols,
            gaps,
            score: Default::default(),
        }
    }
}

impl<ScoreType, S, G> gaps::Scorer for Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.gaps.seq1_gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.gaps.seq1_gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.gaps.seq2_gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.gaps.seq2_gap_extend()
    }
}

impl<ScoreType, S, G> symbols::Scorer for Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(symbol)
    }

    #[inline(always)]
    fn score(&self, s1: u8, s2: u8) -> Result<Self::Score, Error> {
        self.symbols.score(s1, s2)
    }
}

impl<ScoreType, S, G> super::Scheme for Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
}
