pub use delegate::Delegate;
pub use matrix::SubstitutionMatrix;

pub use crate::Score;

mod delegate;
pub mod gaps;
mod matrix;
pub mod symbols;

/// Complete scoring scheme of a global alignment: symbol substitutions and gap penalties.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score> + symbols::Scorer<Score = <Self as Scheme>::Score>
{
    type Score: Score;
}

pub fn compose<ScoreType, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
