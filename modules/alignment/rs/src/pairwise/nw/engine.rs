use crate::pairwise::{alignment, scoring};
use crate::{Alignable, Error, Origin, Score, Which, GAP};

use super::fill::Fill;
use super::traceback;

/// Needleman-Wunsch global aligner.
///
/// The engine holds only the scoring scheme. DP matrices are allocated per call, so a single
/// engine can be shared between threads.
#[derive(Clone, Debug)]
pub struct Engine<S, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S>,
{
    scoring: Scheme,
}

impl<S, Scheme> Engine<S, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S>,
{
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    /// Optimal global alignment of two sequences.
    pub fn align<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<alignment::Alignment<S>, Error>
    where
        S1: Alignable<Symbol = u8> + ?Sized,
        S2: Alignable<Symbol = u8> + ?Sized,
    {
        let fill = self.fill(seq1, seq2)?;
        traceback::reconstruct(&fill, seq1, seq2)
    }

    /// Fill the DP matrices without the backtrace. The result can be inspected or passed to
    /// [`traceback::reconstruct`].
    pub fn fill<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Fill<S>, Error>
    where
        S1: Alignable<Symbol = u8> + ?Sized,
        S2: Alignable<Symbol = u8> + ?Sized,
    {
        // Fail before allocating anything
        self.validate(seq1, Which::First)?;
        self.validate(seq2, Which::Second)?;

        log::debug!(
            "Filling {}x{} alignment matrices",
            seq1.len() + 1,
            seq2.len() + 1
        );
        let fill = Fill::run(&self.scoring, seq1, seq2)?;
        log::debug!("Optimal global alignment score: {}", fill.score());
        Ok(fill)
    }

    fn validate<Seq>(&self, seq: &Seq, which: Which) -> Result<(), Error>
    where
        Seq: Alignable<Symbol = u8> + ?Sized,
    {
        for pos in 0..seq.len() {
            let symbol = *seq.at(pos);
            // Symbols are single printable ASCII bytes
            if symbol == GAP
                || !symbol.is_ascii_graphic()
                || !scoring::symbols::Scorer::contains(&self.scoring, symbol)
            {
                return Err(Error::UnknownSymbol {
                    symbol: symbol as char,
                    origin: Origin::Sequence { seq: which, pos },
                });
            }
        }
        Ok(())
    }
}
