use crate::pairwise::{Alignment, Op, Step};
use crate::{Alignable, Error, Score, GAP};

use super::fill::{Fill, State};

/// Walk the direction matrix from the last cell back to the origin and emit the aligned strings.
///
/// The filled matrices are only borrowed, the same `Fill` can be reconstructed many times.
pub fn reconstruct<S, S1, S2>(fill: &Fill<S>, seq1: &S1, seq2: &S2) -> Result<Alignment<S>, Error>
where
    S: Score,
    S1: Alignable<Symbol = u8> + ?Sized,
    S2: Alignable<Symbol = u8> + ?Sized,
{
    let (rows, cols) = fill.shape();
    if rows != seq1.len() + 1 || cols != seq2.len() + 1 {
        return Err(Error::InconsistentBacktrace {
            row: rows - 1,
            col: cols - 1,
        });
    }

    let (mut row, mut col) = (rows - 1, cols - 1);
    let mut state = fill
        .terminal()
        .ok_or(Error::InconsistentBacktrace { row, col })?;

    let mut aligned1 = Vec::with_capacity(row + col);
    let mut aligned2 = Vec::with_capacity(row + col);
    let mut ops = Vec::with_capacity(row + col);

    while row > 0 || col > 0 {
        let previous = fill.trace(row, col).get(state);
        match state {
            State::Match if row > 0 && col > 0 => {
                let (s1, s2) = (*seq1.at(row - 1), *seq2.at(col - 1));
                aligned1.push(s1);
                aligned2.push(s2);
                ops.push(if s1 == s2 { Op::Match } else { Op::Mismatch });
                row -= 1;
                col -= 1;
            }
            State::GapSecond if row > 0 => {
                aligned1.push(*seq1.at(row - 1));
                aligned2.push(GAP);
                ops.push(Op::GapSecond);
                row -= 1;
            }
            State::GapFirst if col > 0 => {
                aligned1.push(GAP);
                aligned2.push(*seq2.at(col - 1));
                ops.push(Op::GapFirst);
                col -= 1;
            }
            _ => return Err(Error::InconsistentBacktrace { row, col }),
        }

        if row == 0 && col == 0 {
            break;
        }
        state = previous.ok_or(Error::InconsistentBacktrace { row, col })?;
    }

    let aligned1: String = aligned1.into_iter().rev().map(char::from).collect();
    let aligned2: String = aligned2.into_iter().rev().map(char::from).collect();
    let steps = Step::encode(ops.into_iter().rev());

    debug_assert!(same_symbols(&Alignment::<S>::ungapped(&aligned1), seq1));
    debug_assert!(same_symbols(&Alignment::<S>::ungapped(&aligned2), seq2));

    Ok(Alignment::new(fill.score(), aligned1, aligned2, steps))
}

fn same_symbols<Seq>(ungapped: &str, seq: &Seq) -> bool
where
    Seq: Alignable<Symbol = u8> + ?Sized,
{
    ungapped.len() == seq.len() && ungapped.bytes().enumerate().all(|(i, x)| x == *seq.at(i))
}
