use crate::pairwise::scoring::{self, gaps, symbols};
use crate::{Alignable, Error, Score};

/// DP state of a cell, i.e. the kind of the last alignment column.
///
/// The declaration order is the tie-break priority: when several states reach the same score the
/// earliest one wins.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum State {
    /// Last column aligns two symbols (diagonal move)
    Match,
    /// Last column is a gap in the second sequence (vertical move)
    GapSecond,
    /// Last column is a gap in the first sequence (horizontal move)
    GapFirst,
}

impl State {
    pub const ALL: [State; 3] = [State::Match, State::GapSecond, State::GapFirst];
}

/// Predecessor states of a single cell, one entry per [`State`].
///
/// `None` means that the state is unreachable at this cell (or that the cell is the origin).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Trace([Option<State>; 3]);

impl Trace {
    #[inline(always)]
    pub fn get(&self, state: State) -> Option<State> {
        self.0[state as usize]
    }

    #[inline(always)]
    fn set(&mut self, state: State, previous: Option<State>) {
        self.0[state as usize] = previous;
    }
}

/// Filled DP matrices of a single global alignment.
///
/// All matrices have `(len(seq1) + 1) x (len(seq2) + 1)` cells stored row by row. Rows follow the
/// first sequence, columns the second one.
#[derive(Clone, PartialEq, Debug)]
pub struct Fill<S: Score> {
    rows: usize,
    cols: usize,
    // Best score ending in each state, indexed by State
    scores: [Vec<S>; 3],
    traces: Vec<Trace>,
    terminal: Option<State>,
}

#[inline(always)]
fn best<S: Score>(candidates: [(S, State); 3]) -> (S, Option<State>) {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 > best.0 {
            best = *candidate;
        }
    }

    if best.0 == S::neg_infinity() {
        (best.0, None)
    } else {
        (best.0, Some(best.1))
    }
}

impl<S: Score> Fill<S> {
    /// Fill the matrices row by row. Every symbol of both sequences must be known to the scheme.
    pub(crate) fn run<Scheme, S1, S2>(scheme: &Scheme, seq1: &S1, seq2: &S2) -> Result<Self, Error>
    where
        Scheme: scoring::Scheme<Score = S>,
        S1: Alignable<Symbol = u8> + ?Sized,
        S2: Alignable<Symbol = u8> + ?Sized,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        let ninf = S::neg_infinity();

        let mut matched = vec![ninf; rows * cols];
        let mut gap_second = vec![ninf; rows * cols];
        let mut gap_first = vec![ninf; rows * cols];
        let mut traces = vec![Trace::default(); rows * cols];

        let (open1, extend1) = (
            gaps::Scorer::seq1_gap_open(scheme),
            gaps::Scorer::seq1_gap_extend(scheme),
        );
        let (open2, extend2) = (
            gaps::Scorer::seq2_gap_open(scheme),
            gaps::Scorer::seq2_gap_extend(scheme),
        );

        matched[0] = S::zero();
        for row in 0..rows {
            for col in 0..cols {
                let cell = row * cols + col;
                let trace = &mut traces[cell];

                if row > 0 && col > 0 {
                    let diag = cell - cols - 1;
                    let (score, previous) = best([
                        (matched[diag], State::Match),
                        (gap_second[diag], State::GapSecond),
                        (gap_first[diag], State::GapFirst),
                    ]);
                    let substitution =
                        symbols::Scorer::score(scheme, *seq1.at(row - 1), *seq2.at(col - 1))?;
                    matched[cell] = score + substitution;
                    trace.set(State::Match, previous);
                }

                if row > 0 {
                    let up = cell - cols;
                    let (score, previous) = best([
                        (matched[up] + open2, State::Match),
                        (gap_second[up] + extend2, State::GapSecond),
                        (gap_first[up] + open2, State::GapFirst),
                    ]);
                    gap_second[cell] = score;
                    trace.set(State::GapSecond, previous);
                }

                if col > 0 {
                    let left = cell - 1;
                    let (score, previous) = best([
                        (matched[left] + open1, State::Match),
                        (gap_second[left] + open1, State::GapSecond),
                        (gap_first[left] + extend1, State::GapFirst),
                    ]);
                    gap_first[cell] = score;
                    trace.set(State::GapFirst, previous);
                }
            }
        }

        let last = rows * cols - 1;
        let (_, terminal) = best([
            (matched[last], State::Match),
            (gap_second[last], State::GapSecond),
            (gap_first[last], State::GapFirst),
        ]);

        Ok(Self {
            rows,
            cols,
            scores: [matched, gap_second, gap_first],
            traces,
            terminal,
        })
    }

    /// Matrix dimensions: `(len(seq1) + 1, len(seq2) + 1)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Optimal global alignment score.
    pub fn score(&self) -> S {
        self.best(self.rows - 1, self.cols - 1)
    }

    /// State of the last alignment column, `None` if no alignment was found.
    pub fn terminal(&self) -> Option<State> {
        self.terminal
    }

    /// Best score of aligning `seq1[..row]` with `seq2[..col]` that ends in the given state.
    pub fn get(&self, state: State, row: usize, col: usize) -> S {
        self.scores[state as usize][self.cell(row, col)]
    }

    /// Best score of aligning `seq1[..row]` with `seq2[..col]`.
    pub fn best(&self, row: usize, col: usize) -> S {
        let cell = self.cell(row, col);
        State::ALL
            .iter()
            .map(|state| self.scores[*state as usize][cell])
            .fold(S::neg_infinity(), S::max)
    }

    /// Predecessor states recorded for the cell.
    pub fn trace(&self, row: usize, col: usize) -> Trace {
        self.traces[self.cell(row, col)]
    }

    /// The combined alignment matrix: best score of every cell.
    pub fn matrix(&self) -> Vec<Vec<S>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.best(row, col)).collect())
            .collect()
    }

    #[inline(always)]
    fn cell(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "Cell ({row}, {col}) is outside of the {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise::scoring::{compose, gaps::Affine, symbols::Equality};

    fn fill(seq1: &str, seq2: &str, open: f64, extend: f64) -> Fill<f64> {
        let scheme = compose(Equality::new(1.0, -1.0), Affine::new(open, extend).unwrap());
        Fill::run(&scheme, seq1, seq2).unwrap()
    }

    #[test]
    fn test_best_tie_break() {
        let (score, state) = best([
            (1.0, State::Match),
            (1.0, State::GapSecond),
            (0.0, State::GapFirst),
        ]);
        assert_eq!((score, state), (1.0, Some(State::Match)));

        let (score, state) = best([
            (0.0, State::Match),
            (2.0, State::GapSecond),
            (2.0, State::GapFirst),
        ]);
        assert_eq!((score, state), (2.0, Some(State::GapSecond)));

        let ninf = f64::NEG_INFINITY;
        let (_, state) = best([
            (ninf, State::Match),
            (ninf, State::GapSecond),
            (ninf, State::GapFirst),
        ]);
        assert_eq!(state, None);
    }

    #[test]
    fn test_base_cases() {
        let fill = fill("ACG", "AC", -5.0, -2.0);
        assert_eq!(fill.shape(), (4, 3));

        assert_eq!(fill.get(State::Match, 0, 0), 0.0);
        for row in 1..4 {
            assert_eq!(fill.get(State::Match, row, 0), f64::NEG_INFINITY);
            assert_eq!(fill.get(State::GapFirst, row, 0), f64::NEG_INFINITY);
        }
        for col in 1..3 {
            assert_eq!(fill.get(State::Match, 0, col), f64::NEG_INFINITY);
            assert_eq!(fill.get(State::GapSecond, 0, col), f64::NEG_INFINITY);
        }

        // open + (i - 1) * extend
        assert_eq!(fill.get(State::GapSecond, 1, 0), -5.0);
        assert_eq!(fill.get(State::GapSecond, 2, 0), -7.0);
        assert_eq!(fill.get(State::GapSecond, 3, 0), -9.0);
        assert_eq!(fill.get(State::GapFirst, 0, 1), -5.0);
        assert_eq!(fill.get(State::GapFirst, 0, 2), -7.0);

        assert_eq!(fill.trace(1, 0).get(State::GapSecond), Some(State::Match));
        assert_eq!(fill.trace(2, 0).get(State::GapSecond), Some(State::GapSecond));
        assert_eq!(fill.trace(0, 2).get(State::GapFirst), Some(State::GapFirst));
        assert_eq!(fill.trace(0, 0), Trace::default());
    }

    #[test]
    fn test_interior() {
        let fill = fill("ACG", "AC", -5.0, -2.0);
        // A/A, C/C, G/-
        assert_eq!(fill.get(State::Match, 1, 1), 1.0);
        assert_eq!(fill.get(State::Match, 2, 2), 2.0);
        assert_eq!(fill.get(State::GapSecond, 3, 2), -3.0);
        assert_eq!(fill.score(), -3.0);
        assert_eq!(fill.terminal(), Some(State::GapSecond));
        assert_eq!(fill.trace(3, 2).get(State::GapSecond), Some(State::Match));
        assert_eq!(fill.trace(2, 2).get(State::Match), Some(State::Match));
    }

    #[test]
    fn test_gap_switch() {
        // A gap in the first sequence directly followed by a gap in the second one
        let fill = fill("A", "C", -1.0, -1.0);
        assert_eq!(fill.get(State::GapSecond, 1, 1), -2.0);
        assert_eq!(fill.trace(1, 1).get(State::GapSecond), Some(State::GapFirst));
        assert_eq!(fill.get(State::GapFirst, 1, 1), -2.0);
        assert_eq!(fill.trace(1, 1).get(State::GapFirst), Some(State::GapSecond));
        // Mismatch (-1) beats two gaps (-2)
        assert_eq!(fill.score(), -1.0);
        assert_eq!(fill.terminal(), Some(State::Match));
    }

    #[test]
    fn test_empty() {
        let fill = fill("", "", -1.0, -1.0);
        assert_eq!(fill.shape(), (1, 1));
        assert_eq!(fill.score(), 0.0);
        assert_eq!(fill.terminal(), Some(State::Match));
        assert_eq!(fill.matrix(), vec![vec![0.0]]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds() {
        fill("A", "A", -1.0, -1.0).best(2, 0);
    }
}
