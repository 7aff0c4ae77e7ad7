use globalign_alignment_rs::pairwise::scoring::SubstitutionMatrix;

use super::Score;

/// Textbook single-matrix Needleman-Wunsch with a linear gap penalty. Score only.
pub fn linear(matrix: &SubstitutionMatrix<Score>, seq1: &[u8], seq2: &[u8], gap: Score) -> Score {
    let cols = seq2.len() + 1;
    let mut prev: Vec<Score> = (0..cols).map(|col| col as Score * gap).collect();
    let mut cur = vec![0.0; cols];

    for (row, &s1) in seq1.iter().enumerate() {
        cur[0] = (row + 1) as Score * gap;
        for (col, &s2) in seq2.iter().enumerate() {
            let diagonal = prev[col] + matrix.score(s1, s2).unwrap();
            let up = prev[col + 1] + gap;
            let left = cur[col] + gap;
            cur[col + 1] = diagonal.max(up).max(left);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[cols - 1]
}
