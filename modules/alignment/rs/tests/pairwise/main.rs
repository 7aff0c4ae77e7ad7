use globalign_alignment_rs::pairwise::{nw, scoring};

mod global;
mod reference;

pub type Score = f64;

pub type Scheme = scoring::Delegate<
    Score,
    scoring::SubstitutionMatrix<Score>,
    scoring::gaps::Affine<Score>,
>;

pub type Engine = nw::Engine<Score, Scheme>;

pub const BLOSUM62: &str = include_str!("../../../../../data/substitution_matrices/BLOSUM62.mat");

pub fn blosum62() -> scoring::SubstitutionMatrix<Score> {
    BLOSUM62.parse().unwrap()
}

pub fn engine(open: Score, extend: Score) -> Engine {
    nw::Engine::new(scoring::compose(
        blosum62(),
        scoring::gaps::Affine::new(open, extend).unwrap(),
    ))
}

/// Sequence of a single-record FASTA file.
pub fn fasta(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect()
}
