use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use globalign_alignment_rs::pairwise::scoring::gaps::Affine;

#[derive(Parser, Debug)]
#[command(name = "globalign")]
#[command(version)]
#[command(about = "Needleman-Wunsch global alignment of protein and nucleotide sequences", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank target sequences by their alignment score against a query
    Align(AlignArgs),

    /// Align two sequences and print the alignment
    Pair(PairArgs),
}

#[derive(Args, Debug)]
pub struct ScoringArgs {
    /// Substitution matrix table, e.g. BLOSUM62
    #[arg(short, long)]
    pub matrix: PathBuf,
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub gap_open: f64,
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub gap_extend: f64,
    /// Linear gap penalty, overrides both --gap-open and --gap-extend
    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["gap_open", "gap_extend"])]
    pub gap: Option<f64>,
}

impl ScoringArgs {
    pub fn gaps(&self) -> Result<Affine<f64>> {
        let gaps = match self.gap {
            Some(gap) => Affine::linear(gap)?,
            None => Affine::new(self.gap_open, self.gap_extend)?,
        };
        Ok(gaps)
    }
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// FASTA file with the query sequence (first record is used)
    #[arg(short, long)]
    pub query: PathBuf,
    /// FASTA files with target sequences (first record of each file is used)
    #[arg(short, long, required = true, num_args = 1..)]
    pub target: Vec<PathBuf>,
    #[command(flatten)]
    pub scoring: ScoringArgs,
    /// Number of worker threads, 0 to use all available cores
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// FASTA file with the first sequence
    pub first: PathBuf,
    /// FASTA file with the second sequence
    pub second: PathBuf,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}
