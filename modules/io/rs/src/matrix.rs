use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use eyre::{Result, WrapErr};
use globalign_alignment_rs::pairwise::scoring::{Score, SubstitutionMatrix};

use crate::compression::decode;

/// Load a substitution matrix table (BLOSUM, PAM, ...) from a plain or gzipped file.
pub fn read<S: Score + FromStr>(path: impl AsRef<Path>) -> Result<SubstitutionMatrix<S>> {
    let path = path.as_ref();
    let stream = decode::infer_from_path(path)?;
    let matrix = SubstitutionMatrix::parse(BufReader::new(stream))
        .wrap_err_with(|| format!("Failed to load substitution matrix {}", path.display()))?;

    log::debug!(
        "Loaded {}x{} substitution matrix from {}",
        matrix.len(),
        matrix.len(),
        path.display()
    );
    Ok(matrix)
}
