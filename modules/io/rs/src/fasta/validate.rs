use eyre::{ensure, Result};

pub fn id(id: &str) -> Result<()> {
    ensure!(!id.is_empty(), "FASTA ID cannot be empty");
    ensure!(
        !id.contains(&['\n', '\r'] as &[char]),
        "Newline characters are not allowed in the FASTA ID: {id}"
    );
    Ok(())
}

/// Residues are ASCII letters. `*` is accepted as well since protein FASTA files often mark stop
/// codons with it and BLOSUM-like matrices score it.
pub fn seq(seq: &[u8]) -> Result<()> {
    ensure!(!seq.is_empty(), "FASTA sequence cannot be empty");
    for (i, &x) in seq.iter().enumerate() {
        ensure!(
            x.is_ascii_alphabetic() || x == b'*',
            "Unexpected character at index {i} = {:?}",
            x as char
        );
    }
    Ok(())
}
