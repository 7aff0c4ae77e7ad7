use std::io::Write;

use eyre::Result;
use globalign_alignment_rs::Score;

use crate::Ranking;

const WIDTH: usize = 80;

/// Render the ranking as a plain-text report: a summary table of all targets followed by the
/// detailed alignment of each one, in ranking order.
pub fn write<S: Score>(ranking: &Ranking<S>, query_id: &str, mut writer: impl Write) -> Result<()> {
    let thick = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);

    writeln!(writer, "{thick}")?;
    writeln!(writer, "Needleman-Wunsch Global Alignment: Targets to {query_id}")?;
    writeln!(writer, "{thick}")?;
    writeln!(writer)?;

    writeln!(writer, "Targets ranked by similarity to {query_id}:")?;
    writeln!(writer, "{thin}")?;
    for hit in ranking.entries() {
        writeln!(
            writer,
            "{}. {:40} | Score: {:8.1}",
            hit.rank(),
            hit.id(),
            hit.score()
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "{thick}")?;
    writeln!(writer, "Detailed Alignments")?;
    writeln!(writer, "{thick}")?;

    for hit in ranking.entries() {
        writeln!(writer)?;
        writeln!(writer)?;
        writeln!(writer, "{}", hit.id())?;
        writeln!(writer, "{thin}")?;
        writeln!(writer, "Alignment Score: {:.1}", hit.score())?;
        writeln!(writer, "Identity: {:.1}%", hit.identity() * 100.0)?;
        writeln!(writer, "CIGAR-like RLE: {}", hit.rle())?;
        writeln!(writer)?;
        writeln!(writer, "{query_id}:")?;
        writeln!(writer, "{}", hit.query_aligned())?;
        writeln!(writer)?;
        writeln!(writer, "{}:", hit.id())?;
        writeln!(writer, "{}", hit.target_aligned())?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
