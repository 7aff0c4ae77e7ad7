use std::cmp::Ordering;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{Result, WrapErr};
use globalign_alignment_rs::pairwise::{nw, scoring, Alignment};
use globalign_alignment_rs::Score;
use globalign_core_rs::Alignable;
use rayon::prelude::*;

/// Alignment of a single target against the query.
#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Hit<S: Score> {
    // 1-based position in the ranking
    rank: usize,
    id: String,
    score: S,
    query_aligned: String,
    target_aligned: String,
    rle: String,
    identity: f64,
}

impl<S: Score> Hit<S> {
    fn from_alignment(id: String, alignment: Alignment<S>) -> Self {
        let rle = alignment.rle();
        let identity = alignment.identity();
        let (score, query_aligned, target_aligned, _) = alignment.dissolve();
        Self::new(0, id, score, query_aligned, target_aligned, rle, identity)
    }
}

/// Targets sorted by their global alignment score against a single query, best first.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Ranking<S: Score> {
    hits: Vec<Hit<S>>,
}

impl<S: Score> Ranking<S> {
    /// Align every target against the query and rank them by score.
    ///
    /// Targets are aligned in parallel on the current rayon pool. Equal scores keep the input
    /// order of the targets. Any failed alignment fails the whole ranking.
    pub fn build<Scheme, Q, Id, T>(
        engine: &nw::Engine<S, Scheme>,
        query: &Q,
        targets: &[(Id, T)],
    ) -> Result<Self>
    where
        Scheme: scoring::Scheme<Score = S> + Sync,
        Q: Alignable<Symbol = u8> + Sync + ?Sized,
        Id: AsRef<str> + Sync,
        T: Alignable<Symbol = u8> + Sync,
    {
        log::info!(
            "Aligning {} targets against a query of length {}",
            targets.len(),
            query.len()
        );

        let mut hits = targets
            .par_iter()
            .map(|(id, target)| {
                let id = id.as_ref();
                let alignment = engine
                    .align(query, target)
                    .wrap_err_with(|| format!("Failed to align target {id}"))?;
                log::debug!("{id}: score {}", alignment.score());
                Ok(Hit::from_alignment(id.to_string(), alignment))
            })
            .collect::<Result<Vec<_>>>()?;

        // Scores are always finite
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        for (ind, hit) in hits.iter_mut().enumerate() {
            hit.rank = ind + 1;
        }

        if let Some(best) = hits.first() {
            log::info!("Best target: {} (score {})", best.id, best.score);
        }
        Ok(Self { hits })
    }

    pub fn entries(&self) -> &[Hit<S>] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
