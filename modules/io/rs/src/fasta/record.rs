use derive_getters::{Dissolve, Getters};
use derive_more::Into;
use eyre::Result;
use globalign_core_rs::Alignable;
use std::error::Error;

use super::validate;

/// A single FASTA record with the following guarantees:
/// - The ID is non-empty and is represented by an arbitrary UTF-8 string.
/// - The ID can't contain any newline characters (CR or LF).
/// - The sequence is non-empty and contains only ASCII letters or `*`.
///
/// There are no guarantees that the residues are known to a particular substitution matrix,
/// this is checked by the aligner.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters, Into)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: "Default ID".to_string(),
            seq: b"ACGT".to_vec(),
        }
    }
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    /// Creates a new FASTA record with the given ID and sequence.
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        validate::id(&id)?;
        validate::seq(&seq)?;
        Ok(Self { id, seq })
    }

    /// The ID up to the first whitespace, i.e. the accession of most FASTA headers.
    pub fn name(&self) -> &str {
        self.id.split_whitespace().next().unwrap_or(&self.id)
    }

    /// Mutable access to the fields for buffer reuse. The caller must validate both fields
    /// after modification.
    pub(crate) fn raw(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }
}

impl Alignable for Record {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.seq[pos]
    }
}
