use derive_more::{Display, Error};

/// Which of the two aligned sequences a symbol belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Which {
    #[display("first")]
    First,
    #[display("second")]
    Second,
}

/// Where an unknown symbol was encountered.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Origin {
    /// Direct lookup in a scoring table.
    #[display("scoring table lookup")]
    Lookup,
    /// Validation of an input sequence before the alignment.
    #[display("position {pos} of the {seq} sequence")]
    Sequence { seq: Which, pos: usize },
}

/// Failures of the alignment core. All of them are local to a single call and never retried.
#[derive(Clone, PartialEq, Debug, Display, Error)]
pub enum Error {
    /// Malformed substitution matrix input.
    #[display("Malformed substitution matrix: {reason}")]
    Format { reason: String },

    /// A symbol is not part of the scoring alphabet.
    #[display("Symbol {symbol:?} is not part of the scoring alphabet ({origin})")]
    UnknownSymbol { symbol: char, origin: Origin },

    /// Invalid gap penalties.
    #[display("Invalid gap scoring: {reason}")]
    Configuration { reason: String },

    /// The direction matrix does not describe a path from the last cell to the origin.
    #[display("Backtrace got stuck at cell ({row}, {col})")]
    InconsistentBacktrace { row: usize, col: usize },
}

impl Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Error::Format {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }
}
