pub use error::{Error, Origin, Which};
pub use globalign_core_rs::Alignable;

mod error;
pub mod pairwise;

/// Score values used by the alignment engine. Real numbers with -inf for unreachable states.
pub trait Score: globalign_core_rs::num::Float {}

impl<T: globalign_core_rs::num::Float> Score for T {}

/// Gap marker used in the aligned strings. Never a valid input symbol.
pub const GAP: u8 = b'-';
