pub mod compression;
pub mod fasta;
pub mod matrix;
mod traits;

pub use traits::ReadRecord;
