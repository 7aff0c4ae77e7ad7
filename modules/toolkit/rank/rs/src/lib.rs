pub use ranking::{Hit, Ranking};

mod ranking;
pub mod report;
