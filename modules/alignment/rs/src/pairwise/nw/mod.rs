pub use engine::Engine;
pub use fill::{Fill, State, Trace};

mod engine;
mod fill;
pub mod traceback;
