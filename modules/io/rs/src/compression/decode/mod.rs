use std::fs::File;
use std::path::Path;

use eyre::{Result, WrapErr};

pub use config::Config;
pub use stream::Stream;

mod config;
mod stream;

/// Open the file and wrap it into the decoder suggested by its extension.
pub fn infer_from_path(path: impl AsRef<Path>) -> Result<Stream<File>> {
    let path = path.as_ref();
    let file =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    Stream::new(file, &Config::infer_from_path(path))
}
