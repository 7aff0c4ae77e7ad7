use std::path::Path;

/// How the bytes of an input stream should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Config {
    #[default]
    Uncompressed,
    /// GZIP container, possibly with several concatenated members
    Gzip,
}

impl Config {
    pub fn infer_from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext {
                "gz" | "gzip" | "bgz" => Config::Gzip,
                _ => Config::Uncompressed,
            })
            .unwrap_or_default()
    }
}
