use std::io::Read;

use eyre::Result;
use flate2::read::MultiGzDecoder;

use super::config::Config;

pub enum Stream<R: Read + Send + Sync + 'static> {
    Raw(R),
    Gzip(MultiGzDecoder<R>),
}

impl<R: Read + Send + Sync + 'static> Stream<R> {
    pub fn new(inner: R, config: &Config) -> Result<Self> {
        log::debug!("Decoding input stream as {config:?}");
        match config {
            Config::Uncompressed => Ok(Stream::Raw(inner)),
            Config::Gzip => Ok(Stream::Gzip(MultiGzDecoder::new(inner))),
        }
    }

    pub fn boxed(self) -> Box<dyn Read + Send + Sync + 'static> {
        match self {
            Stream::Raw(r) => Box::new(r),
            Stream::Gzip(r) => Box::new(r),
        }
    }
}

impl<R: Read + Send + Sync + 'static> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Stream::Raw(r) => r.read(buf),
            Stream::Gzip(r) => r.read(buf),
        }
    }
}
