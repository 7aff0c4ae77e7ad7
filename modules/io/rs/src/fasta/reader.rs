use super::{record::Record, validate};
use crate::compression::decode;
use crate::traits::ReadRecord;
use derive_getters::Dissolve;
use eyre::{ensure, Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// A strict FASTA reader that can read a single record at a time. Ignores:
/// - Carriage return characters at the end of all lines (to support Windows line endings)
/// - Empty lines before the first record and inside the sequence block
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - Extra characters before the first record
/// - Characters other than letters or `*` inside the sequence, including start/end of lines
/// - Empty ID or sequence fields in any record
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    /// Create a new FASTA reader from the given file path.
    /// Gzip compression is detected based on the file extension.
    pub fn from_path(
        path: impl AsRef<Path>,
        decode: &decode::Config,
    ) -> Result<Box<dyn ReadRecord<Record = Record> + Send + Sync + 'static>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("Failed to open FASTA file {}", path.display()))?;
        let boxed: Box<dyn ReadRecord<Record = Record> + Send + Sync + 'static> =
            match decode::Stream::new(file, decode)? {
                decode::Stream::Raw(x) => Box::new(Reader::new(std::io::BufReader::new(x))?),
                decode::Stream::Gzip(x) => Box::new(Reader::new(std::io::BufReader::new(x))?),
            };

        Ok(boxed)
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        let mut line = Vec::new();
        loop {
            let first = reader.fill_buf()?.first().copied();
            match first {
                // Skip blank lines before the first record
                Some(b'\n' | b'\r') => {
                    line.clear();
                    reader.read_until(b'\n', &mut line)?;
                    ensure!(
                        matches!(line.as_slice(), b"\n" | b"\r\n"),
                        "Expected '>' at the start of the FASTA file"
                    );
                }
                // Check that there are no extra characters before the first record
                Some(x) => {
                    ensure!(x == b'>', "Expected '>' at the start of the FASTA file");
                    break;
                }
                None => break,
            }
        }
        Ok(Self { reader })
    }

    #[inline(always)]
    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        // Ensure that the next symbol is '>' and consume it
        let buffer = self.reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(false);
        }
        ensure!(
            buffer.first().map(|x| *x == b'>').unwrap_or(false),
            "Expected '>' at the start of the FASTA record"
        );
        self.reader.consume(1);

        // Both fields are validated before returning
        let (id, seq) = record.raw();

        // Read and validate the ID line
        id.clear();
        let read = self.reader.read_line(id)?;
        ensure!(read > 0, "Unexpected EOF after '>'");
        ensure!(
            id.ends_with('\n'),
            "FASTA ID line is not terminated with a newline: {id}"
        );
        id.pop();
        if id.ends_with('\r') {
            id.pop();
        }
        validate::id(id)?;

        // Read the sequence lines up to the next record
        seq.clear();
        let mut line_start = true;
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() || (line_start && buffer[0] == b'>') {
                break;
            }

            let (line, consume, eol) = match memchr::memchr(b'\n', buffer) {
                Some(pos) => (&buffer[..pos], pos + 1, true),
                // Either the last line without a terminator or a line split between buffers
                None => (buffer, buffer.len(), false),
            };
            seq.extend_from_slice(line);
            self.reader.consume(consume);

            // The '\r' of a CR-LF pair may come from an earlier buffer
            if eol && seq.last() == Some(&b'\r') {
                seq.pop();
            }
            line_start = eol;
        }
        validate::seq(seq).wrap_err_with(|| format!("Invalid sequence for the record {id}"))?;

        Ok(true)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given [Record] buffer.
    ///
    /// On error, the buffer is left in an unspecified state but can be reused for the next read.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }

    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;

        // Read into the existing buffer
        for record in into.iter_mut() {
            if !self.read_record(record)? {
                into.truncate(total);
                return Ok(total);
            }
            total += 1;
        }

        // Append to the buffer
        loop {
            let mut record = Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}
