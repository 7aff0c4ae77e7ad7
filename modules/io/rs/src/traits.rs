use eyre::Result;

/// A trait for reading structured records, modeled after the `Read` trait in the std.
///
/// Readers fill caller-provided buffers so that the allocations can be reused between records.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record;

    /// Read a single record from the input into the provided buffer.
    /// Returns `true` if a record was read and `false` if the end of the input was reached.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool>;

    /// Read all remaining records into the provided buffer. Existing elements are overwritten
    /// first, the rest is appended. Returns the number of records read.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize>;
}
