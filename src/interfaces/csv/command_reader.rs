use crate::domain::command::Command;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Parses a `type, description, amount, id` command stream.
///
/// Rows may stop after the last field their command needs, e.g. a `pay` row
/// without a trailing `id` column.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Wraps a command file or stdin.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one entry per row; a bad row is an `Err` and does not end the stream.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
