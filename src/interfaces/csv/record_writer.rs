use crate::domain::payment::{Amount, PaymentId, PaymentRecord};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Serialize)]
struct RecordRow<'a> {
    id: PaymentId,
    description: &'a str,
    amount: Amount,
    cancelled: bool,
}

/// Writes payment records as CSV, one row per record.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// Writes the header followed by every record in identifier order.
    ///
    /// The header is written even when there are no records.
    pub fn write_records(&mut self, records: &BTreeMap<PaymentId, PaymentRecord>) -> Result<()> {
        self.writer
            .write_record(["id", "description", "amount", "cancelled"])?;
        for (id, record) in records {
            self.writer.serialize(RecordRow {
                id: *id,
                description: &record.description,
                amount: record.amount,
                cancelled: record.cancelled,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
