use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::transaction::Transaction;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct StatementRow {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: Decimal,
    pub description: String,
    pub source: Option<String>,
    pub method: Option<String>,
    pub fee: Option<Decimal>,
}

impl From<&Transaction> for StatementRow {
    fn from(tx: &Transaction) -> Self {
        let (source, method, fee) = match tx {
            Transaction::Deposit(d) => (Some(d.source().to_string()), None, None),
            Transaction::Withdrawal(w) => (None, Some(w.method().to_string()), Some(w.fee())),
        };
        Self {
            date: tx.date().format(DATE_FORMAT).to_string(),
            kind: tx.kind().as_str(),
            amount: tx.amount(),
            description: tx.description().to_string(),
            source,
            method,
            fee,
        }
    }
}

pub fn print_statement<W>(
    output: &mut W,
    rows: impl Iterator<Item = StatementRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    // headers come from the first serialized row, write them up front so an
    // empty ledger still yields a header line
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    if let Err(err) = writer.write_record([
        "date",
        "type",
        "amount",
        "description",
        "source",
        "method",
        "fee",
    ]) {
        anyhow::bail!("Failed to write CSV header: {err}")
    }
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
