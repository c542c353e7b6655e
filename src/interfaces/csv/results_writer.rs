use crate::application::format::to_fixed;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::interfaces::report::ResultRow;
use std::io::Write;

/// Writes the results grid as CSV.
///
/// Amounts are plain fixed-point numbers (no symbol, no grouping) so the
/// output can be read back by other tools.
pub struct ResultsWriter<W: Write> {
    writer: csv::Writer<W>,
    decimals: u32,
    with_net: bool,
}

impl<W: Write> ResultsWriter<W> {
    pub fn new(sink: W, config: &DisplayConfig) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            decimals: config.decimals,
            with_net: config.tax_rate.is_some(),
        }
    }

    /// Writes the header followed by one record per row, then flushes.
    pub fn write_rows(&mut self, rows: &[ResultRow]) -> Result<()> {
        let mut header = vec!["frequency", "label", "amount", "current"];
        if self.with_net {
            header.push("net");
        }
        self.writer.write_record(&header)?;

        for row in rows {
            let mut record = vec![
                row.frequency.as_str().to_string(),
                row.frequency.label().to_string(),
                to_fixed(row.amount, self.decimals),
                row.current.to_string(),
            ];
            if self.with_net {
                record.push(
                    row.net
                        .map(|net| to_fixed(net, self.decimals))
                        .unwrap_or_default(),
                );
            }
            self.writer.write_record(&record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
