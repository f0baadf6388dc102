use crate::core::csv_line::parse_csv_line;
use crate::core::record::{ImportRecord, RowFields};
use crate::core::schema::ColumnMap;
use crate::core::source::split_rows;
use crate::domain::model::SkippedRow;
use crate::utils::error::{ImportError, Result};

/// Accepted records, in file order, plus the rows rejected on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch<R> {
    pub header: Vec<String>,
    pub records: Vec<R>,
    pub skipped: Vec<SkippedRow>,
}

impl<R> ImportBatch<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn build_batch<R: ImportRecord>(content: &str) -> Result<ImportBatch<R>> {
    let document = split_rows(content)?;
    let header = parse_csv_line(&document.header);
    let columns = ColumnMap::from_header(R::KIND, &header);

    let mut records = Vec::with_capacity(document.rows.len());
    let mut skipped = Vec::new();

    for row in &document.rows {
        let fields = parse_csv_line(&row.line);
        match R::from_fields(&RowFields::new(&fields, &columns)) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!("Skipping {} row {}: {}", R::KIND, row.number, reason);
                skipped.push(SkippedRow {
                    row: row.number,
                    reason,
                });
            }
        }
    }

    if records.is_empty() {
        return Err(ImportError::NoValidRowsError {
            skipped: skipped.len(),
        });
    }

    tracing::info!(
        "Prepared {} {} for import ({} skipped)",
        records.len(),
        R::KIND,
        skipped.len()
    );

    Ok(ImportBatch {
        header,
        records,
        skipped,
    })
}
