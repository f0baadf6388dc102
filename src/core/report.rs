use crate::core::schema::EntityKind;
use crate::domain::model::{BulkImportSummary, RowOutcome, SkippedRow};
use crate::utils::error::{ImportError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub key: String,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTotals {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

/// What happened to one import: the backend's per-row results exactly as
/// returned, plus the rows that never left the client.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub kind: EntityKind,
    pub generated_at: DateTime<Utc>,
    pub submitted: usize,
    pub skipped: Vec<SkippedRow>,
    pub totals: Option<BackendTotals>,
    pub results: Vec<ResultLine>,
}

#[derive(Serialize)]
struct CsvLine<'a> {
    source: &'a str,
    row: String,
    key: &'a str,
    success: bool,
    error: &'a str,
}

impl ImportReport {
    pub fn dry_run(kind: EntityKind, submitted: usize, skipped: Vec<SkippedRow>) -> Self {
        Self {
            kind,
            generated_at: Utc::now(),
            submitted,
            skipped,
            totals: None,
            results: Vec::new(),
        }
    }

    pub fn from_summary<R: RowOutcome>(
        kind: EntityKind,
        submitted: usize,
        skipped: Vec<SkippedRow>,
        summary: BulkImportSummary<R>,
    ) -> Self {
        let results = summary
            .results
            .iter()
            .map(|r| ResultLine {
                key: r.key(),
                success: r.succeeded(),
                error: r.error().map(str::to_string),
            })
            .collect();

        Self {
            kind,
            generated_at: Utc::now(),
            submitted,
            skipped,
            totals: Some(BackendTotals {
                total: summary.total,
                success: summary.success,
                failed: summary.failed,
            }),
            results,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.totals.is_none()
    }

    /// True when any row was skipped locally or failed on the backend.
    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty() || self.totals.is_some_and(|t| t.failed > 0)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} import ({})",
            self.kind,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        match self.totals {
            Some(t) => {
                let _ = writeln!(
                    out,
                    "Total: {}  Imported: {}  Failed: {}  Skipped: {}",
                    t.total,
                    t.success,
                    t.failed,
                    self.skipped.len()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "Dry run: {} rows ready to submit, {} skipped",
                    self.submitted,
                    self.skipped.len()
                );
            }
        }

        for line in &self.results {
            match (&line.error, line.success) {
                (_, true) => {
                    let _ = writeln!(out, "  OK      {}", line.key);
                }
                (Some(error), false) => {
                    let _ = writeln!(out, "  FAILED  {}: {}", line.key, error);
                }
                (None, false) => {
                    let _ = writeln!(out, "  FAILED  {}", line.key);
                }
            }
        }

        for skipped in &self.skipped {
            let _ = writeln!(out, "  SKIPPED row {}: {}", skipped.row, skipped.reason);
        }

        out
    }

    /// Results and skipped rows as CSV: `source,row,key,success,error`.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for line in &self.results {
            writer.serialize(CsvLine {
                source: "backend",
                row: String::new(),
                key: &line.key,
                success: line.success,
                error: line.error.as_deref().unwrap_or(""),
            })?;
        }

        for skipped in &self.skipped {
            let reason = skipped.reason.to_string();
            writer.serialize(CsvLine {
                source: "client",
                row: skipped.row.to_string(),
                key: "",
                success: false,
                error: &reason,
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| ImportError::IoError(e.into_error()))
    }
}
