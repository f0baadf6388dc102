use crate::core::batch::{build_batch, ImportBatch};
use crate::core::report::ImportReport;
use crate::core::schema::EntityKind;
use crate::domain::model::{
    BulkImportSummary, ProductImportRow, RowOutcome, SkippedRow, UserImportRow,
};
use crate::domain::ports::ImportBackend;
use crate::utils::error::Result;

/// Builds the batch and reports what would be submitted, without a backend.
pub fn preview(kind: EntityKind, content: &str) -> Result<ImportReport> {
    let (submitted, skipped) = match kind {
        EntityKind::Users => {
            let batch = build_batch::<UserImportRow>(content)?;
            (batch.len(), batch.skipped)
        }
        EntityKind::Products => {
            let batch = build_batch::<ProductImportRow>(content)?;
            (batch.len(), batch.skipped)
        }
    };
    Ok(ImportReport::dry_run(kind, submitted, skipped))
}

/// Drives one import: prepare the batch, submit it once, report.
///
/// Dry runs never construct an engine; see [`preview`].
pub struct ImportEngine<B: ImportBackend> {
    backend: B,
}

impl<B: ImportBackend> ImportEngine<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn run(&self, kind: EntityKind, content: &str) -> Result<ImportReport> {
        match kind {
            EntityKind::Users => self.run_users(content).await,
            EntityKind::Products => self.run_products(content).await,
        }
    }

    pub async fn run_users(&self, content: &str) -> Result<ImportReport> {
        let ImportBatch {
            records, skipped, ..
        } = build_batch::<UserImportRow>(content)?;

        tracing::info!("Submitting {} users", records.len());
        let summary = self.backend.bulk_import_users(&records).await?;
        Ok(self.finish(EntityKind::Users, records.len(), skipped, summary))
    }

    pub async fn run_products(&self, content: &str) -> Result<ImportReport> {
        let ImportBatch {
            records, skipped, ..
        } = build_batch::<ProductImportRow>(content)?;

        tracing::info!("Submitting {} products", records.len());
        let summary = self.backend.bulk_import_products(&records).await?;
        Ok(self.finish(EntityKind::Products, records.len(), skipped, summary))
    }

    fn finish<R: RowOutcome>(
        &self,
        kind: EntityKind,
        submitted: usize,
        skipped: Vec<SkippedRow>,
        summary: BulkImportSummary<R>,
    ) -> ImportReport {
        tracing::info!(
            "Backend imported {}/{} {} ({} failed)",
            summary.success,
            summary.total,
            kind,
            summary.failed
        );
        if summary.total as usize != submitted {
            tracing::warn!(
                "Backend reported {} rows but {} were submitted",
                summary.total,
                submitted
            );
        }
        ImportReport::from_summary(kind, submitted, skipped, summary)
    }
}
