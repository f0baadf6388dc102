pub mod batch;
pub mod csv_line;
pub mod engine;
pub mod record;
pub mod report;
pub mod schema;
pub mod source;
pub mod template;

pub use crate::domain::ports::{ConfigProvider, ImportBackend, Storage};
pub use crate::utils::error::Result;
