pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::{http::HttpBackend, storage::LocalStorage};
pub use crate::config::{toml_config::TomlConfig, ApiSettings};
pub use crate::core::{
    batch::{build_batch, ImportBatch},
    csv_line::{parse_csv_line, to_csv_line},
    engine::ImportEngine,
    report::ImportReport,
    schema::EntityKind,
};
pub use crate::utils::error::{ImportError, Result};
