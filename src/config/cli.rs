use crate::core::schema::EntityKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "procure-import")]
#[command(about = "Bulk import users and products into the purchase request system")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Backend API base URL, e.g. https://procure.example.com/api/v1
    #[arg(long, global = true)]
    pub api_endpoint: Option<String>,

    /// Bearer token of an admin account
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// TOML configuration file; flags take precedence over it
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Parse and validate only, submit nothing
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Also write per-row results to this CSV file
    #[arg(long, global = true)]
    pub results_csv: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import users from CSV (`-` reads stdin)
    Users { file: String },
    /// Import products from CSV (`-` reads stdin)
    Products { file: String },
    /// Write an import template with example rows
    Template {
        entity: EntityKind,
        #[arg(long, default_value = ".")]
        output_dir: String,
    },
}
