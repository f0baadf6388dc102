use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    PurchaseAdmin,
    SupplyChainManager,
    GeneralManager,
    #[default]
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::PurchaseAdmin,
        UserRole::SupplyChainManager,
        UserRole::GeneralManager,
        UserRole::Employee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::PurchaseAdmin => "purchase_admin",
            UserRole::SupplyChainManager => "supply_chain_manager",
            UserRole::GeneralManager => "general_manager",
            UserRole::Employee => "employee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| s.trim().to_string())
    }
}

/// One row of a user bulk import, serialized as the backend expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserImportRow {
    pub employee_number: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub company_code: String,
    pub cost_center: String,
    pub department: String,
}

/// One row of a product bulk import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImportRow {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub model: String,
    pub specification: String,
    pub supplier: String,
    pub supplier_code: String,
    pub price: f64,
    pub currency: String,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub location: String,
    pub description: String,
    pub is_active: bool,
    pub is_ecommerce: bool,
    pub product_url: String,
    pub brand: String,
    pub asin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImportResult {
    pub employee_number: String,
    pub email: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImportResult {
    pub row: u64,
    pub sku: String,
    pub name: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-row outcome reported by the backend; rendered as-is.
pub trait RowOutcome {
    fn key(&self) -> String;
    fn succeeded(&self) -> bool;
    fn error(&self) -> Option<&str>;
}

impl RowOutcome for UserImportResult {
    fn key(&self) -> String {
        format!("{} <{}>", self.employee_number, self.email)
    }

    fn succeeded(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl RowOutcome for ProductImportResult {
    fn key(&self) -> String {
        format!("row {} {} ({})", self.row, self.sku, self.name)
    }

    fn succeeded(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkImportSummary<R> {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    pub results: Vec<R>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Response envelope shared by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    MissingField(&'static str),
    InvalidRole(String),
    InvalidEmail(String),
    PasswordTooShort { min: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField(column) => write!(f, "missing required field '{}'", column),
            SkipReason::InvalidRole(role) => write!(
                f,
                "unknown role '{}' (expected one of: {})",
                role,
                UserRole::ALL.map(|r| r.as_str()).join(", ")
            ),
            SkipReason::InvalidEmail(email) => write!(f, "invalid email address '{}'", email),
            SkipReason::PasswordTooShort { min } => {
                write!(f, "password must be at least {} characters", min)
            }
        }
    }
}

/// A data row rejected on the client before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row index, header excluded.
    pub row: usize,
    pub reason: SkipReason,
}
