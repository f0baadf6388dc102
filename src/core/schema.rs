use crate::utils::error::{ImportError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const USER_COLUMNS: &[&str] = &[
    "employee_number",
    "email",
    "password",
    "name",
    "role",
    "company_code",
    "cost_center",
    "department",
];

pub const PRODUCT_COLUMNS: &[&str] = &[
    "sku",
    "name",
    "category",
    "model",
    "specification",
    "supplier",
    "supplier_code",
    "price",
    "currency",
    "stock",
    "min_stock",
    "max_stock",
    "location",
    "description",
    "is_active",
    "is_ecommerce",
    "product_url",
    "brand",
    "asin",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Users,
    Products,
}

impl EntityKind {
    /// Documented column order of the import template.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Users => USER_COLUMNS,
            EntityKind::Products => PRODUCT_COLUMNS,
        }
    }

    /// The two leading columns a row cannot be imported without.
    pub fn mandatory_columns(&self) -> [&'static str; 2] {
        match self {
            EntityKind::Users => ["employee_number", "email"],
            EntityKind::Products => ["sku", "name"],
        }
    }

    pub fn endpoint_path(&self) -> &'static str {
        match self {
            EntityKind::Users => "users/bulk-import",
            EntityKind::Products => "products/bulk-import",
        }
    }

    pub fn payload_key(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Products => "products",
        }
    }

    pub fn template_filename(&self) -> &'static str {
        match self {
            EntityKind::Users => "users_import_template.csv",
            EntityKind::Products => "products_import_template.csv",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload_key())
    }
}

impl FromStr for EntityKind {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" | "user" => Ok(EntityKind::Users),
            "products" | "product" => Ok(EntityKind::Products),
            other => Err(ImportError::InvalidConfigValueError {
                field: "entity".to_string(),
                value: other.to_string(),
                reason: "Expected 'users' or 'products'".to_string(),
            }),
        }
    }
}

/// Where each known column sits in a data row.
///
/// Built from the file's header so that reordered or extra columns still
/// land in the right record field. A header that does not name both
/// mandatory columns is treated as display-only and the documented order
/// applies. Data positions past the end of the header fall back to the
/// documented order as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    kind: EntityKind,
    positions: HashMap<&'static str, usize>,
}

impl ColumnMap {
    /// The documented template order.
    pub fn canonical(kind: EntityKind) -> Self {
        let positions = kind
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, i))
            .collect();
        Self { kind, positions }
    }

    pub fn from_header<S: AsRef<str>>(kind: EntityKind, header: &[S]) -> Self {
        let mut positions = HashMap::new();
        let mut unknown = Vec::new();

        for (i, raw) in header.iter().enumerate() {
            let name = raw.as_ref().trim().to_ascii_lowercase();
            match kind.columns().iter().find(|known| **known == name) {
                // 重複欄位以第一個為準
                Some(known) => {
                    positions.entry(*known).or_insert(i);
                }
                None => unknown.push((i, raw.as_ref().trim().to_string())),
            }
        }

        if let Some(missing) = kind
            .mandatory_columns()
            .into_iter()
            .find(|column| !positions.contains_key(column))
        {
            tracing::warn!(
                "{} header does not name column '{}', reading rows in template order",
                kind,
                missing
            );
            return Self::canonical(kind);
        }

        for (i, name) in unknown {
            tracing::warn!("Ignoring unknown {} column '{}' at position {}", kind, name, i + 1);
        }

        // 表頭比資料列短時，其餘位置依範本順序
        for (i, column) in kind.columns().iter().enumerate().skip(header.len()) {
            if !positions.contains_key(column) {
                positions.insert(*column, i);
            }
        }

        for column in kind.columns() {
            if !positions.contains_key(column) {
                tracing::debug!("Column '{}' absent from header, defaults apply", column);
            }
        }

        Self { kind, positions }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}
