//! Field list to import record adapters.

use crate::core::schema::{ColumnMap, EntityKind};
use crate::domain::model::{ProductImportRow, SkipReason, UserImportRow, UserRole};

/// A parsed data row seen through the file's column map.
pub struct RowFields<'a> {
    fields: &'a [String],
    columns: &'a ColumnMap,
}

impl<'a> RowFields<'a> {
    pub fn new(fields: &'a [String], columns: &'a ColumnMap) -> Self {
        Self { fields, columns }
    }

    /// Trimmed value of `column`, or `""` when the header or the row lacks it.
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .position(column)
            .and_then(|i| self.fields.get(i))
            .map(|v| v.trim())
            .unwrap_or("")
    }

    pub fn get_or(&self, column: &str, default: &'a str) -> &'a str {
        match self.get(column) {
            "" => default,
            value => value,
        }
    }

    pub fn required(&self, column: &'static str) -> Result<&'a str, SkipReason> {
        match self.get(column) {
            "" => Err(SkipReason::MissingField(column)),
            value => Ok(value),
        }
    }

    pub fn int(&self, column: &str) -> i64 {
        parse_int_prefix(self.get(column))
    }

    pub fn decimal(&self, column: &str) -> f64 {
        parse_decimal_prefix(self.get(column))
    }
}

/// Leading integer of `raw`, `0` when there is none.
pub fn parse_int_prefix(raw: &str) -> i64 {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    s[..sign_len + digits].parse().unwrap_or(0)
}

/// Longest leading decimal number of `raw`, `0.0` when there is none.
pub fn parse_decimal_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Shortest password the backend accepts for a new account.
pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain.tld` with no whitespace. Enough to keep one malformed
/// address from failing the whole request.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// A typed row that can be built from a parsed CSV line.
pub trait ImportRecord: Sized {
    const KIND: EntityKind;

    fn from_fields(row: &RowFields<'_>) -> Result<Self, SkipReason>;
}

impl ImportRecord for UserImportRow {
    const KIND: EntityKind = EntityKind::Users;

    fn from_fields(row: &RowFields<'_>) -> Result<Self, SkipReason> {
        let employee_number = row.required("employee_number")?;
        let email = row.required("email")?;
        if !is_plausible_email(email) {
            return Err(SkipReason::InvalidEmail(email.to_string()));
        }
        // 後端任一列驗證失敗會拒絕整批，先在本地擋下
        let password = row.required("password")?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SkipReason::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        let name = row.required("name")?;
        let role = match row.get("role") {
            "" => UserRole::default(),
            raw => raw.parse().map_err(SkipReason::InvalidRole)?,
        };

        Ok(UserImportRow {
            employee_number: employee_number.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role,
            company_code: row.get("company_code").to_string(),
            cost_center: row.get("cost_center").to_string(),
            department: row.get("department").to_string(),
        })
    }
}

impl ImportRecord for ProductImportRow {
    const KIND: EntityKind = EntityKind::Products;

    fn from_fields(row: &RowFields<'_>) -> Result<Self, SkipReason> {
        let sku = row.required("sku")?;
        let name = row.required("name")?;

        Ok(ProductImportRow {
            sku: sku.to_string(),
            name: name.to_string(),
            category: row.get("category").to_string(),
            model: row.get("model").to_string(),
            specification: row.get("specification").to_string(),
            supplier: row.get("supplier").to_string(),
            supplier_code: row.get("supplier_code").to_string(),
            price: row.decimal("price"),
            currency: row.get_or("currency", "USD").to_string(),
            stock: row.int("stock"),
            min_stock: row.int("min_stock"),
            max_stock: row.int("max_stock"),
            location: row.get("location").to_string(),
            description: row.get("description").to_string(),
            is_active: !row.get("is_active").eq_ignore_ascii_case("false"),
            is_ecommerce: row.get("is_ecommerce").eq_ignore_ascii_case("true"),
            product_url: row.get("product_url").to_string(),
            brand: row.get("brand").to_string(),
            asin: row.get("asin").to_string(),
        })
    }
}
