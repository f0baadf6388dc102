use crate::core::csv_line::to_csv_line;
use crate::core::schema::EntityKind;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

const USER_EXAMPLES: [&[&str]; 2] = [
    &[
        "EMP001",
        "john.doe@company.com",
        "Password123",
        "John Doe",
        "employee",
        "COMP01",
        "CC001",
        "Engineering",
    ],
    &[
        "EMP002",
        "jane.smith@company.com",
        "Password123",
        "Jane Smith",
        "purchase_admin",
        "COMP01",
        "CC002",
        "Purchasing",
    ],
];

const PRODUCT_EXAMPLES: [&[&str]; 2] = [
    &[
        "SKU001",
        "Wireless Mouse",
        "Electronics",
        "WM-100",
        "2.4GHz, wireless",
        "Logitech",
        "LOG-001",
        "25.99",
        "USD",
        "100",
        "10",
        "500",
        "Warehouse A",
        "Ergonomic, wireless mouse",
        "true",
        "true",
        "https://amazon.com/dp/B123",
        "Logitech",
        "B0123456",
    ],
    &[
        "SKU002",
        "USB Cable",
        "Accessories",
        "USB-C-1M",
        "USB-C to USB-A 1m",
        "Anker",
        "ANK-002",
        "12.50",
        "USD",
        "200",
        "20",
        "1000",
        "Warehouse B",
        "High speed charging cable",
        "true",
        "false",
        "",
        "",
        "",
    ],
];

/// Header row plus two example rows, LF separated.
pub fn template_content(kind: EntityKind) -> String {
    let examples = match kind {
        EntityKind::Users => USER_EXAMPLES,
        EntityKind::Products => PRODUCT_EXAMPLES,
    };

    std::iter::once(kind.columns())
        .chain(examples)
        .map(to_csv_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the template under its conventional filename and returns that name.
pub async fn write_template<S: Storage>(storage: &S, kind: EntityKind) -> Result<&'static str> {
    let filename = kind.template_filename();
    storage
        .write_file(filename, template_content(kind).as_bytes())
        .await?;
    tracing::info!("Wrote {} template to {}", kind, filename);
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::build_batch;
    use crate::domain::model::{ProductImportRow, UserImportRow, UserRole};

    #[test]
    fn test_user_template() {
        let content = template_content(EntityKind::Users);
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines[0],
            "employee_number,email,password,name,role,company_code,cost_center,department"
        );
        assert_eq!(lines.len(), 3);

        let batch = build_batch::<UserImportRow>(&content).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records[1].role, UserRole::PurchaseAdmin);
    }

    #[test]
    fn test_product_template_quotes_embedded_commas() {
        let content = template_content(EntityKind::Products);
        assert!(content.contains("\"2.4GHz, wireless\""));

        let batch = build_batch::<ProductImportRow>(&content).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records[0].specification, "2.4GHz, wireless");
        assert!(batch.records[0].is_ecommerce);
        assert!(!batch.records[1].is_ecommerce);
        assert_eq!(batch.records[1].price, 12.5);
    }
}
