use anyhow::Result;
use httpmock::prelude::*;
use procure_import::domain::model::{UserImportRow, UserRole};
use procure_import::domain::ports::ImportBackend;
use procure_import::{ApiSettings, EntityKind, HttpBackend, ImportEngine, ImportError};

const PRODUCTS_CSV: &str = "\u{feff}sku,name,category,model,specification,supplier,supplier_code,price,currency,stock,min_stock,max_stock,location,description,is_active,is_ecommerce,product_url,brand,asin\r\n\
SKU001,Wireless Mouse,Electronics,WM-100,\"2.4GHz, wireless\",Logitech,LOG-001,25.99,USD,100,10,500,Warehouse A,\"Ergonomic, wireless mouse\",true,true,https://amazon.com/dp/B123,Logitech,B0123456\r\n\
,Nameless Widget,Misc\r\n\
SKU002,USB Cable,Accessories,USB-C-1M,USB-C to USB-A 1m,Anker,ANK-002,12.50,USD,200,20,1000,Warehouse B,High speed charging cable,true,false,,,\r\n";

fn settings(server: &MockServer) -> ApiSettings {
    ApiSettings {
        endpoint: server.url("/api/v1/"),
        token: Some("admin-token".to_string()),
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_product_import_end_to_end() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/products/bulk-import")
            .header("Authorization", "Bearer admin-token")
            .body_contains("\"specification\":\"2.4GHz, wireless\"")
            .body_contains("\"price\":25.99")
            .body_contains("\"is_ecommerce\":true");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "message": "Bulk import completed",
                "data": {
                    "total": 2,
                    "success": 1,
                    "failed": 1,
                    "results": [
                        {"row": 1, "sku": "SKU001", "name": "Wireless Mouse", "success": true},
                        {"row": 2, "sku": "SKU002", "name": "USB Cable", "success": false,
                         "error": "SKU already exists"}
                    ]
                }
            }));
    });

    let engine = ImportEngine::new(HttpBackend::new(&settings(&server))?);
    let report = engine.run(EntityKind::Products, PRODUCTS_CSV).await?;

    api_mock.assert();
    assert_eq!(report.submitted, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].row, 2);

    let text = report.render();
    assert!(text.contains("Total: 2  Imported: 1  Failed: 1  Skipped: 1"));
    assert!(text.contains("FAILED  row 2 SKU002 (USB Cable): SKU already exists"));
    assert!(text.contains("SKIPPED row 2: missing required field 'sku'"));
    Ok(())
}

#[tokio::test]
async fn test_user_payload_shape() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/users/bulk-import")
            .json_body(serde_json::json!({
                "users": [{
                    "employee_number": "EMP002",
                    "email": "jane.smith@company.com",
                    "password": "Password123",
                    "name": "Jane Smith",
                    "role": "employee",
                    "company_code": "COMP01",
                    "cost_center": "CC002",
                    "department": ""
                }]
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "data": {
                "total": 1,
                "success": 1,
                "failed": 0,
                "results": [{
                    "employee_number": "EMP002",
                    "email": "jane.smith@company.com",
                    "success": true
                }]
            }
        }));
    });

    let backend = HttpBackend::new(&settings(&server))?;
    let users = vec![UserImportRow {
        employee_number: "EMP002".to_string(),
        email: "jane.smith@company.com".to_string(),
        password: "Password123".to_string(),
        name: "Jane Smith".to_string(),
        role: UserRole::Employee,
        company_code: "COMP01".to_string(),
        cost_center: "CC002".to_string(),
        department: String::new(),
    }];

    let summary = backend.bulk_import_users(&users).await?;

    api_mock.assert();
    assert_eq!(summary.total, 1);
    assert!(summary.results[0].success);
    assert_eq!(summary.results[0].error, None);
    Ok(())
}

#[tokio::test]
async fn test_rejected_request_reports_backend_message() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/users/bulk-import");
        then.status(400).json_body(serde_json::json!({
            "success": false,
            "error": {"code": "BAD_REQUEST", "message": "Invalid request: users is required"}
        }));
    });

    let engine = ImportEngine::new(HttpBackend::new(&settings(&server))?);
    let err = engine
        .run_users("employee_number,email,password,name\nEMP001,john@company.com,Password123,John\n")
        .await
        .unwrap_err();

    api_mock.assert();
    match err {
        ImportError::BackendError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid request: users is required");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_server_error_without_envelope() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/products/bulk-import");
        then.status(502).body("<html>bad gateway</html>");
    });

    let engine = ImportEngine::new(HttpBackend::new(&settings(&server))?);
    let err = engine
        .run_products("sku,name\nSKU1,Mouse\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::BackendError { status: 502, .. }));
    assert_eq!(err.user_friendly_message(), "Failed to import: Bad Gateway");
    Ok(())
}

#[tokio::test]
async fn test_no_valid_rows_makes_no_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/products/bulk-import");
        then.status(200);
    });

    let engine = ImportEngine::new(HttpBackend::new(&settings(&server))?);
    let err = engine
        .run_products("sku,name\n,Nameless\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::NoValidRowsError { skipped: 1 }));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() -> Result<()> {
    let settings = ApiSettings {
        endpoint: "http://127.0.0.1:9/api/v1".to_string(),
        token: None,
        timeout_seconds: 2,
    };

    let engine = ImportEngine::new(HttpBackend::new(&settings)?);
    let err = engine
        .run_users("employee_number,email,password,name\nEMP001,john@company.com,Password123,John\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::ApiError(_)));
    Ok(())
}
