use crate::utils::error::{ImportError, Result};

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based data row index, header excluded.
    pub number: usize,
    pub line: String,
}

/// Header line plus the non-blank data lines of an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub header: String,
    pub rows: Vec<SourceRow>,
}

/// Decodes raw file or stdin bytes; `source_name` only labels the error.
pub fn decode_utf8(source_name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ImportError::InvalidEncodingError {
        source_name: source_name.to_string(),
        reason: e.utf8_error().to_string(),
    })
}

pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn split_rows(content: &str) -> Result<CsvDocument> {
    let normalized = normalize_line_endings(strip_bom(content));
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(ImportError::EmptyInputError);
    }

    let mut lines = trimmed.split('\n');
    let header = lines.next().unwrap_or_default().trim().to_string();

    let rows: Vec<SourceRow> = lines
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            (!line.is_empty()).then(|| SourceRow {
                number: i + 1,
                line: line.to_string(),
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(ImportError::MissingDataRowsError);
    }

    tracing::debug!("Split CSV into header + {} data rows", rows.len());
    Ok(CsvDocument { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, ErrorSeverity};

    #[test]
    fn test_decode_utf8_rejects_non_utf8_as_input_error() {
        // "Caf\xe9" as Latin-1
        let err = decode_utf8("products.csv", vec![0x43, 0x61, 0x66, 0xe9]).unwrap_err();
        assert!(matches!(
            &err,
            ImportError::InvalidEncodingError { source_name, .. } if source_name == "products.csv"
        ));
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);

        assert_eq!(decode_utf8("-", b"sku,name".to_vec()).unwrap(), "sku,name");
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}sku,name"), "sku,name");
        assert_eq!(strip_bom("sku,name"), "sku,name");
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_split_rows_skips_blank_lines_but_keeps_numbering() {
        let doc = split_rows("\u{feff}sku,name\r\nA,1\r\n\r\nB,2\r\n").unwrap();
        assert_eq!(doc.header, "sku,name");
        assert_eq!(
            doc.rows,
            vec![
                SourceRow { number: 1, line: "A,1".to_string() },
                SourceRow { number: 3, line: "B,2".to_string() },
            ]
        );
    }

    #[test]
    fn test_split_rows_errors() {
        assert!(matches!(split_rows("  \n \r\n"), Err(ImportError::EmptyInputError)));
        assert!(matches!(
            split_rows("sku,name\n\n"),
            Err(ImportError::MissingDataRowsError)
        ));
    }
}
