//! Single-line CSV codec for the import files.
//!
//! The dialect is deliberately permissive: a double quote opens a quoted
//! section wherever it appears outside one, `""` inside a quoted section is a
//! literal quote, and an unterminated quote simply runs to the end of the
//! line. Fields are trimmed. Embedded newlines are not supported; callers
//! split lines first.

/// Splits one CSV line into its fields.
///
/// Never fails. An empty line yields a single empty field, and the number
/// of fields is always the number of commas outside quotes plus one.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',')
        || field.contains('"')
        || field.starts_with(char::is_whitespace)
        || field.ends_with(char::is_whitespace)
}

/// Joins fields into one line that [`parse_csv_line`] reads back unchanged.
pub fn to_csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            if needs_quotes(field) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
