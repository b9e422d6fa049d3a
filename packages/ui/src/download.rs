//! Browser file download for generated text (CSV exports) and printable
//! HTML reports (PDF exports through the print dialog).

use dioxus::prelude::*;

const DOWNLOAD_BRIDGE: &str = r#"
const [filename, mime, content] = await dioxus.recv();
const url = URL.createObjectURL(new Blob([content], { type: mime }));
const link = document.createElement("a");
link.href = url;
link.download = filename;
document.body.appendChild(link);
link.click();
document.body.removeChild(link);
URL.revokeObjectURL(url);
"#;

/// Offer `content` to the user as a CSV file called `filename`.
pub fn download_csv(filename: &str, content: String) -> Result<(), document::EvalError> {
    let bridge = document::eval(DOWNLOAD_BRIDGE);
    bridge.send((filename.to_string(), "text/csv;charset=utf-8;".to_string(), content))
}

const PRINT_BRIDGE: &str = r#"
const html = await dioxus.recv();
const popup = window.open("", "_blank", "width=1100,height=750");
if (!popup) {
    dioxus.send(false);
} else {
    popup.document.write(html);
    popup.document.close();
    popup.focus();
    popup.print();
    dioxus.send(true);
}
"#;

const REPORT_STYLE: &str = "body { font-family: Arial, sans-serif; margin: 24px; color: #111827; } \
h1, h2 { margin: 0 0 8px 0; } \
p { margin: 0 0 12px 0; color: #4b5563; } \
table { width: 100%; border-collapse: collapse; margin-bottom: 18px; font-size: 12px; } \
th, td { border: 1px solid #d1d5db; padding: 8px; text-align: left; vertical-align: top; } \
th { background: #f3f4f6; }";

/// Open `body` as a titled report in a popup and start printing it.
///
/// Resolves to `false` when the browser blocked the popup.
pub async fn print_report(title: &str, body: &str) -> Result<bool, document::EvalError> {
    let mut bridge = document::eval(PRINT_BRIDGE);
    bridge.send(report_document(title, body))?;
    bridge.recv::<bool>().await
}

/// A standalone HTML page around an already escaped report body.
pub fn report_document(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title><style>{REPORT_STYLE}</style></head><body>{body}</body></html>",
        escape_html(title)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `<table>` with escaped cells; an empty `rows` renders one `empty` row.
pub fn html_table(headers: &[&str], rows: &[Vec<String>], empty: &str) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = if rows.is_empty() {
        format!("<tr><td colspan='{}'>{}</td></tr>", headers.len(), escape_html(empty))
    } else {
        rows.iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect()
    };
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}

/// One CSV line with every field quoted.
pub fn csv_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_quotes_and_escapes() {
        assert_eq!(csv_row(["a", "b c"]), r#""a","b c""#);
        assert_eq!(csv_row([r#"say "hi""#]), r#""say ""hi""""#);
        assert_eq!(csv_row([]), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;");
        assert_eq!(escape_html("O'Neil"), "O&#39;Neil");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_html_table_rows_and_empty() {
        let rows = vec![vec!["2025-01-02".to_string(), "<script>".to_string()]];
        let table = html_table(&["Date", "Title"], &rows, "Nothing");
        assert!(table.contains("<th>Date</th><th>Title</th>"));
        assert!(table.contains("<tr><td>2025-01-02</td><td>&lt;script&gt;</td></tr>"));

        let empty = html_table(&["Date", "Title"], &[], "Nothing");
        assert!(empty.contains("<tr><td colspan='2'>Nothing</td></tr>"));
    }

    #[test]
    fn test_report_document_escapes_title() {
        let doc = report_document("A & B", "<p>x</p>");
        assert!(doc.starts_with("<html><head><title>A &amp; B</title>"));
        assert!(doc.ends_with("<body><p>x</p></body></html>"));
    }
}
