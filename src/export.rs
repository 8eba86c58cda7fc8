//! Report Export
//!
//! One-shot client-side file generation for the reports screen. The
//! builders are pure; `download` hands the artifact to the browser.

use wasm_bindgen::JsValue;

/// Build a CSV document from a header row and data rows
pub fn csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_csv_row(&mut out, headers.iter().map(|h| h.to_string()));
    for row in rows {
        push_csv_row(&mut out, row.iter().cloned());
    }
    out
}

fn push_csv_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&csv_field(&field));
    }
    out.push_str("\r\n");
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// An HTML table document — spreadsheet applications open it directly
pub fn spreadsheet(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from("<html><head><meta charset=\"utf-8\"></head><body><table>");
    out.push_str(&format!("<caption>{}</caption><tr>", html_escape(title)));
    for header in headers {
        out.push_str(&format!("<th>{}</th>", html_escape(header)));
    }
    out.push_str("</tr>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table></body></html>");
    out
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Offer `content` as a downloadable file via a temporary object URL
pub fn download(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("url: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("anchor: {:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_contains_all_rows() {
        let rows = vec![
            vec!["Jan 2025".to_string(), "120".to_string()],
            vec!["Feb 2025".to_string(), "95".to_string()],
        ];
        let doc = csv(&["Period", "New users"], &rows);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Period,New users");
        assert_eq!(lines[1], "Jan 2025,120");
        assert_eq!(lines[2], "Feb 2025,95");
    }

    #[test]
    fn test_csv_escaping() {
        let rows = vec![vec!["a,b".to_string(), "say \"hi\"".to_string()]];
        let doc = csv(&["x", "y"], &rows);
        assert!(doc.contains("\"a,b\""));
        assert!(doc.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_spreadsheet_escapes_markup() {
        let rows = vec![vec!["<script>".to_string()]];
        let doc = spreadsheet("Report", &["col"], &rows);
        assert!(doc.contains("&lt;script&gt;"));
        assert!(!doc.contains("<script>"));
    }
}
