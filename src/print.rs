//! Print-formatted HTML rendering of the visible table.
//!
//! The document calls `window.print()` once loaded, so opening it in the
//! system browser brings up the print dialog.

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::Tabular;

/// Escape text for inclusion in HTML.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render records as a standalone printable HTML page.
pub fn render_html<T: Tabular>(organization: &str, records: &[&T]) -> String {
    let title = format!("Print {}", T::TITLE);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{}</title>", escape_html(&title)));
    html.push_str(
        "<style>body{font-family:sans-serif;margin:24px}h1{font-size:20px}\
         h2{font-size:14px;color:#666;font-weight:normal}\
         table{border-collapse:collapse;width:100%;font-size:12px}\
         th,td{border:1px solid #ccc;padding:4px 8px;text-align:left;vertical-align:top}\
         th{background:#f3f3f3}</style>",
    );
    html.push_str("</head><body onload=\"window.print()\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(organization)));
    html.push_str(&format!(
        "<h2>{} &middot; printed {}</h2>\n",
        escape_html(T::TITLE),
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    html.push_str("<table>\n<thead><tr>");
    for header in T::headers() {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    if records.is_empty() {
        html.push_str(&format!(
            "<tr><td colspan=\"{}\">No records found.</td></tr>\n",
            T::headers().len()
        ));
    }
    for record in records {
        html.push_str("<tr>");
        for cell in record.cells() {
            html.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n</body></html>\n");
    html
}

/// Write the printable page to the temp directory and return its path.
pub fn write_print_file<T: Tabular>(organization: &str, records: &[&T], dir: &Path) -> Result<PathBuf> {
    let name = format!(
        "{}_print_{}.html",
        T::TITLE.to_lowercase().replace(' ', "_"),
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(name);
    std::fs::write(&path, render_html(organization, records))?;
    Ok(path)
}

/// Open a file with the platform's default viewer.
pub fn open_with_system(path: &Path) -> Result<()> {
    open::that_detached(path)?;
    Ok(())
}

/// Render, save and open the print view for `records`.
pub fn print_records<T: Tabular>(organization: &str, records: &[&T]) -> Result<PathBuf> {
    let path = write_print_file(organization, records, &std::env::temp_dir())?;
    open_with_system(&path)?;
    tracing::info!("Opened print view for {} {} rows: {:?}", records.len(), T::TITLE, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prayer;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_render_html_contains_rows_and_print_call() {
        let requests = prayer::seed();
        let refs: Vec<_> = requests.iter().collect();
        let html = render_html("Grace Community", &refs);

        assert!(html.contains("<title>Print Prayer Requests</title>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("<td>PRQ-003</td>"));
        assert_eq!(html.matches("<tr>").count(), requests.len() + 1);
    }

    #[test]
    fn test_render_html_empty_table() {
        let html = render_html::<prayer::PrayerRequest>("Grace Community", &[]);
        assert!(html.contains("No records found."));
    }

    #[test]
    fn test_write_print_file() {
        let dir = tempfile::tempdir().unwrap();
        let requests = prayer::seed();
        let refs: Vec<_> = requests.iter().take(1).collect();

        let path = write_print_file("Grace Community", &refs, dir.path()).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("prayer_requests_print_"));
        assert!(std::fs::read_to_string(path).unwrap().contains("John Doe"));
    }
}
