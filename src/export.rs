//! CSV and Excel export.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A record that can be written as one table row.
pub trait Tabular {
    /// Sheet and document title.
    const TITLE: &'static str;

    fn headers() -> &'static [&'static str];

    /// Cell values in header order.
    fn cells(&self) -> Vec<String>;
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }

    fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV Files",
            ExportFormat::Excel => "Excel Files",
        }
    }
}

/// Write records as CSV with a header row.
pub fn write_csv<T: Tabular, W: Write>(records: &[T], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(T::headers())?;
    for record in records {
        csv_writer.write_record(record.cells())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export records to a CSV file.
pub fn export_to_csv<T: Tabular>(records: &[T], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, std::io::BufWriter::new(file))?;
    tracing::info!("Exported {} {} rows to {:?}", records.len(), T::TITLE, path);
    Ok(())
}

/// Export records to an Excel workbook.
pub fn export_to_excel<T: Tabular>(records: &[T], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(T::TITLE)?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xB8860B))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = T::headers();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, (header.len() as f64 + 6.0).max(14.0))?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, value) in record.cells().iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    // Autofilter
    if !records.is_empty() && !headers.is_empty() {
        worksheet.autofilter(0, 0, records.len() as u32, (headers.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    tracing::info!("Exported {} {} rows to {:?}", records.len(), T::TITLE, path);
    Ok(())
}

/// Export in the given format.
pub fn export_to<T: Tabular>(records: &[T], format: ExportFormat, path: &Path) -> Result<()> {
    match format {
        ExportFormat::Csv => export_to_csv(records, path),
        ExportFormat::Excel => export_to_excel(records, path),
    }
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str, format: ExportFormat, directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(format.filter_name(), &[format.extension()]);
    if let Some(dir) = directory {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!(
        "{prefix}_{ts}.{ext}",
        ts = now.format("%Y%m%d_%H%M%S"),
        ext = format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event;

    #[test]
    fn test_write_csv_header_and_rows() {
        let events = event::seed();
        let mut buf = Vec::new();
        write_csv(&events, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), events.len() + 1);
        assert!(lines[0].starts_with("Event ID,Title,Date & Time"));
        assert!(lines[1].starts_with("EVT-001,Sunday Service,2025-09-07 09:00"));
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let events = event::seed();
        let mut buf = Vec::new();
        write_csv(&events[..1], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"CT001, JHB001\""));
    }

    #[test]
    fn test_write_csv_empty_collection_has_header_only() {
        let mut buf = Vec::new();
        write_csv::<event::Event, _>(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_export_files() {
        let dir = tempfile::tempdir().unwrap();
        let events = event::seed();

        let csv_path = dir.path().join("events.csv");
        export_to(&events, ExportFormat::Csv, &csv_path).unwrap();
        assert!(std::fs::read_to_string(&csv_path).unwrap().contains("Youth Conference"));

        let xlsx_path = dir.path().join("events.xlsx");
        export_to(&events, ExportFormat::Excel, &xlsx_path).unwrap();
        assert!(std::fs::metadata(&xlsx_path).unwrap().len() > 0);
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("members", ExportFormat::Csv);
        assert!(name.starts_with("members_"));
        assert!(name.ends_with(".csv"));
    }
}
