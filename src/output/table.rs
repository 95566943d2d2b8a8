use std::io::Write;

use crate::error::Result;
use crate::languages::LanguageDescriptor;
use crate::metrics::ScanResult;

/// Writes the scan report as blocks of column-aligned rows: scanned path,
/// per-file metrics, per-language metrics, the project total, and per-file
/// errors when any occurred.
pub fn write_table(writer: &mut dyn Write, result: &ScanResult) -> Result<()> {
    write_aligned(
        writer,
        &[vec![
            "SCANNED PATH".to_string(),
            result.scanned_path.clone(),
        ]],
    )?;
    writeln!(writer)?;

    let mut file_rows = vec![header_row(&[
        "FILE", "LANGUAGE", "TOTAL", "CODE", "COMMENT", "BLANK",
    ])];
    for file in &result.files {
        file_rows.push(vec![
            file.path.clone(),
            file.language.clone(),
            file.metrics.total.to_string(),
            file.metrics.code.to_string(),
            file.metrics.comment.to_string(),
            file.metrics.blank.to_string(),
        ]);
    }
    write_aligned(writer, &file_rows)?;
    writeln!(writer)?;

    let mut language_rows = vec![header_row(&[
        "LANGUAGE", "FILES", "TOTAL", "CODE", "COMMENT", "BLANK",
    ])];
    for language in &result.languages {
        language_rows.push(vec![
            language.language.clone(),
            language.files.to_string(),
            language.metrics.total.to_string(),
            language.metrics.code.to_string(),
            language.metrics.comment.to_string(),
            language.metrics.blank.to_string(),
        ]);
    }
    write_aligned(writer, &language_rows)?;
    writeln!(writer)?;

    write_aligned(
        writer,
        &[vec![
            "TOTAL".to_string(),
            result.total.files.to_string(),
            result.total.metrics.total.to_string(),
            result.total.metrics.code.to_string(),
            result.total.metrics.comment.to_string(),
            result.total.metrics.blank.to_string(),
        ]],
    )?;

    if !result.errors.is_empty() {
        writeln!(writer)?;
        let mut error_rows = vec![header_row(&["ERROR FILE", "MESSAGE"])];
        for error in &result.errors {
            error_rows.push(vec![error.path.clone(), error.error.clone()]);
        }
        write_aligned(writer, &error_rows)?;
    }

    Ok(())
}

/// Writes the `language` subcommand table: one row per registered language
/// with its comma-separated extensions.
pub fn write_language_table(
    writer: &mut dyn Write,
    languages: &[LanguageDescriptor],
) -> Result<()> {
    let mut rows = vec![header_row(&["LANGUAGE", "EXTENSIONS"])];
    for language in languages {
        rows.push(vec![language.name.clone(), language.extensions.join(", ")]);
    }
    write_aligned(writer, &rows)
}

fn header_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

/// Pads every column of a block to its widest cell, two-space gutter. Each
/// block aligns independently, the way tabwriter sections do.
fn write_aligned(writer: &mut dyn Write, rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if widths.len() <= idx {
                widths.push(0);
            }
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (idx, cell) in row.iter().enumerate() {
            if idx + 1 == row.len() {
                line.push_str(cell);
            } else {
                let pad = widths[idx] - cell.chars().count();
                line.push_str(cell);
                line.extend(std::iter::repeat_n(' ', pad + 2));
            }
        }
        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
