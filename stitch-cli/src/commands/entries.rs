//! Entries command implementation.
//!
//! This module implements the `entries` command, which displays the
//! discovered entry templates in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_settings, shorten_path, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::Path;
use stitch::{discover_site_entries, Config, Entry, SiteSettings};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 3] = ["template", "output", "output_file"];

/// List the entry templates and their output files.
#[derive(Args)]
pub struct EntriesCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "STITCH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Output format for the entries command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl EntriesCommand {
    /// Execute the entries command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global, Config::default())?;
        let mut entries = discover_site_entries(&settings)?;
        entries.sort_by(|a, b| a.output.cmp(&b.output));

        match self.format {
            OutputFormat::Table => format_as_table(&entries, &settings, self.show_full_paths)?,
            OutputFormat::Json => format_as_json(&entries, &settings)?,
            OutputFormat::Csv => format_as_delimited(&entries, &settings, b',')?,
            OutputFormat::Tsv => format_as_delimited(&entries, &settings, b'\t')?,
        }

        Ok(())
    }
}

fn display(path: &Path, settings: &SiteSettings, show_full: bool) -> String {
    if show_full {
        path.display().to_string()
    } else {
        shorten_path(path, &settings.project_root)
    }
}

/// Format entries as a human-readable table.
fn format_as_table(
    entries: &[Entry],
    settings: &SiteSettings,
    show_full: bool,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for entry in entries {
        writeln!(
            handle,
            "{}\t{}\t{}",
            display(&entry.template, settings, show_full),
            entry.output,
            display(&entry.output_file(&settings.output_dir), settings, show_full),
        )?;
    }

    Ok(())
}

/// Format entries as JSON.
fn format_as_json(entries: &[Entry], settings: &SiteSettings) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "template": e.template.display().to_string(),
                "output": e.output,
                "output_file": e.output_file(&settings.output_dir).display().to_string(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data).map_err(|e| CliError::Io(e.into()))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format entries as delimited output (CSV or TSV).
fn format_as_delimited(
    entries: &[Entry],
    settings: &SiteSettings,
    delimiter: u8,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for entry in entries {
        writer
            .write_record([
                entry.template.display().to_string(),
                entry.output.clone(),
                entry.output_file(&settings.output_dir).display().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
