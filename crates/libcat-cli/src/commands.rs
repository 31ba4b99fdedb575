use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use libcat_catalog::{sample_library, sample_report};
use libcat_snapshot::{decode_snapshot, encode_snapshot, Snapshot};
use libcat_types::{Library, LibraryReport};

use crate::cli::*;
use crate::config::CliConfig;
use crate::menu::Menu;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    match cli.command.unwrap_or_else(|| Command::Menu(MenuArgs::default())) {
        Command::Menu(args) => cmd_menu(&config, args, io::stdin().lock(), stdout.lock()),
        Command::ReportDemo(args) => cmd_report_demo(&config, args, &mut stdout.lock()),
        Command::Show(args) => cmd_show(&config, args, &mut stdout.lock()),
    }
}

fn cmd_menu(config: &CliConfig, args: MenuArgs, input: impl BufRead, output: impl Write) -> anyhow::Result<()> {
    let library = if args.empty || !config.seed_sample_data {
        Library::new(config.library_name.as_str())
    } else {
        sample_library(&config.library_name)?
    };
    let snapshot = args.snapshot.unwrap_or_else(|| config.library_snapshot.clone());
    Menu::new(input, output, library, snapshot).run()
}

fn cmd_report_demo(config: &CliConfig, args: ReportDemoArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let summary = args.summary.unwrap_or_else(|| config.report_summary.clone());
    let path = args.snapshot.unwrap_or_else(|| config.report_snapshot.clone());
    let report = sample_report(&summary)?;

    match encode_snapshot(&report, &path) {
        Ok(()) => writeln!(out, "{} Library report serialized successfully.", "✓".green().bold())?,
        Err(e) => writeln!(out, "{} Serialization failed: {e}", "Error:".red().bold())?,
    }

    match decode_snapshot::<LibraryReport>(&path) {
        Ok(restored) => {
            writeln!(out, "Original Report:")?;
            writeln!(out, "{report}")?;
            writeln!(out, "\nRestored Report:")?;
            writeln!(out, "{restored}")?;
        }
        Err(e) => writeln!(out, "{} Failed to restore report: {e}", "Error:".red().bold())?,
    }
    Ok(())
}

fn cmd_show(config: &CliConfig, args: ShowArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let path = args.snapshot.unwrap_or_else(|| config.library_snapshot.clone());
    let library: Library = decode_snapshot(&path)
        .with_context(|| format!("loading library snapshot {}", path.display()))?;
    match args.format {
        OutputFormat::Text => writeln!(out, "{library}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&library.project())?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> CliConfig {
        CliConfig {
            library_snapshot: dir.path().join("library.ser"),
            report_snapshot: dir.path().join("library_report.ser"),
            ..CliConfig::default()
        }
    }

    #[test]
    fn report_demo_prints_original_and_restored() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let args = ReportDemoArgs { snapshot: None, summary: Some("Weekly".into()) };

        let mut out = Vec::new();
        cmd_report_demo(&config, args, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(config.report_snapshot.exists());
        assert!(out.contains("Library report serialized successfully."));
        let (original, restored) = out.split_once("Restored Report:").unwrap();
        assert!(original.contains("Name: Alice Johnson, Registration Number: 12345"));
        assert!(original.contains("Total Readers in the Library: 1"));
        assert!(restored.contains("Library Report: Weekly"));
        assert!(restored.contains("Book Storages: none"));
        assert!(restored.contains("No readers in the library."));
    }

    #[test]
    fn report_demo_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let args = ReportDemoArgs {
            snapshot: Some(dir.path().join("missing").join("report.ser")),
            summary: None,
        };

        let mut out = Vec::new();
        cmd_report_demo(&config, args, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Serialization failed"));
        assert!(out.contains("Failed to restore report"));
    }

    #[test]
    fn menu_starts_empty_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let args = MenuArgs { empty: true, snapshot: None };

        let mut out = Vec::new();
        cmd_menu(&config, args, Cursor::new("2\n3\n4\n6\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Total Readers in the Library: 0"));
    }

    #[test]
    fn menu_saves_to_configured_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let mut out = Vec::new();
        cmd_menu(&config, MenuArgs::default(), Cursor::new("3\n6\n"), &mut out).unwrap();
        assert!(config.library_snapshot.exists());
    }

    #[test]
    fn show_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let library = sample_library("City Library").unwrap();
        encode_snapshot(&library, &config.library_snapshot).unwrap();

        let mut out = Vec::new();
        let args = ShowArgs { snapshot: None, format: OutputFormat::Text };
        cmd_show(&config, args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{library}\n"));

        let mut out = Vec::new();
        let args = ShowArgs { snapshot: None, format: OutputFormat::Json };
        cmd_show(&config, args, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["name"], "City Library");
        assert_eq!(json["readers"][0]["registration_number"], 12345);
    }

    #[test]
    fn show_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let args = ShowArgs {
            snapshot: Some(dir.path().join("absent.ser")),
            format: OutputFormat::Text,
        };
        let mut out = Vec::new();
        assert!(cmd_show(&config, args, &mut out).is_err());
        assert!(out.is_empty());
    }
}
