use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "libcat",
    about = "Library catalog console: shelves, books, readers and snapshots",
    version,
)]
pub struct Cli {
    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive catalog menu
    Menu(MenuArgs),
    /// Save the sample report, restore it and print both
    ReportDemo(ReportDemoArgs),
    /// Print a saved library snapshot
    Show(ShowArgs),
}

#[derive(Args, Default)]
pub struct MenuArgs {
    /// Start with an empty library instead of the sample catalog
    #[arg(long)]
    pub empty: bool,
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportDemoArgs {
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    #[arg(long)]
    pub summary: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_subcommand() {
        let cli = Cli::try_parse_from(["libcat"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_menu_empty() {
        let cli = Cli::try_parse_from(["libcat", "menu", "--empty"]).unwrap();
        if let Some(Command::Menu(args)) = cli.command {
            assert!(args.empty);
            assert!(args.snapshot.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_menu_snapshot() {
        let cli = Cli::try_parse_from(["libcat", "menu", "--snapshot", "/tmp/lib.ser"]).unwrap();
        if let Some(Command::Menu(args)) = cli.command {
            assert_eq!(args.snapshot, Some(PathBuf::from("/tmp/lib.ser")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_report_demo() {
        let cli = Cli::try_parse_from(["libcat", "report-demo", "--summary", "Weekly"]).unwrap();
        if let Some(Command::ReportDemo(args)) = cli.command {
            assert_eq!(args.summary, Some("Weekly".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_show_json() {
        let cli = Cli::try_parse_from(["libcat", "show", "--format", "json"]).unwrap();
        if let Some(Command::Show(args)) = cli.command {
            assert!(matches!(args.format, OutputFormat::Json));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["libcat", "show", "--verbose", "-c", "libcat.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("libcat.toml")));
    }
}
