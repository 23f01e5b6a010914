use arherb_common::SpecimenType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arherb")]
#[command(about = "Herbarium label generator: spreadsheet → two-column DOCX", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the label document from a spreadsheet
    Generate {
        /// Input file (.xlsx/.xls/.ods/.csv)
        #[arg(required = true)]
        input: PathBuf,

        /// Herbarium name printed as the label title
        #[arg(short = 'n', long)]
        herbarium: Option<String>,

        /// Specimen type (fungi/vascular-plant/bryophyta)
        #[arg(short = 't', long = "type")]
        specimen_type: Option<SpecimenType>,

        /// Embed a QR code with a map link when coordinates are present
        #[arg(long, overrides_with = "no_qr")]
        qr: bool,

        /// Skip QR codes even when enabled in the settings
        #[arg(long, overrides_with = "qr")]
        no_qr: bool,

        /// Column mapping file (JSON object: field → column)
        #[arg(short, long)]
        columns: Option<PathBuf>,

        /// Column override FIELD=COLUMN (repeatable)
        #[arg(short, long = "map", value_name = "FIELD=COLUMN")]
        map: Vec<String>,

        /// Output file or directory (default: <input>_output.docx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for QR images (default: qr_codes)
        #[arg(long)]
        qr_dir: Option<PathBuf>,
    },

    /// List logical fields and the columns they are read from
    Fields {
        /// Column mapping file to apply
        #[arg(short, long)]
        columns: Option<PathBuf>,
    },

    /// Show or edit stored defaults
    Config {
        /// Default herbarium name
        #[arg(long)]
        set_herbarium: Option<String>,

        /// Default specimen type
        #[arg(long)]
        set_type: Option<SpecimenType>,

        /// Include QR codes by default (true/false)
        #[arg(long)]
        set_qr: Option<bool>,

        /// Default QR image directory
        #[arg(long)]
        set_qr_dir: Option<PathBuf>,

        /// Default column override FIELD=COLUMN (repeatable, empty COLUMN resets)
        #[arg(long, value_name = "FIELD=COLUMN")]
        set_map: Vec<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "arherb", "generate", "moss.xlsx", "-n", "MHA", "-t", "bryophyta", "--qr",
            "--map", "family=Семейство", "--map", "N=lat",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { input, herbarium, specimen_type, qr, map, output, .. } => {
                assert_eq!(input, PathBuf::from("moss.xlsx"));
                assert_eq!(herbarium.as_deref(), Some("MHA"));
                assert_eq!(specimen_type, Some(SpecimenType::Bryophyta));
                assert!(qr);
                assert_eq!(map, vec!["family=Семейство", "N=lat"]);
                assert!(output.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_no_qr() {
        let cli = Cli::try_parse_from(["arherb", "generate", "a.xlsx", "--qr", "--no-qr"]).unwrap();
        match cli.command {
            Commands::Generate { qr, no_qr, .. } => {
                assert!(!qr);
                assert!(no_qr);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from(["arherb", "generate", "a.xlsx", "-t", "lichen"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["arherb", "-v", "config", "--set-qr", "true", "--show"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config { set_qr: Some(true), show: true, .. }));
    }
}
