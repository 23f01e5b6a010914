use anyhow::Context;
use arherb::{cli, config, error, logging, pipeline};
use arherb_common::{FieldMapping, LogicalField};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, RunOverrides};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load().context("failed to load settings")?;

    match cli.command {
        Commands::Generate {
            input, herbarium, specimen_type, qr, no_qr, columns, map, output, qr_dir,
        } => {
            println!("🌿 arherb - label generation\n");

            let overrides = RunOverrides {
                herbarium_name: herbarium,
                specimen_type,
                include_qr: match (qr, no_qr) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                columns: column_overrides(columns.as_deref(), &map)?,
                qr_dir,
            };
            let run_config = config.herbarium_config(&overrides)?;
            let options = pipeline::GenerateOptions {
                input,
                output,
                qr_dir: config.qr_dir(&overrides),
            };

            println!("- Herbarium: {}", run_config.herbarium_name());
            println!("- Specimen type: {}", run_config.specimen_type());
            println!("- QR codes: {}", if run_config.include_qr() { "on" } else { "off" });
            if !run_config.mapping().is_default() {
                println!("- Custom column mapping");
            }
            println!();

            println!("[1/2] Building labels from {}...", options.input.display());
            let summary = pipeline::generate_document(&run_config, &options)?;
            println!("✔ {} labels in {} rows", summary.labels, summary.rows);
            if run_config.include_qr() {
                println!("✔ {} QR codes in {}", summary.qr_codes, options.qr_dir.display());
            }

            println!("[2/2] Document saved");
            println!("✔ {}", summary.output_path.display());
            println!("\n✅ Done");
        }

        Commands::Fields { columns } => {
            let mapping = config.columns.clone().merged(&column_overrides(columns.as_deref(), &[])?);
            println!("Field        Column");
            for field in LogicalField::ALL {
                println!("  {:<11}{}", field.key(), mapping.column(field));
            }
        }

        Commands::Config { set_herbarium, set_type, set_qr, set_qr_dir, set_map, show } => {
            let mut config = config;
            let changed = set_herbarium.is_some()
                || set_type.is_some()
                || set_qr.is_some()
                || set_qr_dir.is_some()
                || !set_map.is_empty();

            if let Some(name) = set_herbarium {
                let name = name.trim().to_string();
                config.herbarium_name = if name.is_empty() { None } else { Some(name) };
            }
            if let Some(specimen_type) = set_type {
                config.specimen_type = specimen_type;
            }
            if let Some(include_qr) = set_qr {
                config.include_qr = include_qr;
            }
            if let Some(dir) = set_qr_dir {
                config.qr_dir = Some(dir);
            }
            for assignment in &set_map {
                let (field, column) = FieldMapping::parse_assignment(assignment)?;
                config.columns.set(field, column);
            }

            if changed {
                config.save()?;
                println!("✔ Settings saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!("  Herbarium: {}", config.herbarium_name.as_deref().unwrap_or("(not set)"));
                println!("  Specimen type: {}", config.specimen_type);
                println!("  QR codes: {}", if config.include_qr { "on" } else { "off" });
                println!(
                    "  QR directory: {}",
                    config.qr_dir(&RunOverrides::default()).display()
                );
                for field in LogicalField::ALL {
                    let column = config.columns.column(field);
                    if column != field.default_column() {
                        println!("  {} ← {}", field.key(), column);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Mapping file first, then `FIELD=COLUMN` flags on top.
fn column_overrides(file: Option<&Path>, assignments: &[String]) -> error::Result<FieldMapping> {
    let mut mapping = match file {
        Some(path) => FieldMapping::from_file(path)?,
        None => FieldMapping::new(),
    };
    for assignment in assignments {
        let (field, column) = FieldMapping::parse_assignment(assignment)?;
        mapping.set(field, column);
    }
    Ok(mapping)
}
