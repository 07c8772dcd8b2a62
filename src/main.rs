//! Semitone - geometric representations of tones and scales

use anyhow::Result;
use clap::Parser;
use semitone::config::{self, EXAMPLE_CONFIG};
use semitone::viz::TerminalRenderer;
use semitone::{PlotTable, Scale};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            key,
            kind,
            mode,
            max,
            below,
            above,
        } => {
            let scale = Scale::new(&key, kind.to_kind(mode, max))?;
            let extended = scale.extend(below, above);

            println!("{}", scale.scale_name());
            println!("  Principal: {} Hz", scale.principal());
            println!("  Primaries: {}", extended);
            println!(
                "  Note names: {}",
                scale.note_names_including_enharmonics()?.join(" ")
            );
        }

        Commands::Table { config: config_path, json } => {
            log::info!("Loading configuration from {:?}", config_path);
            let cfg = config::load_config(&config_path)?;
            let table = cfg.to_plot()?.table()?;

            if json {
                println!("{}", table.to_json()?);
            } else {
                print_table(&table);
            }
        }

        Commands::Plot { config: config_path } => {
            log::info!("Loading configuration from {:?}", config_path);
            let cfg = config::load_config(&config_path)?;
            let plot = cfg.to_plot()?;

            let title = plot.scales()[0].scale_name().to_string();
            plot.draw(&mut TerminalRenderer::new(title))?;
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Octaves below: {}", cfg.plot.octaves_below);
                    println!("  Octaves above: {}", cfg.plot.octaves_above);
                    println!("  Separation: {}", cfg.plot.separation);
                    println!("  Scaling factor: {}", cfg.plot.scaling_factor);
                    println!("  Scales: {}", cfg.scales.len());
                    for scale in &cfg.scales {
                        match scale.to_scale() {
                            Ok(s) => println!(
                                "    - {} ({} tones)",
                                s.scale_name(),
                                s.primaries().len()
                            ),
                            Err(e) => println!("    - {:?}: {}", scale.kind, e),
                        }
                    }
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let path = "semitone.yaml";
            if std::path::Path::new(path).exists() {
                println!("semitone.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, EXAMPLE_CONFIG)?;
                println!("Created semitone.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

fn print_table(table: &PlotTable) {
    println!("{:>10}  {:>9}  label", "radius", "angle");
    for row in &table.rows {
        println!("{:>10.5}  {:>9.3}  {}", row.radius, row.angle, row.label);
    }
    println!();
    let ticks: Vec<String> = table
        .tick_angles
        .iter()
        .zip(&table.tick_labels)
        .map(|(angle, label)| format!("{}={}", angle, label))
        .collect();
    println!("Ticks: {}", ticks.join("  "));
}
