//! Command handlers

use crate::cli::{Cli, Commands, ScenarioArgs};
use crate::output::output_projection;
use greensteel_app::chart::build_chart;
use greensteel_app::config::Config;
use greensteel_app::export::{export_to_csv, export_to_excel};
use greensteel_app::projection_service::run_projection;
use greensteel_app::source::{ParameterOverrides, ParameterSource, ScenarioSource};
use greensteel_domain::SteelCostParameters;
use greensteel_infra::{parse_price_assignment, save_scenario};
use greensteel_types::{Error, Result};
use std::path::Path;
use tracing::info;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Project {
            scenario,
            export,
            csv,
            chart,
        } => {
            let source = build_source(&scenario, &config)?;
            let outcome = run_projection(&source)?;

            output_projection(format, &outcome, &config.currency_symbol)?;

            if let Some(path) = export {
                export_to_excel(&outcome, &path, &config.currency_symbol)?;
                info!(path = %path.display(), "excel workbook written");
                eprintln!("Exported to {}", path.display());
            }
            if let Some(path) = csv {
                export_to_csv(&outcome.projection, &path)?;
                info!(path = %path.display(), "csv written");
                eprintln!("Exported to {}", path.display());
            }
            if let Some(path) = chart {
                let spec = build_chart(&outcome.projection, &config.currency_symbol);
                std::fs::write(&path, serde_json::to_string_pretty(&spec)?)?;
                info!(path = %path.display(), "chart description written");
                eprintln!("Chart written to {}", path.display());
            }
            Ok(())
        }

        Commands::Check { scenario } => {
            let source = build_source(&scenario, &config)?;
            let outcome = run_projection(&source)?;
            println!("OK: {}", source.describe());
            println!("  {} years", outcome.projection.years());
            for resource in outcome.parameters.resources()? {
                println!(
                    "  {:<12} {} {}/ton, utilisation {}, efficiency {}",
                    resource.kind.label(),
                    resource.base_units,
                    resource.kind.unit(),
                    resource.utilisation_rate,
                    resource.target_efficiency
                );
            }
            Ok(())
        }

        Commands::Init { output, force } => init_scenario(&output, force),

        Commands::Config {
            show,
            set_output,
            set_currency,
            set_scenario,
            clear_scenario,
            reset,
        } => {
            let mut config = if reset { Config::default() } else { config };
            let mut changed = reset;

            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if let Some(currency) = set_currency {
                config.currency_symbol = currency;
                changed = true;
            }
            if let Some(path) = set_scenario {
                config.default_scenario = Some(path);
                changed = true;
            }
            if clear_scenario {
                config.default_scenario = None;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                print!("{}", config);
            }
            Ok(())
        }
    }
}

fn build_source(args: &ScenarioArgs, config: &Config) -> Result<ScenarioSource> {
    let scenario = args
        .scenario
        .clone()
        .or_else(|| config.default_scenario.clone());

    let mut source = match scenario {
        Some(path) => ScenarioSource::from_file(path),
        None => ScenarioSource::defaults(),
    };
    if let Some(prices) = &args.prices {
        source = source.with_price_table(prices);
    }
    let price_lists = args
        .price_lists
        .iter()
        .map(|text| parse_price_assignment(text))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(source.with_overrides(ParameterOverrides {
        target_tipping_year: args.target_year,
        traditional_price: args.traditional_price,
        fixed_production: args.production,
        price_lists,
    }))
}

fn init_scenario(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", output.display()),
        )));
    }
    save_scenario(output, &SteelCostParameters::default())?;
    println!("Wrote default scenario to {}", output.display());
    Ok(())
}
