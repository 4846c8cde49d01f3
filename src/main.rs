use clap::{Parser, Subcommand};
use colored::Colorize;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use vpc_cidr_planner::config::{Config, OutputFormat};
use vpc_cidr_planner::output;
use vpc_cidr_planner::processing;

#[derive(Parser)]
#[command(name = "vpc-cidr-planner")]
#[command(about = "IPv4 CIDR calculator and VPC subnet planner.")]
struct CommandLine {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a CIDR is well formed
    #[command(alias = "v")]
    Validate { cidr: String },
    /// Show network, broadcast and usable range of a CIDR
    #[command(alias = "i")]
    Info { cidr: String },
    /// Check whether CHILD lies inside PARENT
    #[command(alias = "c")]
    Contains { child: String, parent: String },
    /// Split a CIDR into COUNT equally sized subnets
    #[command(alias = "s")]
    Split { cidr: String, count: usize },
    /// Utilization percentage of USED out of TOTAL addresses
    #[command(alias = "u")]
    Usage { used: u64, total: u64 },
    /// List free blocks of a VPC given its allocated subnets
    #[command(alias = "f")]
    Free { vpc: String, subnets: Vec<String> },
    /// Check a subnet plan against its VPC
    #[command(alias = "p")]
    Plan { vpc: String, subnets: Vec<String> },
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

/// Print `value` as JSON or as the given text.
fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => println!("{}", output::to_json(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}

fn invalid(what: &str) -> Result<bool, Box<dyn Error>> {
    eprintln!("{} {what}", "invalid:".red());
    Ok(false)
}

/// Run one command and return its verdict, used as the exit status.
///
/// `Ok(false)` covers rejected input, a child that is not inside its parent
/// (`contains` works like a predicate), and a plan with overlapping or
/// rejected subnets.
fn run(command: Commands, format: OutputFormat) -> Result<bool, Box<dyn Error>> {
    match command {
        Commands::Validate { cidr } => {
            let valid = processing::validate_cidr(&cidr);
            emit(format, &valid, || {
                if valid {
                    format!("{cidr} {}", "valid".green())
                } else {
                    format!("{cidr} {}", "invalid".red())
                }
            })?;
            Ok(valid)
        }
        Commands::Info { cidr } => match processing::calculate_cidr_info(&cidr) {
            Some(info) => {
                emit(format, &info, || output::render_cidr_info(&info))?;
                Ok(true)
            }
            None => invalid(&cidr),
        },
        Commands::Contains { child, parent } => {
            if !processing::validate_cidr(&child) {
                return invalid(&child);
            }
            if !processing::validate_cidr(&parent) {
                return invalid(&parent);
            }
            let contained = processing::is_subnet_of(&child, &parent);
            emit(format, &contained, || {
                let verdict = if contained {
                    "is inside".green()
                } else {
                    "is not inside".red()
                };
                format!("{child} {verdict} {parent}")
            })?;
            Ok(contained)
        }
        Commands::Split { cidr, count } => {
            let subnets = processing::suggest_subnets(&cidr, count);
            if subnets.is_empty() {
                return invalid(&format!(
                    "cannot split {cidr} into {count} subnets of /{} or larger",
                    processing::MAX_SPLIT_PREFIX
                ));
            }
            emit(format, &subnets, || output::render_subnets(&subnets))?;
            Ok(true)
        }
        Commands::Usage { used, total } => {
            let utilization = processing::calculate_utilization(used, total);
            let color = processing::get_utilization_color(utilization);
            let result = serde_json::json!({ "utilization": utilization, "color": color });
            emit(format, &result, || {
                format!("{} ({color})", output::paint_utilization(utilization))
            })?;
            Ok(true)
        }
        Commands::Free { vpc, subnets } => {
            if !processing::validate_cidr(&vpc) {
                return invalid(&vpc);
            }
            let subnets: Vec<&str> = subnets.iter().map(String::as_str).collect();
            let free = processing::find_free_blocks(&vpc, &subnets);
            emit(format, &free, || output::render_subnets(&free))?;
            Ok(true)
        }
        Commands::Plan { vpc, subnets } => {
            let subnets: Vec<&str> = subnets.iter().map(String::as_str).collect();
            match processing::check_subnet_plan(&vpc, &subnets) {
                Some(report) => {
                    processing::log_overlapping_subnets(&report.overlaps);
                    emit(format, &report, || output::render_plan(&report))?;
                    Ok(report.overlaps.is_empty() && report.rejected().count() == 0)
                }
                None => invalid(&vpc),
            }
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = CommandLine::parse();
    let mut config = Config::from_env()?;
    if cli.json {
        config.output = OutputFormat::Json;
    }
    init_logging(&config)?;
    log::info!("#Start main() output={:?}", config.output);

    if run(cli.command, config.output)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
