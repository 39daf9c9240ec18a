// src/main.rs
mod cli;
mod logging;

use ats_chart::config::Config;
use ats_chart::error::AppError;
use ats_chart::input::{ensure_single_stdin, read_input};
use ats_chart::output::{TableOptions, export_chart_file, export_path, print_table, write_csv, write_json};
use ats_chart::pipeline::{DailyChart, SCHEDULE_SOURCE, STATS_SOURCE, build_daily_chart};
use chrono::Local;
use clap::Parser;
use cli::{Args, OutputFormat, input_paths, is_config_operation};
use logging::setup_logging;
use std::io::{Write, stdout};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must stay alive until exit so buffered logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    if is_config_operation(&args) {
        return run_config_operation(&args).await;
    }

    let config = Config::load().await?;

    let (schedule_path, stats_path) = input_paths(&args)?;
    ensure_single_stdin([schedule_path, stats_path])?;

    let schedule_text = read_input(SCHEDULE_SOURCE, schedule_path, config.max_input_bytes).await?;
    let stats_text = read_input(STATS_SOURCE, stats_path, config.max_input_bytes).await?;

    let chart = build_daily_chart(
        &schedule_text,
        &stats_text,
        &config.alias_table(),
        config.max_input_bytes,
    )?;

    write_chart(&args, &config, &chart)?;

    if let Some(path) = export_target(&args, &config) {
        export_chart_file(&chart.rows, &path).await?;
        eprintln!("Chart saved to {}", path.display());
    }

    Ok(())
}

/// Handles the configuration flags. Updates are saved; listing only reads.
async fn run_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(new_output_dir) = &args.new_output_dir {
        config.output_dir = Some(new_output_dir.clone());
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

fn write_chart(args: &Args, config: &Config, chart: &DailyChart) -> Result<(), AppError> {
    let mut out = stdout().lock();
    match args.format {
        OutputFormat::Table => {
            let options = TableOptions {
                plain: args.plain,
                strong_gap: config.highlight_strong_gap,
                moderate_gap: config.highlight_moderate_gap,
            };
            print_table(&mut out, chart, &options)?;
        }
        OutputFormat::Csv => write_csv(&chart.rows, &mut out)?,
        OutputFormat::Json => write_json(chart, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// `--output` wins over `--export`; neither means no file is written.
fn export_target(args: &Args, config: &Config) -> Option<PathBuf> {
    match (&args.output, args.export) {
        (Some(path), _) => Some(PathBuf::from(path)),
        (None, true) => Some(export_path(
            &config.export_dir(),
            Local::now().naive_local(),
        )),
        (None, false) => None,
    }
}
