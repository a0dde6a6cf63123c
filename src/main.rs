/*!
 * Command-line interface for projdump
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use projdump::config::{Args, Config};
use projdump::report::{write_inventory, write_summary, ReportFormat, Reporter, RunReport};
use projdump::scanner::InventoryScanner;
use projdump::writer::TreeWriter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "projdump", &mut io::stdout());
        return Ok(());
    }

    init_logging(args.verbose);

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");

    let start_time = Instant::now();
    let mut run = RunReport::default();

    if config.mode.inventory() {
        let scanner = InventoryScanner::new(Arc::new(progress.clone()));
        let report = scanner.build_inventory(&config.frontend_root, &config.backend_root)?;

        write_inventory(&report, &config.inventory_file)?;
        write_summary(&report, &config.summary_file)?;
        run = run.with_inventory(&report);
    }

    if config.mode.tree() {
        progress.set_prefix("📝 Documenting");
        progress.set_message(config.docs_file.display().to_string());

        let writer = TreeWriter::new(config.markers);
        writer.create_project_documentation(
            &config.frontend_root,
            &config.backend_root,
            &config.docs_file,
        )?;
    }

    progress.finish_and_clear();

    run.duration = start_time.elapsed();
    run.outputs = config.outputs().into_iter().map(|p| p.to_path_buf()).collect();
    info!(elapsed = ?run.duration, "run finished");

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&run);

    let names: Vec<String> = run
        .outputs
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let listed = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        _ => names.concat(),
    };
    println!("Analysis complete. Check {} for results.", listed);

    Ok(())
}
