// User Session Research Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/usersessions-generator > sessioninfoES.json
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/usersessions-generator --visit-count 5000 --output sessioninfoES.json --verbose
// ```

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter};
use std::process;
use tracing::{error, info};
use usersessions_generator::simulation::{BundleOrchestrator, LoggingConfig};
use usersessions_generator::sink::{BulkJsonSink, DocumentLayout};
use usersessions_generator::types::{CliArgs, GeneratorConfig};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match GeneratorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Logs go to stderr; stdout may carry the documents
    let mut logging = LoggingConfig::for_cli(args.verbose, args.debug, args.json_logs);
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    let guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting usersessions generator");

    let dry_run = args.dry_run;
    let result = GeneratorConfig::from_cli_args(args)
        .context("Failed to load configuration")
        .and_then(|config| {
            config.validate().context("Configuration validation failed")?;
            info!("Configuration loaded and validated successfully");

            if dry_run {
                eprintln!("Configuration validation successful!");
                eprintln!("Dry run mode - no records will be generated.");
                print_configuration_summary(&config);
                return Ok(());
            }

            generate(config)
        });

    if let Err(e) = result {
        error!("{:#}", e);
        drop(guard);
        process::exit(1);
    }

    info!("Usersessions generator completed successfully");
}

/// Run the orchestrator against the configured destination
fn generate(config: GeneratorConfig) -> anyhow::Result<()> {
    let layout = if config.newline_delimited {
        DocumentLayout::NewlineDelimited
    } else {
        DocumentLayout::Concatenated
    };
    let output_path = config.output_path.clone();

    let mut orchestrator =
        BundleOrchestrator::new(config).context("Failed to initialize generator")?;

    match &output_path {
        Some(path) => {
            let mut sink = BulkJsonSink::append_to_file(path, layout)
                .with_context(|| format!("Failed to open output file {}", path))?;
            orchestrator.run(&mut sink).context("Session bundle generation failed")?;
            info!("Appended {} records to {}", sink.records_written(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut sink = BulkJsonSink::with_layout(BufWriter::new(stdout.lock()), layout);
            orchestrator.run(&mut sink).context("Session bundle generation failed")?;
        }
    }

    eprint!("{}", orchestrator.statistics().summary_output());
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &GeneratorConfig) {
    let (min_events, max_events) = config.events_per_visit();

    eprintln!("Configuration Summary:");
    eprintln!("  Visits: {}", config.visit_count);
    eprintln!("  Research events per visit: {}..={}", min_events, max_events);
    eprintln!(
        "  Record ids: start after {} ({:?} scope)",
        config.record_id_start, config.record_id_scope
    );
    eprintln!("  User source: {:?}", config.user_source);
    if !config.known_user_ids.is_empty() {
        eprintln!("  Known users: {}", config.known_user_ids.len());
    }
    eprintln!(
        "  Currency pairs: {}",
        if config.major_pair_weights.is_some() { "weighted" } else { "uniform" }
    );
    eprintln!("  Indicator weights: {:?}", config.indicator_weights);
    eprintln!("  Interval weights: {:?}", config.interval_weights);
    eprintln!("  Index: {}/{}", config.index_name, config.document_type);
    eprintln!("  Output: {}", config.output_path.as_deref().unwrap_or("stdout"));
    eprintln!(
        "  Layout: {}",
        if config.newline_delimited { "newline-delimited" } else { "concatenated" }
    );
    match config.seed {
        Some(seed) => eprintln!("  Seed: {}", seed),
        None => eprintln!("  Seed: random"),
    }
}
