use apparkala::config::scenario_config::ScenarioConfig;
use apparkala::core::scenario::ScenarioRunner;
use apparkala::utils::{logger, validation::Validate};
use apparkala::{Facility, Session, SharedFacility};
use clap::Parser;

#[derive(Parser)]
#[command(name = "scenario")]
#[command(about = "Run a TOML scenario of facility commands")]
struct Args {
    /// Path to TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    scenario: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override continue_on_error from the scenario file
    #[arg(long)]
    continue_on_error: Option<bool>,

    /// Dry run - list the steps without executing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose.then_some("debug"));
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading scenario from: {}", args.scenario);

    let config = match ScenarioConfig::from_file(&args.scenario) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario file '{}': {}", args.scenario, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        println!("🔍 DRY RUN - {} ({} steps)", config.scenario.name, config.steps.len());
        for (index, step) in config.steps.iter().enumerate() {
            let marker = if step.is_mutation() { "✏️" } else { "👁️" };
            println!("  {:>3}. {} {}", index + 1, marker, step.name());
        }
        return Ok(());
    }

    let continue_on_error = args
        .continue_on_error
        .unwrap_or_else(|| config.continue_on_error());
    let facility = Facility::from_layout(&config.layout());
    let session = Session::new(SharedFacility::new(facility));
    let runner = ScenarioRunner::new(session, continue_on_error);

    let report = runner.run(&config.steps);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_success() {
        tracing::info!(
            "✅ Scenario '{}' completed: {} steps",
            config.scenario.name,
            report.succeeded
        );
        Ok(())
    } else {
        eprintln!(
            "❌ Scenario '{}' had {} failed step(s), {} skipped",
            config.scenario.name, report.failed, report.skipped
        );
        std::process::exit(2);
    }
}
