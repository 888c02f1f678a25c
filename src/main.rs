use apparkala::core::command::{parse_line, ConsoleInput};
use apparkala::utils::error::ErrorSeverity;
use apparkala::utils::{logger, validation::Validate};
use apparkala::{CliConfig, Facility, FacilityConfig, ParkingError, Reply, Session, SharedFacility};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

fn render(reply: &Reply, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(reply)
    } else {
        serde_json::to_string(reply)
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

/// Startup failures only; runs before the logger is set up.
fn fail(e: &ParkingError) -> ! {
    eprintln!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()).max(1));
}

/// Runs every line through the session. A failed command is printed as a
/// rejected reply and the loop keeps going; only reading input can end it.
async fn run_lines<R>(session: &Session, reader: R, pretty: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        let command = match parse_line(&line) {
            Ok(ConsoleInput::Empty) => continue,
            Ok(ConsoleInput::Exit) => break,
            Ok(ConsoleInput::Help(text)) => {
                println!("{}", text);
                continue;
            }
            Ok(ConsoleInput::Command(command)) => command,
            Err(e) => {
                eprintln!("❌ line {}: {}", line_number, e.user_friendly_message());
                continue;
            }
        };

        let reply = session.respond(command);
        if let Reply::Rejected { .. } = &reply {
            tracing::debug!("line {} rejected", line_number);
        }
        println!("{}", render(&reply, pretty)?);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    // 先讀配置，日誌設定可能來自檔案
    let config = match &cli.config {
        Some(path) => FacilityConfig::from_file(path).unwrap_or_else(|e| fail(&e)),
        None => FacilityConfig::default(),
    };

    if let Err(e) = config.validate() {
        fail(&e);
    }

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.log_level().or(cli.verbose.then_some("debug")));
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    tracing::info!(
        "🚗 {} ready: {} car slots, {} motorcycle slots",
        config.facility.name,
        config.capacity.cars,
        config.capacity.motorcycles
    );

    let session = Session::new(SharedFacility::new(Facility::from_layout(&config)));

    match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            run_lines(&session, BufReader::new(file), cli.pretty).await?;
        }
        None => {
            run_lines(&session, BufReader::new(tokio::io::stdin()), cli.pretty).await?;
        }
    }

    tracing::info!("✅ Session finished");
    Ok(())
}
