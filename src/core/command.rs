use crate::utils::error::{ParkingError, Result};
use clap::{error::ErrorKind, Parser, Subcommand};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One facility operation. Parsed from a console line through clap, or read
/// from a scenario file as a `[[steps]]` table tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Register a vehicle in the first free slot of its category
    Register {
        /// CARRO or MOTO
        #[arg(long)]
        category: String,
        #[arg(long)]
        plate: String,
        #[arg(long)]
        owner: String,
        #[arg(long, default_value = "")]
        #[serde(default)]
        national_id: String,
        #[arg(long, default_value = "")]
        #[serde(default)]
        phone: String,
        #[arg(long, default_value = "")]
        #[serde(default)]
        make: String,
        #[arg(long, default_value = "")]
        #[serde(default)]
        model: String,
        #[arg(long, default_value_t = 0)]
        #[serde(default)]
        paid_month: u32,
        #[arg(long, default_value_t = 0)]
        #[serde(default)]
        paid_year: i32,
    },
    /// Look up a vehicle by plate
    Find { plate: String },
    /// Record a monthly installment
    Pay { plate: String, month: u32, year: i32 },
    /// Remove a vehicle and release its slot
    Remove { plate: String },
    /// State of every slot
    Slots,
    /// Names of the empty slots
    FreeSlots,
    /// Vehicles behind on payments (defaults to the current month)
    Debtors {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Occupancy and theoretical monthly revenue
    Summary,
    /// Event log in insertion order
    History,
    /// All vehicles sorted by a field
    Sorted {
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        method: Option<String>,
    },
    /// Plate search with one strategy, or all of them when none is given
    Search {
        plate: String,
        #[arg(long)]
        method: Option<String>,
    },
    /// Write the sorted vehicle list to a CSV file
    Export {
        #[arg(long)]
        path: String,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        method: Option<String>,
    },
    /// Change the base rate used for future registrations
    SetRate { category: String, rate: f64 },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::Find { .. } => "find",
            Command::Pay { .. } => "pay",
            Command::Remove { .. } => "remove",
            Command::Slots => "slots",
            Command::FreeSlots => "free_slots",
            Command::Debtors { .. } => "debtors",
            Command::Summary => "summary",
            Command::History => "history",
            Command::Sorted { .. } => "sorted",
            Command::Search { .. } => "search",
            Command::Export { .. } => "export",
            Command::SetRate { .. } => "set_rate",
        }
    }

    /// Mutating commands change slots, payments or rates.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Register { .. }
                | Command::Pay { .. }
                | Command::Remove { .. }
                | Command::SetRate { .. }
        )
    }
}

#[derive(Debug, Parser)]
#[command(name = "apparkala", no_binary_name = true, disable_version_flag = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Empty,
    Exit,
    Help(String),
    Command(Command),
}

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token pattern is valid"));

/// Splits a console line on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn parse_line(line: &str) -> Result<ConsoleInput> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ConsoleInput::Empty);
    }
    if matches!(trimmed, "exit" | "quit") {
        return Ok(ConsoleInput::Exit);
    }

    match ConsoleLine::try_parse_from(tokenize(trimmed)) {
        Ok(parsed) => Ok(ConsoleInput::Command(parsed.command)),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(ConsoleInput::Help(e.to_string()))
        }
        Err(e) => Err(ParkingError::CommandError {
            message: e.to_string().trim().to_string(),
        }),
    }
}
