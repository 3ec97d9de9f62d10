use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cli::{Cli, Command, OutputFormat},
    domain::{compute_all_results, FieldUpdateError, PaymentOption, TradeResults, TradeState},
    util::{
        persistence::{
            clear_persisted_state, default_state_file, load_persisted_state,
            save_persisted_state, PersistSaveError,
        },
        version::{version_label, APP_NAME},
    },
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not a valid state file: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no config directory for the state file; pass --state-file or set TRADE_BENEFIT_STATE")]
    StateLocationUnavailable,
    #[error(transparent)]
    Field(#[from] FieldUpdateError),
    #[error("failed to persist state: {0}")]
    Persist(#[from] PersistSaveError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Executes one command, writing its result to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), AppError> {
    debug!("{} {} starting", APP_NAME, version_label());

    match cli.command {
        Command::Calculate { input, format } => {
            let state = match input {
                Some(path) => read_input(&path)?,
                None => load_state(&state_path(cli.state_file)?),
            };
            let results = compute_all_results(&state);
            info!(
                at_shipment = results.at_shipment.total_annual_benefit,
                after_delivery = results.after_delivery.total_annual_benefit,
                "Computed payment scenarios"
            );
            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?
                }
                OutputFormat::Summary => write!(out, "{}", render_summary(&results))?,
            }
        }
        Command::Show => {
            let state = load_state(&state_path(cli.state_file)?);
            writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
        }
        Command::Set { path, value } => {
            let state_file = state_path(cli.state_file)?;
            let mut state = load_state(&state_file);
            state.set_field(&path, field_value(&value))?;
            save_persisted_state(&state_file, &state)?;
            info!("Updated {path} in {}", state_file.display());
        }
        Command::ToggleOrigin { iso } => {
            let state_file = state_path(cli.state_file)?;
            let mut state = load_state(&state_file);
            let iso = iso.trim().to_ascii_uppercase();
            let selected = state.footprint.toggle_source_country(&iso);
            save_persisted_state(&state_file, &state)?;
            writeln!(
                out,
                "{iso} {}",
                if selected { "selected" } else { "removed" }
            )?;
        }
        Command::Reset => {
            let state_file = state_path(cli.state_file)?;
            if clear_persisted_state(&state_file)? {
                info!("Removed saved state at {}", state_file.display());
            } else {
                debug!("No saved state at {}", state_file.display());
            }
        }
    }

    Ok(())
}

fn state_path(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    explicit
        .or_else(default_state_file)
        .ok_or(AppError::StateLocationUnavailable)
}

/// Saved state if there is a usable one, otherwise the default inputs.
fn load_state(path: &Path) -> TradeState {
    match load_persisted_state(path) {
        Some(state) => {
            debug!("Loaded saved state from {}", path.display());
            state
        }
        None => {
            if path.exists() {
                warn!("Ignoring unreadable state file {}", path.display());
            }
            TradeState::default()
        }
    }
}

fn read_input(path: &Path) -> Result<TradeState, AppError> {
    let data = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| AppError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Numbers are stored as numbers; anything else is kept as text and left to
/// the normaliser.
fn field_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw.trim()) {
        Ok(number @ Value::Number(_)) => number,
        _ => Value::String(raw.to_string()),
    }
}

/// Plain-text rendering of both scenarios with their cash-cycle workings.
pub fn render_summary(results: &TradeResults) -> String {
    let mut text = String::new();
    let accounts = &results.accounting;
    let inputs = &results.at_shipment.workings.inputs;
    let lane = &results.at_shipment.workings.cash_conversion;

    text.push_str("Baseline\n");
    row(&mut text, "Gross profit", money(accounts.gross_profit));
    row(&mut text, "Net profit", money(accounts.net_profit));

    text.push_str("\nLane\n");
    row(&mut text, "Annual value", money(inputs.total_shipment_value_usd));
    row(&mut text, "Transit (days)", days(results.meta.transit_and_clearance_days));
    row(&mut text, "Current terms (days)", days(inputs.current_payment_terms_days));
    row(&mut text, "COGS share", format!("{}%", lane.trade_cogs_share_percent));
    row(&mut text, "Funding rate", format!("{}%", inputs.funding_rate_percent));

    for option in PaymentOption::ALL {
        let scenario = results.scenario(option);
        let cash = &scenario.workings.cash_conversion;
        let improvement = scenario
            .profit_improvement_percent()
            .map(|pct| format!("{pct:.1}%"))
            .unwrap_or_else(|| "n/a".to_string());

        text.push_str(&format!("\n{}\n", scenario.label));
        row(&mut text, "Process savings", money(scenario.process_savings));
        row(&mut text, "Discount benefit", money(scenario.discount_benefit));
        row(&mut text, "Funding impact", money(scenario.funding_impact));
        row(&mut text, "Net financing benefit", money(scenario.net_financing_benefit));
        row(&mut text, "Total annual benefit", money(scenario.total_annual_benefit));
        row(&mut text, "Net profit (after)", money(scenario.net_profit_after));
        row(&mut text, "Improvement", improvement);

        text.push_str("  Cash conversion\n");
        row(&mut text, "  DPO today (days)", days(cash.current_dpo));
        row(&mut text, "  DPO in scenario (days)", days(cash.new_dpo));
        row(&mut text, "  CCC today (days)", days(cash.ccc_current));
        row(&mut text, "  CCC in scenario (days)", days(cash.ccc_new));
        row(&mut text, "  Change in CCC (days)", format!("{:+.0}", cash.delta_ccc));
        row(&mut text, "  Trade COGS allocated", money(cash.trade_cogs));
    }

    text
}

fn row(text: &mut String, label: &str, value: String) {
    text.push_str(&format!("  {label:<28}{value:>18}\n"));
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn days(value: f64) -> String {
    format!("{value:.0}")
}
