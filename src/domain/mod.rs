//! Benefit calculation engine. Everything in here is a pure function of its
//! inputs: no I/O, no shared state, no failure modes.

pub mod accounting;
pub mod app_state;
pub mod cash_conversion;
pub mod entities;
pub mod normalize;
pub mod process;
pub mod scenario;

pub use accounting::{profit_improvement_percent, summarize_accounts, AccountingSummary};
pub use app_state::{FieldUpdateError, TradeState};
pub use cash_conversion::{model_cash_conversion, CashConversionInput, CashConversionResult};
pub use entities::{AccountingProfile, ProcessCostProfile, TradeFootprint};
pub use normalize::{clamp, parse_number, RawNumber};
pub use process::{estimate_process_savings, ProcessSavings, ProcessSavingsInput};
pub use scenario::{
    compute_all_results, compute_scenario, PaymentOption, ResultsMeta, ScenarioParams,
    ScenarioResult, ScenarioWorkings, TradeResults, WorkingsInputs,
};
