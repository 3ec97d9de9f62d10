//! Working-capital effect of moving the supplier payment date.
//!
//! Sign convention: a positive `funding_impact` is a cost (more capital has to
//! be funded), a negative one is a benefit. Paying earlier than today's terms
//! lowers DPO, which lengthens the cycle and produces a cost.

use serde::{Deserialize, Serialize};

use super::entities::{AccountingProfile, TradeFootprint};
use super::normalize::{non_negative, percent, saturate};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Plain inputs to [`model_cash_conversion`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashConversionInput {
    pub days_sales_outstanding: f64,
    pub days_inventory_outstanding: f64,
    #[serde(rename = "currentDPO")]
    pub current_dpo: f64,
    #[serde(rename = "newDPO")]
    pub new_dpo: f64,
    pub cost_of_sale: f64,
    #[serde(rename = "tradeCOGSSharePercent")]
    pub trade_cogs_share_percent: f64,
    pub funding_rate_percent: f64,
}

impl CashConversionInput {
    /// Current DPO is taken from the lane's payment terms.
    pub fn from_records(
        footprint: &TradeFootprint,
        accounting: &AccountingProfile,
        new_dpo: f64,
    ) -> Self {
        Self {
            days_sales_outstanding: accounting.days_sales_outstanding(),
            days_inventory_outstanding: accounting.days_inventory_outstanding(),
            current_dpo: footprint.current_payment_terms_days(),
            new_dpo,
            cost_of_sale: accounting.cost_of_sale(),
            trade_cogs_share_percent: footprint.trade_cogs_share_percent(),
            funding_rate_percent: accounting.funding_rate_percent(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashConversionResult {
    pub dso: f64,
    pub dio: f64,
    #[serde(rename = "currentDPO")]
    pub current_dpo: f64,
    #[serde(rename = "newDPO")]
    pub new_dpo: f64,
    pub ccc_current: f64,
    pub ccc_new: f64,
    /// Positive when the cycle lengthens.
    #[serde(rename = "deltaCCC")]
    pub delta_ccc: f64,
    #[serde(rename = "annualCOGS")]
    pub annual_cogs: f64,
    #[serde(rename = "tradeCOGS")]
    pub trade_cogs: f64,
    #[serde(rename = "tradeCOGSSharePercent")]
    pub trade_cogs_share_percent: f64,
    /// Positive when more capital is tied up.
    pub working_capital_change: f64,
    /// Positive when cash is freed.
    pub cash_released: f64,
    pub funding_impact: f64,
}

pub fn model_cash_conversion(input: &CashConversionInput) -> CashConversionResult {
    let dso = non_negative(input.days_sales_outstanding);
    let dio = non_negative(input.days_inventory_outstanding);
    let current_dpo = non_negative(input.current_dpo);
    let new_dpo = saturate(non_negative(input.new_dpo));

    let ccc_current = saturate(saturate(dio + dso) - current_dpo);
    let ccc_new = saturate(saturate(dio + dso) - new_dpo);
    let delta_ccc = saturate(ccc_new - ccc_current);

    let share = percent(input.trade_cogs_share_percent) / 100.0;
    let annual_cogs = non_negative(input.cost_of_sale);
    let trade_cogs = annual_cogs * share;

    // ΔNWC ≈ (COGS / 365) * ΔCCC
    let working_capital_change = saturate((trade_cogs / DAYS_PER_YEAR) * delta_ccc);
    let cash_released = -working_capital_change;

    let rate = non_negative(input.funding_rate_percent) / 100.0;
    let funding_impact = saturate(-cash_released * rate);

    CashConversionResult {
        dso,
        dio,
        current_dpo,
        new_dpo,
        ccc_current,
        ccc_new,
        delta_ccc,
        annual_cogs,
        trade_cogs,
        trade_cogs_share_percent: share * 100.0,
        working_capital_change,
        cash_released,
        funding_impact,
    }
}
