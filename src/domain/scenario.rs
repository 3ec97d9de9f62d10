//! Scenario composition: process savings plus the economics of one payment
//! option, set against the baseline accounts.

use serde::{Deserialize, Serialize};

use super::accounting::{profit_improvement_percent, AccountingSummary};
use super::app_state::TradeState;
use super::cash_conversion::{model_cash_conversion, CashConversionInput, CashConversionResult};
use super::entities::{AccountingProfile, ProcessCostProfile, TradeFootprint};
use super::normalize::{non_negative, percent, saturate};
use super::process::{estimate_process_savings, ProcessSavings, ProcessSavingsInput};

/// The two payment options offered to suppliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentOption {
    AtShipment,
    AfterDelivery,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 2] = [PaymentOption::AtShipment, PaymentOption::AfterDelivery];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AtShipment => "Payment at shipment",
            Self::AfterDelivery => "Payment after delivery",
        }
    }

    /// Discount, uptake and resulting DPO this option implies for a lane.
    pub fn params(&self, footprint: &TradeFootprint) -> ScenarioParams {
        match self {
            Self::AtShipment => ScenarioParams {
                label: self.label().to_string(),
                discount_percent: footprint.discount_at_shipment_percent(),
                uptake_percent: footprint.uptake_at_shipment_percent(),
                new_dpo: 0.0,
            },
            Self::AfterDelivery => ScenarioParams {
                label: self.label().to_string(),
                discount_percent: footprint.discount_after_delivery_percent(),
                uptake_percent: footprint.uptake_after_delivery_percent(),
                new_dpo: saturate(
                    footprint.transit_and_clearance_days()
                        + footprint.payment_days_after_delivery(),
                ),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    pub label: String,
    pub discount_percent: f64,
    pub uptake_percent: f64,
    pub new_dpo: f64,
}

/// Inputs as the scenario actually used them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingsInputs {
    #[serde(rename = "totalShipmentValueUSD")]
    pub total_shipment_value_usd: f64,
    pub discount_percent: f64,
    pub uptake_percent: f64,
    pub funding_rate_percent: f64,
    pub current_payment_terms_days: f64,
    #[serde(rename = "newDPO")]
    pub new_dpo: f64,
}

/// Audit trail behind a [`ScenarioResult`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioWorkings {
    pub label: String,
    pub inputs: WorkingsInputs,
    pub process: ProcessSavings,
    pub discount_benefit: f64,
    pub cash_conversion: CashConversionResult,
    pub net_financing_benefit: f64,
    pub total_annual_benefit: f64,
    pub net_profit_before: f64,
    pub net_profit_after: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub label: String,
    pub discount_benefit: f64,
    /// Positive is a funding cost, negative a benefit.
    pub funding_impact: f64,
    pub net_financing_benefit: f64,
    pub process_savings: f64,
    pub total_annual_benefit: f64,
    pub net_profit_before: f64,
    pub net_profit_after: f64,
    pub workings: ScenarioWorkings,
}

impl ScenarioResult {
    /// Net profit change in percent; `None` when the baseline is zero.
    pub fn profit_improvement_percent(&self) -> Option<f64> {
        profit_improvement_percent(self.net_profit_before, self.net_profit_after)
    }
}

pub fn compute_scenario(
    params: &ScenarioParams,
    footprint: &TradeFootprint,
    process_profile: &ProcessCostProfile,
    accounting: &AccountingProfile,
) -> ScenarioResult {
    let total_value = footprint.total_shipment_value_usd();
    // Floor only: discounts above 100% are passed through.
    let discount = non_negative(params.discount_percent) / 100.0;
    let uptake = percent(params.uptake_percent) / 100.0;

    let process = estimate_process_savings(&ProcessSavingsInput::from_records(
        footprint,
        process_profile,
    ));

    let discount_benefit = saturate(total_value * discount * uptake);

    let cash_conversion = model_cash_conversion(&CashConversionInput::from_records(
        footprint,
        accounting,
        params.new_dpo,
    ));

    let net_financing_benefit = saturate(discount_benefit - cash_conversion.funding_impact);
    let total_annual_benefit = saturate(process.total_process_savings + net_financing_benefit);

    let net_profit_before = AccountingSummary::from(accounting).net_profit;
    let net_profit_after = saturate(net_profit_before + total_annual_benefit);

    let workings = ScenarioWorkings {
        label: params.label.clone(),
        inputs: WorkingsInputs {
            total_shipment_value_usd: total_value,
            discount_percent: discount * 100.0,
            uptake_percent: uptake * 100.0,
            funding_rate_percent: accounting.funding_rate_percent(),
            current_payment_terms_days: footprint.current_payment_terms_days(),
            new_dpo: cash_conversion.new_dpo,
        },
        process: process.clone(),
        discount_benefit,
        cash_conversion: cash_conversion.clone(),
        net_financing_benefit,
        total_annual_benefit,
        net_profit_before,
        net_profit_after,
    };

    ScenarioResult {
        label: params.label.clone(),
        discount_benefit,
        funding_impact: cash_conversion.funding_impact,
        net_financing_benefit,
        process_savings: process.total_process_savings,
        total_annual_benefit,
        net_profit_before,
        net_profit_after,
        workings,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsMeta {
    pub transit_and_clearance_days: f64,
}

/// Everything the results view needs for one input snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResults {
    pub accounting: AccountingSummary,
    pub at_shipment: ScenarioResult,
    pub after_delivery: ScenarioResult,
    pub meta: ResultsMeta,
}

impl TradeResults {
    pub fn scenario(&self, option: PaymentOption) -> &ScenarioResult {
        match option {
            PaymentOption::AtShipment => &self.at_shipment,
            PaymentOption::AfterDelivery => &self.after_delivery,
        }
    }
}

/// Runs both payment options against the same snapshot.
pub fn compute_all_results(state: &TradeState) -> TradeResults {
    let run = |option: PaymentOption| {
        compute_scenario(
            &option.params(&state.footprint),
            &state.footprint,
            &state.process,
            &state.accounting,
        )
    };

    TradeResults {
        accounting: AccountingSummary::from(&state.accounting),
        at_shipment: run(PaymentOption::AtShipment),
        after_delivery: run(PaymentOption::AfterDelivery),
        meta: ResultsMeta {
            transit_and_clearance_days: state.footprint.transit_and_clearance_days(),
        },
    }
}
