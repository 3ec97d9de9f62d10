//! Process cost savings from digitalising the lane's paperwork.

use serde::{Deserialize, Serialize};

use super::entities::{ProcessCostProfile, TradeFootprint};
use super::normalize::{non_negative, percent, saturate};

/// Plain inputs to [`estimate_process_savings`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSavingsInput {
    pub shipments_per_year: f64,
    pub cost_per_person: f64,
    pub headcount_logistics_compliance: f64,
    pub headcount_accounts_payable: f64,
    pub customs_and_compliance_cost_per_shipment: f64,
    pub ancillary_cost_per_shipment: f64,
    pub efficiency_percent: f64,
}

impl ProcessSavingsInput {
    pub fn from_records(footprint: &TradeFootprint, profile: &ProcessCostProfile) -> Self {
        Self {
            shipments_per_year: footprint.shipments_per_year(),
            cost_per_person: profile.cost_per_person(),
            headcount_logistics_compliance: profile.headcount_logistics_compliance(),
            headcount_accounts_payable: profile.headcount_accounts_payable(),
            customs_and_compliance_cost_per_shipment: profile
                .customs_and_compliance_cost_per_shipment(),
            ancillary_cost_per_shipment: profile.ancillary_cost_per_shipment(),
            efficiency_percent: profile.efficiency_percent(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSavings {
    /// Efficiency as a fraction in `[0, 1]`.
    pub efficiency: f64,
    pub people_cost_baseline: f64,
    pub people_savings: f64,
    pub per_shipment_baseline: f64,
    pub per_shipment_savings: f64,
    pub total_process_savings: f64,
}

/// People and per-shipment savings, each scaled by the same efficiency factor.
/// The two streams are independent; either can be zero without touching the other.
pub fn estimate_process_savings(input: &ProcessSavingsInput) -> ProcessSavings {
    let shipments = non_negative(input.shipments_per_year);
    let cost_per_person = non_negative(input.cost_per_person);
    let headcount = saturate(
        non_negative(input.headcount_logistics_compliance)
            + non_negative(input.headcount_accounts_payable),
    );
    let per_shipment_cost = saturate(
        non_negative(input.customs_and_compliance_cost_per_shipment)
            + non_negative(input.ancillary_cost_per_shipment),
    );
    let efficiency = percent(input.efficiency_percent) / 100.0;

    let people_cost_baseline = saturate(cost_per_person * headcount);
    let people_savings = people_cost_baseline * efficiency;

    let per_shipment_baseline = saturate(per_shipment_cost * shipments);
    let per_shipment_savings = per_shipment_baseline * efficiency;

    ProcessSavings {
        efficiency,
        people_cost_baseline,
        people_savings,
        per_shipment_baseline,
        per_shipment_savings,
        total_process_savings: saturate(people_savings + per_shipment_savings),
    }
}
