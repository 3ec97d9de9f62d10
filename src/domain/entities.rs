//! Input records supplied by the form layer.
//!
//! Every numeric field is kept as a [`RawNumber`] so a half-typed form never
//! fails to load; the accessor methods return the normalised value with the
//! fallback and clamp each field documents.

use serde::{Deserialize, Serialize};

use super::normalize::{non_negative, parse_number, percent, RawNumber};

/// Fallback for a lane's share of company cost of sale.
pub const DEFAULT_TRADE_COGS_SHARE_PERCENT: f64 = 100.0;
/// Fallback for the uptake of either payment option.
pub const DEFAULT_UPTAKE_PERCENT: f64 = 100.0;
/// Fallback for the expected efficiency gain.
pub const DEFAULT_EFFICIENCY_PERCENT: f64 = 40.0;

/// One trade lane: volumes, timings and the two payment options on offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradeFootprint {
    pub destination_country_iso: String,
    pub selected_source_country_isos: Vec<String>,
    pub shipments_per_year: RawNumber,
    #[serde(rename = "totalShipmentValueUSD")]
    pub total_shipment_value_usd: RawNumber,
    pub transit_and_clearance_days: RawNumber,
    pub current_payment_terms_days: RawNumber,
    #[serde(rename = "tradeCOGSSharePercent")]
    pub trade_cogs_share_percent: RawNumber,
    pub discount_at_shipment_percent: RawNumber,
    pub uptake_at_shipment_percent: RawNumber,
    pub discount_after_delivery_percent: RawNumber,
    pub uptake_after_delivery_percent: RawNumber,
    pub payment_days_after_delivery: RawNumber,
}

impl Default for TradeFootprint {
    fn default() -> Self {
        Self {
            destination_country_iso: String::new(),
            selected_source_country_isos: Vec::new(),
            shipments_per_year: 1_000.0.into(),
            total_shipment_value_usd: 5_000_000.0.into(),
            transit_and_clearance_days: 20.0.into(),
            current_payment_terms_days: 60.0.into(),
            trade_cogs_share_percent: 100.0.into(),
            discount_at_shipment_percent: 1.5.into(),
            uptake_at_shipment_percent: 60.0.into(),
            discount_after_delivery_percent: 0.75.into(),
            uptake_after_delivery_percent: 60.0.into(),
            payment_days_after_delivery: 10.0.into(),
        }
    }
}

impl TradeFootprint {
    pub fn shipments_per_year(&self) -> f64 {
        non_negative(parse_number(&self.shipments_per_year, 0.0))
    }

    pub fn total_shipment_value_usd(&self) -> f64 {
        non_negative(parse_number(&self.total_shipment_value_usd, 0.0))
    }

    pub fn transit_and_clearance_days(&self) -> f64 {
        non_negative(parse_number(&self.transit_and_clearance_days, 0.0))
    }

    /// Days payable outstanding under today's terms.
    pub fn current_payment_terms_days(&self) -> f64 {
        non_negative(parse_number(&self.current_payment_terms_days, 0.0))
    }

    /// Share of company cost of sale attributable to this lane, `[0, 100]`.
    pub fn trade_cogs_share_percent(&self) -> f64 {
        percent(parse_number(
            &self.trade_cogs_share_percent,
            DEFAULT_TRADE_COGS_SHARE_PERCENT,
        ))
    }

    /// Discounts are floored at zero but deliberately left uncapped.
    pub fn discount_at_shipment_percent(&self) -> f64 {
        non_negative(parse_number(&self.discount_at_shipment_percent, 0.0))
    }

    pub fn uptake_at_shipment_percent(&self) -> f64 {
        percent(parse_number(
            &self.uptake_at_shipment_percent,
            DEFAULT_UPTAKE_PERCENT,
        ))
    }

    pub fn discount_after_delivery_percent(&self) -> f64 {
        non_negative(parse_number(&self.discount_after_delivery_percent, 0.0))
    }

    pub fn uptake_after_delivery_percent(&self) -> f64 {
        percent(parse_number(
            &self.uptake_after_delivery_percent,
            DEFAULT_UPTAKE_PERCENT,
        ))
    }

    pub fn payment_days_after_delivery(&self) -> f64 {
        non_negative(parse_number(&self.payment_days_after_delivery, 0.0))
    }

    /// Adds `iso` to the selected origins, or removes it if already present.
    /// Returns `true` when the country ends up selected.
    pub fn toggle_source_country(&mut self, iso: &str) -> bool {
        if let Some(pos) = self
            .selected_source_country_isos
            .iter()
            .position(|existing| existing == iso)
        {
            self.selected_source_country_isos.remove(pos);
            false
        } else {
            self.selected_source_country_isos.push(iso.to_string());
            true
        }
    }
}

/// People and per-shipment costs of running the lane today.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessCostProfile {
    pub cost_per_person: RawNumber,
    pub headcount_logistics_compliance: RawNumber,
    pub headcount_accounts_payable: RawNumber,
    #[serde(alias = "customsComplianceCostPerShipment")]
    pub customs_and_compliance_cost_per_shipment: RawNumber,
    pub ancillary_cost_per_shipment: RawNumber,
    pub efficiency_percent: RawNumber,
}

impl Default for ProcessCostProfile {
    fn default() -> Self {
        Self {
            cost_per_person: 80_000.0.into(),
            headcount_logistics_compliance: 4.0.into(),
            headcount_accounts_payable: 2.0.into(),
            customs_and_compliance_cost_per_shipment: 25.0.into(),
            ancillary_cost_per_shipment: 10.0.into(),
            efficiency_percent: 40.0.into(),
        }
    }
}

impl ProcessCostProfile {
    /// Annual fully-loaded cost of one person.
    pub fn cost_per_person(&self) -> f64 {
        non_negative(parse_number(&self.cost_per_person, 0.0))
    }

    pub fn headcount_logistics_compliance(&self) -> f64 {
        non_negative(parse_number(&self.headcount_logistics_compliance, 0.0))
    }

    pub fn headcount_accounts_payable(&self) -> f64 {
        non_negative(parse_number(&self.headcount_accounts_payable, 0.0))
    }

    pub fn customs_and_compliance_cost_per_shipment(&self) -> f64 {
        non_negative(parse_number(
            &self.customs_and_compliance_cost_per_shipment,
            0.0,
        ))
    }

    pub fn ancillary_cost_per_shipment(&self) -> f64 {
        non_negative(parse_number(&self.ancillary_cost_per_shipment, 0.0))
    }

    pub fn efficiency_percent(&self) -> f64 {
        percent(parse_number(
            &self.efficiency_percent,
            DEFAULT_EFFICIENCY_PERCENT,
        ))
    }
}

/// Company-level accounts and funding cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountingProfile {
    pub revenue: RawNumber,
    pub cost_of_sale: RawNumber,
    pub operational_costs: RawNumber,
    pub days_sales_outstanding: RawNumber,
    pub days_inventory_outstanding: RawNumber,
    pub funding_rate_percent: RawNumber,
}

impl Default for AccountingProfile {
    fn default() -> Self {
        Self {
            revenue: 100_000_000.0.into(),
            cost_of_sale: 70_000_000.0.into(),
            operational_costs: 25_000_000.0.into(),
            days_sales_outstanding: RawNumber::Missing,
            days_inventory_outstanding: RawNumber::Missing,
            funding_rate_percent: 8.0.into(),
        }
    }
}

impl AccountingProfile {
    pub fn revenue(&self) -> f64 {
        non_negative(parse_number(&self.revenue, 0.0))
    }

    pub fn cost_of_sale(&self) -> f64 {
        non_negative(parse_number(&self.cost_of_sale, 0.0))
    }

    pub fn operational_costs(&self) -> f64 {
        non_negative(parse_number(&self.operational_costs, 0.0))
    }

    pub fn days_sales_outstanding(&self) -> f64 {
        non_negative(parse_number(&self.days_sales_outstanding, 0.0))
    }

    pub fn days_inventory_outstanding(&self) -> f64 {
        non_negative(parse_number(&self.days_inventory_outstanding, 0.0))
    }

    /// Annualised cost of capital; floored at zero, no upper bound.
    pub fn funding_rate_percent(&self) -> f64 {
        non_negative(parse_number(&self.funding_rate_percent, 0.0))
    }
}
