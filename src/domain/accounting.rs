use serde::{Deserialize, Serialize};

use super::entities::AccountingProfile;
use super::normalize::saturate;

/// Baseline profit figures before any digitalisation benefit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingSummary {
    pub revenue: f64,
    pub cost_of_sale: f64,
    pub gross_profit: f64,
    pub operational_costs: f64,
    pub net_profit: f64,
}

/// Gross and net profit. The result is not clamped; losses stay negative.
pub fn summarize_accounts(
    revenue: f64,
    cost_of_sale: f64,
    operational_costs: f64,
) -> AccountingSummary {
    let gross_profit = saturate(revenue - cost_of_sale);
    let net_profit = saturate(gross_profit - operational_costs);

    AccountingSummary {
        revenue,
        cost_of_sale,
        gross_profit,
        operational_costs,
        net_profit,
    }
}

impl From<&AccountingProfile> for AccountingSummary {
    fn from(profile: &AccountingProfile) -> Self {
        summarize_accounts(
            profile.revenue(),
            profile.cost_of_sale(),
            profile.operational_costs(),
        )
    }
}

/// Relative change from `before` to `after`, in percent.
///
/// `None` when `before` is zero or the ratio is not finite, so a results view
/// can show a placeholder instead of dividing by zero.
pub fn profit_improvement_percent(before: f64, after: f64) -> Option<f64> {
    if before == 0.0 {
        return None;
    }
    let change = (after / before - 1.0) * 100.0;
    change.is_finite().then_some(change)
}
