use serde_json::json;
use trade_benefit_calculator::domain::{
    compute_all_results, estimate_process_savings, model_cash_conversion, summarize_accounts,
    CashConversionInput, ProcessSavingsInput, TradeState,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

/// Default form plus the figures the canonical walk-through fixes explicitly.
fn canonical_state() -> TradeState {
    serde_json::from_value(json!({
        "footprint": {
            "shipmentsPerYear": 1000,
            "totalShipmentValueUSD": 5000000,
            "currentPaymentTermsDays": 60,
            "tradeCOGSSharePercent": 100,
            "discountAtShipmentPercent": 1.5,
            "uptakeAtShipmentPercent": 60
        },
        "process": {
            "costPerPerson": 80000,
            "headcountLogisticsCompliance": 4,
            "headcountAccountsPayable": 2,
            "customsAndComplianceCostPerShipment": 25,
            "ancillaryCostPerShipment": 10,
            "efficiencyPercent": 40
        },
        "accounting": {
            "revenue": 100000000,
            "costOfSale": 70000000,
            "operationalCosts": 25000000,
            "daysSalesOutstanding": 0,
            "daysInventoryOutstanding": 0,
            "fundingRatePercent": 8
        }
    }))
    .unwrap()
}

#[test]
fn canonical_payment_at_shipment() {
    let results = compute_all_results(&canonical_state());

    assert_eq!(results.accounting.gross_profit, 30_000_000.0);
    assert_eq!(results.accounting.net_profit, 5_000_000.0);

    let scenario = &results.at_shipment;
    let process = &scenario.workings.process;
    assert_eq!(process.people_cost_baseline, 480_000.0);
    assert_eq!(process.people_savings, 192_000.0);
    assert_eq!(process.per_shipment_baseline, 35_000.0);
    assert_eq!(process.per_shipment_savings, 14_000.0);
    assert_eq!(process.total_process_savings, 206_000.0);

    let cash = &scenario.workings.cash_conversion;
    assert_eq!(cash.ccc_current, -60.0);
    assert_eq!(cash.ccc_new, 0.0);
    assert_eq!(cash.delta_ccc, 60.0);
    assert_eq!(cash.trade_cogs, 70_000_000.0);
    assert_close(cash.working_capital_change, 11_506_849.32);

    assert_close(scenario.discount_benefit, 45_000.0);
    assert_close(scenario.funding_impact, 920_547.95);
    assert_close(scenario.net_financing_benefit, -875_547.95);
    assert_close(scenario.total_annual_benefit, -669_547.95);
    assert_close(scenario.net_profit_before, 5_000_000.0);
    assert_close(scenario.net_profit_after, 4_330_452.05);
    assert_eq!(scenario.label, "Payment at shipment");
}

#[test]
fn results_are_deterministic() {
    let state = canonical_state();
    let first = serde_json::to_string(&compute_all_results(&state)).unwrap();
    let second = serde_json::to_string(&compute_all_results(&state)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_inputs_still_produce_finite_results() {
    let state: TradeState = serde_json::from_value(json!({
        "footprint": {
            "shipmentsPerYear": "lots",
            "totalShipmentValueUSD": "5,000,000",
            "currentPaymentTermsDays": null,
            "tradeCOGSSharePercent": [],
            "uptakeAfterDeliveryPercent": -40
        },
        "process": { "efficiencyPercent": "abc", "costPerPerson": {} },
        "accounting": { "fundingRatePercent": "", "revenue": true }
    }))
    .unwrap();

    let results = compute_all_results(&state);
    let json = serde_json::to_value(&results).unwrap();
    let mut numbers = Vec::new();
    collect_numbers(&json, &mut numbers);
    assert!(!numbers.is_empty());
    assert!(numbers.iter().all(|n| n.is_finite()));
    assert_eq!(results.after_delivery.discount_benefit, 0.0);
    assert_eq!(results.at_shipment.workings.process.efficiency, 0.4);
}

fn collect_numbers(value: &serde_json::Value, out: &mut Vec<f64>) {
    match value {
        serde_json::Value::Number(n) => out.extend(n.as_f64()),
        serde_json::Value::Array(items) => items.iter().for_each(|v| collect_numbers(v, out)),
        serde_json::Value::Object(map) => map.values().for_each(|v| collect_numbers(v, out)),
        _ => {}
    }
}

#[test]
fn extreme_finite_inputs_produce_finite_results() {
    let state: TradeState = serde_json::from_value(json!({
        "footprint": {
            "shipmentsPerYear": 1e300,
            "totalShipmentValueUSD": 1e308,
            "transitAndClearanceDays": 1.7e308,
            "currentPaymentTermsDays": 1e200,
            "discountAtShipmentPercent": 1e308,
            "uptakeAtShipmentPercent": 100,
            "discountAfterDeliveryPercent": 1e308,
            "uptakeAfterDeliveryPercent": 0,
            "paymentDaysAfterDelivery": 1.7e308
        },
        "process": {
            "costPerPerson": 1e308,
            "headcountLogisticsCompliance": 1e308,
            "headcountAccountsPayable": 1e308,
            "customsAndComplianceCostPerShipment": 1e308,
            "efficiencyPercent": 100
        },
        "accounting": {
            "revenue": 0,
            "costOfSale": 1e200,
            "operationalCosts": 1.7e308,
            "daysSalesOutstanding": 1.7e308,
            "daysInventoryOutstanding": 1.7e308,
            "fundingRatePercent": 1e308
        }
    }))
    .unwrap();

    let results = compute_all_results(&state);
    let json = serde_json::to_value(&results).unwrap();
    let mut numbers = Vec::new();
    collect_numbers(&json, &mut numbers);
    assert!(!json.to_string().contains("null"));
    assert!(numbers.iter().all(|n| n.is_finite()));
    assert!(results.at_shipment.funding_impact.is_finite());
    assert!(results.after_delivery.workings.inputs.new_dpo.is_finite());
}

#[test]
fn accounting_identity_holds() {
    for (revenue, cost, opex) in [
        (0.0, 0.0, 0.0),
        (1.5e9, 2.0e9, 3.0e8),
        (-10.0, 4.0, 2.5),
        (123_456.78, 23_456.78, 99_999.99),
    ] {
        let summary = summarize_accounts(revenue, cost, opex);
        assert_eq!(summary.net_profit, revenue - cost - opex);
    }
}

#[test]
fn process_savings_are_additive() {
    let base = ProcessSavingsInput {
        shipments_per_year: 840.0,
        cost_per_person: 65_000.0,
        headcount_logistics_compliance: 3.0,
        headcount_accounts_payable: 1.5,
        customs_and_compliance_cost_per_shipment: 42.0,
        ancillary_cost_per_shipment: 8.0,
        efficiency_percent: 35.0,
    };
    let both = estimate_process_savings(&base);
    let people_only = estimate_process_savings(&ProcessSavingsInput {
        customs_and_compliance_cost_per_shipment: 0.0,
        ancillary_cost_per_shipment: 0.0,
        ..base.clone()
    });
    let shipments_only = estimate_process_savings(&ProcessSavingsInput {
        cost_per_person: 0.0,
        ..base.clone()
    });

    assert_eq!(people_only.per_shipment_savings, 0.0);
    assert_eq!(shipments_only.people_savings, 0.0);
    assert_eq!(people_only.people_savings, both.people_savings);
    assert_eq!(shipments_only.per_shipment_savings, both.per_shipment_savings);
    assert_eq!(
        both.total_process_savings,
        people_only.total_process_savings + shipments_only.total_process_savings
    );
}

#[test]
fn earlier_payment_costs_and_later_payment_benefits() {
    let base = CashConversionInput {
        days_sales_outstanding: 40.0,
        days_inventory_outstanding: 25.0,
        current_dpo: 45.0,
        new_dpo: 45.0,
        cost_of_sale: 12_000_000.0,
        trade_cogs_share_percent: 60.0,
        funding_rate_percent: 6.5,
    };

    for new_dpo in [0.0, 10.0, 44.0] {
        let result = model_cash_conversion(&CashConversionInput { new_dpo, ..base.clone() });
        assert!(result.delta_ccc > 0.0);
        assert!(result.funding_impact >= 0.0);
    }
    for new_dpo in [46.0, 90.0, 365.0] {
        let result = model_cash_conversion(&CashConversionInput { new_dpo, ..base.clone() });
        assert!(result.delta_ccc < 0.0);
        assert!(result.funding_impact <= 0.0);
    }
}
