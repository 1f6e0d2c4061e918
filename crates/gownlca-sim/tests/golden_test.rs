//! Golden scenario tests.
//!
//! Each file under `test-fixtures/golden/scenarios/` holds an input scenario
//! and the expected projection for every gown, run with the default config.

use gownlca_core::models::{InvestmentResult, Scenario};
use gownlca_sim::SimulationEngine;
use test_fixtures::{list_fixtures, load_fixture_value};

const FLOAT_TOLERANCE: f64 = 1e-9;

fn check_float(name: &str, gown_id: &str, field: &str, actual: f64, expected: &serde_json::Value) {
    let expected = expected[field]
        .as_f64()
        .unwrap_or_else(|| panic!("{name}: missing {field} for {gown_id}"));
    assert!(
        (actual - expected).abs() < FLOAT_TOLERANCE,
        "{name}: {gown_id}.{field} expected {expected}, got {actual}"
    );
}

fn check_result(name: &str, actual: &InvestmentResult, expected: &serde_json::Value) {
    let id = actual.gown_id.as_str();
    assert_eq!(expected["gownId"], id, "{name}: result order mismatch");

    for (field, value) in [
        ("maxGownUsesWithReduction", actual.max_gown_uses_with_reduction),
        ("actualUsesForOpex", actual.actual_uses_for_opex),
        ("extraDisposableGownsNeeded", actual.extra_disposable_gowns_needed),
    ] {
        assert_eq!(expected[field], value, "{name}: {id}.{field}");
    }

    check_float(name, id, "capex", actual.capex, expected);
    check_float(name, id, "opex", actual.opex, expected);
    check_float(name, id, "extraDisposableCost", actual.extra_disposable_cost, expected);
    check_float(name, id, "totalExpenses", actual.total_expenses, expected);
    check_float(name, id, "utilizationRate", actual.utilization_rate, expected);
    check_float(name, id, "costPerUse", actual.cost_per_use, expected);

    let actual_json = serde_json::to_value(actual).unwrap();
    for field in ["co2Emissions", "waterEmissions", "energyEmissions"] {
        assert_eq!(
            actual_json[field], expected[field],
            "{name}: {id}.{field} breakdown mismatch"
        );
    }
}

#[test]
fn golden_scenarios() {
    let files = list_fixtures("golden/scenarios");
    assert!(files.len() >= 4, "expected at least 4 golden scenarios");

    let engine = SimulationEngine::new();
    for path in files {
        let relative = format!(
            "golden/scenarios/{}",
            path.file_name().unwrap().to_string_lossy()
        );
        let fixture = load_fixture_value(&relative);
        let scenario = Scenario::from_json(&fixture["input"].to_string())
            .unwrap_or_else(|e| panic!("{relative}: {e}"));
        let expected = fixture["expected"].as_array().unwrap();

        let results = engine.simulate_scenario(&scenario).unwrap();
        assert_eq!(results.len(), expected.len(), "{relative}: result count");
        for (actual, expected) in results.iter().zip(expected) {
            check_result(&relative, actual, expected);
        }
    }
}
