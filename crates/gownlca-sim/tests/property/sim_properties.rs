use gownlca_core::models::{EmissionFactors, Gown, InvestmentParameters, Pollutant};
use gownlca_sim::{calculate_depreciation_schedule, calculate_disposable_schedule_with_gown_data, SimulationEngine};
use proptest::prelude::*;

fn arb_factors() -> impl Strategy<Value = EmissionFactors> {
    (0.0f64..5.0, 0.0f64..50.0, 0.0f64..50.0)
        .prop_map(|(co2, water, energy)| EmissionFactors::new(co2, water, energy))
}

fn arb_reusable() -> impl Strategy<Value = Gown> {
    (
        1.0f64..100.0,
        1u32..500,
        0.0f64..2.0,
        0.0f64..0.5,
        0.0f64..0.2,
        arb_factors(),
    )
        .prop_map(|(cost, washes, laundry, waste, residual, factors)| {
            Gown::reusable("rg", "Reusable", cost, washes)
                .with_laundry_cost(laundry)
                .with_waste_cost(waste)
                .with_residual_value(residual)
                .with_emissions(factors)
        })
}

fn arb_disposable() -> impl Strategy<Value = Gown> {
    (0.0f64..5.0, 0.0f64..1.0, arb_factors()).prop_map(|(cost, waste, factors)| {
        Gown::disposable("dg", "Disposable", cost)
            .with_waste_cost(waste)
            .with_emissions(factors)
    })
}

fn arb_params() -> impl Strategy<Value = InvestmentParameters> {
    (0u32..200, 1u32..=15, 1u32..20_000)
        .prop_map(|(invest, horizon, annual)| InvestmentParameters::new(invest, horizon, annual).unwrap())
}

// ── Conservation: total = capex + opex + extra disposable cost ───────────

proptest! {
    #[test]
    fn total_expenses_are_conserved(
        reusable in arb_reusable(),
        disposable in arb_disposable(),
        params in arb_params(),
    ) {
        let results = SimulationEngine::new()
            .calculate_investment_results(&[reusable, disposable], &params)
            .unwrap();
        for r in &results {
            prop_assert_eq!(r.total_expenses, r.capex + r.opex + r.extra_disposable_cost);
            prop_assert_eq!(
                r.cost_per_use,
                r.total_expenses / r.total_uses_over_horizon as f64
            );
        }
    }
}

// ── Emission additivity ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn emission_totals_are_additive(
        reusable in arb_reusable(),
        params in arb_params(),
    ) {
        let results = SimulationEngine::new()
            .calculate_investment_results(&[reusable], &params)
            .unwrap();
        for pollutant in Pollutant::ALL {
            let b = results[0].emissions(pollutant);
            prop_assert_eq!(b.total_emissions, b.reusable_emissions + b.disposable_emissions);
        }
    }
}

// ── Disposable degenerate case ───────────────────────────────────────────

proptest! {
    #[test]
    fn disposable_has_no_capex_and_full_utilization(
        disposable in arb_disposable(),
        params in arb_params(),
    ) {
        let r = &SimulationEngine::new()
            .calculate_investment_results(&[disposable], &params)
            .unwrap()[0];
        prop_assert_eq!(r.capex, 0.0);
        prop_assert_eq!(r.utilization_rate, 100.0);
        prop_assert_eq!(r.max_gown_uses_with_reduction, 0);
        prop_assert_eq!(r.extra_disposable_gowns_needed, params.total_uses_over_horizon());
        prop_assert_eq!(r.extra_disposable_cost, 0.0);
    }
}

// ── Shortfall monotonicity ───────────────────────────────────────────────

proptest! {
    #[test]
    fn more_gowns_never_increase_shortfall(
        reusable in arb_reusable(),
        params in arb_params(),
        extra_units in 1u32..100,
    ) {
        let engine = SimulationEngine::new();
        let base = params.with_investment(params.number_of_gowns_to_invest().max(1));
        let more = base.with_investment(base.number_of_gowns_to_invest() + extra_units);

        let before = &engine.calculate_investment_results(std::slice::from_ref(&reusable), &base).unwrap()[0];
        let after = &engine.calculate_investment_results(std::slice::from_ref(&reusable), &more).unwrap()[0];
        prop_assert!(
            after.extra_disposable_gowns_needed <= before.extra_disposable_gowns_needed,
            "shortfall grew from {} to {}",
            before.extra_disposable_gowns_needed,
            after.extra_disposable_gowns_needed
        );
    }
}

// ── Reusable shortfall identity and utilization bound ────────────────────

proptest! {
    #[test]
    fn reusable_shortfall_matches_capacity(
        reusable in arb_reusable(),
        params in arb_params(),
    ) {
        let params = params.with_investment(params.number_of_gowns_to_invest().max(1));
        let r = &SimulationEngine::new()
            .calculate_investment_results(&[reusable], &params)
            .unwrap()[0];
        prop_assert_eq!(
            r.extra_disposable_gowns_needed,
            r.total_uses_over_horizon.saturating_sub(r.max_gown_uses_with_reduction)
        );
        prop_assert_eq!(
            r.actual_uses_for_opex + r.extra_disposable_gowns_needed,
            r.total_uses_over_horizon
        );
        prop_assert!(r.utilization_rate > 0.0 && r.utilization_rate <= 100.0);
    }
}

// ── Schedule length ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn schedules_span_the_horizon(
        reusable in arb_reusable(),
        disposable in arb_disposable(),
        params in arb_params(),
    ) {
        let results = SimulationEngine::new()
            .calculate_investment_results(&[reusable, disposable.clone()], &params)
            .unwrap();
        let horizon = params.planning_horizon() as usize;

        prop_assert_eq!(calculate_depreciation_schedule(&results[0]).len(), horizon);
        prop_assert!(calculate_depreciation_schedule(&results[1]).is_empty());
        prop_assert_eq!(
            calculate_disposable_schedule_with_gown_data(&results[1], &disposable).len(),
            horizon
        );
    }
}

// ── Idempotence ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_give_identical_outputs(
        reusable in arb_reusable(),
        disposable in arb_disposable(),
        params in arb_params(),
    ) {
        let engine = SimulationEngine::new();
        let gowns = [reusable, disposable];
        let first = engine.calculate_investment_results(&gowns, &params).unwrap();
        let second = engine.calculate_investment_results(&gowns, &params).unwrap();
        prop_assert_eq!(first, second);
    }
}
