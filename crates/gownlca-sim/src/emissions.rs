use gownlca_core::models::{EmissionBreakdown, EmissionFactors, Pollutant};

/// Emissions of `uses` gown uses at `factor` per use, truncated to whole units.
pub fn truncate(uses: u64, factor: f64) -> u64 {
    // Factors are validated non-negative, so the cast only drops the fraction.
    (uses as f64 * factor).floor() as u64
}

/// Reusable and disposable shares for one pollutant.
pub fn breakdown(
    pollutant: Pollutant,
    reusable_uses: u64,
    reusable: &EmissionFactors,
    disposable_uses: u64,
    disposable: &EmissionFactors,
) -> EmissionBreakdown {
    EmissionBreakdown::new(
        truncate(reusable_uses, reusable.factor(pollutant)),
        truncate(disposable_uses, disposable.factor(pollutant)),
    )
}

/// Per-pollutant breakdowns in `(CO2, Water, Energy)` order.
pub fn all_breakdowns(
    reusable_uses: u64,
    reusable: &EmissionFactors,
    disposable_uses: u64,
    disposable: &EmissionFactors,
) -> (EmissionBreakdown, EmissionBreakdown, EmissionBreakdown) {
    let [co2, water, energy] = Pollutant::ALL
        .map(|p| breakdown(p, reusable_uses, reusable, disposable_uses, disposable));
    (co2, water, energy)
}

/// Per-pollutant breakdowns for uses served entirely by single-use gowns.
pub fn disposable_breakdowns(
    uses: u64,
    factors: &EmissionFactors,
) -> (EmissionBreakdown, EmissionBreakdown, EmissionBreakdown) {
    let [co2, water, energy] = Pollutant::ALL
        .map(|p| EmissionBreakdown::disposable_only(truncate(uses, factors.factor(p))));
    (co2, water, energy)
}
