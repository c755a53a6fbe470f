//! Static profitability advisory shown next to every prediction.
//!
//! The rows are illustrative guidance, not derived from the model output,
//! and are ranked once by importance.

use std::sync::LazyLock;

/// Direction in which a feature moves profit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    Positive,
    Negative,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Increases Profit",
            Self::Negative => "Decreases Profit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvisoryRow {
    pub feature: &'static str,
    /// Relative importance, 0-100.
    pub importance: u8,
    pub impact: Impact,
    pub recommendation: &'static str,
}

impl AdvisoryRow {
    /// Text for the feature column, e.g. `Load Factor (%) (90%)`.
    pub fn feature_cell(&self) -> String {
        format!("{} ({}%)", self.feature, self.importance)
    }
}

const ROWS: [AdvisoryRow; 10] = [
    AdvisoryRow {
        feature: "Load Factor (%)",
        importance: 90,
        impact: Impact::Positive,
        recommendation: "Increase load factor by optimizing pricing and marketing to fill more seats.",
    },
    AdvisoryRow {
        feature: "Revenue (USD)",
        importance: 85,
        impact: Impact::Positive,
        recommendation: "Boost revenue through higher ticket sales or premium offerings.",
    },
    AdvisoryRow {
        feature: "Operating Cost (USD)",
        importance: 80,
        impact: Impact::Negative,
        recommendation: "Reduce operating costs by negotiating supplier contracts or optimizing routes.",
    },
    AdvisoryRow {
        feature: "Revenue per ASK",
        importance: 75,
        impact: Impact::Positive,
        recommendation: "Increase Revenue per ASK by optimizing ticket pricing strategies, upselling premium seats, or enhancing loyalty programs.",
    },
    AdvisoryRow {
        feature: "Delay (Minutes)",
        importance: 70,
        impact: Impact::Negative,
        recommendation: "Minimize delays through better scheduling and operational efficiency.",
    },
    AdvisoryRow {
        feature: "Cost per ASK",
        importance: 70,
        impact: Impact::Negative,
        recommendation: "Reduce Cost per ASK by improving fuel efficiency, streamlining operations, or renegotiating fixed costs like leasing agreements.",
    },
    AdvisoryRow {
        feature: "Aircraft Utilization (Hours/Day)",
        importance: 65,
        impact: Impact::Positive,
        recommendation: "Maximize aircraft utilization by increasing flight frequency.",
    },
    AdvisoryRow {
        feature: "Fuel Efficiency (ASK)",
        importance: 60,
        impact: Impact::Positive,
        recommendation: "Improve fuel efficiency with modern aircraft or route planning.",
    },
    AdvisoryRow {
        feature: "Ancillary Revenue (USD)",
        importance: 55,
        impact: Impact::Positive,
        recommendation: "Enhance ancillary revenue with in-flight sales or baggage fees.",
    },
    AdvisoryRow {
        feature: "Maintenance Downtime (Hours)",
        importance: 50,
        impact: Impact::Negative,
        recommendation: "Reduce maintenance downtime with proactive upkeep schedules.",
    },
];

// Stable sort: equal importance keeps declaration order.
static RANKED: LazyLock<Vec<AdvisoryRow>> = LazyLock::new(|| {
    let mut rows = ROWS.to_vec();
    rows.sort_by(|a, b| b.importance.cmp(&a.importance));
    rows
});

/// Advisory rows, most important first.
pub fn advisory_rows() -> &'static [AdvisoryRow] {
    &RANKED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(feature: &str) -> usize {
        advisory_rows()
            .iter()
            .position(|row| row.feature == feature)
            .unwrap()
    }

    #[test]
    fn rows_are_descending_by_importance() {
        let rows = advisory_rows();
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|pair| pair[0].importance >= pair[1].importance));
    }

    #[test]
    fn load_factor_precedes_revenue() {
        assert_eq!(position("Load Factor (%)"), 0);
        assert!(position("Load Factor (%)") < position("Revenue (USD)"));
    }

    #[test]
    fn ties_keep_declaration_order() {
        assert_eq!(position("Delay (Minutes)") + 1, position("Cost per ASK"));
    }

    #[test]
    fn feature_cell_and_impact_labels() {
        let first = advisory_rows()[0];
        assert_eq!(first.feature_cell(), "Load Factor (%) (90%)");
        assert_eq!(first.impact.label(), "Increases Profit");
        assert_eq!(Impact::Negative.label(), "Decreases Profit");
    }

    #[test]
    fn importance_within_percent_range() {
        assert!(advisory_rows().iter().all(|row| row.importance <= 100));
    }
}
