//! Prediction form: the fourteen operating metrics sent to `/predict`.

use super::form::{FieldSpec, FormState};
use crate::service::{FEATURE_COUNT, PredictRequest};

/// Prediction inputs, in the order the model expects them.
pub static FEATURE_FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        key: "delay",
        label: "Delay (Minutes)",
        description: "Average delay time per flight in minutes.",
    },
    FieldSpec {
        key: "aircraft_utilization",
        label: "Aircraft Utilization (Hours/Day)",
        description: "Average hours per day an aircraft is in use.",
    },
    FieldSpec {
        key: "turnaround_time",
        label: "Turnaround Time (Minutes)",
        description: "Time taken to prepare an aircraft for its next flight.",
    },
    FieldSpec {
        key: "load_factor",
        label: "Load Factor (%)",
        description: "Percentage of seats filled on average.",
    },
    FieldSpec {
        key: "fleet_availability",
        label: "Fleet Availability (%)",
        description: "Percentage of the fleet available for operations.",
    },
    FieldSpec {
        key: "maintenance_downtime",
        label: "Maintenance Downtime (Hours)",
        description: "Total hours aircraft are out of service for maintenance.",
    },
    FieldSpec {
        key: "fuel_efficiency",
        label: "Fuel Efficiency (ASK)",
        description: "Fuel efficiency measured in Available Seat Kilometers.",
    },
    FieldSpec {
        key: "revenue",
        label: "Revenue (USD)",
        description: "Total revenue generated from operations in USD.",
    },
    FieldSpec {
        key: "operating_cost",
        label: "Operating Cost (USD)",
        description: "Total cost of operations in USD.",
    },
    FieldSpec {
        key: "net_profit_margin",
        label: "Net Profit Margin (%)",
        description: "Percentage of revenue remaining after expenses.",
    },
    FieldSpec {
        key: "ancillary_revenue",
        label: "Ancillary Revenue (USD)",
        description: "Additional revenue from non-ticket sources in USD.",
    },
    FieldSpec {
        key: "debt_to_equity",
        label: "Debt-to-Equity Ratio",
        description: "Ratio of total debt to shareholders' equity.",
    },
    FieldSpec {
        key: "revenue_per_ask",
        label: "Revenue per ASK",
        description: "Revenue per Available Seat Kilometer.",
    },
    FieldSpec {
        key: "cost_per_ask",
        label: "Cost per ASK",
        description: "Operating cost per Available Seat Kilometer.",
    },
];

/// A blank prediction form.
pub fn new_form() -> FormState {
    FormState::empty(&FEATURE_FIELDS)
}

/// Snapshot the form into a request body, coercing bad input to `0`.
pub fn build_request(form: &FormState) -> PredictRequest {
    PredictRequest {
        features: std::array::from_fn(|index| form.number(index)),
    }
}

/// Display text for a predicted profit value.
pub fn format_prediction(value: f64) -> String {
    format!("{value:.2} USD")
}
