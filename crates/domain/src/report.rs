//! Report: the prediction service's response to a bill submission.
//!
//! The whole response is persisted as the *result record* and rendered on
//! the report page. Fields the renderer does not use (bill id, per-appliance
//! usage list, …) are kept in `extra` so the stored record matches the
//! response.

use serde::{Deserialize, Serialize};

use crate::appliance_map::ApplianceMap;

type Extra = serde_json::Map<String, serde_json::Value>;

/// Full response of the data-submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillReport {
    pub bill: BillDetails,
    pub predictions: Predictions,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The bill as recorded by the service, with its recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetails {
    pub month: String,
    pub total_units: f64,
    pub bill_amount: f64,
    pub recommendation: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Forecasts and insights derived from the user's bill history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub predicted_next_bill: f64,
    pub predicted_next_total_units: f64,
    /// Predicted next-month usage per appliance, in kWh.
    pub appliance_level_predictions: ApplianceMap<f64>,
    pub appliance_efficiency_alerts: ApplianceMap<String>,
    /// Estimated saving per appliance, in currency units.
    pub energy_savings_simulation: ApplianceMap<f64>,
    /// kg CO₂ for the submitted month.
    pub carbon_footprint: f64,
    pub predicted_seasonal_consumption: f64,
    pub dynamic_tariff_suggestion: String,
    pub solar_energy_savings: f64,
    pub annual_financial_projection: f64,
    pub usage_benchmark: String,
    pub anomaly_flag: bool,
    pub peak_demand_prediction: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Predictions {
    /// Efficiency alert paired with an appliance prediction, matched by name.
    #[must_use]
    pub fn efficiency_alert(&self, appliance: &str) -> Option<&str> {
        self.appliance_efficiency_alerts
            .get(appliance)
            .map(String::as_str)
    }
}

/// Sample service responses shared by the test suites of dependent crates.
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures {
    use serde_json::{Value, json};

    use super::BillReport;

    /// A response shaped like the prediction service's.
    #[must_use]
    pub fn sample_response() -> Value {
        json!({
            "bill": {
                "id": 7,
                "user_id": "u1",
                "month": "2024-01",
                "total_units": 100.0,
                "bill_amount": 500.0,
                "recommendation": "Good job! Your energy consumption is within expected limits."
            },
            "appliances": [{"appliance": "Fan", "energy_usage": 0.375}],
            "predictions": {
                "predicted_next_bill": 512.345,
                "predicted_next_total_units": 104.0,
                "appliance_level_predictions": {"A": 10.0, "B": 5.555},
                "appliance_efficiency_alerts": {"B": "Efficiency drop detected. Consider maintenance.", "A": "Normal performance."},
                "energy_savings_simulation": {"A": 0.375, "B": 1.0},
                "carbon_footprint": 82.0,
                "predicted_seasonal_consumption": 93.6,
                "dynamic_tariff_suggestion": "Operate appliances during off-peak hours (e.g., 12 AM - 6 AM)",
                "solar_energy_savings": 156.0,
                "annual_financial_projection": 6148.14,
                "usage_benchmark": "Below Average",
                "anomaly_flag": false,
                "peak_demand_prediction": "Yes"
            }
        })
    }

    /// [`sample_response`] decoded.
    ///
    /// # Panics
    ///
    /// If the sample stops matching [`BillReport`].
    #[must_use]
    pub fn sample_report() -> BillReport {
        serde_json::from_value(sample_response()).expect("sample response is a valid report")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_response;
    use super::*;

    #[test]
    fn should_deserialize_service_response() {
        let report: BillReport = serde_json::from_value(sample_response()).unwrap();
        assert_eq!(report.bill.month, "2024-01");
        assert_eq!(report.predictions.appliance_level_predictions.len(), 2);
        assert!(!report.predictions.anomaly_flag);
        assert_eq!(report.predictions.peak_demand_prediction, "Yes");
    }

    #[test]
    fn should_pair_alerts_by_name_not_position() {
        let report: BillReport = serde_json::from_value(sample_response()).unwrap();
        assert_eq!(
            report.predictions.efficiency_alert("A"),
            Some("Normal performance.")
        );
        assert_eq!(report.predictions.efficiency_alert("Missing"), None);
    }

    #[test]
    fn should_keep_fields_it_does_not_render() {
        let raw = sample_response();
        let report: BillReport = serde_json::from_value(raw.clone()).unwrap();
        assert!(report.extra.contains_key("appliances"));
        assert!(report.bill.extra.contains_key("id"));
        assert_eq!(serde_json::to_value(&report).unwrap(), raw);
    }

    #[test]
    fn should_reject_response_without_predictions() {
        let raw = serde_json::json!({"bill": sample_response()["bill"].clone()});
        assert!(serde_json::from_value::<BillReport>(raw).is_err());
    }
}
