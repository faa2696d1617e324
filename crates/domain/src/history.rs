//! History: bills previously submitted by a user, oldest first.

use serde::{Deserialize, Serialize};

/// One historical bill as returned by the dashboard-data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillHistoryEntry {
    pub month: String,
    pub total_units: f64,
    pub bill_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_history_rows_in_order() {
        let rows: Vec<BillHistoryEntry> = serde_json::from_str(
            r#"[
                {"month": "Jan 2024", "total_units": 120, "bill_amount": 900.5},
                {"month": "Feb 2024", "total_units": 95, "bill_amount": 700}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, "Jan 2024");
        assert!((rows[1].bill_amount - 700.0).abs() < f64::EPSILON);
    }
}
