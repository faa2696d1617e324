//! Appliances: the electrical devices a household describes on the bill form.
//!
//! The form keeps an [`ApplianceList`]: an append-only, ordered list of rows
//! holding the raw text of each input. The UI renders from the list and the
//! submission reads from it, so insertion order is the payload order.

use serde::{Deserialize, Serialize};

use crate::id::ApplianceRowId;

/// One appliance as sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    /// Rated power in watts.
    pub power_rating: f64,
    /// Daily usage in hours.
    pub usage_hours: f64,
}

/// Editable input of an [`ApplianceRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceField {
    Name,
    PowerRating,
    UsageHours,
}

/// One row of the appliance form, holding raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceRow {
    pub id: ApplianceRowId,
    pub name: String,
    pub power_rating: String,
    pub usage_hours: String,
}

impl ApplianceRow {
    fn empty() -> Self {
        Self {
            id: ApplianceRowId::new(),
            name: String::new(),
            power_rating: String::new(),
            usage_hours: String::new(),
        }
    }

    /// Read the current text of `field`.
    #[must_use]
    pub fn field(&self, field: ApplianceField) -> &str {
        match field {
            ApplianceField::Name => &self.name,
            ApplianceField::PowerRating => &self.power_rating,
            ApplianceField::UsageHours => &self.usage_hours,
        }
    }

    /// Convert the raw inputs into an [`Appliance`].
    ///
    /// The name is taken as typed. Numbers go through [`parse_number`].
    #[must_use]
    pub fn to_appliance(&self) -> Appliance {
        Appliance {
            name: self.name.clone(),
            power_rating: parse_number(&self.power_rating),
            usage_hours: parse_number(&self.usage_hours),
        }
    }
}

/// Append-only, ordered list of appliance rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceList {
    rows: Vec<ApplianceRow>,
}

impl ApplianceList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row and return its id. There is no cap on row count.
    pub fn add(&mut self) -> ApplianceRowId {
        let row = ApplianceRow::empty();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Overwrite one input of the row identified by `id`.
    ///
    /// Returns `false` if no such row exists.
    pub fn set_field(&mut self, id: ApplianceRowId, field: ApplianceField, value: String) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match field {
            ApplianceField::Name => row.name = value,
            ApplianceField::PowerRating => row.power_rating = value,
            ApplianceField::UsageHours => row.usage_hours = value,
        }
        true
    }

    #[must_use]
    pub fn get(&self, id: ApplianceRowId) -> Option<&ApplianceRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ApplianceRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read every row back as an [`Appliance`], in insertion order.
    #[must_use]
    pub fn to_appliances(&self) -> Vec<Appliance> {
        self.rows.iter().map(ApplianceRow::to_appliance).collect()
    }
}

/// Parse a numeric form input the way `parseFloat` reads it.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"12abc"` is `12`. Text without a leading number yields `NaN`, which
/// serializes to JSON `null`. Only the spelling `Infinity` is infinite.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let whole = count_digits(&bytes[end..]);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exponent = count_digits(&bytes[exp_start..]);
        if exponent > 0 {
            end = exp_start + exponent;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(list: &mut ApplianceList, id: ApplianceRowId, name: &str, power: &str, hours: &str) {
        assert!(list.set_field(id, ApplianceField::Name, name.to_string()));
        assert!(list.set_field(id, ApplianceField::PowerRating, power.to_string()));
        assert!(list.set_field(id, ApplianceField::UsageHours, hours.to_string()));
    }

    #[test]
    fn should_start_empty() {
        let list = ApplianceList::new();
        assert!(list.is_empty());
        assert!(list.to_appliances().is_empty());
    }

    #[test]
    fn should_add_exactly_n_rows() {
        let mut list = ApplianceList::new();
        for _ in 0..5 {
            list.add();
        }
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn should_keep_row_values_independent() {
        let mut list = ApplianceList::new();
        let first = list.add();
        let second = list.add();
        fill(&mut list, first, "Fan", "75", "5");

        assert_eq!(list.get(first).unwrap().name, "Fan");
        assert_eq!(list.get(second).unwrap().name, "");
        assert_eq!(list.get(second).unwrap().field(ApplianceField::PowerRating), "");
    }

    #[test]
    fn should_read_back_in_insertion_order() {
        let mut list = ApplianceList::new();
        let ids: Vec<_> = (0..3).map(|_| list.add()).collect();
        fill(&mut list, ids[2], "Heater", "2000", "1.5");
        fill(&mut list, ids[0], "Fan", "75", "5");
        fill(&mut list, ids[1], "Fridge", "150", "24");

        let names: Vec<_> = list.to_appliances().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Fan", "Fridge", "Heater"]);
    }

    #[test]
    fn should_convert_numeric_fields() {
        let mut list = ApplianceList::new();
        let id = list.add();
        fill(&mut list, id, "Fan", "75", "5");

        assert_eq!(
            list.to_appliances(),
            vec![Appliance {
                name: "Fan".to_string(),
                power_rating: 75.0,
                usage_hours: 5.0,
            }]
        );
    }

    #[test]
    fn should_ignore_updates_for_unknown_row() {
        let mut list = ApplianceList::new();
        list.add();
        assert!(!list.set_field(ApplianceRowId::new(), ApplianceField::Name, "x".to_string()));
    }

    #[test]
    fn should_parse_blank_number_as_nan() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!((parse_number(" 1.5 ") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_parse_longest_numeric_prefix() {
        let cases = [
            ("12abc", 12.0),
            ("75W", 75.0),
            ("-3.5e2x", -350.0),
            ("+.5", 0.5),
            ("5.", 5.0),
            ("1e", 1.0),
            ("2E-1 h", 0.2),
            ("\t\n 8", 8.0),
        ];
        for (raw, expected) in cases {
            assert!(
                (parse_number(raw) - expected).abs() < 1e-9,
                "parse_number({raw:?})"
            );
        }
    }

    #[test]
    fn should_only_accept_spelled_out_infinity() {
        let positive = parse_number("Infinity");
        assert!(positive.is_infinite() && positive.is_sign_positive());
        let negative = parse_number("-Infinity");
        assert!(negative.is_infinite() && negative.is_sign_negative());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
    }

    #[test]
    fn should_serialize_nan_as_null() {
        let appliance = Appliance {
            name: "Fan".to_string(),
            power_rating: f64::NAN,
            usage_hours: 5.0,
        };
        let value = serde_json::to_value(&appliance).unwrap();
        assert!(value["power_rating"].is_null());
    }
}
