//! Report view: the result record laid out as the five report sections.
//!
//! This is the presentation model the report page renders. Keeping it free
//! of any UI framework lets the layout, labels and number formatting be
//! checked with plain unit tests.

use std::fmt;

use billsight_domain::report::BillReport;

/// Shown instead of the report when no result record exists.
pub const NO_RESULT_MESSAGE: &str = "No result data found. Please submit data first.";

/// Shown next to an appliance prediction that has no matching alert.
const MISSING_ALERT: &str = "Unknown";

/// What the report page should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    /// No result record: render [`NO_RESULT_MESSAGE`] and nothing else.
    Missing,
    /// The report sections in display order.
    Ready(Vec<ReportSection>),
}

/// One titled block of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: &'static str,
    pub body: SectionBody,
}

/// Content of a [`ReportSection`].
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Fixed `label: value` lines.
    Fields(Vec<ReportField>),
    /// One bullet per appliance.
    Items(Vec<ReportItem>),
}

/// A labelled value, already formatted with its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportField {
    pub label: &'static str,
    pub value: String,
}

/// A per-appliance bullet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportItem {
    pub name: String,
    pub text: String,
    pub note: Option<String>,
}

/// Format with exactly two decimals, rounding halves away from zero.
///
/// Rounding works on the shortest decimal text of `value`, so `1.005`
/// becomes `"1.01"` even though its binary value is slightly below it.
#[must_use]
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let negative = value < 0.0 && digits.iter().any(|d| *d != 0);
    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (units, cents) = text.split_at(text.len() - 2);
    format!("{}{units}.{cents}", if negative { "-" } else { "" })
}

/// Add one to the last digit, carrying leftwards.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

fn field(label: &'static str, value: String) -> ReportField {
    ReportField { label, value }
}

impl ReportView {
    /// Lay out `report` as sections.
    #[must_use]
    pub fn from_report(report: &BillReport) -> Self {
        let bill = &report.bill;
        let p = &report.predictions;

        let bill_details = ReportSection {
            title: "Bill Details",
            body: SectionBody::Fields(vec![
                field("Month", bill.month.clone()),
                field("Total Units", format!("{} kWh", bill.total_units)),
                field("Bill Amount", format!("₹{}", bill.bill_amount)),
                field("Suggestion", bill.recommendation.clone()),
            ]),
        };

        let basic = ReportSection {
            title: "Basic Predictions",
            body: SectionBody::Fields(vec![
                field("Next Month Bill", format!("₹{}", fixed2(p.predicted_next_bill))),
                field(
                    "Next Month Consumption",
                    format!("{} kWh", fixed2(p.predicted_next_total_units)),
                ),
            ]),
        };

        let appliances = ReportSection {
            title: "Appliance Predictions",
            body: SectionBody::Items(
                p.appliance_level_predictions
                    .iter()
                    .map(|(name, usage)| ReportItem {
                        name: name.to_string(),
                        text: format!("Predicted Usage: {} kWh.", fixed2(*usage)),
                        note: Some(format!(
                            "Efficiency: {}",
                            p.efficiency_alert(name).unwrap_or(MISSING_ALERT)
                        )),
                    })
                    .collect(),
            ),
        };

        let savings = ReportSection {
            title: "Energy Savings",
            body: SectionBody::Items(
                p.energy_savings_simulation
                    .iter()
                    .map(|(name, saving)| ReportItem {
                        name: name.to_string(),
                        text: format!("Estimated Saving: ₹{}", fixed2(*saving)),
                        note: None,
                    })
                    .collect(),
            ),
        };

        let insights = ReportSection {
            title: "Additional Insights",
            body: SectionBody::Fields(vec![
                field("Carbon Footprint", format!("{} kg CO₂", fixed2(p.carbon_footprint))),
                field(
                    "Seasonal Forecast",
                    format!("{} kWh", fixed2(p.predicted_seasonal_consumption)),
                ),
                field("Tariff Advice", p.dynamic_tariff_suggestion.clone()),
                field("Solar Savings", format!("₹{}", fixed2(p.solar_energy_savings))),
                field(
                    "Annual Projection",
                    format!("₹{}", fixed2(p.annual_financial_projection)),
                ),
                field("Usage Benchmark", p.usage_benchmark.clone()),
                field(
                    "Anomaly Detection",
                    if p.anomaly_flag { "Anomaly Detected" } else { "No Anomaly" }.to_string(),
                ),
                field("Peak Demand", p.peak_demand_prediction.clone()),
            ]),
        };

        Self::Ready(vec![bill_details, basic, appliances, savings, insights])
    }
}

impl From<Option<&BillReport>> for ReportView {
    fn from(report: Option<&BillReport>) -> Self {
        report.map_or(Self::Missing, Self::from_report)
    }
}

/// Plain-text rendering, one line per field or bullet.
impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = match self {
            Self::Missing => return f.write_str(NO_RESULT_MESSAGE),
            Self::Ready(sections) => sections,
        };
        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            match &section.body {
                SectionBody::Fields(fields) => {
                    for ReportField { label, value } in fields {
                        writeln!(f, "{label}: {value}")?;
                    }
                }
                SectionBody::Items(items) => {
                    for item in items {
                        write!(f, "- {}: {}", item.name, item.text)?;
                        if let Some(note) = &item.note {
                            write!(f, " ({note})")?;
                        }
                        writeln!(f)?;
                    }
                }
            }
        }
        Ok(())
    }
}
