//! Maps a prediction payload into the render-ready display model.

use shared::protocol::{BestModel, PredictionResponse, PredictionValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const KNOWN_MODELS: &[(&str, &str, SeriesColor)] = &[
    (
        "linear_regression",
        "Linear Regression",
        SeriesColor::rgb(0x63, 0x66, 0xf1),
    ),
    ("svr", "SVR", SeriesColor::rgb(0xec, 0x48, 0x99)),
    (
        "logistic_regression",
        "Logistic Regression",
        SeriesColor::rgb(0xfb, 0xbf, 0x24),
    ),
];

/// Colors for model names missing from the known table, indexed by series position.
pub const FALLBACK_PALETTE: [SeriesColor; 4] = [
    SeriesColor::rgb(0x22, 0xd3, 0xee),
    SeriesColor::rgb(0x34, 0xd3, 0x99),
    SeriesColor::rgb(0xf9, 0x73, 0x16),
    SeriesColor::rgb(0xa7, 0x8b, 0xfa),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    /// Model key exactly as it appears in the payload.
    pub name: String,
    pub label: String,
    pub value: PredictionValue,
    pub color: SeriesColor,
}

impl SeriesEntry {
    pub fn price(&self) -> Option<f64> {
        self.value.price()
    }

    pub fn value_text(&self) -> String {
        match &self.value {
            PredictionValue::Price(price) => format_price(*price),
            PredictionValue::Category(category) => category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestModelLine {
    pub name: String,
    pub accuracy: f64,
    pub accuracy_percent: i64,
    pub reason: Option<String>,
}

impl BestModelLine {
    pub fn accuracy_label(&self) -> String {
        format!("{}%", self.accuracy_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint<'a> {
    pub slot: usize,
    pub label: &'a str,
    pub price: f64,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayModel {
    pub series: Vec<SeriesEntry>,
    pub best_model: Option<BestModelLine>,
}

impl DisplayModel {
    /// One bar per numeric estimate, in series order. Categorical verdicts
    /// have no height and are left out.
    pub fn chart_points(&self) -> Vec<ChartPoint<'_>> {
        self.series
            .iter()
            .filter_map(|entry| Some((entry, entry.price()?)))
            .enumerate()
            .map(|(slot, (entry, price))| ChartPoint {
                slot,
                label: &entry.label,
                price,
                color: entry.color,
            })
            .collect()
    }
}

pub fn transform(response: &PredictionResponse) -> DisplayModel {
    let series = response
        .predictions
        .iter()
        .enumerate()
        .map(|(position, (name, value))| SeriesEntry {
            name: name.clone(),
            label: model_label(name),
            value: value.clone(),
            color: model_color(name, position),
        })
        .collect();

    DisplayModel {
        series,
        best_model: response.best_model.as_ref().map(best_model_line),
    }
}

fn best_model_line(best: &BestModel) -> BestModelLine {
    BestModelLine {
        name: best.name.clone(),
        accuracy: best.accuracy,
        accuracy_percent: accuracy_percent(best.accuracy),
        reason: best.reason.clone(),
    }
}

pub fn model_color(name: &str, position: usize) -> SeriesColor {
    KNOWN_MODELS
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, _, color)| *color)
        .unwrap_or(FALLBACK_PALETTE[position % FALLBACK_PALETTE.len()])
}

pub fn model_label(name: &str) -> String {
    if let Some((_, label, _)) = KNOWN_MODELS.iter().find(|(key, _, _)| *key == name) {
        return (*label).to_string();
    }

    name.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `accuracy * 100` rounded half-up to a whole percent. Accuracies are never
/// negative, so `round` (half away from zero) is half-up here.
pub fn accuracy_percent(accuracy: f64) -> i64 {
    (accuracy * 100.0).round() as i64
}

/// Price in lakhs of rupees, at most two decimals.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{price:.2}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("₹ {trimmed} L")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_response() -> PredictionResponse {
        serde_json::from_str(
            r#"{
                "success": true,
                "predictions": {"linear_regression": 52.3, "svr": 54.1},
                "best_model": {"name": "SVR", "accuracy": 0.912}
            }"#,
        )
        .expect("decode")
    }

    #[test]
    fn builds_series_and_best_model_line_for_two_regressors() {
        let model = transform(&scenario_response());

        let names: Vec<&str> = model.series.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["linear_regression", "svr"]);
        assert_eq!(model.series[0].label, "Linear Regression");
        assert_eq!(model.series[0].price(), Some(52.3));
        assert_eq!(model.series[1].price(), Some(54.1));
        assert_eq!(model.series[0].color.hex(), "#6366f1");
        assert_eq!(model.series[1].color.hex(), "#ec4899");

        let best = model.best_model.expect("best model");
        assert_eq!(best.name, "SVR");
        assert_eq!(best.accuracy, 0.912);
        assert_eq!(best.accuracy_label(), "91%");
    }

    #[test]
    fn transform_is_deterministic_and_idempotent() {
        let response = scenario_response();
        let first = transform(&response);
        let second = transform(&response);
        assert_eq!(first, second);
        assert_eq!(first.series.len(), response.predictions.len());
    }

    #[test]
    fn keeps_payload_order_rather_than_sorting() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{"success": true, "predictions": {"svr": 1.0, "linear_regression": 2.0}}"#,
        )
        .expect("decode");
        let model = transform(&response);
        assert_eq!(model.series[0].name, "svr");
        assert_eq!(model.series[1].name, "linear_regression");
        // Known models keep their color regardless of position.
        assert_eq!(model.series[0].color.hex(), "#ec4899");
        assert!(model.best_model.is_none());
    }

    #[test]
    fn rounds_accuracy_half_up() {
        assert_eq!(accuracy_percent(0.8666), 87);
        assert_eq!(accuracy_percent(0.912), 91);
        assert_eq!(accuracy_percent(0.125), 13);
        assert_eq!(accuracy_percent(1.0), 100);
        assert_eq!(accuracy_percent(0.0), 0);
    }

    #[test]
    fn value_just_below_half_a_percent_rounds_down() {
        let just_below = f64::from_bits(0.005_f64.to_bits() - 1);
        assert!(just_below * 100.0 < 0.5);
        assert_eq!(accuracy_percent(just_below), 0);
    }

    #[test]
    fn unknown_models_cycle_through_fallback_palette() {
        let mut response = PredictionResponse {
            success: true,
            ..PredictionResponse::default()
        };
        for i in 0..6 {
            response
                .predictions
                .insert(format!("model_{i}"), PredictionValue::Price(i as f64));
        }

        let model = transform(&response);
        assert_eq!(model.series.len(), 6);
        assert_eq!(model.series[0].color, FALLBACK_PALETTE[0]);
        assert_eq!(model.series[3].color, FALLBACK_PALETTE[3]);
        assert_eq!(model.series[4].color, FALLBACK_PALETTE[0]);
        assert_eq!(model.series[5].color, FALLBACK_PALETTE[1]);
        assert_eq!(model.series[5].label, "Model 5");
    }

    #[test]
    fn categorical_predictions_are_listed_but_not_charted() {
        let response = PredictionResponse {
            success: true,
            predictions: [
                ("linear_regression".to_string(), PredictionValue::Price(52.3)),
                (
                    "logistic_regression".to_string(),
                    PredictionValue::Category("High Price".to_string()),
                ),
                ("svr".to_string(), PredictionValue::Price(54.1)),
            ]
            .into_iter()
            .collect(),
            best_model: Some(BestModel {
                name: "Logistic Regression".to_string(),
                accuracy: 1.0,
                reason: Some("Highest decision accuracy and reliability".to_string()),
            }),
            error: None,
        };

        let model = transform(&response);
        assert_eq!(model.series.len(), 3);
        assert_eq!(model.series[1].value_text(), "High Price");

        let points = model.chart_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Linear Regression");
        assert_eq!(points[1].slot, 1);
        assert_eq!(points[1].label, "SVR");
        assert_eq!(points[1].price, 54.1);

        let best = model.best_model.expect("best model");
        assert_eq!(best.accuracy_label(), "100%");
        assert_eq!(
            best.reason.as_deref(),
            Some("Highest decision accuracy and reliability")
        );
    }

    #[test]
    fn formats_prices_in_lakhs() {
        assert_eq!(format_price(52.3), "₹ 52.3 L");
        assert_eq!(format_price(54.0), "₹ 54 L");
        assert_eq!(format_price(12.346), "₹ 12.35 L");
    }

    #[test]
    fn title_cases_unknown_model_keys() {
        assert_eq!(model_label("gradient_boosting"), "Gradient Boosting");
        assert_eq!(model_label("random-forest"), "Random Forest");
        assert_eq!(model_label("svr"), "SVR");
    }
}
