//! Form capture and the `/predict` request body.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Start year the prediction service expects for every request.
pub const START_YEAR: i32 = 2022;

/// Raw values read from the prediction form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionForm {
    pub region: String,
    pub area: String,
    pub season: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
}

impl PredictionForm {
    /// Builds the request body.
    ///
    /// No validation happens here: a numeric field that does not parse is sent
    /// as `NaN`, which the JSON encoder writes as `null`.
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest::new(
            self.region.to_lowercase(),
            parse_float(&self.area),
            self.season.clone(),
            parse_float(&self.nitrogen),
            parse_float(&self.phosphorus),
            parse_float(&self.potassium),
        )
    }

    /// Names of the numeric fields whose input does not parse as a number.
    pub fn unparsed_fields(&self) -> Vec<&'static str> {
        [
            ("Area (Hectare)", &self.area),
            ("N", &self.nitrogen),
            ("P2O5", &self.phosphorus),
            ("K2O", &self.potassium),
        ]
        .into_iter()
        .filter(|(_, raw)| parse_float(raw).is_nan())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionRequest {
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Area (Hectare)")]
    pub area_hectare: f64,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P2O5")]
    pub phosphorus: f64,
    #[serde(rename = "K2O")]
    pub potassium: f64,
    #[serde(rename = "Start_Year")]
    pub start_year: i32,
    #[serde(rename = "Humidity_Sowing")]
    pub humidity_sowing: f64,
    #[serde(rename = "Humidity_Full")]
    pub humidity_full: f64,
    #[serde(rename = "Rainfall_Sowing")]
    pub rainfall_sowing: f64,
    #[serde(rename = "Rainfall_Full")]
    pub rainfall_full: f64,
    #[serde(rename = "Max_Temperature_Sowing")]
    pub max_temperature_sowing: f64,
    #[serde(rename = "Max_Temperature_Full")]
    pub max_temperature_full: f64,
    #[serde(rename = "Min_Temperature_Sowing")]
    pub min_temperature_sowing: f64,
    #[serde(rename = "Min_Temperature_Full")]
    pub min_temperature_full: f64,
}

impl PredictionRequest {
    /// Request with the fixed start year and every climate covariate at zero.
    ///
    /// Zero tells the service to substitute its own district averages.
    pub fn new(
        district: String,
        area_hectare: f64,
        season: String,
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
    ) -> Self {
        Self {
            district,
            area_hectare,
            season,
            nitrogen,
            phosphorus,
            potassium,
            start_year: START_YEAR,
            humidity_sowing: 0.0,
            humidity_full: 0.0,
            rainfall_sowing: 0.0,
            rainfall_full: 0.0,
            max_temperature_sowing: 0.0,
            max_temperature_full: 0.0,
            min_temperature_sowing: 0.0,
            min_temperature_full: 0.0,
        }
    }
}

/// Parses a number the way browsers' `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"12.5 kg"` gives `12.5`. Anything without a numeric prefix gives `NaN`.
pub fn parse_float(raw: &str) -> f64 {
    let text = raw.trim_start();

    let (sign, unsigned) = match text.as_bytes().first().copied() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let candidate_len = text
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(text.len());
    let candidate = &text[..candidate_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
