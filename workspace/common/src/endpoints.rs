//! Relative paths of the prediction service.

pub const PREDICT_PATH: &str = "/predict";
pub const HISTORICAL_YIELD_PATH: &str = "/historical_yield";

/// Path and query for the historical series of one district and crop.
pub fn historical_yield_path(district: &str, crop: &str) -> String {
    format!(
        "{}?district={}&crop={}",
        HISTORICAL_YIELD_PATH,
        urlencoding::encode(district),
        urlencoding::encode(crop)
    )
}
