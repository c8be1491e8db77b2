//! Decoded bodies of `/predict` and `/historical_yield`.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{ObjectBuilder, Ref, RefOr, Schema};
use utoipa::ToSchema;

/// Prediction details for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CropResult {
    /// Predicted yield minus the historical average, Tonnes/Hectare
    #[serde(rename = "Yield_Difference")]
    pub yield_difference: f64,
    /// Fertilizer suggestions, in the order the service gives them
    #[serde(rename = "Nutrient_Recommendations")]
    pub nutrient_recommendations: Vec<String>,
}

/// Crop name to [`CropResult`], keeping the order of the JSON document.
///
/// Crop names are unique: a document repeating a key is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    crops: Vec<(String, CropResult)>,
}

impl PredictionResponse {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CropResult)> {
        self.crops.iter().map(|(crop, result)| (crop.as_str(), result))
    }

    pub fn get(&self, crop: &str) -> Option<&CropResult> {
        self.crops
            .iter()
            .find(|(name, _)| name == crop)
            .map(|(_, result)| result)
    }

    pub fn crop_names(&self) -> Vec<&str> {
        self.crops.iter().map(|(crop, _)| crop.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Serialize for PredictionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.crops.len()))?;
        for (crop, result) in &self.crops {
            map.serialize_entry(crop, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedCrops;

        impl<'de> Visitor<'de> for OrderedCrops {
            type Value = PredictionResponse;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping crop names to prediction results")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut response = PredictionResponse {
                    crops: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((crop, result)) = access.next_entry::<String, CropResult>()? {
                    if response.get(&crop).is_some() {
                        return Err(de::Error::custom(format!("duplicate crop `{}`", crop)));
                    }
                    response.crops.push((crop, result));
                }
                Ok(response)
            }
        }

        deserializer.deserialize_map(OrderedCrops)
    }
}

impl<'s> ToSchema<'s> for PredictionResponse {
    fn schema() -> (&'s str, RefOr<Schema>) {
        (
            "PredictionResponse",
            ObjectBuilder::new()
                .description(Some("Crop name mapped to its prediction result"))
                .additional_properties(Some(RefOr::Ref(Ref::from_schema_name("CropResult"))))
                .into(),
        )
    }
}

impl FromIterator<(String, CropResult)> for PredictionResponse {
    /// Later duplicates of a crop name are dropped.
    fn from_iter<I: IntoIterator<Item = (String, CropResult)>>(iter: I) -> Self {
        let mut response = PredictionResponse::default();
        for (crop, result) in iter {
            if response.get(&crop).is_none() {
                response.crops.push((crop, result));
            }
        }
        response
    }
}

/// Yearly yields for one district and crop, sorted by year.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoricalYieldSeries {
    pub years: Vec<i32>,
    /// Tonnes/Hectare, parallel to `years`
    pub yields: Vec<f64>,
}

impl<'de> Deserialize<'de> for HistoricalYieldSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawSeries {
            years: Vec<i32>,
            yields: Vec<f64>,
        }

        let raw = RawSeries::deserialize(deserializer)?;
        HistoricalYieldSeries::new(raw.years, raw.yields).map_err(de::Error::custom)
    }
}

impl HistoricalYieldSeries {
    pub fn new(years: Vec<i32>, yields: Vec<f64>) -> Result<Self, String> {
        if years.len() != yields.len() {
            return Err(format!(
                "historical series has {} years but {} yields",
                years.len(),
                yields.len()
            ));
        }
        Ok(Self { years, yields })
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.yields.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_CROPS: &str = r#"{
        "wheat": {"Yield_Difference": 1.234, "Nutrient_Recommendations": ["N: Low", "Recommended Urea dose: 343.3 kg/ha"]},
        "mustard": {"Yield_Difference": -0.5, "Nutrient_Recommendations": []},
        "bajra": {"Yield_Difference": 0.0, "Nutrient_Recommendations": ["K2O: High"]}
    }"#;

    #[test]
    fn test_response_keeps_document_order() {
        let response: PredictionResponse = serde_json::from_str(THREE_CROPS).unwrap();
        assert_eq!(response.crop_names(), vec!["wheat", "mustard", "bajra"]);
        assert_eq!(response.len(), 3);

        let wheat = response.get("wheat").unwrap();
        assert_eq!(wheat.yield_difference, 1.234);
        assert_eq!(
            wheat.nutrient_recommendations,
            vec!["N: Low", "Recommended Urea dose: 343.3 kg/ha"]
        );
    }

    #[test]
    fn test_response_serializes_in_order() {
        let response: PredictionResponse = serde_json::from_str(THREE_CROPS).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let wheat = json.find("wheat").unwrap();
        let mustard = json.find("mustard").unwrap();
        let bajra = json.find("bajra").unwrap();
        assert!(wheat < mustard && mustard < bajra);
    }

    #[test]
    fn test_duplicate_crop_is_rejected() {
        let json = r#"{
            "rice": {"Yield_Difference": 1.0, "Nutrient_Recommendations": []},
            "rice": {"Yield_Difference": 2.0, "Nutrient_Recommendations": []}
        }"#;
        let err = serde_json::from_str::<PredictionResponse>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate crop `rice`"));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let json = r#"{"rice": {"Yield Difference": 1.0, "Nutrient_Recommendations": []}}"#;
        assert!(serde_json::from_str::<PredictionResponse>(json).is_err());

        let json = r#"{"rice": {"Yield_Difference": 1.0}}"#;
        assert!(serde_json::from_str::<PredictionResponse>(json).is_err());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<PredictionResponse>("[]").is_err());
        assert!(serde_json::from_str::<PredictionResponse>("null").is_err());
    }

    #[test]
    fn test_empty_response() {
        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_from_iter_drops_duplicates() {
        let result = CropResult {
            yield_difference: 1.0,
            nutrient_recommendations: vec![],
        };
        let response: PredictionResponse = vec![
            ("rice".to_string(), result.clone()),
            ("wheat".to_string(), result.clone()),
            ("rice".to_string(), result),
        ]
        .into_iter()
        .collect();
        assert_eq!(response.crop_names(), vec!["rice", "wheat"]);
    }

    #[test]
    fn test_series_decodes_parallel_arrays() {
        let series: HistoricalYieldSeries =
            serde_json::from_str(r#"{"years": [2019, 2020, 2021], "yields": [3.1, 2.8, 3.4]}"#)
                .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.points().collect::<Vec<_>>(),
            vec![(2019, 3.1), (2020, 2.8), (2021, 3.4)]
        );
    }

    #[test]
    fn test_series_with_mismatched_lengths_is_rejected() {
        let err = serde_json::from_str::<HistoricalYieldSeries>(
            r#"{"years": [2019, 2020], "yields": [3.1]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2 years but 1 yields"));
    }

    #[test]
    fn test_series_error_body_is_rejected() {
        assert!(serde_json::from_str::<HistoricalYieldSeries>(r#"{"error": "Invalid crop"}"#).is_err());
    }
}
