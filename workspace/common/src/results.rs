//! What the results area shows, as plain data.
//!
//! The renderer never touches the page directly: it produces
//! [`ResultsAction`]s, and whatever view owns a [`ResultsState`] applies them.

use crate::regions::capitalize_first;
use crate::response::{CropResult, HistoricalYieldSeries};

pub const RESULTS_HEADING: &str = "Top 3 Recommended Crops:";
pub const RECOMMENDATIONS_HEADING: &str = "Nutrient Recommendations:";

/// Drawing surface of one crop block.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSlot {
    /// Historical series not fetched yet
    Pending,
    Ready(HistoricalYieldSeries),
    /// Message shown in place of the chart
    Failed(String),
}

/// One crop's section of the results area.
#[derive(Debug, Clone, PartialEq)]
pub struct CropBlock {
    pub crop: String,
    pub title: String,
    pub yield_text: String,
    pub recommendations: Vec<String>,
    pub chart_id: String,
    pub chart: ChartSlot,
}

impl CropBlock {
    pub fn new(crop: &str, result: &CropResult) -> Self {
        Self {
            crop: crop.to_string(),
            title: capitalize_first(crop),
            yield_text: format_yield_difference(result.yield_difference),
            recommendations: result.nutrient_recommendations.clone(),
            chart_id: chart_id(crop),
            chart: ChartSlot::Pending,
        }
    }
}

/// Element id of a crop's drawing surface.
pub fn chart_id(crop: &str) -> String {
    format!("{}-chart", crop)
}

pub fn format_yield_difference(value: f64) -> String {
    format!(
        "Predicted Yield Difference: {} Tonnes/Hectare",
        to_fixed(value, 2)
    )
}

/// Formats `value` with `digits` decimals the way browsers do.
///
/// Ties of the exact binary value round away from zero, where `{:.N}` would
/// round them to even.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    // Every finite f64 has at most 1074 fractional digits, so this is exact
    let exact = format!("{:.1100}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let split = kept.len() - digits;
    let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    let sign = if value < 0.0 { "-" } else { "" };
    if digits == 0 {
        format!("{}{}", sign, text)
    } else {
        format!("{}{}.{}", sign, &text[..split], &text[split..])
    }
}

pub fn prediction_error_message(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn chart_error_message(message: &str) -> String {
    format!("Error loading historical data: {}", message)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsAction {
    /// Clear everything and show the heading
    Reset,
    /// Replace everything with a single error message
    Failed(String),
    AppendCrop { crop: String, result: CropResult },
    ChartLoaded { crop: String, series: HistoricalYieldSeries },
    ChartFailed { crop: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    /// Bumped whenever the area is cleared, so views can drop old surfaces
    pub generation: u64,
    pub heading: Option<String>,
    pub error: Option<String>,
    pub blocks: Vec<CropBlock>,
}

impl ResultsState {
    pub fn apply(&mut self, action: ResultsAction) {
        match action {
            ResultsAction::Reset => {
                self.generation = self.generation.wrapping_add(1);
                self.heading = Some(RESULTS_HEADING.to_string());
                self.error = None;
                self.blocks.clear();
            }
            ResultsAction::Failed(message) => {
                self.generation = self.generation.wrapping_add(1);
                self.heading = None;
                self.error = Some(prediction_error_message(&message));
                self.blocks.clear();
            }
            ResultsAction::AppendCrop { crop, result } => {
                self.blocks.push(CropBlock::new(&crop, &result));
            }
            ResultsAction::ChartLoaded { crop, series } => {
                self.set_chart(&crop, ChartSlot::Ready(series));
            }
            ResultsAction::ChartFailed { crop, message } => {
                self.set_chart(&crop, ChartSlot::Failed(chart_error_message(&message)));
            }
        }
    }

    /// Identity of a block within the current render.
    pub fn block_key(&self, block: &CropBlock) -> String {
        format!("{}-{}", self.generation, block.crop)
    }

    pub fn block(&self, crop: &str) -> Option<&CropBlock> {
        self.blocks.iter().find(|block| block.crop == crop)
    }

    fn set_chart(&mut self, crop: &str, slot: ChartSlot) {
        match self.blocks.iter_mut().find(|block| block.crop == crop) {
            Some(block) => block.chart = slot,
            None => tracing::warn!(crop, "chart update for a crop that is not displayed"),
        }
    }
}
