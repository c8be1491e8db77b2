use crate::response::HistoricalYieldSeries;

pub const HISTORICAL_DATASET_LABEL: &str = "Historical Yield";
pub const YEAR_AXIS_TITLE: &str = "Year";
pub const YIELD_AXIS_TITLE: &str = "Yield (Tonnes/Hectare)";
pub const HISTORICAL_LINE_COLOR: &str = "rgb(75, 192, 192)";

/// Library-independent description of a single-series line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub dataset_label: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Force the value axis to include zero
    pub y_begins_at_zero: bool,
    pub line_color: String,
}

impl LineChartSpec {
    pub fn historical_yield(series: &HistoricalYieldSeries) -> Self {
        let (labels, values) = series
            .points()
            .map(|(year, value)| (year.to_string(), value))
            .unzip();
        Self {
            labels,
            values,
            dataset_label: HISTORICAL_DATASET_LABEL.to_string(),
            x_axis_title: YEAR_AXIS_TITLE.to_string(),
            y_axis_title: YIELD_AXIS_TITLE.to_string(),
            y_begins_at_zero: true,
            line_color: HISTORICAL_LINE_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_yield_chart() {
        let series = HistoricalYieldSeries::new(vec![2018, 2019], vec![2.5, 3.25]).unwrap();
        let spec = LineChartSpec::historical_yield(&series);

        assert_eq!(spec.labels, vec!["2018", "2019"]);
        assert_eq!(spec.values, vec![2.5, 3.25]);
        assert_eq!(spec.dataset_label, "Historical Yield");
        assert_eq!(spec.x_axis_title, "Year");
        assert_eq!(spec.y_axis_title, "Yield (Tonnes/Hectare)");
        assert!(spec.y_begins_at_zero);
    }
}
