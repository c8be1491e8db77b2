use common::{ChartSlot, LineChartSpec};
use plotly::common::{Line, Mode, Title};
use plotly::layout::{Axis, RangeMode};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart_id: String,
    pub slot: ChartSlot,
}

/// Drawing surface of one crop: the historical line chart, or why it is missing.
#[function_component(YieldChart)]
pub fn yield_chart(props: &Props) -> Html {
    let series = match &props.slot {
        ChartSlot::Ready(series) => Some(series.clone()),
        _ => None,
    };

    use_effect_with(
        (props.chart_id.clone(), series),
        |(chart_id, series)| {
            let drawn = match series {
                Some(series) => {
                    let spec = LineChartSpec::historical_yield(series);
                    match plot(chart_id, &spec) {
                        Ok(()) => true,
                        Err(e) => {
                            log::error!("Failed to render chart {}: {:?}", chart_id, e);
                            false
                        }
                    }
                }
                None => false,
            };

            // Release the plot before the surface is reused or removed
            let chart_id = chart_id.clone();
            move || {
                if drawn {
                    purge(&chart_id);
                }
            }
        },
    );

    html! {
        <div id={props.chart_id.clone()} class="chart-container" style="width:100%; min-height:300px;">
            {match &props.slot {
                ChartSlot::Pending => html! {
                    <span class="loading loading-dots loading-sm"></span>
                },
                ChartSlot::Failed(message) => html! { <p class="text-error">{message}</p> },
                ChartSlot::Ready(_) => html! {},
            }}
        </div>
    }
}

fn plot(div_id: &str, spec: &LineChartSpec) -> Result<(), JsValue> {
    let trace = Scatter::new(spec.labels.clone(), spec.values.clone())
        .mode(Mode::LinesMarkers)
        .name(spec.dataset_label.as_str())
        .line(Line::new().color(spec.line_color.clone()).width(2.0));

    let y_range = if spec.y_begins_at_zero {
        RangeMode::ToZero
    } else {
        RangeMode::Normal
    };

    let layout = Layout::new()
        .x_axis(Axis::new().title(Title::with_text(spec.x_axis_title.as_str())))
        .y_axis(
            Axis::new()
                .title(Title::with_text(spec.y_axis_title.as_str()))
                .range_mode(y_range),
        )
        .height(300);

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    // Serialize to JSON and parse as plain JS objects
    let data_js = js_sys::Array::new();
    data_js.push(&to_js(&trace)?);

    newPlot(div_id, data_js.into(), to_js(&layout)?, to_js(&config)?);
    Ok(())
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

