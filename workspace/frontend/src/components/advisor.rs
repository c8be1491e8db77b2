use common::{submit_prediction, PredictionForm};
use yew::prelude::*;

use super::prediction_form::PredictionFormPanel;
use super::results::ResultsPanel;
use crate::api_client::prediction::HttpPredictionApi;
use crate::hooks::{use_results, ReducerView};

/// Form and results area wired to the prediction service.
#[function_component(Advisor)]
pub fn advisor() -> Html {
    let results = use_results();
    let submitting = use_state(|| false);

    let on_submit = {
        let results = results.clone();
        let submitting = submitting.clone();

        Callback::from(move |form: PredictionForm| {
            if *submitting {
                log::debug!("Ignoring submit while a prediction is in progress");
                return;
            }
            submitting.set(true);

            let view = ReducerView::new(results.dispatcher());
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting prediction for {}", form.region);
                match submit_prediction(&HttpPredictionApi, &view, &form).await {
                    Ok(outcome) => log::info!(
                        "Rendered {} crops ({} charts, {} chart errors)",
                        outcome.crops,
                        outcome.charts,
                        outcome.chart_failures
                    ),
                    Err(e) => log::error!("Error: {}", e),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl mx-auto">
            <PredictionFormPanel submitting={*submitting} on_submit={on_submit} />
            <ResultsPanel state={results.state.clone()} submitting={*submitting} />
        </div>
    }
}
