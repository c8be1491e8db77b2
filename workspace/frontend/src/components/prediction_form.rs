use common::{region_options, PredictionForm, SEASONS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub submitting: bool,
    pub on_submit: Callback<PredictionForm>,
}

/// Soil and district inputs for a prediction.
#[function_component(PredictionFormPanel)]
pub fn prediction_form_panel(props: &Props) -> Html {
    let district_ref = use_node_ref();
    let area_ref = use_node_ref();
    let season_ref = use_node_ref();
    let nitrogen_ref = use_node_ref();
    let phosphorus_ref = use_node_ref();
    let potassium_ref = use_node_ref();

    let options = use_memo((), |_| region_options());

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let district_ref = district_ref.clone();
        let area_ref = area_ref.clone();
        let season_ref = season_ref.clone();
        let nitrogen_ref = nitrogen_ref.clone();
        let phosphorus_ref = phosphorus_ref.clone();
        let potassium_ref = potassium_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let select_value = |node: &NodeRef| {
                node.cast::<HtmlSelectElement>()
                    .map(|element| element.value())
                    .unwrap_or_default()
            };
            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|element| element.value())
                    .unwrap_or_default()
            };

            let form = PredictionForm {
                region: select_value(&district_ref),
                area: input_value(&area_ref),
                season: select_value(&season_ref),
                nitrogen: input_value(&nitrogen_ref),
                phosphorus: input_value(&phosphorus_ref),
                potassium: input_value(&potassium_ref),
            };

            log::debug!("Prediction form submitted: {:?}", form);
            on_submit.emit(form);
        })
    };

    let number_field = |label: &'static str, id: &'static str, node: &NodeRef| {
        html! {
            <div class="form-control">
                <label class="label" for={id}><span class="label-text">{label}</span></label>
                <input
                    type="number"
                    step="any"
                    id={id}
                    name={id}
                    ref={node.clone()}
                    class="input input-bordered w-full"
                    required={true}
                    disabled={props.submitting}
                />
            </div>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Crop Prediction"}</h2>
                <form id="predictionForm" onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="district"><span class="label-text">{"District"}</span></label>
                            <select id="district" name="district" ref={district_ref} class="select select-bordered w-full" disabled={props.submitting}>
                                { for options.iter().map(|option| html! {
                                    <option value={option.value.clone()}>{ &option.label }</option>
                                }) }
                            </select>
                        </div>
                        { number_field("Area (Hectare)", "area", &area_ref) }
                        <div class="form-control">
                            <label class="label" for="season"><span class="label-text">{"Season"}</span></label>
                            <select id="season" name="season" ref={season_ref} class="select select-bordered w-full" disabled={props.submitting}>
                                { for SEASONS.iter().map(|season| html! {
                                    <option value={*season}>{ *season }</option>
                                }) }
                            </select>
                        </div>
                        { number_field("Nitrogen (N)", "N", &nitrogen_ref) }
                        { number_field("Phosphorus (P2O5)", "P2O5", &phosphorus_ref) }
                        { number_field("Potassium (K2O)", "K2O", &potassium_ref) }
                    </div>
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Predicting..." } else { "Predict" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
