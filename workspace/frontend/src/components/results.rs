use common::ResultsState;
use yew::prelude::*;

use super::crop_card::CropCard;
use crate::ui::error::ErrorDisplay;
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: ResultsState,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &Props) -> Html {
    let state = &props.state;

    html! {
        <div id="results" class="mt-6 space-y-4">
            {if let Some(error) = &state.error {
                html! { <ErrorDisplay message={error.clone()} /> }
            } else {
                html! {}
            }}
            {if let Some(heading) = &state.heading {
                html! { <h2 class="text-2xl font-bold">{ heading }</h2> }
            } else {
                html! {}
            }}
            { for state.blocks.iter().map(|block| html! {
                <CropCard key={state.block_key(block)} block={block.clone()} />
            }) }
            {if props.submitting && state.heading.is_none() {
                html! { <Loading text={Some("Predicting yields...".to_string())} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
