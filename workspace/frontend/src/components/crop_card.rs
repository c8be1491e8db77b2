use common::results::RECOMMENDATIONS_HEADING;
use common::CropBlock;
use yew::prelude::*;

use super::yield_chart::YieldChart;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub block: CropBlock,
}

#[function_component(CropCard)]
pub fn crop_card(props: &Props) -> Html {
    let block = &props.block;

    html! {
        <div class="crop-result card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{ &block.title }</h3>
                <p>{ &block.yield_text }</p>
                <h4 class="font-semibold mt-2">{ RECOMMENDATIONS_HEADING }</h4>
                <ul class="list-disc list-inside">
                    { for block.recommendations.iter().map(|recommendation| html! {
                        <li>{ recommendation }</li>
                    }) }
                </ul>
                <YieldChart chart_id={block.chart_id.clone()} slot={block.chart.clone()} />
            </div>
        </div>
    }
}
