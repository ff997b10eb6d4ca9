use ::common::{Confidence, ScoreBand};
use compute::view;
use yew::prelude::*;

fn score_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Good => "text-green-600",
        ScoreBand::Fair => "text-yellow-600",
        ScoreBand::Poor => "text-red-600",
    }
}

fn confidence_class(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "bg-green-100 text-green-800",
        Confidence::Medium => "bg-yellow-100 text-yellow-800",
        Confidence::Low => "bg-red-100 text-red-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub card: view::InsightCard,
}

#[function_component(InsightCard)]
pub fn insight_card(props: &Props) -> Html {
    let card = &props.card;

    html! {
        <div class="card bg-base-100 shadow-md border border-indigo-100">
            <div class="card-body">
                <h2 class="card-title text-indigo-700">{"AI Insights"}</h2>
                <div class="space-y-3">
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Today's Fertility Score:"}</span>
                        <span class={classes!("text-2xl", "font-bold", score_class(card.band))}>{&card.score}</span>
                    </div>
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Ovulation Prediction:"}</span>
                        <span class={classes!("font-medium", "px-2", "py-0.5", "rounded-full", "text-sm", confidence_class(card.confidence))}>
                            {&card.confidence_label}
                        </span>
                    </div>
                    <p class="text-sm text-gray-700 pt-2 border-t border-gray-200 mt-3">{&card.insight}</p>
                </div>
            </div>
        </div>
    }
}
