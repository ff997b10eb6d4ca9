use compute::view;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub card: view::CycleCard,
}

#[function_component(CycleCard)]
pub fn cycle_card(props: &Props) -> Html {
    let card = &props.card;

    html! {
        <div class="card bg-base-100 shadow-md border border-purple-100">
            <div class="card-body">
                <h2 class="card-title text-purple-700">{"Current Cycle"}</h2>
                <div class="space-y-3">
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Cycle Day:"}</span>
                        <span class="text-2xl font-bold text-purple-900">{card.current_day}</span>
                    </div>
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Est. Fertile Window:"}</span>
                        <span class="font-medium text-green-700">{&card.fertile_window}</span>
                    </div>
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Predicted Period:"}</span>
                        <span class="font-medium text-pink-700">{&card.predicted_period}</span>
                    </div>
                    <div class="flex justify-between items-center">
                        <span class="text-gray-600">{"Est. Cycle Length:"}</span>
                        <span class="font-medium text-gray-700">{&card.cycle_length}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
