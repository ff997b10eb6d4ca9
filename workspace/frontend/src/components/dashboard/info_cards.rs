//! Informational cards with static copy. Their buttons are placeholders
//! and have no handlers.

use yew::prelude::*;

const TIPS: [(&str, &str); 2] = [
    (
        "M13 10V3L4 14h7v7l9-11h-7z",
        "Focus on stress reduction techniques during the luteal phase. Try meditation or light yoga.",
    ),
    (
        "M5 3v4M3 5h4M6 17v4m-2-2h4m5-12v4m-2-2h4m5 4v4m-2-2h4M17 3h4M19 5v4M17 17h4m-2 2v-4m-7 1V3m-2 2h4",
        "Ensure adequate intake of folate-rich foods like leafy greens and lentils, especially around your fertile window.",
    ),
];

#[function_component(TipsCard)]
pub fn tips_card() -> Html {
    html! {
        <div class="card bg-base-100 shadow-md border border-green-100">
            <div class="card-body">
                <h2 class="card-title text-green-700">{"Personalized Tips"}</h2>
                <div class="space-y-3">
                    {for TIPS.iter().map(|(icon_path, text)| html! {
                        <div class="flex items-start space-x-3">
                            <div class="bg-green-100 text-green-700 rounded-full p-1.5 mt-1">
                                <svg xmlns="http://www.w3.org/2000/svg" class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                                    <path stroke-linecap="round" stroke-linejoin="round" d={*icon_path} />
                                </svg>
                            </div>
                            <p class="text-sm text-gray-700">{*text}</p>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

#[function_component(DevicesCard)]
pub fn devices_card() -> Html {
    html! {
        <div class="card bg-base-100 shadow-md border border-gray-200">
            <div class="card-body">
                <h2 class="card-title text-gray-700">{"Connected Devices"}</h2>
                <div class="flex items-center space-x-4 text-sm text-gray-600">
                    <div class="bg-gray-200 border-2 border-dashed rounded-xl w-16 h-16 flex items-center justify-center shrink-0">
                        <span class="text-xs text-gray-500">{"Device"}</span>
                    </div>
                    <span>{"No devices connected yet. Link your wearables or diagnostic tools for enhanced insights."}</span>
                </div>
                <button class="btn btn-sm w-full mt-4">{"Connect Device"}</button>
            </div>
        </div>
    }
}

#[function_component(CommunityCard)]
pub fn community_card() -> Html {
    html! {
        <div class="card bg-base-100 shadow-md border border-pink-100">
            <div class="card-body">
                <h2 class="card-title text-pink-700">{"Support & Community"}</h2>
                <p class="text-sm text-gray-600">{"Connect with others, access resources, and find mental wellness support."}</p>
                <div class="space-y-2">
                    <button class="btn btn-sm w-full justify-start bg-pink-100 hover:bg-pink-200 text-pink-800 border-none">
                        {"Join Community Forum"}
                    </button>
                    <button class="btn btn-sm w-full justify-start bg-pink-100 hover:bg-pink-200 text-pink-800 border-none">
                        {"Find Mental Health Resources"}
                    </button>
                </div>
            </div>
        </div>
    }
}
