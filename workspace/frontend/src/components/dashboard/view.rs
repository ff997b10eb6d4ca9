use chrono::Local;
use compute::view::render;
use yew::prelude::*;

use super::chart::HormoneTrendChart;
use super::cycle_card::CycleCard;
use super::footer::Footer;
use super::info_cards::{CommunityCard, DevicesCard, TipsCard};
use super::insight_card::InsightCard;
use super::quick_log::QuickLogCard;
use crate::common::error::LoadFailureCard;
use crate::common::locale::IntlDateFormatter;
use crate::common::notice::{use_notice, NoticeBanner};
use crate::settings::get_settings;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let reload = use_state(|| 0u32);
    let notice = use_notice();

    // Only place the clock is read; everything below is derived from `as_of`.
    let state = use_memo(*reload, |_| {
        let as_of = Local::now().date_naive();
        log::debug!("Initializing dashboard as of {}", as_of);
        compute::default_dashboard(as_of)
    });

    let state = match &*state {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to initialize dashboard: {}", err);
            let on_retry = {
                let reload = reload.clone();
                Callback::from(move |_: ()| reload.set(*reload + 1))
            };
            return html! { <LoadFailureCard error={err.clone()} {on_retry} /> };
        }
    };

    let formatter = IntlDateFormatter::new(get_settings().locale);
    let model = render(state, notice.message.as_deref(), &formatter);
    log::trace!("Rendering dashboard with notice {:?}", model.notice);

    html! {
        <>
            {if let Some(message) = &model.notice {
                html! { <NoticeBanner message={message.clone()} /> }
            } else {
                html! {}
            }}

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <CycleCard card={model.cycle.clone()} />
                <InsightCard card={model.insight.clone()} />
                <QuickLogCard actions={model.log_actions.clone()} on_log={notice.trigger_log.clone()} />

                <div class="card bg-base-100 shadow-md border border-gray-200 md:col-span-2 lg:col-span-3">
                    <div class="card-body">
                        <h2 class="card-title text-gray-700">{"Hormone Trends (Example)"}</h2>
                        <p class="text-sm text-gray-600">
                            {"Visualize your hormone fluctuations throughout the cycle. Connect diagnostic devices for real-time data."}
                        </p>
                        <div class="p-3 bg-gray-100 border border-dashed border-gray-300 rounded-lg text-center text-gray-600 text-sm">
                            {"Connect devices like Mira or Oova to see your actual hormone levels here. Displaying sample data."}
                        </div>
                        <HormoneTrendChart chart={model.trends.clone()} />
                    </div>
                </div>

                <TipsCard />
                <DevicesCard />
                <CommunityCard />
            </div>

            <Footer footer={model.footer.clone()} />
        </>
    }
}
