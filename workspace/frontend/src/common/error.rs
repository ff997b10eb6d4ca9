use compute::error::ComputeError;
use yew::prelude::*;

fn accent_class(error: &ComputeError) -> &'static str {
    match error {
        ComputeError::DataSource(_) => "border-gray-200 text-gray-700",
        ComputeError::InvalidSeries(_)
        | ComputeError::InvalidAnchor(_)
        | ComputeError::InvalidInsight(_) => "border-pink-200 text-pink-700",
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadFailureCardProps {
    pub error: ComputeError,
    pub on_retry: Callback<()>,
}

/// Dashboard-sized card explaining why cycle data could not be shown.
///
/// Only provider failures offer a reload, validation failures would fail
/// the same way again.
#[function_component(LoadFailureCard)]
pub fn load_failure_card(props: &LoadFailureCardProps) -> Html {
    let error = &props.error;
    log::warn!("Dashboard data failed to load: {}", error);

    let reload = if error.is_retryable() {
        let on_retry = props.on_retry.clone();
        html! {
            <button
                class="btn btn-sm bg-purple-600 hover:bg-purple-700 text-white border-none mt-2"
                onclick={Callback::from(move |_| on_retry.emit(()))}
            >
                {"Try again"}
            </button>
        }
    } else {
        html! {
            <p class="text-xs text-gray-500 mt-2">{"Check the connected data source and reopen the dashboard."}</p>
        }
    };

    html! {
        <div class={classes!("card", "bg-base-100", "shadow-md", "border", "max-w-xl", "mx-auto", accent_class(error))}>
            <div class="card-body">
                <h2 class="card-title">{error.headline()}</h2>
                <p class="text-sm text-gray-600">{error.detail()}</p>
                {reload}
            </div>
        </div>
    }
}
