use compute::view::LogAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub actions: Vec<LogAction>,
    pub on_log: Callback<String>,
}

#[function_component(QuickLogCard)]
pub fn quick_log_card(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow-md border border-blue-100">
            <div class="card-body">
                <h2 class="card-title text-blue-700">{"Log Your Data"}</h2>
                <p class="text-sm text-gray-600">{"Consistent tracking improves prediction accuracy."}</p>
                <div class="grid grid-cols-2 gap-3">
                    {for props.actions.iter().map(|action| {
                        let kind = action.kind;
                        let onclick = {
                            let on_log = props.on_log.clone();
                            Callback::from(move |_| on_log.emit(kind.to_string()))
                        };

                        html! {
                            <button key={kind} class="btn btn-sm bg-blue-500 hover:bg-blue-600 text-white border-none" {onclick}>
                                {action.label}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
