use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    html! {
        <header class="mb-8">
            <h1 class="text-3xl font-bold text-purple-800 mb-2" id="page-title">{ &props.title }</h1>
            {if let Some(subtitle) = &props.subtitle {
                html! { <p class="text-gray-600">{subtitle}</p> }
            } else {
                html! {}
            }}
        </header>
    }
}
