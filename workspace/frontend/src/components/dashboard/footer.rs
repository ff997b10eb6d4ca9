use compute::view;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub footer: view::Footer,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <footer class="mt-12 text-center text-xs text-gray-500">
            <p>{props.footer.note}</p>
            <p>{&props.footer.copyright}</p>
        </footer>
    }
}
