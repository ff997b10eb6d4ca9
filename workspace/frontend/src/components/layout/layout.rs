use yew::prelude::*;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-b from-purple-50 via-pink-50 to-blue-50 p-4 md:p-8 text-gray-800">
            <Header title={props.title.clone()} subtitle={props.subtitle.clone()} />
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}
