use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;

const TITLE: &str = "My Fertility Dashboard";
const SUBTITLE: &str = "Your personalized fertility insights and tracking.";

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! {
                <Layout title={TITLE} subtitle={Some(SUBTITLE.to_string())}>
                    <Dashboard />
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title={TITLE}>
                    <h2 class="text-xl font-semibold">{"404 Not Found"}</h2>
                    <Link<Route> to={Route::Dashboard} classes="link link-primary">{"Back to dashboard"}</Link<Route>>
                </Layout>
            }
        }
    }
}
