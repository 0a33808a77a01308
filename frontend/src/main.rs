use yew::prelude::*;

mod components;
mod hooks;
mod services;
#[cfg(test)]
mod test_utils;

use components::forms::leave_application_form::LeaveApplicationForm;
use services::api::ApiClient;
use services::config::PortalConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new(&PortalConfig::default()));

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Staff Portal"}</h1>
                </div>
            </header>
            <main class="container">
                <LeaveApplicationForm api_client={(*api_client).clone()} />
            </main>
        </>
    }
}

fn main() {
    let config = PortalConfig::default();
    Logger::configure(config.clone());
    Logger::info_with_component("app", &format!("Staff portal starting against {}", config.api_base_url));

    yew::Renderer::<App>::new().render();
}
