use billsight_dashboard_leptos::{App, config::ClientConfig, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::load().unwrap_or_else(|err| {
        leptos::logging::error!("invalid configuration, using defaults: {err}");
        ClientConfig::default()
    });
    logging::init(&config.logging.filter);
    tracing::info!(api = %config.api.base_url, "starting billsight dashboard");

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
