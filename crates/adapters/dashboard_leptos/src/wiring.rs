//! Composition root: builds the application services over the browser adapters.

use std::rc::Rc;

use billsight_app::services::history_service::HistoryService;
use billsight_app::services::registration_gate::RegistrationGate;
use billsight_app::services::report_service::ReportService;
use billsight_app::services::submission_service::SubmissionService;
use billsight_app::session_store::SessionStore;
use leptos::prelude::*;

use crate::api::GlooBillingApi;
use crate::config::ClientConfig;
use crate::notify::AlertNotifier;
use crate::storage::BrowserStorage;

pub type Gate = RegistrationGate<GlooBillingApi, BrowserStorage, AlertNotifier>;
pub type Submitter = SubmissionService<GlooBillingApi, BrowserStorage, AlertNotifier>;
pub type Reports = ReportService<BrowserStorage>;
pub type History = HistoryService<GlooBillingApi, BrowserStorage>;

/// Access the client configuration from Leptos context.
///
/// Must be called within the component tree rendered by [`App`](crate::App).
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not found in context")
}

fn session(config: &ClientConfig) -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage, config.storage_keys())
}

fn api(config: &ClientConfig) -> GlooBillingApi {
    GlooBillingApi::new(&config.api.base_url)
}

pub fn registration_gate(config: &ClientConfig) -> Rc<Gate> {
    Rc::new(RegistrationGate::new(api(config), session(config), AlertNotifier))
}

pub fn submission_service(config: &ClientConfig) -> Rc<Submitter> {
    Rc::new(SubmissionService::new(api(config), session(config), AlertNotifier))
}

pub fn report_service(config: &ClientConfig) -> Reports {
    ReportService::new(session(config))
}

pub fn history_service(config: &ClientConfig) -> History {
    HistoryService::new(api(config), session(config))
}
