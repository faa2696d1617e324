//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The client runs on a single-threaded event loop, so port futures are not
//! required to be `Send`.

pub mod billing_api;
pub mod notifier;
pub mod storage;

pub use billing_api::BillingApi;
pub use notifier::Notifier;
pub use storage::KeyValueStore;
