//! # billsight-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `KeyValueStore`: origin-scoped string storage (browser `localStorage`)
//!   - `BillingApi`: the remote registration / prediction service
//!   - `Notifier`: blocking user notifications
//! - Provide the typed [`SessionStore`](session_store::SessionStore) over a
//!   `KeyValueStore`, owning the identity and result records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RegistrationGate`: check identity, register
//!   - `SubmissionService`: build payload, submit, persist result
//!   - `ReportService`: read the result record into a renderable view
//!   - `HistoryService`: list previously submitted bills
//! - Provide **in-process infrastructure** that doesn't need IO (`MemoryStore`)
//!
//! ## Dependency rule
//! Depends on `billsight-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod memory_store;
pub mod ports;
pub mod report_view;
pub mod services;
pub mod session_store;

#[cfg(test)]
mod test_support;
