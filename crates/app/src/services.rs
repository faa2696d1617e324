//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod history_service;
pub mod registration_gate;
pub mod report_service;
pub mod submission_service;
