//! # billsight-domain
//!
//! Pure domain model for the billsight energy-bill client.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Identity** record proving a completed registration
//! - Define **Appliances** and the ordered, append-only **ApplianceList**
//!   the bill form is rendered from
//! - Define the **Submission** payload and its lifecycle state machine
//! - Define the **Report** (prediction service response) and its
//!   order-preserving per-appliance maps
//! - Define **History** rows returned for a registered user
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod appliance;
pub mod appliance_map;
pub mod history;
pub mod identity;
pub mod report;
pub mod submission;
