//! # rangedeck-domain
//!
//! Pure domain model for the rangedeck control panel.
//!
//! ## Responsibilities
//! - Foundational types: timestamps, error conventions
//! - Define the **sensor status** wire payload (distance, mode, direction)
//! - Define **motor commands** and the rig's acknowledgement payload
//! - Contain the pure **panel mapping**: range banding, marker math, banner
//!   model, loading-cover stages
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod panel;
pub mod status;
pub mod time;
