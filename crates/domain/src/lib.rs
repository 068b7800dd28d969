//! # gpiohub-domain
//!
//! Pure domain model for the gpiohub device controller.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`DeviceId`](id::DeviceId), error conventions
//! - Define **Devices** (named, typed things wired to a GPIO pin with an on/off state)
//! - Define the fixed **device kinds** and their default icons
//! - Define the **telemetry projection** exposed to external monitors
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod kind;
pub mod telemetry;
