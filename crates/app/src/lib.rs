//! # gpiohub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `DeviceRegistry`: insert, toggle, bulk-off, delete, and read-all
//! - Define the **driving/inbound** use-case struct:
//!   - `DeviceService`: list, add, toggle, delete, emergency-off, telemetry
//! - Orchestrate domain objects without knowing *how* devices are stored
//!
//! ## Dependency rule
//! Depends on `gpiohub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
