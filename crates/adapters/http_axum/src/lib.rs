//! # gpiohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** listing every device with
//!   toggle, delete, emergency-off, and add-device controls
//! - Serve the read-only **telemetry endpoint** (`GET /get_state`) polled by
//!   microcontrollers
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (HTML, redirects, or JSON)
//!
//! ## Dashboard approach
//! - The page is rendered server-side as complete HTML.
//! - Every control is a `<form>` that POSTs back to the server and is
//!   answered with a redirect to `/` (PRG pattern). The only script is the
//!   one-line `onchange` that submits a toggle form.
//!
//! ## Dependency rule
//! Depends on `gpiohub-app` (for port traits and services) and `gpiohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
