//! CityPulse test shell (Rust + Yew + WASM).
//!
//! A static card mounted into `#root` that tells you the deploy pipeline
//! served a working front end.

pub mod bootstrap;
pub mod config;
pub mod strict_mode;

pub use app_test::{render_app_test, AppTest};
pub use bootstrap::{start, BootError, Bootstrap, BrowserDocument, HostDocument, Root, RootProps};
pub use config::{BootConfig, MOUNT_ID};
pub use strict_mode::{checked_render, DevCheckMode, NonIdempotentRender, StrictMode};
