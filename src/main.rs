//! Smile Dental - clinic web console
//!
//! Browser app for the Smile Dental clinic: public landing / auth pages and
//! the admin console for rooms, services, staff and work shifts. All data
//! lives in the clinic's REST backend services; this app is a pure client.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod routes;
mod types;
mod validation;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Default service endpoints; the first install wins, so tests and
    // alternate entry points can override before launch.
    api::init_endpoints(api::Endpoints::default());

    dioxus::launch(app::App);
}
