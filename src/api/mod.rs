//! Typed REST clients for the clinic backend services

pub mod auth;
mod client;
mod endpoints;
pub mod rooms;
pub mod services;
pub mod shifts;
pub mod staff;

pub use client::*;
pub use endpoints::*;
