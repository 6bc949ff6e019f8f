//! Typed client for the Bolt Fleet Integration API
//!
//! Wraps four read endpoints (orders, vehicles, drivers, state logs) behind
//! `FleetClient`. Each call:
//! 1. Ensures a bearer token is held (fetched eagerly at construction)
//! 2. POSTs a paginated, time-windowed JSON query
//! 3. On a token-rejection signal, refreshes the token and retries once
//! 4. Maps `data.<resource>` into typed records from `fleet-schema`
//!
//! A client instance is not meant to be shared across tasks: every method
//! that can replace the token takes `&mut self`. Hold one client per task, or
//! wrap it in your own mutex.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod request;

#[cfg(test)]
mod testing;

pub use classify::{ResponseClass, classify, token_rejected};
pub use client::FleetClient;
pub use config::{
    CredentialsProvider, Credentials, EnvCredentials, FileCredentials, StaticCredentials,
};
pub use error::{Error, Result};
pub use fleet_schema::{
    Driver, FleetOrder, FleetStateLog, OrderPrice, OrderStop, PortalFilter, PortalStatus,
    ValidationError, Vehicle,
};
