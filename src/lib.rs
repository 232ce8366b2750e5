/*
 * Library surface of the tasks API.
 *
 * The binary (main.rs) only spins up the runtime; everything else lives here
 * so integration tests can exercise the repo and service layers directly.
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
