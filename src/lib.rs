//! ballotdb provisions the PostgreSQL schema for the ballot application.
//!
//! The crate does exactly one thing: read connection parameters from the
//! environment, open a connection, and ensure the five application tables
//! exist. It holds no domain state and runs no queries beyond DDL.

pub mod config;
pub mod schema;
