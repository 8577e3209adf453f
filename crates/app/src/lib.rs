//! # tagstore-app
//!
//! Application layer: use-case services and the port traits adapters
//! implement. Services are generic over their repositories so they can be
//! exercised with in-memory fakes in tests and with `SQLite` in production.

pub mod ports;
pub mod services;
