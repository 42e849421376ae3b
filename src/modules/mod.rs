//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the storage seam and its database-backed implementation.

pub mod storage;
