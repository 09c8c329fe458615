//! Core data types for depot.
//!
//! This crate defines the read-only side of the package manager: version
//! ordering, package specs, the package catalog and its file format, and
//! project configuration.
//!
//! This crate holds no mutable installation state.

pub mod catalog;
pub mod config;
pub mod spec;
pub mod version;
