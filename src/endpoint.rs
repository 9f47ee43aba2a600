//! Endpoint registry: static descriptors (data) for every API operation.
//!
//! `descriptor` defines the [`EndpointDescriptor`] shape (HTTP method, path template, and
//! per-operation wire details) and `registry` declares the table itself, from which the
//! [`Endpoint`] enum is generated. The request builder and the client bindings only ever
//! read these descriptors; nothing here performs I/O.

pub mod descriptor;
pub mod registry;

pub use descriptor::*;
pub use registry::*;
