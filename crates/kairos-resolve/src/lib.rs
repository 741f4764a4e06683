//! Kairos Resolve - engine resolution, stub set, and namespace facade
//!
//! This crate implements the shim pipeline:
//! - Ambient slot: the process binding an environment may populate
//! - Resolver: override-then-ambient-then-stub resolution
//! - Stub set: inert placeholders that defer failure to first use
//! - Facade: nine always-present constructor slots, resynced atomically
//! - Cached resolution: the memoized accessor with a guarded fallback

pub mod ambient;
pub mod facade;
pub mod resolved;
pub mod resolver;
pub mod stubs;

pub use ambient::*;
pub use facade::*;
pub use resolved::*;
pub use resolver::*;
pub use stubs::*;
