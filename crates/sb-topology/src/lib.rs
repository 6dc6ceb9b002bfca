//! `sb-topology` — the fixed eleven-section yard and its path finder.
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`layout`] | `Topology`: adjacency, corridors, crossing guard    |
//! | [`route`]  | `Path`, breadth-first `find_path`, `RouteError`     |
//!
//! The layout is static: no sections or connections can be added at runtime,
//! and the two corridors stay disjoint as graphs.

pub mod layout;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use layout::Topology;
pub use route::{find_path, Path, RouteError};
