//! `sb-core` — foundational types for the `signalbox` interlocking controller.
//!
//! This crate is a dependency of every other `sb-*` crate.  It intentionally
//! has no `sb-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`section`] | `Section` (validated 1..=11), `InvalidSection`    |
//! | [`ids`]     | `TrainId` (roster arena index)                    |
//! | [`class`]   | `TrainClass` (passenger / freight)                |
//! | [`tick`]    | `Tick` (movement-call counter)                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod class;
pub mod ids;
pub mod section;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::TrainClass;
pub use ids::TrainId;
pub use section::{InvalidSection, Section};
pub use tick::Tick;
