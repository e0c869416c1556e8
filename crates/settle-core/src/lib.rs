//! Settle Core Types
//!
//! This crate contains the runtime-independent half of Settle:
//! - Result markers shared by the async executors (`Outcome`, `RaceResult`, `Settlement`)
//! - Context-free helpers used by the host application (id codec, deep
//!   equality, truncation, version config lookup, level score)
//!
//! Nothing here depends on an async runtime.

pub mod compare;
pub mod error;
pub mod host;
pub mod ids;
pub mod level;
pub mod outcome;
pub mod status;
pub mod text;

// Re-export commonly used types
pub use compare::deep_equal;
pub use error::CoreError;
pub use host::{Platform, VersionConfig};
pub use ids::IdPair;
pub use level::Level;
pub use outcome::{Outcome, Settled};
pub use status::{RaceResult, Rejection, Settlement};
pub use text::{is_numeric, truncate_strings, DEFAULT_TRUNCATE_LEN};
