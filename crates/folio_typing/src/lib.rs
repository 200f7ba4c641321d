//! Folio Typing Effect
//!
//! Typewriter-style text that types and deletes a fixed list of roles, forever.
//!
//! # Features
//!
//! - **Pure State Machine**: `CyclerState::advance` computes the next frame and delay
//! - **Configurable Timing**: type, delete, and boundary pause cadences
//! - **Validated Roles**: empty role lists are rejected up front
//! - **Text Sinks**: render onto any target implementing `TextSink`
//! - **Timer Driver**: tokio-backed self-rescheduling loop with a stop handle
//! - **TOML Config**: roles and timings loaded from `folio.toml`

pub mod config;
pub mod cycler;
pub mod driver;
pub mod error;
pub mod roles;
pub mod sink;
pub mod timing;

pub use config::{FolioConfig, TypingSection, CONFIG_FILE_NAME};
pub use cycler::{Boundary, CyclerState, Phase, Step, TypingCycler};
pub use driver::{run_steps, spawn, CyclerHandle};
pub use error::{Result, TypingError};
pub use roles::{RoleList, DEFAULT_ROLES};
pub use sink::{SharedText, TextSink};
pub use timing::TypingTiming;
