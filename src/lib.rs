//! Memory Match (workspace facade crate).
//!
//! This package exposes `memory_match::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! controller that ties them together for the binary.

pub mod controller;
pub mod frame_clock;
pub mod logging;
pub mod settings;

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub use controller::{Controller, Flow};
pub use frame_clock::FrameClock;
pub use settings::Settings;
