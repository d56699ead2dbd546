// src/lib.rs

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{Mode, Pms7003Error, Reading};
pub use driver::{Config, Pms7003};
