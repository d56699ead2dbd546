// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod port;
pub mod reading;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::{encode_command, Command};

// From error.rs
pub use error::{ErrorKind, Pms7003Error};

// From frame.rs
pub use frame::{checksum, decode_frame};

// From hal_traits.rs
pub use hal_traits::{PmsInstant, PmsSerial, PmsTimer};

// From port.rs
pub use port::PortConfig;

// From reading.rs
pub use reading::Reading;

// From timing.rs (constants - users can access via common::timing::*)

// From types.rs
pub use types::Mode;
