//! Configuration types
//!
//! Board-agnostic panel settings, owned by the caller and passed into every
//! tick. Settings can be built in code or parsed from the TOML subset
//! accepted by [`parse_config`].

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
