//! # form
//!
//! State of the host form the keyboard overlay types into: a fixed number of
//! text buffers, the index of the focused one, and the editing/submitted
//! cycle.

mod error;
mod host;

pub use error::FormError;
pub use host::{FormPhase, HostForm};

#[cfg(test)]
mod tests;
