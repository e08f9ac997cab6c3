//! Command implementations behind the `wiper` binary.

pub mod wipe;
