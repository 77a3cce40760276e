//! Exit codes returned by [`crate::run`].

/// The command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or a failed command.
pub const ERROR: i32 = 2;
