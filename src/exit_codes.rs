//! Exit code constants for the forgeboard CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid filter or config)
//! - 2: Provider schema failure (a required field is missing)
//! - 3: Provider failure (primary payload is an error or has the wrong shape)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, invalid filter tokens or config.
pub const USER_ERROR: i32 = 1;

/// A provider item lacks a field the canonical model requires.
pub const SCHEMA_FAILURE: i32 = 2;

/// The primary provider payload could not be used at all.
pub const PROVIDER_FAILURE: i32 = 3;
