//! Contains extensions used by command line commands.

pub mod solve;
