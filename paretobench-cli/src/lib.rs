//! A command line interface library: configuration and interruption handling of solver runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;

pub use paretobench;
