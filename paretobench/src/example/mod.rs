//! This module contains an example optimizer plugged into the drive loop: ZDT benchmark problems
//! and an evolutionary adapter with NSGA-II survivor selection.

mod adapter;
pub use self::adapter::*;

mod zdt;
pub use self::zdt::*;
