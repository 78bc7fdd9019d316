//! Contains geometry routines used by quality indicators.

mod hypervolume;
pub use self::hypervolume::*;
