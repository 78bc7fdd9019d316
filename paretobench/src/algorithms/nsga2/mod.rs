//! This module contains building blocks of NSGA-II algorithm: fast non-dominated sorting,
//! crowding distance and survivor selection.

mod crowding_distance;
pub use self::crowding_distance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;

mod nsga2_sort;
pub use self::nsga2_sort::*;
