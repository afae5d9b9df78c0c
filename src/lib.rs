pub mod cell;
pub mod point;
pub mod rule_set;
pub mod world;

mod parse_util;

pub use cell::Cell;
pub use point::Dimensions;
pub use point::Position;
pub use rule_set::RuleSet;
pub use world::World;
pub use world::WorldError;

/// A cell coordinate. Signed so that positions left of or above the grid can be expressed, and
/// rejected.
pub type Coord = isize;
