//! Component fixtures.
//!
//! Plain `Copy` records shaped like typical ECS components, with a
//! natural ordering so data-sorts can be exercised.

use tandem_core::EntityId;

/// 2D grid position, ordered row-major (`y` then `x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Health(pub u32);

/// Entity IDs for every value in `ids`, in order.
pub fn entities(ids: impl IntoIterator<Item = u32>) -> Vec<EntityId> {
    ids.into_iter().map(EntityId).collect()
}
