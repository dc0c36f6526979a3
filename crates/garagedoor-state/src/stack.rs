//! Queries over a vertical column of door segments.
//!
//! A multi-segment door is a contiguous column of door cells at one (x, z);
//! there is no persisted group id, adjacency is the only membership test.
//! Callers inject `is_door` so these scans stay independent of any block
//! registry. Scans are clamped to the grid's vertical bounds: a column that
//! reaches the world edge terminates there.

use garagedoor_grid::{MetadataStore, TilePos, VerticalBounds};

use crate::accessor;

/// True iff the cell directly above `pos` is not a door segment. Above the
/// world's top bound counts as not-door.
pub fn is_topmost<G, F>(grid: &G, pos: TilePos, is_door: F) -> bool
where
    G: VerticalBounds,
    F: Fn(TilePos) -> bool,
{
    pos.y >= grid.max_y() || !is_door(pos.up())
}

/// Walks upward from `pos` and returns the highest door cell of the column.
///
/// The starting cell itself is never tested; it is assumed to be a door
/// segment, and the walk looks strictly above it.
pub fn topmost<G, F>(grid: &G, pos: TilePos, is_door: F) -> TilePos
where
    G: VerticalBounds,
    F: Fn(TilePos) -> bool,
{
    let mut cur = pos;
    while cur.y < grid.max_y() && is_door(cur.up()) {
        cur = cur.up();
    }
    cur
}

/// Walks downward from `pos` and returns the lowest door cell of the column.
pub fn bottommost<G, F>(grid: &G, pos: TilePos, is_door: F) -> TilePos
where
    G: VerticalBounds,
    F: Fn(TilePos) -> bool,
{
    let mut cur = pos;
    while cur.y > grid.min_y() && is_door(cur.down()) {
        cur = cur.down();
    }
    cur
}

/// Whether the segment can be selected or collided with.
///
/// An open segment below the top of its column is retracted into the segment
/// above and is suppressed; closed segments are always visible.
pub fn is_visible<G, F>(grid: &G, pos: TilePos, is_door: F) -> bool
where
    G: MetadataStore + VerticalBounds,
    F: Fn(TilePos) -> bool,
{
    if accessor::is_open(grid, pos) {
        is_topmost(grid, pos, is_door)
    } else {
        true
    }
}
