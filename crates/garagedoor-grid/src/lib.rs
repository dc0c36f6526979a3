//! Tile positions, orientations, and host-grid capability traits.
#![forbid(unsafe_code)]

use std::collections::HashMap;

/// A uniquely addressed cell of the world grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TilePos {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn up(self) -> Self {
        Self { y: self.y + 1, ..self }
    }

    #[inline]
    pub fn down(self) -> Self {
        Self { y: self.y - 1, ..self }
    }
}

/// Axis-aligned orientation with a stable ordinal encoding.
///
/// The discriminants 0..=5 are written into persisted tile metadata and must
/// never be renumbered without a world-data migration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_ordinal(n: u8) -> Option<Direction> {
        Direction::ALL.get(n as usize).copied()
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit offset of one step along this orientation, (dx, dy, dz).
    #[inline]
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }
}

/// Per-tile 16-bit metadata storage owned by the host grid.
pub trait MetadataStore {
    fn metadata(&self, pos: TilePos) -> u16;
    fn set_metadata(&mut self, pos: TilePos, bits: u16);
}

/// Vertical extent of the grid, inclusive on both ends.
pub trait VerticalBounds {
    fn min_y(&self) -> i32;
    fn max_y(&self) -> i32;
}

/// World-effect broadcast, addressed to no particular player.
pub trait EffectSink {
    /// False on remote/client-side simulations; effects only fire on the
    /// authoritative side.
    fn is_authoritative(&self) -> bool;
    fn broadcast_effect(&mut self, effect: u16, pos: TilePos);
}

pub type BlockId = u16;

pub const AIR: BlockId = 0;

/// In-memory grid: block ids plus per-tile metadata keyed by position.
///
/// Stands in for the host engine's world in tests and demos. Broadcast
/// effects are recorded rather than played so callers can assert on them.
pub struct MemoryGrid {
    min_y: i32,
    max_y: i32,
    authoritative: bool,
    blocks: HashMap<TilePos, BlockId>,
    meta: HashMap<TilePos, u16>,
    effects: Vec<(u16, TilePos)>,
}

impl MemoryGrid {
    pub fn new(min_y: i32, max_y: i32) -> Self {
        Self {
            min_y,
            max_y,
            authoritative: true,
            blocks: HashMap::new(),
            meta: HashMap::new(),
            effects: Vec::new(),
        }
    }

    /// Marks the grid as a remote/client simulation; effect broadcasts are
    /// suppressed on such grids.
    pub fn set_remote(&mut self, remote: bool) {
        self.authoritative = !remote;
    }

    pub fn place(&mut self, pos: TilePos, block: BlockId) {
        if block == AIR {
            self.blocks.remove(&pos);
            self.meta.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    #[inline]
    pub fn block_at(&self, pos: TilePos) -> BlockId {
        if pos.y < self.min_y || pos.y > self.max_y {
            return AIR;
        }
        self.blocks.get(&pos).copied().unwrap_or(AIR)
    }

    /// Effects broadcast so far, in emission order.
    pub fn effects(&self) -> &[(u16, TilePos)] {
        &self.effects
    }
}

impl MetadataStore for MemoryGrid {
    #[inline]
    fn metadata(&self, pos: TilePos) -> u16 {
        self.meta.get(&pos).copied().unwrap_or(0)
    }

    #[inline]
    fn set_metadata(&mut self, pos: TilePos, bits: u16) {
        self.meta.insert(pos, bits);
    }
}

impl VerticalBounds for MemoryGrid {
    #[inline]
    fn min_y(&self) -> i32 {
        self.min_y
    }

    #[inline]
    fn max_y(&self) -> i32 {
        self.max_y
    }
}

impl EffectSink for MemoryGrid {
    #[inline]
    fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    fn broadcast_effect(&mut self, effect: u16, pos: TilePos) {
        self.effects.push((effect, pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_ordinals_are_stable() {
        // Persisted format; these numbers must never change.
        let expect = [
            (Direction::Down, 0u8),
            (Direction::Up, 1),
            (Direction::North, 2),
            (Direction::South, 3),
            (Direction::West, 4),
            (Direction::East, 5),
        ];
        for (dir, n) in expect {
            assert_eq!(dir.ordinal(), n);
            assert_eq!(Direction::from_ordinal(n), Some(dir));
        }
        assert_eq!(Direction::from_ordinal(6), None);
        assert_eq!(Direction::from_ordinal(7), None);
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy, dz) = dir.offset();
            let (ox, oy, oz) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy, dz + oz), (0, 0, 0));
        }
    }

    #[test]
    fn memory_grid_defaults_and_bounds() {
        let mut grid = MemoryGrid::new(0, 15);
        let pos = TilePos::new(3, 8, -2);
        assert_eq!(grid.block_at(pos), AIR);
        assert_eq!(grid.metadata(pos), 0);

        grid.place(pos, 7);
        grid.set_metadata(pos, 0xBEEF);
        assert_eq!(grid.block_at(pos), 7);
        assert_eq!(grid.metadata(pos), 0xBEEF);

        // Outside the vertical bounds everything reads as air.
        grid.place(TilePos::new(3, 16, -2), 7);
        assert_eq!(grid.block_at(TilePos::new(3, 16, -2)), AIR);

        // Placing air clears the cell and its metadata.
        grid.place(pos, AIR);
        assert_eq!(grid.block_at(pos), AIR);
        assert_eq!(grid.metadata(pos), 0);
    }

    #[test]
    fn effects_record_in_order() {
        let mut grid = MemoryGrid::new(0, 15);
        let a = TilePos::new(0, 1, 0);
        let b = TilePos::new(0, 2, 0);
        grid.broadcast_effect(1003, a);
        grid.broadcast_effect(1003, b);
        assert_eq!(grid.effects(), &[(1003, a), (1003, b)]);
    }
}
