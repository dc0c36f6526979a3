//! Wire layout of the 16-bit door segment state.
//!
//! ```text
//! [15........8] [7]   [6...4] [3...0]
//! reserved      state dir     type
//! ```
//!
//! Bits 8..=15 are reserved: they are never inspected and may hold garbage in
//! persisted worlds, so every writer must round-trip them untouched.

use garagedoor_grid::Direction;
use thiserror::Error;

pub const KIND_MASK: u16 = 0x000F;
pub const FACING_MASK: u16 = 0x0070;
pub const FACING_SHIFT: u16 = 4;
pub const STATE_MASK: u16 = 0x0080;
pub const STATE_SHIFT: u16 = 7;

/// Corrupt stored bits. The original accessor masked without checking and
/// would silently mis-decode; here a bad field is reported instead.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum StateError {
    #[error("door type nibble out of range: {0} (legal 0..=3)")]
    BadKind(u16),
    #[error("direction bits out of range: {0} (legal 0..=5)")]
    BadDirection(u16),
}

/// Visual variant of a door segment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DoorKind {
    Default = 0,
    GlassTop = 1,
    Glass = 2,
    Siding = 3,
}

impl DoorKind {
    pub const ALL: [DoorKind; 4] = [
        DoorKind::Default,
        DoorKind::GlassTop,
        DoorKind::Glass,
        DoorKind::Siding,
    ];

    #[inline]
    pub fn from_bits(bits: u16) -> Result<DoorKind, StateError> {
        match bits {
            0 => Ok(DoorKind::Default),
            1 => Ok(DoorKind::GlassTop),
            2 => Ok(DoorKind::Glass),
            3 => Ok(DoorKind::Siding),
            n => Err(StateError::BadKind(n)),
        }
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self as u16
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DoorState {
    Closed = 0,
    Open = 1,
}

impl DoorState {
    #[inline]
    pub fn from_bit(bit: u16) -> DoorState {
        if bit == 0 { DoorState::Closed } else { DoorState::Open }
    }

    #[inline]
    pub fn bit(self) -> u16 {
        self as u16
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, DoorState::Open)
    }
}

/// Typed view of one segment's packed state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub kind: DoorKind,
    pub facing: Direction,
    pub state: DoorState,
    /// Bits 8..=15, carried verbatim.
    pub reserved: u8,
}

impl Segment {
    pub fn new(kind: DoorKind, facing: Direction, state: DoorState) -> Self {
        Self {
            kind,
            facing,
            state,
            reserved: 0,
        }
    }

    pub fn decode(bits: u16) -> Result<Segment, StateError> {
        let kind = DoorKind::from_bits(bits & KIND_MASK)?;
        let dir_bits = (bits & FACING_MASK) >> FACING_SHIFT;
        let facing = Direction::from_ordinal(dir_bits as u8)
            .ok_or(StateError::BadDirection(dir_bits))?;
        let state = DoorState::from_bit((bits & STATE_MASK) >> STATE_SHIFT);
        Ok(Segment {
            kind,
            facing,
            state,
            reserved: (bits >> 8) as u8,
        })
    }

    pub fn encode(&self) -> u16 {
        ((self.reserved as u16) << 8)
            | (self.state.bit() << STATE_SHIFT)
            | ((self.facing.ordinal() as u16) << FACING_SHIFT)
            | self.kind.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_positions_match_layout() {
        let seg = Segment {
            kind: DoorKind::Siding,
            facing: Direction::East,
            state: DoorState::Open,
            reserved: 0xA5,
        };
        // 0xA5 reserved | open bit | east (5) | siding (3)
        assert_eq!(seg.encode(), 0xA500 | 0x0080 | (5 << 4) | 3);
    }

    #[test]
    fn decode_rejects_corrupt_fields() {
        assert_eq!(Segment::decode(0x0004), Err(StateError::BadKind(4)));
        assert_eq!(Segment::decode(0x000F), Err(StateError::BadKind(15)));
        assert_eq!(Segment::decode(6 << 4), Err(StateError::BadDirection(6)));
        assert_eq!(Segment::decode(7 << 4), Err(StateError::BadDirection(7)));
    }

    #[test]
    fn decode_preserves_reserved_byte() {
        let seg = Segment::decode(0xFF00).unwrap();
        assert_eq!(seg.reserved, 0xFF);
        assert_eq!(seg.encode(), 0xFF00);
    }

    #[test]
    fn roundtrip_all_legal_fields() {
        for kind in DoorKind::ALL {
            for facing in Direction::ALL {
                for state in [DoorState::Closed, DoorState::Open] {
                    let seg = Segment::new(kind, facing, state);
                    assert_eq!(Segment::decode(seg.encode()), Ok(seg));
                }
            }
        }
    }
}
