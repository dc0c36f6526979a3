//! Field accessors over a tile's packed metadata.
//!
//! Every setter is a read-modify-write: mask out the field, OR in the new
//! value, write the word back. Unrelated fields and the reserved byte are
//! untouched, including garbage bits.

use garagedoor_grid::{Direction, EffectSink, MetadataStore, TilePos};

use crate::segment::{
    DoorKind, DoorState, FACING_MASK, FACING_SHIFT, KIND_MASK, STATE_MASK, STATE_SHIFT, StateError,
};

/// Fixed world-effect identifier for the door sound.
pub const AUX_SFX_DOOR: u16 = 1003;

pub fn kind<G: MetadataStore>(grid: &G, pos: TilePos) -> Result<DoorKind, StateError> {
    DoorKind::from_bits(grid.metadata(pos) & KIND_MASK)
}

pub fn set_kind<G: MetadataStore>(grid: &mut G, pos: TilePos, kind: DoorKind) {
    let bits = (grid.metadata(pos) & !KIND_MASK) | kind.bits();
    grid.set_metadata(pos, bits);
}

pub fn facing<G: MetadataStore>(grid: &G, pos: TilePos) -> Result<Direction, StateError> {
    let raw = (grid.metadata(pos) & FACING_MASK) >> FACING_SHIFT;
    Direction::from_ordinal(raw as u8).ok_or(StateError::BadDirection(raw))
}

pub fn set_facing<G: MetadataStore>(grid: &mut G, pos: TilePos, dir: Direction) {
    let bits = (grid.metadata(pos) & !FACING_MASK) | ((dir.ordinal() as u16) << FACING_SHIFT);
    grid.set_metadata(pos, bits);
}

pub fn state<G: MetadataStore>(grid: &G, pos: TilePos) -> DoorState {
    DoorState::from_bit((grid.metadata(pos) & STATE_MASK) >> STATE_SHIFT)
}

/// Sets the open/closed bit. On the authoritative side, a door sound is
/// broadcast at the tile when `play_sound` is set, whether or not the bit
/// changed. Fire-and-forget; there is no error path.
pub fn set_state<G: MetadataStore + EffectSink>(
    grid: &mut G,
    pos: TilePos,
    state: DoorState,
    play_sound: bool,
) {
    let bits = (grid.metadata(pos) & !STATE_MASK) | (state.bit() << STATE_SHIFT);
    if grid.is_authoritative() && play_sound {
        log::debug!(
            "door at ({}, {}, {}) -> {:?}, broadcasting sfx {}",
            pos.x,
            pos.y,
            pos.z,
            state,
            AUX_SFX_DOOR
        );
        grid.broadcast_effect(AUX_SFX_DOOR, pos);
    }
    grid.set_metadata(pos, bits);
}

#[inline]
pub fn is_open<G: MetadataStore>(grid: &G, pos: TilePos) -> bool {
    state(grid, pos).is_open()
}
