//! Demo: place a garage door column on an in-memory grid and work it.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use garagedoor_grid::{BlockId, Direction, MemoryGrid, TilePos};
use garagedoor_state::{DoorKind, DoorState, StyleCatalog, accessor, stack};

const DOOR: BlockId = 1;

#[derive(Parser, Debug)]
#[command(name = "garagedoor", about = "Garage door segment state demo")]
struct Args {
    /// Number of stacked segments.
    #[arg(long, default_value_t = 3)]
    height: u32,

    /// Facing of the door: north, south, west, east (down/up also accepted).
    #[arg(long, default_value = "north")]
    facing: String,

    /// Door style: default, glass_top, glass, siding.
    #[arg(long, default_value = "default")]
    style: String,

    /// Optional TOML style catalog overriding the built-in labels.
    #[arg(long)]
    styles: Option<PathBuf>,
}

fn parse_facing(s: &str) -> Result<Direction, String> {
    let dir = match s {
        "down" => Direction::Down,
        "up" => Direction::Up,
        "north" => Direction::North,
        "south" => Direction::South,
        "west" => Direction::West,
        "east" => Direction::East,
        _ => return Err(format!("unknown facing: {s}")),
    };
    Ok(dir)
}

fn parse_style(s: &str) -> Result<DoorKind, String> {
    let kind = match s {
        "default" => DoorKind::Default,
        "glass_top" => DoorKind::GlassTop,
        "glass" => DoorKind::Glass,
        "siding" => DoorKind::Siding,
        _ => return Err(format!("unknown style: {s}")),
    };
    Ok(kind)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let facing = parse_facing(&args.facing)?;
    let kind = parse_style(&args.style)?;
    let catalog = match &args.styles {
        Some(path) => StyleCatalog::from_path(path)?,
        None => StyleCatalog::default(),
    };
    let style = catalog.style(kind);

    let mut grid = MemoryGrid::new(0, 63);
    let base = TilePos::new(0, 8, 0);
    let top_y = base.y + args.height.max(1) as i32 - 1;
    for y in base.y..=top_y {
        let pos = TilePos::new(base.x, y, base.z);
        grid.place(pos, DOOR);
        accessor::set_kind(&mut grid, pos, kind);
        accessor::set_facing(&mut grid, pos, facing);
    }
    log::info!(
        "placed {} {} segment(s) facing {:?} at column ({}, {})",
        top_y - base.y + 1,
        style.label,
        facing,
        base.x,
        base.z
    );

    let is_door = |p: TilePos| grid.block_at(p) == DOOR;
    let top = stack::topmost(&grid, base, is_door);
    let bottom = stack::bottommost(&grid, top, is_door);
    log::info!("column spans y={}..={}", bottom.y, top.y);

    // Open the whole door, bottom segment plays the sound.
    for y in bottom.y..=top.y {
        let pos = TilePos::new(base.x, y, base.z);
        accessor::set_state(&mut grid, pos, DoorState::Open, y == bottom.y);
    }
    for y in bottom.y..=top.y {
        let pos = TilePos::new(base.x, y, base.z);
        let is_door = |p: TilePos| grid.block_at(p) == DOOR;
        log::info!(
            "y={}: open={} topmost={} visible={} translucent={}",
            y,
            accessor::is_open(&grid, pos),
            stack::is_topmost(&grid, pos, is_door),
            stack::is_visible(&grid, pos, is_door),
            style.translucent
        );
    }
    log::info!("effects broadcast: {:?}", grid.effects());

    Ok(())
}
