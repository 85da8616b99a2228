//! Reduces room geometry to the fixed per-orientation quantities the
//! integrator needs: net opaque wall areas, roof/floor areas, and the
//! aggregate conductance-area product of all openings.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{Orientation, RoomConfig};

/// Net opaque area of each wall, m².
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WallAreas {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl WallAreas {
    pub fn get(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::North => self.north,
            Orientation::South => self.south,
            Orientation::East => self.east,
            Orientation::West => self.west,
        }
    }

    fn get_mut(&mut self, orientation: Orientation) -> &mut f64 {
        match orientation {
            Orientation::North => &mut self.north,
            Orientation::South => &mut self.south,
            Orientation::East => &mut self.east,
            Orientation::West => &mut self.west,
        }
    }
}

/// Fixed surface quantities derived once per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSurfaces {
    pub net_wall_areas: WallAreas,
    pub roof_area: f64,
    pub floor_area: f64,
    /// Σ(area × U) over every opening on every wall, W/K. The integrator
    /// does not attribute opening conduction to individual walls, only the
    /// total matters.
    pub weighted_opening_ua: f64,
}

/// Collapses the room description into per-orientation conductive surfaces.
///
/// Degenerate input never fails here: a wall whose openings exceed its gross
/// area clamps to zero net area instead.
pub fn reduce(room: &RoomConfig) -> RoomSurfaces {
    let roof_area = room.width * room.depth;
    let floor_area = room.width * room.depth;

    let mut opening_areas = WallAreas::default();
    let mut weighted_opening_ua = 0.0;

    for opening in &room.openings {
        let area = opening.area();
        *opening_areas.get_mut(opening.wall) += area;
        weighted_opening_ua += area * opening.u_value;
    }

    let mut net_wall_areas = WallAreas::default();
    for orientation in Orientation::iter() {
        let gross = room.gross_wall_area(orientation);
        *net_wall_areas.get_mut(orientation) =
            (gross - opening_areas.get(orientation)).max(0.0);
    }

    RoomSurfaces {
        net_wall_areas,
        roof_area,
        floor_area,
        weighted_opening_ua,
    }
}
