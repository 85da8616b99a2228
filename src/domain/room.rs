use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// One of the four vertical wall planes of a rectangular room.
///
/// North/South walls span the room's `width`, East/West walls span its `depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

/// Kind of penetration in a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum OpeningKind {
    Window,
    Door,
}

/// A rectangular opening (window or door) in one wall.
///
/// `offset` is measured from the wall's reference corner: the west end for
/// North/South walls, the north end for East/West walls. Only `Window`
/// openings admit solar gain; both kinds conduct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    /// Stable identifier for editor correlation. Irrelevant to physics.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    /// Opening width in meters.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub width: f64,
    /// Opening height in meters.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub height: f64,
    /// Distance in meters from the wall's reference corner to the near edge.
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub offset: f64,
    /// U-value in W/(m²·K).
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub u_value: f64,
    /// Solar heat gain coefficient, fraction of incident irradiance
    /// transmitted. Meaningful for windows only; the engine assumes 0.7
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1.0, message = "must be within [0, 1]"))]
    pub shgc: Option<f64>,
    /// Which wall hosts this opening.
    pub wall: Orientation,
}

impl Opening {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Optional per-orientation wall U-values.
///
/// An orientation missing from the map falls back to the room's global
/// `wall_u_value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct WallUValues {
    #[serde(rename = "North", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub north: Option<f64>,
    #[serde(rename = "South", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub south: Option<f64>,
    #[serde(rename = "East", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub east: Option<f64>,
    #[serde(rename = "West", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub west: Option<f64>,
}

impl WallUValues {
    pub fn uniform(u_value: f64) -> Self {
        Self {
            north: Some(u_value),
            south: Some(u_value),
            east: Some(u_value),
            west: Some(u_value),
        }
    }

    pub fn get(&self, orientation: Orientation) -> Option<f64> {
        match orientation {
            Orientation::North => self.north,
            Orientation::South => self.south,
            Orientation::East => self.east,
            Orientation::West => self.west,
        }
    }
}

/// The building envelope of a single rectangular room.
///
/// Owned and freely mutated by the editing session; the engine borrows it
/// read-only and snapshots it into each result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_room_geometry))]
pub struct RoomConfig {
    /// Plan dimension spanned by the North/South walls, meters.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub width: f64,
    /// Plan dimension spanned by the East/West walls, meters.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub depth: f64,
    /// Ceiling height, meters.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub height: f64,
    /// Global fallback wall U-value, W/(m²·K).
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub wall_u_value: f64,
    /// Per-orientation wall U-values overriding the global value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub wall_specific_u_values: Option<WallUValues>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub roof_u_value: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub floor_u_value: f64,
    /// Air changes per hour.
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub infiltration_rate: f64,
    /// Openings in display order. Order is irrelevant to physics.
    #[validate(nested)]
    pub openings: Vec<Opening>,
}

impl RoomConfig {
    /// Resolved wall U-value for one orientation: the per-orientation
    /// override when present, the global value otherwise.
    pub fn wall_u(&self, orientation: Orientation) -> f64 {
        self.wall_specific_u_values
            .as_ref()
            .and_then(|m| m.get(orientation))
            .unwrap_or(self.wall_u_value)
    }

    /// Horizontal length of one wall, meters.
    pub fn wall_length(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::North | Orientation::South => self.width,
            Orientation::East | Orientation::West => self.depth,
        }
    }

    /// Gross (opening-inclusive) area of one wall, m².
    pub fn gross_wall_area(&self, orientation: Orientation) -> f64 {
        self.wall_length(orientation) * self.height
    }

    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    /// Envelope typical of a modern, well-sealed build.
    pub fn well_insulated() -> Self {
        Self {
            wall_u_value: 0.15,
            wall_specific_u_values: None,
            roof_u_value: 0.12,
            floor_u_value: 0.2,
            infiltration_rate: 0.2,
            ..Default::default()
        }
    }

    /// Envelope typical of an uninsulated solid-brick build.
    pub fn poorly_insulated() -> Self {
        Self {
            wall_u_value: 2.1,
            wall_specific_u_values: None,
            roof_u_value: 1.0,
            floor_u_value: 1.2,
            infiltration_rate: 1.5,
            ..Default::default()
        }
    }
}

impl Default for RoomConfig {
    /// The room a fresh editor session starts from: a 6 × 5 × 2.7 m insulated
    /// room with a south-facing double-glazed window and a north door.
    fn default() -> Self {
        Self {
            width: 6.0,
            depth: 5.0,
            height: 2.7,
            wall_u_value: 0.3,
            wall_specific_u_values: Some(WallUValues::uniform(0.3)),
            roof_u_value: 0.25,
            floor_u_value: 0.4,
            infiltration_rate: 0.5,
            openings: vec![
                Opening {
                    id: Uuid::new_v4().to_string(),
                    kind: OpeningKind::Window,
                    width: 1.5,
                    height: 1.2,
                    offset: 1.5,
                    u_value: 1.6,
                    shgc: Some(0.6),
                    wall: Orientation::South,
                },
                Opening {
                    id: Uuid::new_v4().to_string(),
                    kind: OpeningKind::Door,
                    width: 0.9,
                    height: 2.1,
                    offset: 0.5,
                    u_value: 1.8,
                    shgc: None,
                    wall: Orientation::North,
                },
            ],
        }
    }
}

/// Cross-field plausibility checks the per-field ranges cannot express.
///
/// The engine itself never rejects geometry (it clamps); these checks run at
/// the request boundary only.
fn validate_room_geometry(room: &RoomConfig) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::new();

    for opening in &room.openings {
        if !seen_ids.insert(opening.id.as_str()) {
            let mut err = ValidationError::new("duplicate_opening_id");
            err.message =
                Some(format!("opening id {:?} appears more than once", opening.id).into());
            return Err(err);
        }

        let wall_length = room.wall_length(opening.wall);
        if opening.offset + opening.width > wall_length {
            let mut err = ValidationError::new("opening_outside_wall");
            err.message = Some(
                format!(
                    "opening {:?} extends past the end of the {} wall \
                     ({:.2} m offset + {:.2} m width > {:.2} m)",
                    opening.id, opening.wall, opening.offset, opening.width, wall_length
                )
                .into(),
            );
            return Err(err);
        }

        if opening.area() > room.gross_wall_area(opening.wall) {
            let mut err = ValidationError::new("opening_exceeds_wall");
            err.message = Some(
                format!(
                    "opening {:?} is larger than its host {} wall \
                     ({:.2} m² > {:.2} m²)",
                    opening.id,
                    opening.wall,
                    opening.area(),
                    room.gross_wall_area(opening.wall)
                )
                .into(),
            );
            return Err(err);
        }
    }

    Ok(())
}
