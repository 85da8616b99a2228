//! Material preset catalogs the editor offers when assigning envelope
//! properties. Values are typical published U-values / airtightness figures
//! for the named constructions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallPreset {
    pub name: &'static str,
    pub u_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlazingPreset {
    pub name: &'static str,
    pub u_value: f64,
    pub shgc: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfiltrationPreset {
    pub name: &'static str,
    pub air_changes_per_hour: f64,
}

pub const WALL_PRESETS: &[WallPreset] = &[
    WallPreset { name: "Solid Stone (Uninsulated)", u_value: 2.30 },
    WallPreset { name: "Solid Brick (Old)", u_value: 2.10 },
    WallPreset { name: "Cavity Wall (Uninsulated)", u_value: 1.50 },
    WallPreset { name: "Cavity Wall (Retrofit)", u_value: 0.60 },
    WallPreset { name: "Timber Frame (Standard)", u_value: 0.45 },
    WallPreset { name: "Modern Brick (Insulated)", u_value: 0.28 },
    WallPreset { name: "SIPS / ICF (High Perf.)", u_value: 0.15 },
    WallPreset { name: "Passive House Ultra", u_value: 0.10 },
];

pub const GLAZING_PRESETS: &[GlazingPreset] = &[
    GlazingPreset { name: "Single Glazed", u_value: 5.0, shgc: 0.8 },
    GlazingPreset { name: "Double Glazed (Standard)", u_value: 2.8, shgc: 0.7 },
    GlazingPreset { name: "Double Glazed (Low-E)", u_value: 1.6, shgc: 0.6 },
    GlazingPreset { name: "Triple Glazed", u_value: 0.8, shgc: 0.5 },
];

pub const INFILTRATION_PRESETS: &[InfiltrationPreset] = &[
    InfiltrationPreset { name: "Very Leaky (Old/Drafty)", air_changes_per_hour: 1.5 },
    InfiltrationPreset { name: "Average (Standard)", air_changes_per_hour: 0.7 },
    InfiltrationPreset { name: "Good (New Build)", air_changes_per_hour: 0.4 },
    InfiltrationPreset { name: "Airtight (Sealed)", air_changes_per_hour: 0.2 },
    InfiltrationPreset { name: "Passive House", air_changes_per_hour: 0.06 },
];

/// The full catalog, shaped for the presets endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PresetCatalog {
    pub walls: &'static [WallPreset],
    pub windows: &'static [GlazingPreset],
    pub infiltration: &'static [InfiltrationPreset],
}

impl PresetCatalog {
    pub fn all() -> Self {
        Self {
            walls: WALL_PRESETS,
            windows: GLAZING_PRESETS,
            infiltration: INFILTRATION_PRESETS,
        }
    }
}
