//! One-shot procedural city layout.
//!
//! `generate_layout` turns `LayoutParams` plus an RNG into the immutable
//! [`CityLayout`] resource: street grid, building placements, lamp posts,
//! and the decorative skyline ring. Generation runs once at startup
//! (`world_init`); nothing here is touched again until an explicit new
//! world is requested.
//!
//! The grid convention every consumer relies on: roadways run at every
//! integer block offset, while buildings only ever stand on odd-odd block
//! coordinates, so every even-numbered street line stays clear of
//! buildings.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    BLOCK_SPACING, BUILDING_FOOTPRINT, BUILDING_HEIGHT_RANGE, BUILDING_MIN_HEIGHT,
    BUILDING_SKIP_PROBABILITY, GRID_EXTENT, SKYLINE_COUNT, SKYLINE_FOOTPRINT_RANGE,
    SKYLINE_HEIGHT_RANGE, SKYLINE_MIN_FOOTPRINT, SKYLINE_MIN_HEIGHT, SKYLINE_RADIUS,
};

// ---------------------------------------------------------------------------
// Street strip geometry
// ---------------------------------------------------------------------------

const ROADWAY_WIDTH: f32 = 2.4;
const LANE_MARKING_WIDTH: f32 = 0.15;
const SIDEWALK_WIDTH: f32 = 1.0;

/// Lateral distance from a roadway centerline to each of its sidewalks.
const SIDEWALK_OFFSET: f32 = 2.2;

/// Strip heights above the ground plane, stacked to avoid z-fighting.
const Y_ROADWAY: f32 = 0.01;
const Y_SIDEWALK: f32 = 0.015;
const Y_MARKING: f32 = 0.02;

// ---------------------------------------------------------------------------
// Layout value types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetKind {
    Roadway,
    LaneMarking,
    Sidewalk,
}

/// World axis a street strip runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetAxis {
    X,
    Z,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreetSegment {
    pub position: Vec3,
    pub axis: StreetAxis,
    pub length: f32,
    pub width: f32,
    pub kind: StreetKind,
}

/// Finite facade palette; the renderer maps each style to a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacadeStyle {
    DarkGlass,
    NeonBlue,
    NeonMagenta,
    NeonTeal,
}

impl FacadeStyle {
    pub const ALL: [FacadeStyle; 4] = [
        FacadeStyle::DarkGlass,
        FacadeStyle::NeonBlue,
        FacadeStyle::NeonMagenta,
        FacadeStyle::NeonTeal,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildingSpec {
    /// Footprint center at ground level (y = 0).
    pub position: Vec3,
    pub height: f32,
    pub footprint: f32,
    pub facade: FacadeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LampPost {
    pub position: Vec3,
}

/// Decorative horizon building. No collision footprint; rendering only.
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineBuilding {
    pub position: Vec3,
    pub height: f32,
    pub footprint: f32,
}

// ---------------------------------------------------------------------------
// Parameters and result resource
// ---------------------------------------------------------------------------

/// Generation parameters. Insert before `SimulationPlugin` to override the
/// defaults; `world_init` reads whatever is present.
#[derive(Resource, Debug, Clone)]
pub struct LayoutParams {
    /// Street grid half-width in block units.
    pub extent: i32,
    pub block_spacing: f32,
    /// Per-site probability that a candidate building site stays empty.
    pub skip_probability: f64,
    pub skyline_radius: f32,
    pub skyline_count: usize,
    /// Lamp posts are placed exactly here; the generator adds none of its
    /// own.
    pub lamp_positions: Vec<Vec3>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            extent: GRID_EXTENT,
            block_spacing: BLOCK_SPACING,
            skip_probability: BUILDING_SKIP_PROBABILITY,
            skyline_radius: SKYLINE_RADIUS,
            skyline_count: SKYLINE_COUNT,
            lamp_positions: vec![Vec3::ZERO],
        }
    }
}

/// The static world. Generated once, immutable afterwards; every other
/// crate reads it, nothing mutates it.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CityLayout {
    pub streets: Vec<StreetSegment>,
    pub buildings: Vec<BuildingSpec>,
    pub lamps: Vec<LampPost>,
    pub skyline: Vec<SkylineBuilding>,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a full city layout.
///
/// Total over its input domain: `extent <= 0` yields no streets and no
/// buildings, `skyline_count == 0` yields no skyline. Lamp posts are
/// always exactly `params.lamp_positions`.
pub fn generate_layout(params: &LayoutParams, rng: &mut impl Rng) -> CityLayout {
    let mut layout = CityLayout {
        lamps: params
            .lamp_positions
            .iter()
            .map(|&position| LampPost { position })
            .collect(),
        ..default()
    };

    if params.extent > 0 {
        layout.streets = street_grid(params.extent, params.block_spacing);
        layout.buildings = place_buildings(params, rng);
    }
    if params.skyline_count > 0 {
        layout.skyline = skyline_ring(params, rng);
    }

    layout
}

/// One roadway centerline per axis per integer offset, each with a lane
/// marking strip and two flanking sidewalks. Street length equals the span
/// of the building domain so the grid has a single city boundary.
fn street_grid(extent: i32, block_spacing: f32) -> Vec<StreetSegment> {
    let length = 2.0 * extent as f32 * block_spacing;
    let mut streets = Vec::with_capacity((2 * extent as usize + 1) * 8);

    for i in -extent..=extent {
        let offset = i as f32 * block_spacing;
        for axis in [StreetAxis::X, StreetAxis::Z] {
            streets.push(strip(axis, offset, Y_ROADWAY, length, ROADWAY_WIDTH, StreetKind::Roadway));
            streets.push(strip(
                axis,
                offset,
                Y_MARKING,
                length,
                LANE_MARKING_WIDTH,
                StreetKind::LaneMarking,
            ));
            for side in [-1.0, 1.0] {
                streets.push(strip(
                    axis,
                    offset + side * SIDEWALK_OFFSET,
                    Y_SIDEWALK,
                    length,
                    SIDEWALK_WIDTH,
                    StreetKind::Sidewalk,
                ));
            }
        }
    }

    streets
}

fn strip(
    axis: StreetAxis,
    lateral_offset: f32,
    y: f32,
    length: f32,
    width: f32,
    kind: StreetKind,
) -> StreetSegment {
    let position = match axis {
        StreetAxis::X => Vec3::new(0.0, y, lateral_offset),
        StreetAxis::Z => Vec3::new(lateral_offset, y, 0.0),
    };
    StreetSegment {
        position,
        axis,
        length,
        width,
        kind,
    }
}

/// Buildings stand on odd-odd block coordinates only, keeping the even
/// street lines clear. Each candidate site is skipped independently with
/// `skip_probability`.
fn place_buildings(params: &LayoutParams, rng: &mut impl Rng) -> Vec<BuildingSpec> {
    let skip = params.skip_probability.clamp(0.0, 1.0);
    let mut buildings = Vec::new();

    for i in -params.extent..=params.extent {
        for j in -params.extent..=params.extent {
            if i % 2 == 0 || j % 2 == 0 {
                continue;
            }
            if rng.gen_bool(skip) {
                continue;
            }
            buildings.push(BuildingSpec {
                position: Vec3::new(
                    i as f32 * params.block_spacing,
                    0.0,
                    j as f32 * params.block_spacing,
                ),
                height: BUILDING_MIN_HEIGHT + rng.gen::<f32>() * BUILDING_HEIGHT_RANGE,
                footprint: BUILDING_FOOTPRINT,
                facade: FacadeStyle::ALL[rng.gen_range(0..FacadeStyle::ALL.len())],
            });
        }
    }

    buildings
}

/// Evenly spaced silhouettes on a circle around the city.
fn skyline_ring(params: &LayoutParams, rng: &mut impl Rng) -> Vec<SkylineBuilding> {
    (0..params.skyline_count)
        .map(|k| {
            let angle = k as f32 / params.skyline_count as f32 * std::f32::consts::TAU;
            SkylineBuilding {
                position: Vec3::new(
                    angle.cos() * params.skyline_radius,
                    0.0,
                    angle.sin() * params.skyline_radius,
                ),
                height: SKYLINE_MIN_HEIGHT + rng.gen::<f32>() * SKYLINE_HEIGHT_RANGE,
                footprint: SKYLINE_MIN_FOOTPRINT + rng.gen::<f32>() * SKYLINE_FOOTPRINT_RANGE,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(extent: i32, skip: f64) -> LayoutParams {
        LayoutParams {
            extent,
            block_spacing: 5.0,
            skip_probability: skip,
            ..LayoutParams::default()
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_roadway_count_per_axis() {
        let layout = generate_layout(&params(3, 0.0), &mut rng());
        for axis in [StreetAxis::X, StreetAxis::Z] {
            let roadways = layout
                .streets
                .iter()
                .filter(|s| s.kind == StreetKind::Roadway && s.axis == axis)
                .count();
            assert_eq!(roadways, 7, "expected 2*3+1 roadways along {:?}", axis);
        }
    }

    #[test]
    fn test_each_roadway_has_marking_and_two_sidewalks() {
        let layout = generate_layout(&params(3, 0.0), &mut rng());
        let count = |kind| layout.streets.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(StreetKind::Roadway), 14);
        assert_eq!(count(StreetKind::LaneMarking), 14);
        assert_eq!(count(StreetKind::Sidewalk), 28);
    }

    #[test]
    fn test_street_length_spans_building_domain() {
        let layout = generate_layout(&params(3, 0.0), &mut rng());
        for street in &layout.streets {
            assert_eq!(street.length, 30.0);
        }
    }

    #[test]
    fn test_candidate_sites_are_odd_odd() {
        // skip_probability 0 keeps every candidate: odd coords in [-3,3]
        // are {-3,-1,1,3} per axis, 16 sites total.
        let layout = generate_layout(&params(3, 0.0), &mut rng());
        assert_eq!(layout.buildings.len(), 16);

        for building in &layout.buildings {
            let i = (building.position.x / 5.0).round() as i32;
            let j = (building.position.z / 5.0).round() as i32;
            assert_eq!(building.position.x, i as f32 * 5.0);
            assert_eq!(building.position.z, j as f32 * 5.0);
            assert!(i % 2 != 0 && j % 2 != 0, "site ({i},{j}) not odd-odd");
            assert_eq!(building.position.y, 0.0);
        }
    }

    #[test]
    fn test_building_heights_in_range() {
        let layout = generate_layout(&params(9, 0.0), &mut rng());
        for building in &layout.buildings {
            assert!(building.height >= BUILDING_MIN_HEIGHT);
            assert!(building.height < BUILDING_MIN_HEIGHT + BUILDING_HEIGHT_RANGE);
        }
    }

    #[test]
    fn test_skip_probability_one_empties_the_grid() {
        let layout = generate_layout(&params(5, 1.0), &mut rng());
        assert!(layout.buildings.is_empty());
        // Streets are unaffected by the skip rule.
        assert!(!layout.streets.is_empty());
    }

    #[test]
    fn test_non_positive_extent_yields_empty_grid() {
        for extent in [0, -4] {
            let layout = generate_layout(&params(extent, 0.0), &mut rng());
            assert!(layout.streets.is_empty());
            assert!(layout.buildings.is_empty());
            // Lamps and skyline are independent of the grid extent.
            assert_eq!(layout.lamps.len(), 1);
            assert!(!layout.skyline.is_empty());
        }
    }

    #[test]
    fn test_skyline_sits_on_its_circle() {
        let p = params(3, 0.0);
        let layout = generate_layout(&p, &mut rng());
        assert_eq!(layout.skyline.len(), p.skyline_count);
        for tower in &layout.skyline {
            let r = (tower.position.x * tower.position.x + tower.position.z * tower.position.z)
                .sqrt();
            assert!((r - p.skyline_radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_skyline_count_is_empty() {
        let p = LayoutParams {
            skyline_count: 0,
            ..params(3, 0.0)
        };
        let layout = generate_layout(&p, &mut rng());
        assert!(layout.skyline.is_empty());
    }

    #[test]
    fn test_lamp_positions_pass_through() {
        let p = LayoutParams {
            lamp_positions: vec![Vec3::ZERO, Vec3::new(5.0, 0.0, -5.0)],
            ..params(3, 0.0)
        };
        let layout = generate_layout(&p, &mut rng());
        assert_eq!(layout.lamps.len(), 2);
        assert_eq!(layout.lamps[1].position, Vec3::new(5.0, 0.0, -5.0));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let p = params(6, 0.3);
        let a = generate_layout(&p, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_layout(&p, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
