/// Half-width of the street grid in block units. Streets run at every
/// integer offset in [-GRID_EXTENT, GRID_EXTENT].
pub const GRID_EXTENT: i32 = 10;

/// World-space distance between adjacent street centerlines.
pub const BLOCK_SPACING: f32 = 5.0;

/// Probability that a candidate building site stays empty.
pub const BUILDING_SKIP_PROBABILITY: f64 = 0.3;

pub const BUILDING_FOOTPRINT: f32 = 3.0;
pub const BUILDING_MIN_HEIGHT: f32 = 4.0;
pub const BUILDING_HEIGHT_RANGE: f32 = 5.0;

/// Radius of the decorative skyline ring. Far enough out that the ring
/// reads as a horizon silhouette from anywhere on the grid.
pub const SKYLINE_RADIUS: f32 = 120.0;
pub const SKYLINE_COUNT: usize = 60;
pub const SKYLINE_MIN_HEIGHT: f32 = 18.0;
pub const SKYLINE_HEIGHT_RANGE: f32 = 34.0;
pub const SKYLINE_MIN_FOOTPRINT: f32 = 6.0;
pub const SKYLINE_FOOTPRINT_RANGE: f32 = 6.0;

pub const GROUND_SIZE: f32 = 200.0;

pub const AVATAR_SPEED: f32 = 5.0;
pub const AVATAR_SPAWN_HEIGHT: f32 = 0.5;

pub const VEHICLE_COUNT: usize = 14;
pub const PEDESTRIAN_COUNT: usize = 24;

/// Traffic agents live on a ring along their travel axis: crossing
/// AGENT_DOMAIN_MAX teleports an agent back to AGENT_DOMAIN_MIN.
pub const AGENT_DOMAIN_MIN: f32 = -100.0;
pub const AGENT_DOMAIN_MAX: f32 = 100.0;

pub const VEHICLE_SPEED_MIN: f32 = 2.0;
pub const VEHICLE_SPEED_MAX: f32 = 4.0;
pub const PEDESTRIAN_SPEED_MIN: f32 = 1.0;
pub const PEDESTRIAN_SPEED_MAX: f32 = 2.0;

/// Half-width of the band agents spawn in on their non-travel axis.
pub const AGENT_CROSS_BAND: f32 = 40.0;

pub const VEHICLE_RIDE_HEIGHT: f32 = 0.25;
pub const PEDESTRIAN_RIDE_HEIGHT: f32 = 0.45;

pub const MIN_ZOOM: f32 = 4.0;
pub const MAX_ZOOM: f32 = 20.0;
pub const DEFAULT_ZOOM: f32 = 8.0;

/// Wheel delta (pixel scale, scroll-down positive) to zoom-distance factor.
pub const ZOOM_WHEEL_FACTOR: f32 = 0.01;

pub const CHASE_HEIGHT: f32 = 5.0;
pub const CHASE_DISTANCE: f32 = 8.0;
pub const FIRST_PERSON_EYE_OFFSET: f32 = 0.4;

/// Exponential camera smoothing speed (higher = snappier). 6.0 gives
/// roughly a 10% step per frame at 60 FPS.
pub const CAMERA_SMOOTHING_SPEED: f32 = 6.0;
