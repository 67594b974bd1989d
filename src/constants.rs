/// Page wiring and simulation tuning constants.
///
/// These constants express intended behavior (e.g., radii, weights, timings)
/// and keep magic numbers out of the simulation code.
// Resize broadcast is debounced so a drag-resize recomputes geometry once
pub const RESIZE_DEBOUNCE_MS: i32 = 100;

// A slide counts as visible once this fraction of it intersects the viewport
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

// Slides that carry a companion simulation next to their particles
pub const FALLING_ICONS_SLIDE: &str = "slide-5";
pub const FLOCK_SLIDE: &str = "slide-24";
// Only this slide runs its stat counters
pub const STATS_SLIDE: &str = "slide-stats";

// DOM selectors and CSS classes
pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOT_SELECTOR: &str = ".dot";
pub const HEADLINE_SELECTOR: &str = ".mega-text";
pub const TICK_TEXT_SELECTOR: &str = ".tick-text";
pub const SLOT_NUMBER_SELECTOR: &str = ".slot-number";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const PARTICLE_OVERRIDE_ATTR: &str = "data-particles";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_DOT_CLASS: &str = "active";
pub const YELLOW_SLIDE_CLASS: &str = "slide-yellow";
pub const ON_YELLOW_BODY_CLASS: &str = "on-yellow";

// Particles
pub const PARTICLE_RESPAWN_MARGIN: f32 = 20.0; // gravity/rise slots recycle past this
pub const DRIFT_REENTRY_X: f32 = -10.0;
pub const COORD_LABEL_CHANCE: f32 = 0.15;
pub const PARTICLE_MAX_COUNT: usize = 500; // upper bound for data-particles count

// Flocking
pub const FLOCK_SIZE: usize = 200;
pub const FLOCK_MAX_SPEED: f32 = 8.0;
pub const FLOCK_PERCEPTION: f32 = 60.0;
pub const FLOCK_SEPARATION_RADIUS: f32 = 22.0;
pub const FLOCK_ALIGNMENT_WEIGHT: f32 = 0.06;
pub const FLOCK_COHESION_WEIGHT: f32 = 0.003;
pub const FLOCK_SEPARATION_WEIGHT: f32 = 1.0;
pub const FLOCK_POINTER_RADIUS: f32 = 500.0;
pub const FLOCK_POINTER_WEIGHT: f32 = 0.5;
pub const FLOCK_WRAP_MARGIN: f32 = 20.0;

// Falling icons
pub const ICON_SPAWN_INTERVAL_MS: f64 = 50.0;
pub const ICON_MAX_LIVE: usize = 100;
// Spawns owed after a late frame are caught up to this many intervals; a longer
// stall (background tab) restarts the cadence
pub const ICON_MAX_CATCH_UP: usize = 10;
pub const ICON_SPAWN_Y: f32 = -20.0;
pub const ICON_EXIT_MARGIN: f32 = 30.0;
pub const TEXT_ZONE_MARGIN_X: f32 = 20.0;
pub const TEXT_ZONE_MARGIN_TOP: f32 = 10.0;

// Text effects (milliseconds)
pub const TICK_SCRAMBLE_MS: f64 = 2000.0;
pub const TICK_PAUSE_MS: f64 = 3000.0;
pub const SLOT_SPIN_MS: f64 = 1500.0;
pub const SLOT_PAUSE_MS: f64 = 2500.0;
pub const SLOT_MIN_INTERVAL_MS: f64 = 50.0;
pub const SLOT_MAX_INTERVAL_MS: f64 = 150.0;
pub const SLOT_UPDATE_WINDOW_MS: f64 = 20.0;
pub const STAT_COUNT_MS: f64 = 1500.0;
