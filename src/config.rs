use crate::animation::FlightAnimator;
use crate::geo::{GreatCircle, Vec2D};
use std::{env, path::PathBuf, str::FromStr, time::Duration};

/// Where the flights document is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOrigin {
    Url(String),
    File(PathBuf),
}

/// Runtime configuration, read once from the environment.
///
/// Unset or unparsable variables fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimConfig {
    pub origin: RouteOrigin,
    /// Points drawn per millisecond.
    pub rate: f64,
    /// Delay between the releases of consecutive routes.
    pub stagger: Duration,
    pub frame_interval: Duration,
    pub arc_segments: usize,
    /// Hard stop for the headless session.
    pub max_session: Duration,
    /// View center in map units.
    pub view_center: Vec2D<f64>,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    /// Directory for PNG snapshots, none are written if unset.
    pub out_dir: Option<PathBuf>,
    pub snapshot_every: u64,
    pub dark_map: bool,
    pub markers: bool,
}

impl AnimConfig {
    pub const DEFAULT_FILE: &'static str = "data/flights.json";
    pub const DEFAULT_CENTER: (f64, f64) = (5_244_191.0, 2_069_874.0);

    /// Reads the configuration from `FLIGHTS_*` environment variables.
    pub fn from_env() -> Self { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let origin = match lookup("FLIGHTS_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => RouteOrigin::Url(url),
            None => RouteOrigin::File(
                lookup("FLIGHTS_FILE").map_or_else(|| PathBuf::from(Self::DEFAULT_FILE), PathBuf::from),
            ),
        };
        let rate = parsed(&lookup, "FLIGHTS_RATE")
            .filter(|r: &f64| r.is_finite() && *r > 0.0)
            .unwrap_or(FlightAnimator::DEFAULT_RATE);
        Self {
            origin,
            rate,
            stagger: Duration::from_millis(parsed(&lookup, "FLIGHTS_STAGGER_MS").unwrap_or(0)),
            frame_interval: Duration::from_millis(parsed::<u64>(&lookup, "FLIGHTS_FRAME_MS").unwrap_or(16).max(1)),
            arc_segments: parsed(&lookup, "FLIGHTS_ARC_SEGMENTS").unwrap_or(GreatCircle::DEFAULT_SEGMENTS),
            max_session: Duration::from_secs(parsed(&lookup, "FLIGHTS_MAX_SESSION_S").unwrap_or(120)),
            view_center: Vec2D::new(
                parsed(&lookup, "FLIGHTS_VIEW_X").unwrap_or(Self::DEFAULT_CENTER.0),
                parsed(&lookup, "FLIGHTS_VIEW_Y").unwrap_or(Self::DEFAULT_CENTER.1),
            ),
            zoom: parsed(&lookup, "FLIGHTS_ZOOM").unwrap_or(2.0),
            width: parsed(&lookup, "FLIGHTS_WIDTH").unwrap_or(1024),
            height: parsed(&lookup, "FLIGHTS_HEIGHT").unwrap_or(512),
            out_dir: lookup("FLIGHTS_OUT_DIR").filter(|d| !d.is_empty()).map(PathBuf::from),
            snapshot_every: parsed::<u64>(&lookup, "FLIGHTS_SNAPSHOT_EVERY").unwrap_or(60).max(1),
            dark_map: lookup("FLIGHTS_DARK_MAP").is_some(),
            markers: lookup("FLIGHTS_MARKERS").is_some(),
        }
    }
}

impl Default for AnimConfig {
    fn default() -> Self { Self::from_lookup(|_| None) }
}

/// Looks up `key` and parses its trimmed value.
fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}
