use std::fmt::Display;

/// A geographic coordinate in degrees, stored in longitude/latitude order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    lon: f64,
    lat: f64,
}

impl LonLat {
    /// Creates a coordinate from longitude and latitude in degrees.
    pub const fn new(lon: f64, lat: f64) -> Self { Self { lon, lat } }

    /// Builds a coordinate from a `[lat, lon]` pair as delivered by the flights resource.
    ///
    /// # Returns
    /// `None` if a component is not finite or outside the valid degree range.
    pub fn from_lat_lon(pair: [f64; 2]) -> Option<Self> {
        let coord = Self::new(pair[1], pair[0]);
        coord.is_valid().then_some(coord)
    }

    pub const fn lon(&self) -> f64 { self.lon }
    pub const fn lat(&self) -> f64 { self.lat }

    /// Checks for finite values within `[-180, 180]` x `[-90, 90]`.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Converts into a unit vector on the sphere.
    pub(super) fn to_unit(self) -> [f64; 3] {
        let (lon, lat) = (self.lon.to_radians(), self.lat.to_radians());
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Converts a (not necessarily normalized) cartesian vector back into degrees.
    pub(super) fn from_unit(v: [f64; 3]) -> Self {
        let lon = v[1].atan2(v[0]).to_degrees();
        let lat = v[2].atan2(v[0].hypot(v[1])).to_degrees();
        Self::new(lon, lat)
    }
}

impl Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}°, {:.4}°)", self.lon, self.lat)
    }
}
