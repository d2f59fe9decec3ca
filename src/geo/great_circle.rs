use super::coord::LonLat;
use strum_macros::Display;

/// Geometry collaborator producing the arc between two geographic coordinates.
///
/// An arc is returned as one or more ordered point lists; consecutive lists
/// are the pieces of a single arc that had to be split at the antimeridian.
pub trait ArcGenerator: Send + Sync {
    /// Computes the arc from `from` to `to`.
    ///
    /// # Errors
    /// Returns a `GeometryError` if no unique arc exists between the two coordinates.
    fn arc(&self, from: LonLat, to: LonLat) -> Result<Vec<Vec<LonLat>>, GeometryError>;
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum GeometryError {
    /// Endpoints are antipodal, every great circle through them is a candidate.
    Antipodal,
    /// An endpoint lies outside the valid degree range.
    InvalidCoordinate,
}

impl std::error::Error for GeometryError {}

/// Great-circle arc generator interpolating on the unit sphere.
#[derive(Debug, Clone, Copy)]
pub struct GreatCircle {
    segments: usize,
}

impl GreatCircle {
    /// Default number of segments per arc, yielding 101 points for an unsplit arc.
    pub const DEFAULT_SEGMENTS: usize = 100;
    /// Below this central angle (radians) both endpoints are treated as identical.
    const COINCIDENT_EPS: f64 = 1e-12;
    /// Distance to pi (radians) below which endpoints are treated as antipodal.
    const ANTIPODAL_EPS: f64 = 1e-9;

    /// Creates a generator with the given number of segments (at least one).
    pub fn new(segments: usize) -> Self { Self { segments: segments.max(1) } }

    /// Interpolates `segments + 1` points between the endpoints, inclusive.
    fn interpolate(&self, from: LonLat, to: LonLat) -> Result<Vec<LonLat>, GeometryError> {
        let a = from.to_unit();
        let b = to.to_unit();
        let cross = [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        let sin_omega = (cross[0].powi(2) + cross[1].powi(2) + cross[2].powi(2)).sqrt();
        let cos_omega = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
        let omega = sin_omega.atan2(cos_omega);

        if omega < Self::COINCIDENT_EPS {
            return Ok(vec![from; self.segments + 1]);
        }
        if std::f64::consts::PI - omega < Self::ANTIPODAL_EPS {
            return Err(GeometryError::Antipodal);
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.segments as f64;
        let points = (0..=self.segments)
            .map(|i| {
                if i == 0 {
                    return from;
                }
                if i == self.segments {
                    return to;
                }
                #[allow(clippy::cast_precision_loss)]
                let f = i as f64 / n;
                let k_a = ((1.0 - f) * omega).sin() / sin_omega;
                let k_b = (f * omega).sin() / sin_omega;
                LonLat::from_unit([
                    k_a * a[0] + k_b * b[0],
                    k_a * a[1] + k_b * b[1],
                    k_a * a[2] + k_b * b[2],
                ])
            })
            .collect();
        Ok(points)
    }

    /// Splits a point list wherever consecutive longitudes jump across the antimeridian.
    ///
    /// The crossing latitude is interpolated on the unwrapped longitude and
    /// inserted at `±180` into both adjacent pieces. When an endpoint lies on
    /// the antimeridian itself, the split leaves a piece of identical points;
    /// such pieces are dropped.
    pub fn split_antimeridian(points: Vec<LonLat>) -> Vec<Vec<LonLat>> {
        let mut pieces = Vec::new();
        let mut current: Vec<LonLat> = Vec::with_capacity(points.len());
        for p in points {
            if let Some(prev) = current.last().copied() {
                let d_lon = p.lon() - prev.lon();
                if d_lon.abs() > 180.0 {
                    let boundary = if prev.lon() >= 0.0 { 180.0 } else { -180.0 };
                    let unwrapped = if d_lon > 0.0 { p.lon() - 360.0 } else { p.lon() + 360.0 };
                    let span = unwrapped - prev.lon();
                    let t = if span == 0.0 { 0.0 } else { (boundary - prev.lon()) / span };
                    let lat = prev.lat() + t * (p.lat() - prev.lat());
                    current.push(LonLat::new(boundary, lat));
                    pieces.push(std::mem::take(&mut current));
                    current.push(LonLat::new(-boundary, lat));
                }
            }
            current.push(p);
        }
        if !current.is_empty() {
            pieces.push(current);
        }
        if pieces.len() > 1 {
            pieces.retain(|piece| piece.iter().any(|p| *p != piece[0]));
        }
        pieces
    }
}

impl Default for GreatCircle {
    fn default() -> Self { Self::new(Self::DEFAULT_SEGMENTS) }
}

impl ArcGenerator for GreatCircle {
    fn arc(&self, from: LonLat, to: LonLat) -> Result<Vec<Vec<LonLat>>, GeometryError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(GeometryError::InvalidCoordinate);
        }
        Ok(Self::split_antimeridian(self.interpolate(from, to)?))
    }
}
