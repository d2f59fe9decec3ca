use super::load_error::LoadError;
use crate::geo::LonLat;
use crate::warn;

/// Raw flights document: `{ "flights": [ [ [lat, lon], [lat, lon] ], ... ] }`.
///
/// Entries are kept as raw JSON so a single malformed route does not fail the
/// whole document.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct FlightsDocument {
    flights: Vec<serde_json::Value>,
}

impl FlightsDocument {
    /// Parses a flights document from a raw JSON body.
    ///
    /// # Errors
    /// Returns `LoadError::Parse` if the body is not a JSON object with a `flights` array.
    pub fn from_slice(body: &[u8]) -> Result<Self, LoadError> { Ok(serde_json::from_slice(body)?) }

    pub fn len(&self) -> usize { self.flights.len() }

    pub fn is_empty(&self) -> bool { self.flights.is_empty() }

    /// Converts all well-formed entries into routes.
    ///
    /// Malformed entries (missing or non-numeric coordinates, values out of
    /// range) are skipped and logged. Route ids are the entry's index in the
    /// document, so skipped entries leave gaps.
    pub fn into_routes(self) -> Vec<Route> {
        let total = self.flights.len();
        let routes: Vec<Route> = self
            .flights
            .into_iter()
            .enumerate()
            .filter_map(|(id, entry)| match Route::from_entry(id, entry) {
                Some(route) => Some(route),
                None => {
                    warn!("Skipping malformed flight entry #{id}");
                    None
                }
            })
            .collect();
        if routes.len() < total {
            warn!("Dropped {} of {total} flight entries", total - routes.len());
        }
        routes
    }
}

/// A single origin/destination pair in longitude/latitude order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    id: usize,
    origin: LonLat,
    destination: LonLat,
}

impl Route {
    pub fn new(id: usize, origin: LonLat, destination: LonLat) -> Self {
        Self { id, origin, destination }
    }

    /// Builds a route from one `[[lat, lon], [lat, lon]]` entry.
    fn from_entry(id: usize, entry: serde_json::Value) -> Option<Self> {
        let [from, to] = serde_json::from_value::<[[f64; 2]; 2]>(entry).ok()?;
        Some(Self::new(id, LonLat::from_lat_lon(from)?, LonLat::from_lat_lon(to)?))
    }

    pub fn id(&self) -> usize { self.id }
    pub fn origin(&self) -> LonLat { self.origin }
    pub fn destination(&self) -> LonLat { self.destination }
}
