use super::{
    FileRouteSource, FlightsDocument, HttpRouteSource, LoadError, Route, RouteGeometry,
    RouteSource, load_route_geometries,
};
use crate::geo::{GreatCircle, LonLat};
use async_trait::async_trait;
use std::path::PathBuf;

const SAMPLE: &str = r#"{
    "flights": [
        [[0, 0], [0, 90]],
        [[35.68, 139.69], [37.77, -122.42]],
        [[10, 20]],
        [[10, 20], ["x", 3]],
        [[95, 0], [0, 0]],
        [[0, 0], [0, 180]]
    ]
}"#;

struct InMemorySource(&'static str);

#[async_trait]
impl RouteSource for InMemorySource {
    fn describe(&self) -> String { "memory".to_string() }

    async fn load_document(&self) -> Result<FlightsDocument, LoadError> {
        FlightsDocument::from_slice(self.0.as_bytes())
    }
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("flight_animator_{}_{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_malformed_entries_are_skipped() {
    let doc = FlightsDocument::from_slice(SAMPLE.as_bytes()).unwrap();
    assert_eq!(doc.len(), 6);
    let routes = doc.into_routes();
    let ids: Vec<usize> = routes.iter().map(Route::id).collect();
    assert_eq!(ids, vec![0, 1, 5]);
}

#[test]
fn test_lat_lon_pairs_are_swapped() {
    let routes = FlightsDocument::from_slice(SAMPLE.as_bytes()).unwrap().into_routes();
    assert_eq!(routes[0].origin(), LonLat::new(0.0, 0.0));
    assert_eq!(routes[0].destination(), LonLat::new(90.0, 0.0));
    assert_eq!(routes[1].origin(), LonLat::new(139.69, 35.68));
}

#[test]
fn test_document_without_flights_fails() {
    let res = FlightsDocument::from_slice(br#"{"routes": []}"#);
    assert!(matches!(res, Err(LoadError::Parse(_))));
    let res = FlightsDocument::from_slice(b"not json");
    assert!(matches!(res, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn test_geometry_pipeline_skips_unusable_routes() {
    let geometries = load_route_geometries(&InMemorySource(SAMPLE), &GreatCircle::default())
        .await
        .unwrap();
    // Route 5 is antipodal and is dropped
    assert_eq!(geometries.len(), 2);
    assert_eq!(geometries[0].pieces().len(), 1);
    assert_eq!(geometries[0].pieces()[0].len(), 101);
    assert_eq!(geometries[1].pieces().len(), 2);
    assert!(RouteGeometry::for_route(*geometries[1].route(), &GreatCircle::new(4)).is_some());
}

#[tokio::test]
async fn test_file_source_reads_document() {
    let path = temp_file("ok.json", SAMPLE);
    let routes = FileRouteSource::new(&path).load_routes().await.unwrap();
    assert_eq!(routes.len(), 3);
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn test_file_source_errors() {
    let missing = FileRouteSource::new("/definitely/not/here/flights.json");
    let err = missing.load_routes().await.unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    // The underlying cause is kept in the message
    let message = err.to_string();
    assert!(message.starts_with("Io: ") && message.len() > "Io: ".len());
    assert!(std::error::Error::source(&err).is_some());

    let path = temp_file("broken.json", "{\"flights\": [");
    let broken = FileRouteSource::new(&path);
    let err = broken.load_routes().await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert!(err.to_string().starts_with("Parse: EOF while parsing"));
    assert_eq!(LoadError::BadStatus(404).to_string(), "BadStatus(404)");
    assert_eq!(LoadError::Timeout.to_string(), "Timeout");
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn test_http_source_without_server() {
    let source = HttpRouteSource::new("http://127.0.0.1:1/flights.json").unwrap();
    assert_eq!(source.describe(), "http://127.0.0.1:1/flights.json");
    assert!(matches!(
        source.load_routes().await,
        Err(LoadError::NoConnection | LoadError::Timeout)
    ));
}
