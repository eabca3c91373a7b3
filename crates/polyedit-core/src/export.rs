//! Exporting the polygon as text.

use crate::polygon::PolygonPath;

/// Acknowledgment shown after a successful export.
pub const EXPORT_ACK: &str = "Polygon points copied to clipboard!";

/// Serialize the path as a flat JSON number array: `[x0, y0, ..., xn, yn]`.
///
/// Coordinates are the logical ones the path stores, not screen coordinates.
pub fn to_json(path: &PolygonPath) -> Result<String, serde_json::Error> {
    serde_json::to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_exports_empty_array() {
        assert_eq!(to_json(&PolygonPath::new()).unwrap(), "[]");
    }

    #[test]
    fn test_export_is_flat_and_ordered() {
        let path = PolygonPath::from_flat(&[
            100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0, 100.0, 100.0,
        ])
        .unwrap();
        let json = to_json(&path).unwrap();
        let parsed: Vec<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path.to_flat());
        assert!(json.starts_with("[100.0,100.0,200.0"));
    }

    #[test]
    fn test_fractional_coordinates_survive() {
        let path = PolygonPath::from_flat(&[0.1, 0.2, 1e-7, 12345.678]).unwrap();
        let parsed: Vec<f64> = serde_json::from_str(&to_json(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec![0.1, 0.2, 1e-7, 12345.678]);
    }
}
