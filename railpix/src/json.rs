use crate::algorithms::circle::QuarterCircle;
use crate::error::RasterError;
use crate::geometry::tangent::Tangent;
use crate::model::{Cell, SegmentMode, Vec2};
use crate::track::{TrackDesign, TrackRequest};
use serde::Serialize;
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn request_from_json(s: &str) -> Result<TrackRequest, RasterError> {
    request_from_value(serde_json::from_str(s)?)
}

/// Tangent tokens are checked before the structural pass so a bad token
/// surfaces as `MalformedTangent` rather than as a JSON error.
pub fn request_from_value(v: Value) -> Result<TrackRequest, RasterError> {
    check_tangent_token(v.get("start_tangent"))?;
    check_tangent_token(v.get("end_tangent"))?;
    check_tangent_token(v.get("via").and_then(|via| via.get("tangent")))?;
    Ok(serde_json::from_value(v)?)
}

// Numbers are always finite in JSON; other shapes are left to serde.
fn check_tangent_token(v: Option<&Value>) -> Result<(), RasterError> {
    match v {
        Some(Value::String(s)) => s.parse::<Tangent>().map(|_| ()),
        _ => Ok(()),
    }
}

fn xy(c: &Cell) -> [i32; 2] {
    [c.x, c.y]
}

fn fxy(p: &Vec2) -> [f64; 2] {
    [p.x, p.y]
}

pub fn design_to_json(d: &TrackDesign) -> Value {
    #[derive(Serialize)]
    struct SegmentSer {
        mode: SegmentMode,
        path: Vec<[i32; 2]>,
        samples: Vec<[f64; 2]>,
        controls: Option<Vec<[f64; 2]>>,
    }
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        elevation: i32,
        bounds: Option<[i32; 4]>, // min_x, min_y, max_x, max_y
        cells: Vec<[i32; 2]>,
        segments: Vec<SegmentSer>,
    }
    let segments = d
        .segments
        .iter()
        .map(|s| SegmentSer {
            mode: s.mode,
            path: s.path.iter().map(xy).collect(),
            samples: s.samples.iter().map(fxy).collect(),
            controls: s.controls.map(|c| c.iter().map(fxy).collect()),
        })
        .collect();
    let doc = Doc {
        version: DOC_VERSION,
        elevation: d.elevation,
        bounds: d.cells.bounds().map(|(a, b, c, e)| [a, b, c, e]),
        cells: d.cells.sorted().iter().map(xy).collect(),
        segments,
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn circle_to_json(q: &QuarterCircle) -> Value {
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        radius: u32,
        octant: Vec<[i32; 2]>,
        runs: Vec<u32>,
        segments: Vec<u32>,
        boundary: Vec<[i32; 2]>,
        summary: String,
    }
    let doc = Doc {
        version: DOC_VERSION,
        radius: q.radius,
        octant: q.octant.iter().map(xy).collect(),
        runs: q.runs.clone(),
        segments: q.segments.clone(),
        boundary: q.boundary.sorted().iter().map(xy).collect(),
        summary: q.summary(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::circle::quarter_circle;
    use crate::track::design_track;
    use serde_json::json;

    #[test]
    fn request_defaults_fill_in() {
        let req = request_from_json(r#"{"start":{"x":0,"y":0},"end":{"x":10,"y":5}}"#).unwrap();
        assert_eq!(req.width, 1);
        assert_eq!(req.curvature, 3.0);
        assert_eq!(req.mode, SegmentMode::Bezier);
        assert_eq!(req.start_tangent, Tangent::Slope(0.0));
        assert!(req.via.is_none());
    }

    #[test]
    fn request_with_via_and_vertical() {
        let req = request_from_value(json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 40.0, "y": 0.0},
            "start_tangent": "inf",
            "end_tangent": -0.5,
            "mode": "bezier",
            "width": 3,
            "via": {"at": {"x": 20.0, "y": 12.0}}
        }))
        .unwrap();
        assert_eq!(req.start_tangent, Tangent::Vertical);
        assert_eq!(req.end_tangent, Tangent::Slope(-0.5));
        assert_eq!(req.via.unwrap().tangent, None);
    }

    #[test]
    fn malformed_tangent_keeps_its_kind() {
        let err = request_from_value(json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 1.0, "y": 0.0},
            "start_tangent": "steep"
        }))
        .unwrap_err();
        assert_eq!(err, RasterError::MalformedTangent("steep".into()));
        assert_eq!(err.code(), "malformed_tangent");

        let err = request_from_json(
            r#"{"start":{"x":0,"y":0},"end":{"x":4,"y":0},"end_tangent":"north"}"#,
        )
        .unwrap_err();
        assert_eq!(err, RasterError::MalformedTangent("north".into()));

        let err = request_from_value(json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 4.0, "y": 0.0},
            "via": {"at": {"x": 2.0, "y": 1.0}, "tangent": "up"}
        }))
        .unwrap_err();
        assert_eq!(err.code(), "malformed_tangent");
    }

    #[test]
    fn non_token_tangent_shapes_stay_json_errors() {
        let err = request_from_value(json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 1.0, "y": 0.0},
            "start_tangent": [1, 2]
        }))
        .unwrap_err();
        assert_eq!(err.code(), "invalid_json");
    }

    #[test]
    fn design_doc_shape() {
        let req = request_from_value(json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 3.0, "y": 0.0},
            "mode": "line",
            "elevation": 5
        }))
        .unwrap();
        let v = design_to_json(&design_track(&req).unwrap());
        assert_eq!(v["version"], 1);
        assert_eq!(v["elevation"], 5);
        assert_eq!(v["cells"], json!([[0, 0], [1, 0], [2, 0], [3, 0]]));
        assert_eq!(v["bounds"], json!([0, 0, 3, 0]));
        assert_eq!(v["segments"][0]["mode"], "line");
        assert!(v["segments"][0]["controls"].is_null());
    }

    #[test]
    fn circle_doc_shape() {
        let v = circle_to_json(&quarter_circle(5).unwrap());
        assert_eq!(v["radius"], 5);
        assert_eq!(v["runs"], json!([3, 1]));
        assert_eq!(v["segments"], json!([3, 1, 1, 3]));
        assert_eq!(v["octant"][3], json!([4, 3]));
        assert_eq!(v["summary"], "4 segments: 3 1 1 3");
    }
}
