use crate::interop::{arr_i32, flatten_cells, new_obj, set_kv};
use crate::{error, Workbench};
use js_sys::Int32Array;
use railpix::{design_to_json, circle_to_json, Tangent, Vec2};
use serde::Serialize;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(v: &serde_json::Value) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl Workbench {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Workbench {
        crate::Workbench::rs_new()
    }

    /// Run a JSON track request; the design replaces the previous one.
    pub fn design_track(&mut self, request_json: &str) -> JsValue {
        let req = match railpix::request_from_json(request_json) {
            Ok(r) => r,
            Err(e) => return error::from_raster(&e),
        };
        match railpix::design_track(&req) {
            Ok(d) => {
                let doc = design_to_json(&d);
                self.design = Some(d);
                error::ok(to_js(&doc))
            }
            Err(e) => error::from_raster(&e),
        }
    }

    pub fn quarter_circle(&mut self, radius: i32) -> JsValue {
        match railpix::generate_quarter_circle(radius as i64) {
            Ok(q) => {
                let doc = circle_to_json(&q);
                self.circle = Some(q);
                error::ok(to_js(&doc))
            }
            Err(e) => error::from_raster(&e),
        }
    }

    /// Sorted cells of the last design as `[x0, y0, x1, y1, ...]`.
    pub fn cells(&self) -> Int32Array {
        let cells = self
            .design
            .as_ref()
            .map(|d| d.cells.sorted())
            .unwrap_or_default();
        arr_i32(&flatten_cells(&cells))
    }

    /// Sorted boundary of the last quarter circle as `[x0, y0, ...]`.
    pub fn circle_cells(&self) -> Int32Array {
        let cells = self
            .circle
            .as_ref()
            .map(|q| q.boundary.sorted())
            .unwrap_or_default();
        arr_i32(&flatten_cells(&cells))
    }

    pub fn cell_count(&self) -> u32 {
        self.rs_cell_count() as u32
    }

    pub fn export_text(&self) -> Option<String> {
        self.rs_export_text()
    }

    pub fn export_text_res(&self) -> JsValue {
        match self.rs_export_text() {
            Some(t) => error::ok(JsValue::from_str(&t)),
            None => error::no_design(),
        }
    }

    pub fn clear(&mut self) {
        self.design = None;
        self.circle = None;
    }
}

#[wasm_bindgen]
pub fn rasterize_line_res(x0: f64, y0: f64, x1: f64, y1: f64, samples_per_unit: f64) -> JsValue {
    for (name, v) in [("x0", x0), ("y0", y0), ("x1", x1), ("y1", y1)] {
        if !v.is_finite() {
            return error::non_finite(name);
        }
    }
    match railpix::rasterize_line(Vec2::new(x0, y0), Vec2::new(x1, y1), samples_per_unit) {
        Ok(p) => error::ok(arr_i32(&flatten_cells(p.cells())).into()),
        Err(e) => error::from_raster(&e),
    }
}

/// Band around a flat `[x0, y0, ...]` centerline; the centerline is made 4-connected first.
///
/// Coordinates beyond the coordinate limits give `out_of_range`.
#[wasm_bindgen]
pub fn expand_band_res(flat: &[i32], width: u32) -> JsValue {
    let cells: Vec<railpix::Cell> = flat
        .chunks_exact(2)
        .map(|c| railpix::Cell::new(c[0], c[1]))
        .collect();
    let path = match railpix::algorithms::connectivity::enforce_checked(&cells) {
        Ok(p) => p,
        Err(e) => return error::from_raster(&e),
    };
    match railpix::expand_band(&path, width) {
        Ok(set) => error::ok(arr_i32(&flatten_cells(&set.sorted())).into()),
        Err(e) => error::from_raster(&e),
    }
}

#[wasm_bindgen]
pub fn parse_tangent_res(text: &str) -> JsValue {
    match text.parse::<Tangent>() {
        Ok(t) => {
            let o = new_obj();
            let (vertical, slope) = match t {
                Tangent::Vertical => (true, JsValue::NULL),
                Tangent::Slope(k) => (false, JsValue::from_f64(k)),
            };
            set_kv(&o, "vertical", &JsValue::from_bool(vertical));
            set_kv(&o, "slope", &slope);
            error::ok(o.into())
        }
        Err(e) => error::from_raster(&e),
    }
}
