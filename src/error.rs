use js_sys::Object;
use railpix::RasterError;
use wasm_bindgen::JsValue;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let message = message.into();
    web_sys::console::warn_1(&JsValue::from_str(&format!("railpix: {}: {}", code, message)));
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Numeric details carried in `error.data`, as `(key, value)` pairs.
pub fn details(e: &RasterError) -> Vec<(&'static str, f64)> {
    match e {
        RasterError::InvalidRadius { radius, max } => {
            vec![("radius", *radius as f64), ("max", *max as f64)]
        }
        RasterError::OutOfRange { min, max, got, .. } => {
            vec![("min", *min), ("max", *max), ("got", *got)]
        }
        RasterError::TooManySamples { requested, max } => {
            vec![("requested", *requested as f64), ("max", *max as f64)]
        }
        RasterError::InvalidWidth { width, max } => {
            vec![("width", *width as f64), ("max", *max as f64)]
        }
        RasterError::MalformedCoordinates { line, .. } => vec![("line", *line as f64)],
        _ => Vec::new(),
    }
}

fn param_of(e: &RasterError) -> Option<&'static str> {
    match e {
        RasterError::NonFinite(p) => Some(*p),
        RasterError::OutOfRange { param, .. } => Some(*param),
        _ => None,
    }
}

pub fn from_raster(e: &RasterError) -> JsValue {
    let fields = details(e);
    let param = param_of(e);
    let data = if fields.is_empty() && param.is_none() {
        None
    } else {
        let d: Object = new_obj();
        if let Some(p) = param {
            set_kv(&d, "param", &JsValue::from_str(p));
        }
        for (k, v) in fields {
            set_kv(&d, k, &JsValue::from_f64(v));
        }
        Some(d.into())
    };
    err(e.code(), e.to_string(), data)
}

#[inline]
pub fn non_finite(param: &'static str) -> JsValue {
    from_raster(&RasterError::NonFinite(param))
}

#[inline]
pub fn no_design() -> JsValue {
    err("no_design", "no track has been designed in this workbench", None)
}
