use js_sys::{Int32Array, Object, Reflect};
use railpix::Cell;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object {
    Object::new()
}

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

pub fn arr_i32(slice: &[i32]) -> Int32Array {
    let arr = Int32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice);
    arr
}

/// `[x0, y0, x1, y1, ...]` in the given order.
pub fn flatten_cells(cells: &[Cell]) -> Vec<i32> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    for c in cells {
        out.push(c.x);
        out.push(c.y);
    }
    out
}
