use crate::interop::obj;
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    obj(&[("ok", JsValue::from_bool(true)), ("value", v)])
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let message = message.into();
    // Every API error also goes to the console so failed operations leave a
    // trace without the host wiring anything up.
    web_sys::console::warn_1(&JsValue::from_str(&format!("pitchline: {}: {}", code, message)));
    let mut fields = vec![
        ("code", JsValue::from_str(code)),
        ("message", JsValue::from_str(&message)),
    ];
    if let Some(d) = data {
        fields.push(("data", d));
    }
    obj(&[
        ("ok", JsValue::from_bool(false)),
        ("error", obj(&fields)),
    ])
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = obj(&[("param", JsValue::from_str(param))]);
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = obj(&[
        ("param", JsValue::from_str(param)),
        ("min", JsValue::from_f64(min as f64)),
        ("max", JsValue::from_f64(max as f64)),
        ("got", JsValue::from_f64(got as f64)),
    ]);
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = obj(&[
        ("kind", JsValue::from_str(kind)),
        ("id", JsValue::from_f64(id as f64)),
    ]);
    err("invalid_id", format!("invalid {} id", kind), Some(d))
}

#[inline]
pub fn capacity(max: usize) -> JsValue {
    let d = obj(&[("max", JsValue::from_f64(max as f64))]);
    err("capacity", format!("point capacity ({}) reached", max), Some(d))
}

#[inline]
pub fn marker_failed(message: impl Into<String>) -> JsValue {
    err("marker_failed", message, None)
}
