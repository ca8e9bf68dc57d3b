//! WASM bindings for the tagcloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Results are returned as JSON strings; failures are reported both in the
//! `error` field and on the browser console.

use wasm_bindgen::prelude::*;

use crate::geometry::{Point, Size};
use crate::layout::{CloudLayouter, LayoutConfig};
use crate::output::{CloudOutput, ErrorInfo, PlacementOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        console_error(&format!("Error serializing output: {}", e));
        "{\"error\": {\"message\": \"Serialization error\", \"index\": null}}".to_string()
    })
}

/// Lay out a list of sizes (`[{"width": 40, "height": 12}, ...]`) around
/// (`cx`, `cy`). `config_json` may be empty to use the defaults.
#[wasm_bindgen]
pub fn layout_cloud_json(sizes_json: &str, config_json: &str, cx: i32, cy: i32) -> String {
    let output = build_cloud_output(sizes_json, config_json, Point { x: cx, y: cy });
    if let Some(err) = &output.error {
        console_error(&format!("Error laying out cloud: {}", err.message));
    }
    to_json(&output)
}

fn build_cloud_output(sizes_json: &str, config_json: &str, center: Point) -> CloudOutput {
    let failed = |message: String, index: Option<usize>| CloudOutput {
        center,
        rectangles: vec![],
        bounds: None,
        error: Some(ErrorInfo { message, index }),
    };

    let sizes: Vec<Size> = match serde_json::from_str(sizes_json) {
        Ok(sizes) => sizes,
        Err(e) => return failed(format!("Invalid sizes: {}", e), None),
    };
    let config: LayoutConfig = if config_json.trim().is_empty() {
        LayoutConfig::default()
    } else {
        match serde_json::from_str(config_json) {
            Ok(config) => config,
            Err(e) => return failed(format!("Invalid config: {}", e), None),
        }
    };
    let mut layouter = match CloudLayouter::with_config(center, config) {
        Ok(layouter) => layouter,
        Err(e) => return failed(e.to_string(), None),
    };

    // Keep whatever was placed before a failure so the consumer can still draw it.
    let mut error = None;
    for (index, &size) in sizes.iter().enumerate() {
        if let Err(e) = layouter.put_next_rectangle(size) {
            error = Some(ErrorInfo { message: e.to_string(), index: Some(index) });
            break;
        }
    }

    CloudOutput {
        center,
        rectangles: layouter.rectangles().to_vec(),
        bounds: layouter.bounds(),
        error,
    }
}

/// Incremental layouter for JavaScript callers that size tags one by one.
#[wasm_bindgen]
pub struct TagCloud {
    layouter: CloudLayouter,
}

#[wasm_bindgen]
impl TagCloud {
    #[wasm_bindgen(constructor)]
    pub fn new(cx: i32, cy: i32) -> TagCloud {
        TagCloud { layouter: CloudLayouter::new(Point { x: cx, y: cy }) }
    }

    /// Place the next tag; returns `{"rectangle": ...}` or `{"error": ...}`.
    pub fn put_next(&mut self, width: i32, height: i32) -> String {
        let output = place_next(&mut self.layouter, Size { width, height });
        if let Some(err) = &output.error {
            console_error(&format!("Error placing rectangle: {}", err.message));
        }
        to_json(&output)
    }

    pub fn rectangles(&self) -> String {
        to_json(&self.layouter.rectangles())
    }

    pub fn len(&self) -> usize {
        self.layouter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouter.is_empty()
    }
}

fn place_next(layouter: &mut CloudLayouter, size: Size) -> PlacementOutput {
    match layouter.put_next_rectangle(size) {
        Ok(rect) => PlacementOutput { rectangle: Some(rect), error: None },
        Err(e) => PlacementOutput {
            rectangle: None,
            error: Some(ErrorInfo { message: e.to_string(), index: Some(layouter.len()) }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn test_build_cloud_output() {
        let sizes = r#"[{"width": 2, "height": 2}, {"width": 6, "height": 3}, {"width": 4, "height": 4}]"#;
        let out = build_cloud_output(sizes, "", Point { x: 0, y: 0 });
        assert!(out.error.is_none());
        assert_eq!(out.rectangles.len(), 3);
        assert_eq!(
            out.rectangles[0],
            Rectangle::new(Point { x: -1, y: -1 }, Size { width: 2, height: 2 })
        );
        assert!(out.bounds.is_some());
    }

    #[test]
    fn test_bad_size_reports_index_and_keeps_prefix() {
        let sizes = r#"[{"width": 2, "height": 2}, {"width": 0, "height": 2}, {"width": 2, "height": 2}]"#;
        let out = build_cloud_output(sizes, "{}", Point { x: 5, y: 5 });
        let err = out.error.unwrap();
        assert_eq!(err.index, Some(1));
        assert_eq!(out.rectangles.len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        let out = build_cloud_output("not json", "", Point { x: 0, y: 0 });
        assert_eq!(out.error.unwrap().index, None);

        let out = build_cloud_output("[]", "{\"spiral_step\": -1.0}", Point { x: 0, y: 0 });
        assert!(out.error.unwrap().message.contains("spiral_step"));
    }

    #[test]
    fn test_output_json_shape() {
        let out = build_cloud_output(r#"[{"width": 2, "height": 2}]"#, "", Point { x: 0, y: 0 });
        let value: serde_json::Value = serde_json::from_str(&serde_json::to_string(&out).unwrap()).unwrap();
        assert_eq!(value["rectangles"][0]["location"]["x"], -1);
        assert_eq!(value["rectangles"][0]["size"]["width"], 2);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_place_next() {
        let mut layouter = CloudLayouter::new(Point { x: 0, y: 0 });
        let ok = place_next(&mut layouter, Size { width: 4, height: 4 });
        assert!(ok.rectangle.is_some());

        let bad = place_next(&mut layouter, Size { width: -4, height: 4 });
        assert!(bad.rectangle.is_none());
        assert_eq!(bad.error.unwrap().index, Some(1));
        assert_eq!(layouter.len(), 1);
    }
}
