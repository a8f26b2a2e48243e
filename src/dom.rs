use crate::input::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "app-canvas";

#[inline]
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w, h)
}

/// Reuse `#app-canvas` when the page provides one, otherwise create a canvas
/// and append it to `<body>`.
pub fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ID, e)));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("create canvas: {:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("append canvas: {:?}", e)))?;
    log::info!("[dom] created #{}", CANVAS_ID);
    Ok(canvas)
}

/// Size the canvas once to the viewport. There is no resize handling.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w, h) = viewport.pixel_size();
    canvas.set_width(w.max(1));
    canvas.set_height(h.max(1));
    _ = canvas.set_attribute(
        "style",
        &format!("display:block;width:{}px;height:{}px", w, h),
    );
}
