//! Platform glue: viewport measurement and fire-and-forget futures.

use std::future::Future;

/// Browser `window.innerWidth`. Native builds have no window to ask up front
/// and rely on the page root reporting its size once mounted.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// Width used for breakpoints after a resize of the page root. The window
/// width wins over the root's box, which excludes the vertical scrollbar.
pub fn measured_width(viewport: Option<f64>, border_box: f64) -> f64 {
    viewport.filter(|w| w.is_finite()).unwrap_or(border_box)
}

/// Run a future on the current UI runtime.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn(future);
}
