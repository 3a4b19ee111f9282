use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use web_sys::Element;

/// Fixed buffer added on top of the caller threshold so the callback fires
/// shortly before the content bottom is actually hit.
pub const END_REACHED_BUFFER: i32 = 10;

/// Default distance (in pixels) from the end of the scrollable content at
/// which the end-reached callback is triggered.
pub const DEFAULT_END_REACHED_THRESHOLD: i32 = 10;

/// Scroll geometry of the viewport at the time a scroll event fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_top: i32,
    pub scroll_height: i32,
    pub client_height: i32,
}

/// Reads the current scroll geometry of the element behind `node_ref`.
///
/// Returns `None` while the node is not mounted.
pub fn scroll_metrics<NR>(node_ref: NodeRef<NR>) -> Option<ScrollMetrics>
where
    NR: ElementType,
    NR::Output: Clone + AsRef<Element> + JsCast + 'static,
{
    node_ref.get_untracked().and_then(|node_ref| {
        node_ref.dyn_ref::<Element>().map(|element| ScrollMetrics {
            scroll_top: element.scroll_top(),
            scroll_height: element.scroll_height(),
            client_height: element.client_height(),
        })
    })
}

/// Whether the remaining scrollable distance is within the effective trigger
/// distance, i.e. `end_reached_threshold` plus [`END_REACHED_BUFFER`].
pub fn has_reached_end(metrics: ScrollMetrics, end_reached_threshold: i32) -> bool {
    metrics.scroll_height - metrics.scroll_top
        <= metrics.client_height + end_reached_threshold + END_REACHED_BUFFER
}
