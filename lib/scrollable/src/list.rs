use leptos::html;
use leptos::prelude::*;

use crate::indicator::LoadingIndicator;
use crate::node_utils::{has_reached_end, scroll_metrics, DEFAULT_END_REACHED_THRESHOLD};
use crate::styles::StyleMap;

/// Scrollable viewport that renders `items` through `render_item` and runs
/// `on_end_reached` whenever a scroll event lands within the trigger distance
/// of the content bottom while `loading` is false.
///
/// The component holds no state of its own: deduplicating the callback across
/// consecutive qualifying scroll events is the caller's job, by flipping
/// `loading` (or its own equivalent gate) before the next event arrives.
#[component]
pub fn ScrollableList<T, V, F>(
    /// Items to render, in rendering order. The list is re-rendered in full
    /// whenever the signal changes.
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Renders one item; called once per item per render, in ascending index
    /// order. Each returned view is wrapped in its own `<div>`.
    render_item: F,
    /// Called when the end of the list is reached or near. Absent means the
    /// end-reached detection is a no-op.
    #[prop(optional, into)]
    on_end_reached: Option<Callback<()>>,
    /// The threshold (in pixels) from the end of the scrollable content at
    /// which `on_end_reached` is triggered. Defaults to 10.
    #[prop(default = DEFAULT_END_REACHED_THRESHOLD)]
    end_reached_threshold: i32,
    /// While true, `on_end_reached` is suppressed and the loading element is
    /// displayed after the viewport.
    #[prop(optional, into)]
    loading: Option<Signal<bool>>,
    /// Replacement for the default loading indicator.
    #[prop(into, default = Box::new(|| view! { <LoadingIndicator/> }.into_any()).into())]
    loading_element: ViewFn,
    /// Class attribute applied verbatim to the viewport element.
    #[prop(optional, into)]
    container_class_names: String,
    /// Style overrides, shallow-merged over [`StyleMap::container_defaults`].
    #[prop(optional, into)]
    container_styles: StyleMap,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoView + 'static,
    F: Fn(&T, usize) -> V + Send + Sync + 'static,
{
    let loading = loading.unwrap_or_else(|| Signal::stored(false));
    let render_item = StoredValue::new(render_item);
    let container_ref = NodeRef::<html::Div>::new();
    let container_styles = StyleMap::container_defaults().shallow_merge(container_styles);

    view! {
        <div
            class=container_class_names
            style=container_styles.to_attribute()
            on:scroll=move |_| match scroll_metrics(container_ref) {
                Some(metrics) => {
                    if has_reached_end(metrics, end_reached_threshold) && !loading.get_untracked() {
                        if let Some(on_end_reached) = on_end_reached {
                            on_end_reached.run(());
                        }
                    }
                }
                None => log::error!("Scrollable list container 'div' node failed to load."),
            }
            node_ref=container_ref
        >
        { move || items.with(|items| items
            .iter()
            .enumerate()
            .map(|(index, item)| view! {
                <div>
                { render_item.with_value(|render_item| render_item(item, index)) }
                </div>
            })
            .collect_view())
        }
        </div>
        <Show when=move || loading.get()>
            { loading_element.run() }
        </Show>
    }
}
