use std::time::Duration;

use leptos::prelude::*;

use scrollable_list::list::ScrollableList;

use crate::feed::{next_page, FeedError, FeedItem};

/// Simulated network latency of a page load.
const LOAD_DELAY: Duration = Duration::from_millis(400);

/// Folds a finished page load into the caller-owned feed state.
pub fn apply_page_result(
    mut load_result: Result<Vec<FeedItem>, FeedError>,
    item_vec: RwSignal<Vec<FeedItem>>,
    load_error: RwSignal<Option<FeedError>>,
    has_more: RwSignal<bool>,
) {
    match load_result {
        Ok(ref mut page) => match page.is_empty() {
            true => has_more.set(false),
            false => item_vec.update(|item_vec| item_vec.append(page)),
        },
        Err(e) => load_error.set(Some(e)),
    }
}

/// Message feed loading additional pages as the list approaches its end
#[component]
pub fn App() -> impl IntoView {
    let item_vec = RwSignal::new(next_page(0, 0).unwrap_or_default());
    let is_loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<FeedError>);
    let load_attempt = RwSignal::new(0u32);
    let has_more = RwSignal::new(true);

    let load_next_page = move || {
        if !has_more.get_untracked() {
            return;
        }
        is_loading.set(true);
        load_error.set(None);
        let attempt = load_attempt.get_untracked() + 1;
        load_attempt.set(attempt);
        set_timeout(
            move || {
                let offset = item_vec.with_untracked(|item_vec| item_vec.len());
                log::debug!("Load feed page at offset {offset}, attempt {attempt}");
                apply_page_result(next_page(offset, attempt), item_vec, load_error, has_more);
                is_loading.set(false);
            },
            LOAD_DELAY,
        );
    };

    view! {
        <ScrollableList
            items=item_vec
            render_item=|item: &FeedItem, index: usize| view! { <Message item=item.clone() index/> }
            on_end_reached=Callback::new(move |_| load_next_page())
            loading=Signal::from(is_loading)
            container_class_names="feed"
        />
        <Show when=move || load_error.read().is_some()>
        {
            let error = load_error.get_untracked().unwrap();
            view! {
                <div class="feed-error">{error.to_string()}</div>
            }
        }
        </Show>
        <Show when=move || !has_more.get()>
            <p class="feed-end">"No more messages."</p>
        </Show>
    }
}

/// One feed entry
#[component]
fn Message(item: FeedItem, index: usize) -> impl IntoView {
    view! {
        <div class="feed-message">
            <span class="feed-message-index">{index}</span>
            <p class="feed-message-body">{item.body}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    use crate::app::apply_page_result;
    use crate::feed::{FeedError, FeedItem};

    fn item(id: usize) -> FeedItem {
        FeedItem {
            id,
            body: format!("Message #{id}"),
        }
    }

    #[test]
    fn test_apply_page_result_appends_pages() {
        let owner = Owner::new();
        owner.set();
        let item_vec = RwSignal::new(Vec::new());
        let load_error = RwSignal::new(None);
        let has_more = RwSignal::new(true);

        apply_page_result(Ok(vec![item(0), item(1)]), item_vec, load_error, has_more);
        assert_eq!(item_vec.read().as_slice(), &[item(0), item(1)]);
        assert_eq!(load_error.read(), None);
        assert!(has_more.get());

        apply_page_result(Ok(vec![item(2)]), item_vec, load_error, has_more);
        assert_eq!(item_vec.read().as_slice(), &[item(0), item(1), item(2)]);
    }

    #[test]
    fn test_apply_page_result_empty_page_ends_feed() {
        let owner = Owner::new();
        owner.set();
        let item_vec = RwSignal::new(vec![item(0)]);
        let load_error = RwSignal::new(None);
        let has_more = RwSignal::new(true);

        apply_page_result(Ok(Vec::new()), item_vec, load_error, has_more);
        assert_eq!(item_vec.read().as_slice(), &[item(0)]);
        assert_eq!(load_error.read(), None);
        assert!(!has_more.get());
    }

    #[test]
    fn test_apply_page_result_records_error() {
        let owner = Owner::new();
        owner.set();
        let item_vec = RwSignal::new(vec![item(0)]);
        let load_error = RwSignal::new(None);
        let has_more = RwSignal::new(true);

        apply_page_result(Err(FeedError::Unreachable), item_vec, load_error, has_more);
        assert_eq!(item_vec.read().as_slice(), &[item(0)]);
        assert_eq!(load_error.read(), Some(FeedError::Unreachable));
        assert!(has_more.get());
    }
}
