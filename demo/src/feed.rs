use thiserror::Error;

pub const PAGE_SIZE: usize = 25;
pub const FEED_LENGTH: usize = 400;
/// Every nth load attempt fails, so the retry path stays visible in the demo.
const FLAKY_ATTEMPT_INTERVAL: u32 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub id: usize,
    pub body: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("The feed is unreachable, scroll to retry.")]
    Unreachable,
}

/// Simulated page fetch: returns the next [`PAGE_SIZE`] items starting at
/// `offset`, an empty page once the feed is exhausted, and a transient error
/// on every flaky attempt.
pub fn next_page(offset: usize, attempt: u32) -> Result<Vec<FeedItem>, FeedError> {
    if attempt > 0 && attempt % FLAKY_ATTEMPT_INTERVAL == 0 {
        return Err(FeedError::Unreachable);
    }
    let end = usize::min(offset + PAGE_SIZE, FEED_LENGTH);
    Ok((offset..end)
        .map(|id| FeedItem {
            id,
            body: format!("Message #{id}"),
        })
        .collect())
}
