// Reddit API client: OAuth login, moderation queue listing, approve/remove.
//
// `client` owns the HTTP session and implements `ModQueueClient`. `listing`
// holds the serde types for Reddit's listing JSON and converts them into
// queue items.

pub mod client;
pub mod listing;
pub mod rate_limiter;
