// Moderation queue: the item model and the client seam.
//
// The scanner only ever sees these types. Where the items come from (the
// Reddit API in production, an in-memory queue in tests) is behind the
// `ModQueueClient` trait.

pub mod models;
pub mod traits;
