// Search Result Cache: opaque JSON blobs keyed by video. Entries are only
// ever inserted, read whole, or hard-deleted; invalidation belongs to the
// Video Lifecycle Manager.

pub mod handlers;
pub mod service;
