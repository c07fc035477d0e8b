// Preview Consistency Engine: every preview mutation goes through this
// module, which keeps the owning video's `preview_count` and
// `active_thumbnail_url` in step with the preview rows and guarantees at
// most one active preview per video.

pub mod handlers;
pub mod sanitize;
pub mod schema;
pub mod service;
