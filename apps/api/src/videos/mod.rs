// Video Lifecycle Manager: owns video create/update/delete and the list
// endpoints, cascades preview deletion, and invalidates cached search
// results when a video's tags change.

pub mod handlers;
pub mod schema;
pub mod service;
