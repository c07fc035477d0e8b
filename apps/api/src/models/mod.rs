pub mod preview;
pub mod search_result;
pub mod user;
pub mod video;
