// Auth adapter around the core: Google ID-token verification, internal JWT
// issuance, and the extractor that supplies the acting user id to handlers.
// The core trusts the extracted id and never re-verifies identity.

pub mod extract;
pub mod google;
pub mod handlers;
pub mod jwt;
