//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod ping;
pub mod redirect;
pub mod shorten;
pub mod status;

pub use delete::delete_handler;
pub use ping::ping_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use status::status_handler;
