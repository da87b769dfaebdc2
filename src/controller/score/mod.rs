pub mod http_handlers;
pub mod request;

pub use http_handlers::*;
pub use request::*;
