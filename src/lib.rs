pub mod args;
pub mod error;
pub mod logging;
pub mod model;
pub mod controller {
    pub mod board_cache;
    pub mod cms;
    pub mod refresh;
    pub mod score;
    pub mod standings;
}
pub mod view {
    pub mod index;
    pub mod score;
}
pub mod tv;

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use controller::board_cache::BoardRegistry;
pub use error::BoardError;
