pub mod player_table;
pub mod summary;
pub mod template;

pub use player_table::*;
pub use summary::*;
pub use template::*;
