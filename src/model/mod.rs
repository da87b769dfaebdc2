pub mod board;
pub mod cms;
pub mod load_state;
pub mod mode;
pub mod utils;

pub use board::*;
pub use cms::*;
pub use load_state::*;
pub use mode::*;
pub use utils::*;
