pub mod constant;
pub mod pda;
pub mod utils;

pub use constant::*;
pub use pda::*;
pub use utils::*;
