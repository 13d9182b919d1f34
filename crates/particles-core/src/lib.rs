pub mod breeze;
pub mod color;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod random;
pub mod trail;
pub mod viewport;

pub use breeze::Breeze;
pub use color::*;
pub use cursor::Cursor;
pub use error::ParamsError;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use random::*;
pub use trail::*;
pub use viewport::Viewport;
