pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod glyph;
pub mod morph;
pub mod ornament;
pub mod sculpture;
pub mod shapes;
pub mod signal;
pub mod state;
pub mod tracking;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use glyph::*;
pub use morph::*;
pub use ornament::*;
pub use sculpture::*;
pub use shapes::*;
pub use signal::*;
pub use state::*;
pub use tracking::*;
