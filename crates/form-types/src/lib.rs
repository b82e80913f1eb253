pub mod config;
pub mod container;
pub mod error;
pub mod lookup;
pub mod path;
pub mod state;

pub use config::*;
pub use container::*;
pub use error::*;
pub use lookup::*;
pub use path::*;
pub use state::*;
