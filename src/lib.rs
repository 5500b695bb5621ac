pub mod anim;
pub mod cli;
pub mod config;
pub mod controls;
pub mod error;
pub mod frame;
pub mod gasket;
pub mod headless;
pub mod math;
pub mod renderer;
pub mod session;
pub mod traits;
pub mod types;

pub use error::{GasketError, Result};
pub use session::{ControlEvent, Session};
