//! Window bootstrap for Digital Life: load the display config, open a window,
//! and clear it to black every frame until the user quits.

pub mod config;
pub mod context;
pub mod display_loop;
pub mod error;
pub mod input;
pub mod render;
pub mod surface;

pub use config::{
    config_path, install_root, installed_config_path, DisplayConfig, CONFIG_RELATIVE_PATH,
};
pub use context::EngineContext;
pub use display_loop::{DisplayLoop, EventSource, Exit, Step};
pub use error::{ConfigError, DisplayError, EngineError};
pub use input::{InputEvent, QuitReason, QUIT_KEY};
pub use render::{Canvas, Presented, Rgb};
pub use surface::{SurfaceRequest, CAPTION};
