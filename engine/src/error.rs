use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading `config/display.yml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read display config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse display config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to locate the running executable")]
    CurrentExe(#[source] io::Error),

    #[error("executable at {} is not inside an install root (<root>/bin/<exe>)", exe.display())]
    InstallRoot { exe: PathBuf },
}

impl ConfigError {
    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Failures of the window / graphics subsystem.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("event loop error")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("no monitor available for exclusive fullscreen")]
    NoMonitor,

    #[error("monitor reports no video mode usable for {width}x{height}")]
    NoVideoMode { width: u32, height: u32 },

    #[error("failed to create surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open graphics device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("failed to acquire frame")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("event loop ended before a quit was requested")]
    LoopEndedWithoutQuit,
}

/// Everything that can stop the engine before a clean quit.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
