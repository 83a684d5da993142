use std::cmp::Reverse;

use log::{info, warn};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::monitor::VideoModeHandle;
use winit::window::{Fullscreen, Window, WindowAttributes};

use crate::config::DisplayConfig;
use crate::error::DisplayError;

pub const CAPTION: &str = "Digital Life";

/// The kind of surface the window is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRequest {
    Windowed { width: u32, height: u32 },
    ExclusiveFullscreen { width: u32, height: u32 },
}

impl From<&DisplayConfig> for SurfaceRequest {
    fn from(config: &DisplayConfig) -> Self {
        let (width, height) = config.size();
        if config.fullscreen {
            SurfaceRequest::ExclusiveFullscreen { width, height }
        } else {
            SurfaceRequest::Windowed { width, height }
        }
    }
}

impl SurfaceRequest {
    pub fn size(&self) -> (u32, u32) {
        match *self {
            SurfaceRequest::Windowed { width, height }
            | SurfaceRequest::ExclusiveFullscreen { width, height } => (width, height),
        }
    }

    /// Builds the window attributes, negotiating a video mode for fullscreen.
    pub fn window_attributes(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<WindowAttributes, DisplayError> {
        let attrs = Window::default_attributes().with_title(CAPTION);

        match *self {
            SurfaceRequest::Windowed { width, height } => Ok(attrs
                .with_inner_size(PhysicalSize::new(width, height))
                .with_resizable(false)),
            SurfaceRequest::ExclusiveFullscreen { width, height } => {
                let monitor = event_loop
                    .primary_monitor()
                    .or_else(|| event_loop.available_monitors().next())
                    .ok_or(DisplayError::NoMonitor)?;

                let mut handles: Vec<VideoModeHandle> = monitor.video_modes().collect();
                let modes: Vec<ModeInfo> = handles.iter().map(ModeInfo::from).collect();
                let index = select_video_mode(width, height, &modes)
                    .ok_or(DisplayError::NoVideoMode { width, height })?;

                let chosen = modes[index];
                if (chosen.width, chosen.height) != (width, height) {
                    warn!(
                        "No {}x{} video mode, using nearest {}x{}",
                        width, height, chosen.width, chosen.height
                    );
                }
                info!(
                    "Exclusive fullscreen {}x{} @ {}mHz, {}bpp",
                    chosen.width, chosen.height, chosen.refresh_rate_millihertz, chosen.bit_depth
                );

                let handle = handles.swap_remove(index);
                Ok(attrs.with_fullscreen(Some(Fullscreen::Exclusive(handle))))
            }
        }
    }
}

/// Plain description of a monitor video mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u16,
    pub refresh_rate_millihertz: u32,
}

impl From<&VideoModeHandle> for ModeInfo {
    fn from(mode: &VideoModeHandle) -> Self {
        let size = mode.size();
        ModeInfo {
            width: size.width,
            height: size.height,
            bit_depth: mode.bit_depth(),
            refresh_rate_millihertz: mode.refresh_rate_millihertz(),
        }
    }
}

/// Picks the mode closest to `width`x`height`.
///
/// Distance is the sum of absolute dimension differences, so an exact match
/// always wins. Ties go to the higher refresh rate, then the deeper colour.
pub fn select_video_mode(width: u32, height: u32, modes: &[ModeInfo]) -> Option<usize> {
    modes
        .iter()
        .enumerate()
        .min_by_key(|(_, m)| {
            let distance = u64::from(m.width.abs_diff(width)) + u64::from(m.height.abs_diff(height));
            (distance, Reverse(m.refresh_rate_millihertz), Reverse(m.bit_depth))
        })
        .map(|(index, _)| index)
}
