use std::sync::atomic::{AtomicBool, Ordering};

use tauri::{PhysicalPosition, PhysicalSize, WebviewWindow};
use tracing::warn;

use crate::application::use_cases::surface::SurfaceWindow;
use crate::domain::error::{AppError, Result};

pub const MAIN_WINDOW: &str = "main";

const WIDTH_RATIO: f64 = 0.40;
const HEIGHT_RATIO: f64 = 0.15;
const MIN_HEIGHT: f64 = 200.0;
const MARGIN: f64 = 20.0;

/// Panel rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Bottom-right placement inside a monitor work area (the screen minus
/// taskbars and docks) whose origin is `origin` and whose physical size is
/// `size`.
pub fn panel_geometry(origin: (i32, i32), size: (u32, u32), scale: f64) -> PanelGeometry {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    let width = (size.0 as f64 * WIDTH_RATIO).round();
    let height = (size.1 as f64 * HEIGHT_RATIO).max(MIN_HEIGHT * scale).round();
    let margin = (MARGIN * scale).round();

    PanelGeometry {
        x: origin.0 + (size.0 as f64 - width - margin) as i32,
        y: origin.1 + (size.1 as f64 - height - margin) as i32,
        width: width as u32,
        height: height as u32,
    }
}

pub struct TauriSurface {
    window: WebviewWindow,
    placed: AtomicBool,
}

impl TauriSurface {
    pub fn new(window: WebviewWindow) -> Self {
        Self {
            window,
            placed: AtomicBool::new(false),
        }
    }

    fn place(&self) -> Result<()> {
        let Some(monitor) = self.window.current_monitor().map_err(window_error)? else {
            warn!("No monitor reported, keeping configured window position");
            return Ok(());
        };
        let work_area = monitor.work_area();
        let geometry = panel_geometry(
            (work_area.position.x, work_area.position.y),
            (work_area.size.width, work_area.size.height),
            monitor.scale_factor(),
        );

        self.window
            .set_size(PhysicalSize::new(geometry.width, geometry.height))
            .map_err(window_error)?;
        self.window
            .set_position(PhysicalPosition::new(geometry.x, geometry.y))
            .map_err(window_error)
    }
}

impl SurfaceWindow for TauriSurface {
    fn show(&self) -> Result<()> {
        if !self.placed.swap(true, Ordering::SeqCst) {
            if let Err(err) = self.place() {
                warn!(error = %err, "Failed to place panel");
            }
        }
        self.window.show().map_err(window_error)?;
        self.window.set_focus().map_err(window_error)
    }

    fn hide(&self) -> Result<()> {
        self.window.hide().map_err(window_error)
    }

    fn inspector_attached(&self) -> bool {
        #[cfg(any(debug_assertions, feature = "devtools"))]
        {
            self.window.is_devtools_open()
        }
        #[cfg(not(any(debug_assertions, feature = "devtools")))]
        {
            false
        }
    }
}

fn window_error(err: tauri::Error) -> AppError {
    AppError::Internal(format!("Window error: {}", err))
}
