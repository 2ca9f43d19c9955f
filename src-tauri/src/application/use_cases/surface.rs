use crate::domain::error::Result;
use crate::domain::surface::{HideReason, SurfaceEvent, ToggleSource, Visibility};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The single application window, as seen by the controller.
pub trait SurfaceWindow: Send {
    /// Shows and focuses the window without reloading its content.
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    /// True while a devtools inspector is attached to the window.
    fn inspector_attached(&self) -> bool;
}

/// OS-level global hotkey registration.
pub trait HotkeyRegistrar: Send {
    fn register(&mut self, accelerator: &str) -> Result<()>;
    fn unregister(&mut self, accelerator: &str) -> Result<()>;
    fn unregister_all(&mut self) -> Result<()>;
}

/// Tells whether an accelerator string names a bindable key combination.
pub trait AcceleratorCheck: Send + Sync {
    fn check(&self, accelerator: &str) -> Result<()>;
}

/// Sending half of the control channel. Every visibility trigger goes through
/// here so transitions are applied one at a time, in arrival order.
#[derive(Clone)]
pub struct SurfaceHandle {
    tx: mpsc::UnboundedSender<SurfaceEvent>,
}

impl SurfaceHandle {
    pub fn send(&self, event: SurfaceEvent) {
        if let Err(err) = self.tx.send(event) {
            warn!(event = ?err.0, "Surface controller is gone, dropping event");
        }
    }
}

pub fn surface_channel() -> (SurfaceHandle, mpsc::UnboundedReceiver<SurfaceEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SurfaceHandle { tx }, rx)
}

/// Clicking the tray icon takes focus from a visible panel before the click
/// itself is delivered. A tray toggle this soon after a focus-loss hide
/// belongs to that same click.
const TRAY_CLICK_GRACE: Duration = Duration::from_millis(200);

/// Owns the panel's visibility and its global hotkey.
pub struct SurfaceController<W, H> {
    window: W,
    hotkeys: H,
    visibility: Visibility,
    binding: Option<String>,
    focus_lost_at: Option<Instant>,
}

impl<W: SurfaceWindow, H: HotkeyRegistrar> SurfaceController<W, H> {
    pub fn new(window: W, hotkeys: H) -> Self {
        Self {
            window,
            hotkeys,
            visibility: Visibility::Hidden,
            binding: None,
            focus_lost_at: None,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }

    /// Binds `accelerator`, releasing the previous binding first. Binding the
    /// accelerator that is already active is a no-op.
    pub fn bind_hotkey(&mut self, accelerator: &str) -> Result<()> {
        let accelerator = accelerator.trim();
        if self.binding.as_deref() == Some(accelerator) {
            return Ok(());
        }

        if let Some(previous) = self.binding.take() {
            if let Err(err) = self.hotkeys.unregister(&previous) {
                warn!(error = %err, shortcut = %previous, "Failed to release hotkey, clearing all bindings");
                self.hotkeys.unregister_all()?;
            }
        }

        self.hotkeys.register(accelerator)?;
        self.binding = Some(accelerator.to_string());
        info!(shortcut = %accelerator, "Global hotkey bound");
        Ok(())
    }

    /// Applies one event. Returns `false` once the controller has shut down.
    pub fn handle(&mut self, event: SurfaceEvent) -> bool {
        debug!(?event, visibility = ?self.visibility, "Surface event");
        match event {
            SurfaceEvent::Toggle(source) => self.toggle(source),
            SurfaceEvent::Hide(reason) => self.hide(reason),
            SurfaceEvent::Reopen => self.show(),
            SurfaceEvent::RebindHotkey(accelerator) => {
                if let Err(err) = self.bind_hotkey(&accelerator) {
                    error!(error = %err, shortcut = %accelerator, "Failed to bind hotkey");
                }
            }
            SurfaceEvent::Shutdown => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Releases every hotkey binding.
    pub fn shutdown(&mut self) {
        if let Err(err) = self.hotkeys.unregister_all() {
            error!(error = %err, "Failed to release hotkeys on shutdown");
        }
        self.binding = None;
    }

    /// Consumes events until the channel closes or a shutdown arrives.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<SurfaceEvent>) {
        while let Some(event) = events.recv().await {
            if !self.handle(event) {
                return;
            }
        }
        self.shutdown();
    }

    fn toggle(&mut self, source: ToggleSource) {
        let focus_lost_at = self.focus_lost_at.take();
        if source == ToggleSource::Tray
            && self.visibility == Visibility::Hidden
            && focus_lost_at.is_some_and(|at| at.elapsed() < TRAY_CLICK_GRACE)
        {
            debug!("Tray click closed the panel through focus loss");
            return;
        }
        debug!(?source, "Toggling surface");
        self.apply(self.visibility.flipped());
    }

    fn show(&mut self) {
        self.focus_lost_at = None;
        if self.visibility == Visibility::Hidden {
            self.apply(Visibility::Visible);
        }
    }

    fn hide(&mut self, reason: HideReason) {
        if self.visibility == Visibility::Hidden {
            return;
        }
        if reason == HideReason::FocusLost && self.window.inspector_attached() {
            debug!("Inspector attached, keeping surface visible");
            return;
        }
        self.apply(Visibility::Hidden);
        if reason == HideReason::FocusLost && self.visibility == Visibility::Hidden {
            self.focus_lost_at = Some(Instant::now());
        }
    }

    fn apply(&mut self, target: Visibility) {
        let result = match target {
            Visibility::Visible => self.window.show(),
            Visibility::Hidden => self.window.hide(),
        };
        match result {
            Ok(()) => self.visibility = target,
            Err(err) => error!(error = %err, ?target, "Failed to change surface visibility"),
        }
    }
}
