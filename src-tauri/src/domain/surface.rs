use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSource {
    Hotkey,
    Tray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// Escape pressed in the panel.
    Escape,
    FocusLost,
}

/// Everything that can change the panel's visibility or its hotkey binding.
/// Events are consumed in order by a single control task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Toggle(ToggleSource),
    Hide(HideReason),
    /// The app was reactivated (dock click) while no surface was visible.
    Reopen,
    RebindHotkey(String),
    Shutdown,
}
