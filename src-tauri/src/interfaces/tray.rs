use tauri::{
    menu::{Menu, MenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle,
};
use tracing::info;

use crate::application::use_cases::surface::SurfaceHandle;
use crate::domain::locale::UiLocale;
use crate::domain::surface::{SurfaceEvent, ToggleSource};

const TRAY_TOOLTIP: &str = "AI QuickTray";
const MENU_TOGGLE: &str = "toggle";
const MENU_QUIT: &str = "quit";

pub fn setup_tray(
    app: &AppHandle,
    surface: SurfaceHandle,
    locale: UiLocale,
) -> Result<(), Box<dyn std::error::Error>> {
    let toggle_item = MenuItem::with_id(app, MENU_TOGGLE, locale.tray_toggle(), true, None::<&str>)?;
    let quit_item = MenuItem::with_id(app, MENU_QUIT, locale.tray_quit(), true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&toggle_item, &quit_item])?;

    let mut builder = TrayIconBuilder::new()
        .tooltip(TRAY_TOOLTIP)
        .menu(&menu)
        .show_menu_on_left_click(false);
    if let Some(icon) = app.default_window_icon() {
        builder = builder.icon(icon.clone());
    }

    let menu_surface = surface.clone();
    builder
        .on_menu_event(move |app, event| match event.id.as_ref() {
            MENU_TOGGLE => menu_surface.send(SurfaceEvent::Toggle(ToggleSource::Tray)),
            MENU_QUIT => {
                info!("Quit requested from tray");
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(move |_tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                surface.send(SurfaceEvent::Toggle(ToggleSource::Tray));
            }
        })
        .build(app)?;

    Ok(())
}
