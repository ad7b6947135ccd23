//! Menu layout demo application
//!
//! Builds a small font registry and a main-menu rect sheet, then logs how
//! the UI layer would describe each element. No window is opened; the demo
//! exercises the canvas_kit surface end to end.

use canvas_kit::fonts::{FontCache, StaticFontRegistry};
use canvas_kit::ui::RectSheet;

/// Main-menu layout: a full-screen backdrop, a banner title, and a column
/// of buttons offset from the parent's center.
const MENU_SHEET: &str = r#"{
    "backdrop": (
        size_delta: [0.0, 0.0],
        anchored_position: [0.0, 0.0],
        anchor_min: [0.0, 0.0],
        anchor_max: [1.0, 1.0],
    ),
    "title": (
        size_delta: [-1820.0, 120.0],
        anchored_position: [0.0, 380.0],
        anchor_min: [0.0, 0.0],
        anchor_max: [1.0, 1.0],
    ),
    "play_button": (
        size_delta: [320.0, 64.0],
        anchored_position: [0.0, 40.0],
    ),
    "quit_button": (
        size_delta: [320.0, 64.0],
        anchored_position: [0.0, -40.0],
    ),
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    log::info!("Registering menu fonts...");
    let mut registry = StaticFontRegistry::new();
    registry.insert("TrajanPro-Bold");
    registry.insert("TrajanPro-Regular");
    registry.insert("Perpetua");

    let mut fonts = FontCache::new();
    let bold = fonts.preferred_bold(&registry);
    let regular = fonts.preferred_regular(&registry);
    log::info!("Preferred faces: bold={:?}, regular={:?}", bold, regular);

    match fonts.get(&registry, "Perpetua") {
        Some(handle) => log::info!("Body face resolved: {:?}", handle),
        None => log::warn!("Body face missing, falling back to regular"),
    }

    let sheet = RectSheet::from_ron_str(MENU_SHEET)?;
    log::info!("Menu sheet loaded with {} elements", sheet.len());
    for name in sheet.names() {
        let rect = sheet.get(name).expect("name came from the sheet");
        log::info!(
            "  {}: size_delta=({}, {}) anchors=({}, {})..({}, {}) pivot=({}, {})",
            name,
            rect.size_delta.x,
            rect.size_delta.y,
            rect.anchor_min.x,
            rect.anchor_min.y,
            rect.anchor_max.x,
            rect.anchor_max.y,
            rect.pivot.x,
            rect.pivot.y,
        );
    }

    Ok(())
}
