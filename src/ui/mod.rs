mod button;

pub use button::{Action, Button};

use macroquad::prelude::{Rect, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 50.0;
const BUTTONS_TOP: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn board_area_height() -> f32 {
    screen_height()
}

/// Y coordinate where the info labels start, below the buttons
pub fn info_top() -> f32 {
    BUTTONS_TOP + Action::ALL.len() as f32 * BUTTON_SPACING + 20.0
}

/// Create one button per action, stacked at the top of the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    Action::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = BUTTONS_TOP + i as f32 * BUTTON_SPACING;
            Button::new(Rect::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT), action)
        })
        .collect()
}
