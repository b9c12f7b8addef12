use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::presets;
use crate::ui::{Action, Button, board_area_width};

/// Map a screen position to the cell under it.
/// `None` when the position falls outside a `width × height` board.
pub fn screen_to_cell(
    pos: (f32, f32),
    cell_size: f32,
    (width, height): (usize, usize),
) -> Option<(usize, usize)> {
    if pos.0 < 0.0 || pos.1 < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let x = (pos.0 / cell_size).floor() as usize;
    let y = (pos.1 / cell_size).floor() as usize;
    (x < width && y < height).then_some((x, y))
}

/// Left button toggles cells (one toggle per cell per press),
/// right click stamps a glider with its corner under the cursor
pub fn handle_mouse(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        state.release_pointer();
    }
    if mouse_pos.0 >= board_area_width() {
        return;
    }

    let dims = state.simulator.grid().dimensions();
    let Some((x, y)) = screen_to_cell(mouse_pos, state.config.cell_size, dims) else {
        return;
    };
    if is_mouse_button_down(MouseButton::Left) {
        state.toggle_at(x, y);
    } else if is_mouse_button_pressed(MouseButton::Right) {
        state.stamp_at(&presets::glider(), x, y);
    }
}

fn apply(state: GameState, action: Action) -> GameState {
    match action {
        Action::PlayPause => state.toggle_running(),
        Action::Step => state.step_once(),
        Action::Clear => state.clear(),
        Action::Randomize => state.randomize(),
        Action::Gun => state.seed_gun(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, |s| apply(s, Action::PlayPause)),
        (KeyCode::N, |s| apply(s, Action::Step)),
        (KeyCode::C, |s| apply(s, Action::Clear)),
        (KeyCode::R, |s| apply(s, Action::Randomize)),
        (KeyCode::G, |s| apply(s, Action::Gun)),
        (KeyCode::Up, |s| s.adjust_interval(-5)),
        (KeyCode::Down, |s| s.adjust_interval(5)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| apply(s, btn.action()))
}
