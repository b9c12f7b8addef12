use macroquad::prelude::*;

/// What a control panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Step,
    Clear,
    Randomize,
    Gun,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::PlayPause,
        Action::Step,
        Action::Clear,
        Action::Randomize,
        Action::Gun,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Action::PlayPause => "Play/Pause",
            Action::Step => "Step",
            Action::Clear => "Clear",
            Action::Randomize => "Random",
            Action::Gun => "Glider Gun",
        }
    }
}

/// Panel button bound to an [`Action`]
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    action: Action,
}

impl Button {
    pub fn new(bounds: Rect, action: Action) -> Self {
        Self { bounds, action }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.bounds;
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let label = self.action.label();
        let size = measure_text(label, None, 20, 1.0);
        draw_text(label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, WHITE);
    }
}
