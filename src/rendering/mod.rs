//! Delta renderer: one pixel per cell in a CPU image, repainted only for the
//! cells the simulator reports as changed, then scaled up on screen.

use macroquad::prelude::*;

use crate::application::{ConfigError, GameState, LifeConfig};
use crate::domain::Simulator;
use crate::ui::{Button, PANEL_WIDTH, board_area_height, info_top, panel_x};

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Keeps the board image in sync with the cells the session reports as stale
pub struct BoardRenderer {
    dimensions: (usize, usize),
    image: Image,
    texture: Texture2D,
    alive_color: Color,
    dead_color: Color,
    border_color: Color,
}

impl BoardRenderer {
    pub fn new(config: &LifeConfig, sim: &Simulator) -> Result<Self, ConfigError> {
        let dimensions = sim.grid().dimensions();
        let too_large = || ConfigError::BoardTooLarge {
            width: dimensions.0,
            height: dimensions.1,
        };
        let image_w = u16::try_from(dimensions.0).map_err(|_| too_large())?;
        let image_h = u16::try_from(dimensions.1).map_err(|_| too_large())?;
        let dead_color = rgb(config.background_color);
        let image = Image::gen_image_color(image_w, image_h, dead_color);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);

        let mut renderer = Self {
            dimensions,
            image,
            texture,
            alive_color: rgb(config.cell_color),
            dead_color,
            border_color: rgb(config.border_color),
        };
        renderer.repaint_all(sim);
        Ok(renderer)
    }

    /// Repaint the pixels of stale cells. Rebuilds the image when the
    /// board was replaced with one of a different size.
    pub fn sync(&mut self, state: &mut GameState) -> Result<(), ConfigError> {
        let repaint = state.take_repaint();
        let sim = &state.simulator;
        if sim.grid().dimensions() != self.dimensions {
            *self = Self::new(&state.config, sim)?;
            return Ok(());
        }
        if repaint.is_empty() {
            return Ok(());
        }
        for id in repaint {
            let cell = sim.grid().cell(id);
            let color = if cell.is_alive() { self.alive_color } else { self.dead_color };
            self.image.set_pixel(cell.x() as u32, cell.y() as u32, color);
        }
        self.texture.update(&self.image);
        Ok(())
    }

    fn repaint_all(&mut self, sim: &Simulator) {
        for cell in sim.alive_cells() {
            self.image.set_pixel(cell.x() as u32, cell.y() as u32, self.alive_color);
        }
        self.texture.update(&self.image);
    }

    /// Draw the board scaled to the configured cell size, with cell borders
    pub fn draw(&self, config: &LifeConfig) {
        let (width, height) = self.dimensions;
        let size = config.cell_size;
        let pad = config.cell_padding;
        let (board_w, board_h) = (width as f32 * size, height as f32 * size);

        draw_texture_ex(
            &self.texture,
            pad,
            pad,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(board_w, board_h)),
                ..Default::default()
            },
        );

        // Borders only while they stay readable
        if pad <= 0.0 || size < 4.0 {
            return;
        }
        let half = pad / 2.0;
        for i in 0..=width {
            let x = i as f32 * size + half;
            draw_line(x, 0.0, x, board_h + pad, pad, self.border_color);
        }
        for j in 0..=height {
            let y = j as f32 * size + half;
            draw_line(0.0, y, board_w + pad, y, pad, self.border_color);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, board_area_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, stats and key help
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 8.0;
    let top = info_top();
    let summary = state.last_step;
    let (gw, gh) = state.simulator.grid().dimensions();

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let lines: [(String, f32, Color); 9] = [
        (format!("Grid: {}x{}", gw, gh), 14.0, GRAY),
        (format!("Generation: {}", state.simulator.generation()), 16.0, WHITE),
        (format!("Alive: {}", state.simulator.alive_count()), 14.0, GRAY),
        (format!("Changed: {}", state.simulator.changed_count()), 14.0, GRAY),
        (format!("Evaluated: {}", summary.candidates), 14.0, GRAY),
        (format!("Step: {:.2}ms", state.last_step_time_ms), 14.0, GRAY),
        (format!("Render: {:.2}ms | FPS {}", state.last_render_time_ms, get_fps()), 14.0, GRAY),
        (format!("Interval: {}ms", state.config.interval_ms), 14.0, GRAY),
        (
            if state.is_running { "Running".to_owned() } else { "Paused".to_owned() },
            16.0,
            status_color,
        ),
    ];
    for (i, (text, size, color)) in lines.iter().enumerate() {
        draw_text(text, px, top + i as f32 * 20.0, *size, *color);
    }

    let help = ["LMB: Toggle", "RMB: Glider", "Space: Play", "N: Step", "C/R/G: Seed", "Up/Down: Speed"];
    let help_top = top + lines.len() as f32 * 20.0 + 10.0;
    for (i, text) in help.iter().enumerate() {
        draw_text(text, px, help_top + i as f32 * 15.0, 12.0, GRAY);
    }
}
