use anyhow::{Context, Result};
use macroquad::prelude::*;
use toroidal_life::{
    GameState, LifeConfig,
    input,
    rendering::{self, BoardRenderer},
    ui::{self, PANEL_WIDTH},
};
use tracing::{error, info};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "LIFE_CONFIG";

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 820,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> Result<LifeConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => LifeConfig::load(&path)
            .with_context(|| format!("loading {} from {}", CONFIG_ENV, path.to_string_lossy())),
        None => Ok(LifeConfig::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = load_config()?;
    info!(
        width = config.width,
        height = config.height,
        interval_ms = config.interval_ms,
        seed = ?config.seed,
        "starting session",
    );

    let (board_w, board_h) = config.board_pixels();
    request_new_screen_size(board_w + PANEL_WIDTH, board_h.max(600.0));

    let mut state = GameState::new(config)?;
    let mut renderer = BoardRenderer::new(&state.config, &state.simulator)?;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        // Update game state
        state = state.tick(get_frame_time());

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        renderer.sync(&mut state)?;
        renderer.draw(&state.config);
        rendering::draw_controls(&state, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
