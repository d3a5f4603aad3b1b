// src/main.rs
use log::{info, warn};
use nannou::prelude::*;

use boardvis::{
    animation::MoveEngine,
    config::Config,
    controllers::{SelectionController, SelectionState},
    models::{Board, GameBoard},
    render::{BoardProjection, NannouScene, PickBuffer},
};

struct Model {
    // Core components:
    board: GameBoard,
    selection: SelectionController,

    // Picking: clicks are hit-tested while drawing, results are consumed
    // by the selection controller on the next frame
    picks: PickBuffer,
    pending_click: Option<Point2>,

    // Rendering components:
    draw: nannou::Draw,
    scale: f32, // pixels per board unit

    // Message
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config before the logger so its filter can be used
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.default_filter.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        warn!("Failed to load config.toml, using defaults: {}", e);
    }

    // Create window
    app.new_window()
        .title("boardvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to create window");

    // Fit the board plus the captured piece rows into the window
    let span = (config.board.columns.max(config.board.rows) + 4) as f32 * config.board.cell_size;
    let scale = config.window.width.min(config.window.height) as f32 / span;

    let board = GameBoard::new(config.board.clone(), MoveEngine::new(config.movement.clone()));
    info!("{} to move", board.current_team());

    Model {
        board,
        selection: SelectionController::new(),
        picks: PickBuffer::new(),
        pending_click: None,
        draw: nannou::Draw::new(),
        scale,
        debug_flag: false,
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.pending_click = Some(app.mouse.position());
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            let enabled = !model.selection.is_pick_enabled();
            model.selection.set_pick_enabled(enabled);
            info!("Picking {}", if enabled { "enabled" } else { "disabled" });
        }
        Key::R => {
            model.selection.clear();
            model.board.reset();
        }
        Key::G => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let time = app.time;

    // Selection runs before any piece moves this frame
    model
        .selection
        .process_picks(&mut model.picks, &mut model.board, time);

    model.draw.reset();
    model.draw.background().color(rgb(0.08, 0.08, 0.1));

    let projection = BoardProjection {
        center: model.board.center(),
        scale: model.scale,
        cell_size: model.board.config().cell_size,
    };
    let click = model.pending_click.take();
    let mut scene = NannouScene::new(&model.draw, projection, click, &mut model.picks);
    model.board.display(time, &mut scene);

    if model.debug_flag {
        let status = match (model.board.is_finished(), model.selection.state()) {
            (true, _) => "game over".to_string(),
            (false, SelectionState::Idle) => format!("{} to move", model.board.current_team()),
            (false, SelectionState::PieceSelected(piece)) => {
                format!("{} to move, piece {} selected", model.board.current_team(), piece.0)
            }
        };
        let window = app.window_rect();
        model
            .draw
            .text(&status)
            .x_y(0.0, window.top() - 20.0)
            .w(window.w())
            .color(WHITE);
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    model.draw.to_frame(app, &frame).unwrap();
}
