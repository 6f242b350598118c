// src/main.rs
use nannou::prelude::*;

use bubblevis::{
    config::*,
    controllers::{OscCommand, OscController},
    render::{PageSpace, TileRenderer},
    sorting::BubbleSortAnimator,
    views::{SortContainer, StatusBoard, TileLayout},
};

struct Model {
    // Core components:
    container: SortContainer,
    tile_count: usize,

    // Comms components:
    osc_controller: Option<OscController>,

    // Rendering components:
    renderer: TileRenderer,
    background: Rgb,
    tile_size: Vec2,

    // Debug
    show_rails: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("No usable config.toml ({}), using defaults", e);
            Config::default()
        }
    };

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::error!("OSC disabled, cannot bind port {}: {}", config.osc.rx_port, e);
                None
            }
        }
    } else {
        None
    };

    if let Err(e) = app
        .new_window()
        .title("bubblevis")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
    {
        log::error!("Failed to create window: {:?}", e);
        app.quit();
    }

    // Compose the container from its parts
    let animator = BubbleSortAnimator::new(&config.timing, &config.palette);
    let mut container = SortContainer::new(
        TileLayout::from(&config.tiles),
        animator,
        StatusBoard::new(),
    );
    if let Err(e) = container.mount_elements(config.tiles.count) {
        log::warn!("Initial fill failed: {}", e);
    }

    let [r, g, b] = config.window.background;

    Model {
        container,
        tile_count: config.tiles.count,
        osc_controller,
        renderer: TileRenderer::new(config.tiles.font_size),
        background: rgb(r, g, b),
        tile_size: vec2(config.tiles.width, config.tiles.height),
        show_rails: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::F => {
            let count = model.tile_count;
            refill(model, count);
        }
        Key::C => {
            if let Err(e) = model.container.clear_container() {
                log::warn!("Clear ignored: {}", e);
            }
        }
        Key::Space | Key::Return => start_sorting(model),
        Key::D => model.show_rails = !model.show_rails,
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    // Process OSC messages
    let commands = match model.osc_controller.as_mut() {
        Some(controller) => {
            controller.process_messages();
            controller.take_commands()
        }
        None => Vec::new(),
    };
    launch_commands(model, commands);

    model.container.update(update.since_last.as_secs_f32());
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    let page = PageSpace::from_rect(app.window_rect());
    model.renderer.draw_tiles(&draw, &page, model.container.tiles());
    model
        .renderer
        .draw_status(&draw, &page, model.container.status_lines());

    if model.show_rails {
        if let Some(surface) = model.container.animator().active_surface() {
            model
                .renderer
                .draw_rails(&draw, &page, surface, model.tile_size);
        }
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}

// ******************************* Commands *******************************

fn refill(model: &mut Model, count: usize) {
    let result = model
        .container
        .clear_container()
        .and_then(|_| model.container.mount_elements(count));
    if let Err(e) = result {
        log::warn!("Fill ignored: {}", e);
    }
}

fn start_sorting(model: &mut Model) {
    if let Err(e) = model.container.show_sorting() {
        log::warn!("Sort ignored: {}", e);
    }
}

fn launch_commands(model: &mut Model, commands: Vec<OscCommand>) {
    for command in commands {
        match command {
            OscCommand::Fill { count } => {
                let count = count.unwrap_or(model.tile_count);
                refill(model, count);
            }
            OscCommand::Values(values) => {
                let result = model
                    .container
                    .clear_container()
                    .and_then(|_| model.container.mount_values(&values));
                if let Err(e) = result {
                    log::warn!("Values ignored: {}", e);
                }
            }
            OscCommand::Clear => {
                if let Err(e) = model.container.clear_container() {
                    log::warn!("Clear ignored: {}", e);
                }
            }
            OscCommand::Run => start_sorting(model),
        }
    }
}
