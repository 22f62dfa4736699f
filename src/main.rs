//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use grid_snake::audio::{AudioManager, SoundEffect};
    use grid_snake::game::Game;
    use grid_snake::highscores::LocalStorage;
    use grid_snake::input::{Command, SwipeTracker, command_for_key, is_scroll_key};
    use grid_snake::renderer::RenderState;
    use grid_snake::sim::{Direction, GameConfig, GameStatus};
    use grid_snake::timer::TimerCommand;
    use grid_snake::Settings;

    /// The browser interval driving ticks
    struct Interval {
        id: i32,
        closure: Closure<dyn FnMut()>,
    }

    /// Game instance holding all state
    struct App {
        game: Game<LocalStorage>,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        swipe: SwipeTracker,
        interval: Option<Interval>,
        /// Replaced interval callback, kept until the next swap since it may
        /// still be on the stack
        retired: Option<Closure<dyn FnMut()>>,
        /// Snapshot changed since the last frame
        dirty: bool,
    }

    impl App {
        fn new(seed: u64) -> Self {
            let settings = Settings::load(&LocalStorage);
            Self {
                game: Game::new(GameConfig::default(), seed, LocalStorage),
                audio: AudioManager::new(settings.effective_volume()),
                swipe: SwipeTracker::new(settings.swipe_threshold_px),
                settings,
                render_state: None,
                interval: None,
                retired: None,
                dirty: true,
            }
        }

        /// Render the current snapshot
        fn render(&mut self) {
            let snapshot = self.game.snapshot();
            let show_grid = self.settings.show_grid;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_snapshot(&snapshot, show_grid) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.game.snapshot();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&snapshot.score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-high .hud-value").ok().flatten() {
                el.set_text_content(Some(&snapshot.high_score.to_string()));
            }

            for (id, visible) in snapshot.panels() {
                if let Some(el) = document.get_element_by_id(id) {
                    set_hidden(&el, !visible);
                }
            }

            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&snapshot.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("pause-btn") {
                let label = if snapshot.status == GameStatus::Paused { "Resume" } else { "Pause" };
                el.set_text_content(Some(label));
            }
            if let Some(el) = document.get_element_by_id("restart-btn") {
                let label = if snapshot.status == GameStatus::NotStarted { "Start" } else { "Restart" };
                el.set_text_content(Some(label));
            }
        }
    }

    /// Flip the `hidden` class, leaving any other classes in place
    fn set_hidden(el: &Element, hidden: bool) {
        let _ = el.class_list().toggle_with_force("hidden", hidden);
    }

    /// Apply a player command and everything that follows from it
    fn dispatch(app: &Rc<RefCell<App>>, command: Command) {
        let timer = {
            let mut a = app.borrow_mut();
            let before = a.game.state().status;
            let timer = a.game.apply(command);
            let after = a.game.state().status;

            match command {
                Command::Turn(_) => {}
                Command::StartOrPause if before == GameStatus::NotStarted => {
                    a.audio.play(SoundEffect::Start)
                }
                Command::StartOrPause if before != after => a.audio.play(SoundEffect::Pause),
                Command::Restart if after == GameStatus::Running => a.audio.play(SoundEffect::Start),
                _ => {}
            }
            a.dirty = true;
            timer
        };
        apply_timer(app, timer);
    }

    /// One interval callback
    fn on_tick(app: &Rc<RefCell<App>>) {
        let timer = {
            let mut a = app.borrow_mut();
            let update = a.game.tick();
            if let Some(effect) = SoundEffect::for_tick(&update) {
                a.audio.play(effect);
            }
            a.dirty = true;
            update.timer
        };
        apply_timer(app, timer);
    }

    /// Bring the browser interval in line with the session
    fn apply_timer(app: &Rc<RefCell<App>>, command: TimerCommand) {
        let Some(window) = web_sys::window() else { return };
        let mut a = app.borrow_mut();

        let interval_ms = match command {
            TimerCommand::Keep => return,
            TimerCommand::Stop => None,
            TimerCommand::Start(ms) | TimerCommand::Restart(ms) => Some(ms),
        };

        if let Some(old) = a.interval.take() {
            window.clear_interval_with_handle(old.id);
            a.retired = Some(old.closure);
            log::debug!("Tick timer cleared");
        }

        let Some(ms) = interval_ms else { return };

        let weak: Weak<RefCell<App>> = Rc::downgrade(app);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(app) = weak.upgrade() {
                on_tick(&app);
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms as i32,
        ) {
            Ok(id) => {
                a.interval = Some(Interval { id, closure });
                log::debug!("Tick timer every {}ms", ms);
            }
            Err(e) => log::error!("Failed to start tick timer: {:?}", e),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Grid Snake starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            set_hidden(&loading, true);
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let grid_size = app.borrow().game.state().config.grid_size;
                        match RenderState::new(surface, &adapter, width, height, grid_size).await {
                            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_keyboard(app.clone());
        setup_touch(&canvas, app.clone());
        setup_buttons(app.clone());
        setup_auto_pause(app.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            set_hidden(&hud, false);
        }

        request_animation_frame(app);

        log::info!("Grid Snake running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if is_scroll_key(&key) {
                event.prevent_default();
            }
            if let Some(command) = command_for_key(&key) {
                dispatch(&app, command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = glam::Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    app.borrow_mut().swipe.begin(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.changed_touches().get(0) else { return };
                let pos = glam::Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                let swiped = app.borrow_mut().swipe.end(pos);
                if let Some(dir) = swiped {
                    dispatch(&app, Command::Turn(dir));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let buttons = [
            ("restart-btn", Command::Restart),
            ("play-again-btn", Command::Restart),
            ("start-btn", Command::StartOrPause),
            ("pause-btn", Command::StartOrPause),
            ("btn-up", Command::Turn(Direction::Up)),
            ("btn-down", Command::Turn(Direction::Down)),
            ("btn-left", Command::Turn(Direction::Left)),
            ("btn-right", Command::Turn(Direction::Right)),
        ];

        for (id, command) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&app, command);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Sound toggle
        if let Some(btn) = document.get_element_by_id("sound-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                a.settings.sound = !a.settings.sound;
                let volume = a.settings.effective_volume();
                a.audio.set_volume(volume);
                a.settings.save(&LocalStorage);
                log::info!("Sound: {}", a.settings.sound);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let running = app.borrow().game.state().is_running();
                    if running {
                        dispatch(&app, Command::StartOrPause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let running = app.borrow().game.state().is_running();
                if running {
                    dispatch(&app, Command::StartOrPause);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if a.dirty {
                a.render();
                a.update_hud();
                a.dirty = false;
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(12345);
    autopilot::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a greedy bot plays one game
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use grid_snake::game::Game;
    use grid_snake::highscores::MemoryStore;
    use grid_snake::sim::{Direction, GameConfig, GameState, GameStatus};
    use grid_snake::timer::TimerCommand;

    const MAX_TICKS: u32 = 5_000;

    /// Pick a safe heading, preferring ones that close in on the food
    fn choose(state: &GameState) -> Direction {
        let head = state.head();
        let food = state.food.unwrap_or(head);
        let mut options = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        options.sort_by_key(|d| {
            let next = head + d.delta();
            (next - food).abs().element_sum()
        });
        options
            .into_iter()
            .filter(|d| *d != state.pending.opposite())
            .find(|d| {
                let next = head + d.delta();
                state.config.in_bounds(next) && !state.occupies(next)
            })
            .unwrap_or(state.pending)
    }

    pub fn run(seed: u64) {
        let mut game = Game::new(GameConfig::default(), seed, MemoryStore::new());
        let mut interval = match game.start() {
            TimerCommand::Start(ms) | TimerCommand::Restart(ms) => ms,
            _ => GameConfig::default().initial_interval_ms,
        };
        let mut elapsed_ms: u64 = 0;

        for _ in 0..MAX_TICKS {
            let dir = choose(game.state());
            game.set_direction(dir);
            elapsed_ms += interval as u64;

            let update = game.tick();
            if update.events.ate_food {
                log::debug!("Ate food, score {}", game.state().score);
            }
            if let TimerCommand::Restart(ms) = update.timer {
                log::info!("Speed up: {}ms per tick", ms);
                interval = ms;
            }
            if game.state().status == GameStatus::Over {
                break;
            }
        }

        let snapshot = game.snapshot();
        println!(
            "Seed {}: score {}, length {}, status {:?}, {:.1}s of play",
            seed,
            snapshot.score,
            snapshot.snake.len(),
            snapshot.status,
            elapsed_ms as f64 / 1000.0
        );
    }
}
