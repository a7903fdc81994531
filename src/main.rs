//! Rocket Soccer entry point
//!
//! On the web: wires keyboard, resize and animation-frame callbacks to the
//! simulation and draws with Canvas 2D. Natively: a headless runner that
//! mashes random keys for a fixed number of ticks and reports the score.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use rocket_soccer::Settings;
    use rocket_soccer::renderer::{build_scene, canvas};
    use rocket_soccer::sim::{Field, GameEvent, GameState, InputSnapshot, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        keys: InputSnapshot,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        last_red: u32,
        last_blue: u32,
    }

    impl Game {
        /// Current canvas size, read fresh every frame
        fn field(&self) -> Field {
            Field::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// One simulation tick and one draw
        fn frame(&mut self) {
            let field = self.field();
            let out = tick(&mut self.state, &self.keys, &self.settings.controls, field);

            for event in &out.events {
                if let GameEvent::Goal {
                    red_score,
                    blue_score,
                    ..
                } = event
                {
                    log::info!("Score {} - {}", red_score, blue_score);
                }
            }

            let cmds = build_scene(&out.snapshot, &self.settings);
            canvas::draw(&self.ctx, &cmds);
            self.update_hud();
        }

        /// Update score text in the DOM (only when it changes)
        fn update_hud(&mut self) {
            let (red, blue) = (self.state.score.red_score, self.state.score.blue_score);
            if red == self.last_red && blue == self.last_blue {
                return;
            }
            self.last_red = red;
            self.last_blue = blue;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("redScore") {
                el.set_text_content(Some(&red.to_string()));
            }
            if let Some(el) = document.get_element_by_id("blueScore") {
                el.set_text_content(Some(&blue.to_string()));
            }
        }

        fn binds(&self, key: &str) -> bool {
            self.settings.controls.red.binds(key) || self.settings.controls.blue.binds(key)
        }
    }

    /// Match the canvas backing store to the window
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rocket Soccer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        resize_canvas(&canvas);

        // Write back so stored settings pick up any new fields
        let settings = Settings::load();
        settings.save();

        let game = Rc::new(RefCell::new(Game {
            state: GameState::default(),
            settings,
            keys: InputSnapshot::new(),
            canvas: canvas.clone(),
            ctx,
            last_red: u32::MAX,
            last_blue: u32::MAX,
        }));

        setup_input(game.clone());

        // Resize
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                resize_canvas(&canvas);
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        log::info!("Kickoff!");
        request_animation_frame(game);
    }

    fn setup_input(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                // Keep arrows and space from scrolling the page
                if g.binds(&key) {
                    event.prevent_default();
                }
                g.keys.press(key);
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(event.key());
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
                log::info!("Input cleared (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use rocket_soccer::sim::{Button, Field, GameEvent, GameState, InputSnapshot, Team, tick};
    use rocket_soccer::{ConfigError, Settings, Tuning};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Run a headless Rocket Soccer match with random key presses")]
    pub struct Args {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 36_000)]
        pub ticks: u64,
        /// Seed for the key-press generator
        #[arg(long, default_value_t = 42)]
        pub seed: u64,
        #[arg(long, default_value_t = rocket_soccer::consts::DEFAULT_FIELD_WIDTH)]
        pub width: f32,
        #[arg(long, default_value_t = rocket_soccer::consts::DEFAULT_FIELD_HEIGHT)]
        pub height: f32,
        /// JSON tuning overrides
        #[arg(long)]
        pub tuning: Option<PathBuf>,
        /// JSON settings (key bindings)
        #[arg(long)]
        pub settings: Option<PathBuf>,
        /// Chance per tick that each player flips one of their buttons
        #[arg(long, default_value_t = 0.15)]
        pub flip_chance: f64,
    }

    impl Args {
        /// Reject sizes and probabilities the runner can't use (NaN included)
        pub fn validate(&self) -> Result<(), ConfigError> {
            let playable = |v: f32| v.is_finite() && v > 0.0;
            if !(playable(self.width) && playable(self.height)) {
                return Err(ConfigError::Invalid {
                    field: "field",
                    reason: format!("{}x{} is not a playable size", self.width, self.height),
                });
            }
            if !(0.0..=1.0).contains(&self.flip_chance) {
                return Err(ConfigError::Invalid {
                    field: "flip_chance",
                    reason: format!("{} is not a probability", self.flip_chance),
                });
            }
            Ok(())
        }
    }

    pub fn run(args: Args) -> Result<(), ConfigError> {
        args.validate()?;
        let tuning = match &args.tuning {
            Some(path) => Tuning::from_path(path)?,
            None => Tuning::default(),
        };
        let settings = match &args.settings {
            Some(path) => Settings::from_path(path)?,
            None => Settings::default(),
        };

        let field = Field::new(args.width, args.height);
        let mut state = GameState::new(tuning);
        let mut keys = InputSnapshot::new();
        let mut rng = Pcg32::seed_from_u64(args.seed);
        let mut touches = 0u64;

        log::info!(
            "Headless match: {} ticks on {}x{} (seed {})",
            args.ticks,
            field.width,
            field.height,
            args.seed
        );

        for _ in 0..args.ticks {
            for team in [Team::Red, Team::Blue] {
                let binding = settings.controls.binding(team);
                if rng.random_bool(args.flip_chance) {
                    let button = Button::ALL[rng.random_range(0..Button::ALL.len())];
                    let key = binding.key_for(button);
                    let pressed = keys.is_pressed(key);
                    keys.set(key, !pressed);
                }
            }

            let out = tick(&mut state, &keys, &settings.controls, field);
            for event in out.events {
                match event {
                    GameEvent::BallTouched { .. } => touches += 1,
                    GameEvent::Goal {
                        scorer,
                        red_score,
                        blue_score,
                    } => log::info!(
                        "tick {}: {} goal ({} - {})",
                        state.time_ticks,
                        scorer.as_str(),
                        red_score,
                        blue_score
                    ),
                }
            }
        }

        println!(
            "Final score after {} ticks: Red {} - {} Blue ({} ball touches)",
            state.time_ticks, state.score.red_score, state.score.blue_score, touches
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), rocket_soccer::ConfigError> {
    use clap::Parser;

    env_logger::init();
    log::info!("Rocket Soccer (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless::run(headless::Args::parse())
}
