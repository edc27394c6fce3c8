//! Duck Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! browser shell wires key events, the frame clock and the countdown interval
//! to the simulation, updates the DOM HUD, and hands a scene snapshot to the
//! host page's renderer every frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use duck_dash::consts::SESSION_SECONDS;
    use duck_dash::input::{self, InputFlags};
    use duck_dash::sim::{session, tick, GamePhase, GameState};

    // JS binding for the host renderer: the page registers
    // window.duckDashRender and draws the 3D scene from the snapshot.
    #[wasm_bindgen(inline_js = "
        export function scene_sync(json) {
            if (window.duckDashRender) {
                window.duckDashRender(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn scene_sync(json: &str);
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        flags: InputFlags,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                flags: InputFlags::new(),
                last_time: 0.0,
            }
        }

        /// Run one simulation frame
        fn update(&mut self, dt: f32) {
            tick(&mut self.state, &self.flags, dt);
        }

        /// Hand the current scene to the host renderer
        fn render(&self) {
            match serde_json::to_string(&self.state.snapshot()) {
                Ok(json) => scene_sync(&json),
                Err(e) => log::warn!("snapshot serialization failed: {e}"),
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-time") {
                el.set_text_content(Some(&self.state.time_left.to_string()));
            }

            // Ready overlay (start screen)
            if let Some(el) = document.get_element_by_id("ready-overlay") {
                let class = if self.state.phase == GamePhase::Ready {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            // Game over overlay with final score
            if let Some(el) = document.get_element_by_id("gameover-overlay") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Start or restart a session
        fn start(&mut self) {
            self.flags.reset();
            session::start(&mut self.state);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duck Dash starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!(
            "Game initialized with seed {} ({} second sessions)",
            seed,
            SESSION_SECONDS
        );

        setup_key_handlers(game.clone());
        setup_buttons(game.clone());
        setup_countdown(game.clone());

        // Draw the ready screen once before the loop starts
        {
            let g = game.borrow();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);

        log::info!("Duck Dash running!");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if input::consumes_key(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().flags.process_key(&key, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().flags.process_key(&event.key(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - release everything so keys don't stick across focus loss
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().flags.reset();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Start and replay buttons both just (re)start a session
        for id in ["start-btn", "replay-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.start();
                    g.update_hud();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// One-second countdown interval. Keeps firing for the lifetime of the
    /// page; `tick_second` is a no-op outside the Playing phase.
    fn setup_countdown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            session::tick_second(&mut g.state);
            g.update_hud();
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            1000,
        );
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Delta in seconds since the last frame
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duck Dash (native) starting...");
    log::info!("This game targets the browser - build with trunk/wasm-pack for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
