//! Flavicon entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, MouseEvent};

    use flavicon::consts::*;
    use flavicon::highscore::HighScore;
    use flavicon::platform::{FaviconSink, LocalStorage};
    use flavicon::renderer::{FrameBuffer, draw_frame, publish_icon};
    use flavicon::sim::{GameState, Phase, SessionController, TickInput, spawn_pipe, tick};
    use flavicon::tuning::Tuning;

    /// App instance holding all state
    struct App {
        controller: SessionController,
        tuning: Tuning,
        input: TickInput,
        highscore: HighScore<LocalStorage>,
        frame: FrameBuffer,
        icon: FrameBuffer,
        sink: FaviconSink,
        /// Spawn interval of the current run; cleared on every exit from
        /// Running. The closure outlives the cleared interval because a
        /// callback queued just before clearing may still fire once.
        spawn_interval: Option<i32>,
        _spawn_closure: Option<Closure<dyn FnMut()>>,
        /// Title blink interval while Over
        blink_interval: Option<i32>,
        _blink_closure: Option<Closure<dyn FnMut()>>,
        blink_visible: bool,
    }

    impl App {
        fn new(highscore: HighScore<LocalStorage>, tuning: Tuning, sink: FaviconSink) -> Self {
            Self {
                controller: SessionController::new(),
                tuning,
                input: TickInput::default(),
                highscore,
                frame: FrameBuffer::new(WORLD_WIDTH as u32, WORLD_HEIGHT as u32),
                icon: FrameBuffer::new(ICON_SIZE, ICON_SIZE),
                sink,
                spawn_interval: None,
                _spawn_closure: None,
                blink_interval: None,
                _blink_closure: None,
                blink_visible: true,
            }
        }

        /// Paint and publish the current run, and mirror the score into
        /// the tab title
        fn render_frame(&mut self) {
            draw_frame(&mut self.frame, self.controller.game());
            publish_icon(&self.frame, &mut self.icon, &mut self.sink);
            if let Some(document) = document() {
                document.set_title(&format!("Score: {}", self.controller.game().score));
            }
        }

        /// Publish the pre-start frame (bird at rest, no pipes)
        fn publish_idle_icon(&mut self) {
            let idle = GameState::new(0);
            draw_frame(&mut self.frame, &idle);
            publish_icon(&self.frame, &mut self.icon, &mut self.sink);
        }

        fn update_hud(&self) {
            if let Some(document) = document() {
                let game = self.controller.game();
                set_text(&document, "score", &game.score.to_string());
                set_text(&document, "highscore", &self.highscore.best().to_string());
                set_text(&document, "start-highscore", &self.highscore.best().to_string());
            }
        }

        fn cancel_spawn_timer(&mut self) {
            if let Some(id) = self.spawn_interval.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }

        fn cancel_blink_timer(&mut self) {
            if let Some(id) = self.blink_interval.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flavicon starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::load();
        let highscore = HighScore::load(LocalStorage::new());
        let sink = FaviconSink::new(&document, "icon-canvas").expect("no icon canvas");

        let app = Rc::new(RefCell::new(App::new(highscore, tuning, sink)));

        {
            let mut a = app.borrow_mut();
            a.publish_idle_icon();
            a.update_hud();
            document.set_title(DEFAULT_TITLE);
        }

        setup_keyboard(app.clone());
        setup_modal_buttons(app.clone());

        log::info!("Flavicon ready - press Space to start");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() != "Space" {
                return;
            }
            let phase = app.borrow().controller.phase();
            match phase {
                Phase::Idle => {
                    event.prevent_default();
                    start_run(&app);
                }
                Phase::Running => {
                    event.prevent_default();
                    app.borrow_mut().input.flap = true;
                }
                // The confirmation dialog is up; only its buttons resolve it.
                Phase::Over => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_modal_buttons(app: Rc<RefCell<App>>) {
        let document = document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                confirm_restart(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("home-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                confirm_home(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Idle -> Running from the start trigger
    fn start_run(app: &Rc<RefCell<App>>) {
        let seed = js_sys::Date::now() as u64;
        {
            let mut a = app.borrow_mut();
            if !a.controller.start(seed) {
                return;
            }
            a.input = TickInput::default();
            a.update_hud();
            if let Some(document) = document() {
                set_hidden(&document, "start-screen", true);
                set_hidden(&document, "hud", false);
            }
        }
        begin_running(app);
    }

    /// Over -> Running from the dialog's restart choice
    fn confirm_restart(app: &Rc<RefCell<App>>) {
        let seed = js_sys::Date::now() as u64;
        {
            let mut a = app.borrow_mut();
            if !a.controller.restart(seed) {
                return;
            }
            a.cancel_blink_timer();
            a.input = TickInput::default();
            a.update_hud();
            if let Some(document) = document() {
                set_hidden(&document, "game-over", true);
                document.set_title(DEFAULT_TITLE);
            }
        }
        begin_running(app);
    }

    /// Over -> Idle from the dialog's home choice
    fn confirm_home(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        if !a.controller.go_home() {
            return;
        }
        a.cancel_blink_timer();
        a.publish_idle_icon();
        a.update_hud();
        if let Some(document) = document() {
            set_hidden(&document, "game-over", true);
            set_hidden(&document, "hud", true);
            set_hidden(&document, "start-screen", false);
            document.set_title(DEFAULT_TITLE);
        }
    }

    /// Attach the per-run timers and kick off the frame loop. Every entry
    /// into Running passes through here and owns fresh handles.
    fn begin_running(app: &Rc<RefCell<App>>) {
        start_spawn_timer(app);
        let generation = app.borrow().controller.generation();
        request_frame(app.clone(), generation);
    }

    fn start_spawn_timer(app: &Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let generation = app.borrow().controller.generation();
        let interval_ms = app.borrow().tuning.pipe_interval_ms;

        let closure = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut a = app.borrow_mut();
                // The interval may fire once more between the collision and
                // clear_interval; the generation and active flag gate it.
                if a.controller.phase() != Phase::Running
                    || a.controller.generation() != generation
                {
                    return;
                }
                let tuning = a.tuning;
                spawn_pipe(a.controller.game_mut(), &tuning);
            })
        };

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms,
            )
            .ok();

        let mut a = app.borrow_mut();
        a.spawn_interval = id;
        a._spawn_closure = Some(closure);
    }

    fn request_frame(app: Rc<RefCell<App>>, generation: u64) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| game_loop(&app, generation));
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    enum FrameOutcome {
        Continue,
        Collided,
        Stale,
    }

    fn game_loop(app: &Rc<RefCell<App>>, generation: u64) {
        let outcome = {
            let mut a = app.borrow_mut();
            if a.controller.phase() != Phase::Running || a.controller.generation() != generation {
                FrameOutcome::Stale
            } else {
                let input = a.input;
                a.input = TickInput::default();
                let tuning = a.tuning;
                let report = tick(a.controller.game_mut(), &input, &tuning);

                if report.scored > 0 {
                    let score = a.controller.game().score;
                    a.highscore.record(score);
                    a.update_hud();
                }
                a.render_frame();

                if report.collided {
                    FrameOutcome::Collided
                } else {
                    FrameOutcome::Continue
                }
            }
        };

        match outcome {
            FrameOutcome::Continue => request_frame(app.clone(), generation),
            FrameOutcome::Collided => enter_game_over(app),
            FrameOutcome::Stale => {}
        }
    }

    /// Running -> Over: release the run's timers, raise the blocking
    /// dialog, start the title blink
    fn enter_game_over(app: &Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.controller.end_run();
            a.cancel_spawn_timer();

            if let Some(document) = document() {
                set_text(&document, "final-score", &a.controller.game().score.to_string());
                set_hidden(&document, "game-over", false);
            }
        }
        start_blink_timer(app);
    }

    fn start_blink_timer(app: &Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        app.borrow_mut().blink_visible = true;

        let closure = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut a = app.borrow_mut();
                if a.controller.phase() != Phase::Over {
                    return;
                }
                a.blink_visible = !a.blink_visible;
                let visible = a.blink_visible;
                if let Some(document) = document() {
                    document.set_title(if visible { GAME_OVER_TITLE } else { DEFAULT_TITLE });
                }
                // Blink the favicon in step with the title: the wrecked
                // run's last frame against the resting bird.
                if visible {
                    let game = a.controller.game().clone();
                    draw_frame(&mut a.frame, &game);
                    publish_icon(&a.frame, &mut a.icon, &mut a.sink);
                } else {
                    a.publish_idle_icon();
                }
            })
        };

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                GAME_OVER_BLINK_MS,
            )
            .ok();

        let mut a = app.borrow_mut();
        a.blink_interval = id;
        a._blink_closure = Some(closure);
        if let Some(document) = document() {
            document.set_title(GAME_OVER_TITLE);
        }
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
    log::info!("Flavicon (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the browser version");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless smoke run: a naive autopilot plays one session to its end.
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use flavicon::Tuning;
    use flavicon::bird_left;
    use flavicon::consts::WORLD_HEIGHT;
    use flavicon::sim::{GameState, TickInput, spawn_pipe, tick};

    let tuning = Tuning::default();
    let mut state = GameState::new(0xF1A9);
    let mut frames = 0u32;

    loop {
        // The browser spawns on a wall-clock interval; at 60 fps that is
        // one pipe every 120 frames.
        if frames % 120 == 0 {
            spawn_pipe(&mut state, &tuning);
        }

        let target = state
            .pipes
            .iter()
            .find(|p| p.right() >= bird_left())
            .map(|p| (p.gap_top() + p.gap_bottom()) / 2.0)
            .unwrap_or(WORLD_HEIGHT / 2.0);
        let flap = state.bird.y > target && state.bird.velocity > 0.0;

        let report = tick(&mut state, &TickInput { flap }, &tuning);
        frames += 1;

        if report.collided || frames >= 36_000 {
            break;
        }
    }

    println!(
        "Demo run ended after {} frames with score {}",
        frames, state.score
    );
}
