//! Retro Soccer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use retro_soccer::GameController;
    use retro_soccer::Tuning;
    use retro_soccer::platform::dom::{DomNotifier, update_hud};
    use retro_soccer::platform::keyboard::KeyboardListener;
    use retro_soccer::platform::{FrameLoop, PageHide};
    use retro_soccer::renderer::CanvasSurface;

    /// Game instance holding all page state
    struct WebGame {
        controller: GameController<DomNotifier>,
        surface: Option<CanvasSurface>,
        frames: FrameLoop<i32>,
        keyboard: Option<KeyboardListener>,
        document: Document,
    }

    impl WebGame {
        fn update_hud(&self) {
            update_hud(&self.document, self.controller.score(), self.controller.phase());
        }

        /// Stop stepping and cancel the pending frame, if any
        fn halt(&mut self) {
            self.controller.pause();
            if let Some(handle) = self.frames.stop() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
                log::debug!("Cancelled pending frame {}", handle);
            }
            self.update_hud();
        }

        /// Remove the window key listeners
        fn detach_keyboard(&mut self) {
            if self.keyboard.take().is_none() {
                log::debug!("Keyboard listeners already detached");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Retro Soccer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::load();

        // Canvas is optional: without it the game still runs, it just isn't drawn
        let surface = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|canvas| {
                canvas.set_width(tuning.field.width as u32);
                canvas.set_height(tuning.field.height as u32);
                CanvasSurface::from_canvas(&canvas)
            });
        if surface.is_none() {
            log::warn!("No 2D canvas available, drawing disabled");
        }

        let controller = GameController::new(tuning, DomNotifier::new(document.clone()));
        let game = Rc::new(RefCell::new(WebGame {
            controller,
            surface,
            frames: FrameLoop::new(),
            keyboard: None,
            document: document.clone(),
        }));

        // Draw the idle pitch once
        {
            let mut g = game.borrow_mut();
            let WebGame {
                controller,
                surface,
                ..
            } = &mut *g;
            controller.redraw(surface.as_mut());
            g.update_hud();
        }

        setup_keyboard(&window, &game);
        setup_toggle_button(&document, game.clone());
        setup_teardown(&window, game.clone());

        log::info!("Retro Soccer ready");
    }

    fn setup_keyboard(window: &web_sys::Window, game: &Rc<RefCell<WebGame>>) {
        let down = Rc::downgrade(game);
        let up = Rc::downgrade(game);
        let listener = KeyboardListener::attach(
            window,
            move |key| {
                let Some(g) = down.upgrade() else {
                    return false;
                };
                let mut g = g.borrow_mut();
                g.controller.key_down(key)
            },
            move |key| {
                if let Some(g) = up.upgrade() {
                    g.borrow_mut().controller.key_up(key);
                }
            },
        );
        game.borrow_mut().keyboard = listener;
    }

    fn setup_toggle_button(document: &Document, game: Rc<RefCell<WebGame>>) {
        let Some(btn) = document.get_element_by_id("toggle-btn") else {
            log::warn!("No #toggle-btn element");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let schedule = {
                let mut g = game.borrow_mut();
                if g.controller.is_running() {
                    g.halt();
                    false
                } else {
                    g.controller.start();
                    g.update_hud();
                    g.frames.resume()
                }
            };
            if schedule {
                request_frame(&game);
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Page hide: stop the loop. Key listeners are dropped only on a real
    /// unload; a page kept in the back/forward cache keeps them for `pageshow`.
    fn setup_teardown(window: &web_sys::Window, game: Rc<RefCell<WebGame>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
            let hide = PageHide::from_persisted(event.persisted());
            let mut g = game.borrow_mut();
            g.halt();
            if hide.releases_listeners() {
                g.detach_keyboard();
            }
            log::info!("Page hidden ({:?})", hide);
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(game: &Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let weak = Rc::downgrade(game);
        let closure = Closure::once(move |_time: f64| {
            if let Some(game) = weak.upgrade() {
                game_loop(&game);
            }
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => game.borrow_mut().frames.scheduled(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(game: &Rc<RefCell<WebGame>>) {
        let reschedule = {
            let mut g = game.borrow_mut();
            g.frames.fired();

            let WebGame {
                controller,
                surface,
                ..
            } = &mut *g;
            let keep_going = controller.frame(surface.as_mut());

            g.update_hud();
            g.frames.should_reschedule(keep_going)
        };

        if reschedule {
            request_frame(game);
        }
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
    log::info!("Retro Soccer (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: dribble straight up the pitch until a goal or timeout
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use retro_soccer::platform::FrameLoop;
    use retro_soccer::renderer::RecordingSurface;
    use retro_soccer::sim::MoveKey;
    use retro_soccer::{GameController, LogNotifier, Tuning};

    const MAX_FRAMES: u64 = 60 * 30;

    let mut game = GameController::new(Tuning::load(), LogNotifier);
    let mut surface = RecordingSurface::new();
    let mut frames: FrameLoop<u64> = FrameLoop::new();

    game.start();
    game.press(MoveKey::Up);
    frames.resume();
    frames.scheduled(0);

    let mut handle = 0;
    while frames.is_pending() && handle < MAX_FRAMES {
        frames.fired();
        surface.take();
        let keep_going = game.frame(Some(&mut surface));

        if game.score() > 0 {
            frames.stop();
            game.pause();
        } else if frames.should_reschedule(keep_going) {
            handle += 1;
            frames.scheduled(handle);
        }
    }

    let state = game.state();
    log::info!(
        "Demo finished after {} frames: score {}, player at {:?}, ball at {:?}",
        state.time_ticks,
        state.score,
        state.player.pos,
        state.ball.pos
    );
    match surface.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize last frame: {}", e),
    }
}
