//! Net Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use net_pong::render::{draw_frame, DrawSurface, SCORE_FONT};
    use net_pong::sim::{tick, GameState};

    /// [`DrawSurface`] backed by a canvas 2D context
    ///
    /// Styles (white fill/stroke, score font) are set once at creation and
    /// survive `clear_rect`, so per-frame drawing is pure geometry.
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        fn new(ctx: CanvasRenderingContext2d) -> Self {
            ctx.set_fill_style_str("#fff");
            ctx.set_stroke_style_str("#fff");
            ctx.set_font(SCORE_FONT);
            Self { ctx }
        }

        fn set_dash(&self, dash: &[f32]) {
            let segments = js_sys::Array::new();
            for &d in dash {
                segments.push(&JsValue::from_f64(d as f64));
            }
            if let Err(e) = self.ctx.set_line_dash(&segments) {
                log::warn!("set_line_dash failed: {e:?}");
            }
        }
    }

    impl DrawSurface for CanvasSurface {
        fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn dashed_line(&mut self, from: (f32, f32), to: (f32, f32), dash: &[f32]) {
            self.set_dash(dash);
            self.ctx.begin_path();
            self.ctx.move_to(from.0 as f64, from.1 as f64);
            self.ctx.line_to(to.0 as f64, to.1 as f64);
            self.ctx.stroke();
            self.set_dash(&[]);
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn text(&mut self, s: &str, x: f32, y: f32) {
            if let Err(e) = self.ctx.fill_text(s, x as f64, y as f64) {
                log::warn!("fill_text failed: {e:?}");
            }
        }
    }

    /// Game instance shared between the frame loop and the input handlers
    ///
    /// Both run on the browser main thread and never concurrently, so a
    /// `RefCell` is all the synchronization needed.
    struct Game {
        state: GameState,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Net Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the displayed size so simulation
        // coordinates and pointer coordinates agree
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, width as f32, height as f32),
            surface: CanvasSurface::new(ctx),
        }));

        log::info!("Game initialized: {width}x{height}, seed {seed}");

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Net Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move drives the player paddle directly: event-driven, not
        // frame-driven, and only the latest position matters
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().state.set_player_center(y);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let g = &mut *game.borrow_mut();
            tick(&mut g.state);
            draw_frame(&g.state, &mut g.surface);
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
    log::info!("Net Pong (native) starting...");
    log::info!("The game is web-only - run with `trunk serve` for the browser version");

    // Headless smoke run so the native binary does something useful
    smoke_sim();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_sim() {
    use net_pong::consts::{BALL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use net_pong::sim::{tick, GameState};

    let mut state = GameState::new(42, DEFAULT_WIDTH, DEFAULT_HEIGHT);

    for _ in 0..10_000 {
        // Crude stand-in for the pointer: mirror the ball
        let target = state.ball.center().y;
        state.set_player_center(target);
        tick(&mut state);

        assert!(state.ball.pos.y >= 0.0);
        assert!(state.ball.pos.y + BALL_SIZE <= state.height);
    }

    println!(
        "✓ 10000 frames simulated, score {} : {}",
        state.player_score, state.ai_score
    );
}
