//! Ledge Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use ledge_runner::Settings;
    use ledge_runner::Tuning;
    use ledge_runner::assets::AssetCatalog;
    use ledge_runner::audio::{self, AudioService, SoundBank, WebAudio};
    use ledge_runner::consts::*;
    use ledge_runner::renderer::pipeline::{letterbox, viewport_to_screen};
    use ledge_runner::renderer::{DrawList, RenderState, TextAnchor, css_rgba, shapes};
    use ledge_runner::sim::{GameState, TickInput, tick};
    use ledge_runner::ui::{self, ScreenOptions};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        overlay: Option<CanvasRenderingContext2d>,
        overlay_size: (u32, u32),
        audio: WebAudio,
        catalog: AssetCatalog,
        draw_list: DrawList,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        running: bool,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            let audio = WebAudio::new(
                SoundBank::default(),
                settings.effective_sfx_volume(),
                settings.effective_music_volume(),
            );
            Self {
                state: GameState::new(Tuning::default(), settings.music_on),
                settings,
                render_state: None,
                overlay: None,
                overlay_size: (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                audio,
                catalog: AssetCatalog::default(),
                draw_list: DrawList::new(),
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                running: true,
            }
        }

        /// Run simulation ticks and hand queued sounds to the audio device
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.restart = false;
                self.input.cancel = false;
            }

            self.flush_audio();
        }

        fn flush_audio(&mut self) {
            audio::dispatch(self.state.drain_cues(), &mut self.audio);

            if self.state.music_on != self.settings.music_on {
                self.settings.music_on = self.state.music_on;
                self.settings.save();
            }
        }

        /// Render the current frame: shapes on the GPU, text on the overlay
        fn render(&mut self) {
            self.draw_list.reset();
            let options = ScreenOptions {
                show_hitboxes: self.settings.show_hitboxes,
            };
            ui::draw(&self.state, &mut self.draw_list, options);

            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::tessellate(&self.draw_list, &self.catalog);
                match render_state.render(&vertices) {
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

            if let Some(ref ctx) = self.overlay {
                draw_text_overlay(ctx, &self.draw_list, self.overlay_size);
            }
        }

        /// Stop the loop after the menu's exit button
        fn shut_down(&mut self) {
            self.running = false;
            self.audio.stop_music();
            if let Some(ref ctx) = self.overlay {
                let (w, h) = self.overlay_size;
                ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
            }
            log::info!("Ledge Runner stopped");
        }
    }

    /// Draw recorded text commands onto the 2D overlay, letterboxed like the GPU view
    fn draw_text_overlay(ctx: &CanvasRenderingContext2d, list: &DrawList, size: (u32, u32)) {
        let (w, h) = size;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        let (offset, scale) = letterbox(size);
        let scale = scale as f64;
        ctx.set_transform(scale, 0.0, 0.0, scale, offset.x as f64, offset.y as f64)
            .ok();

        for (text, pos, style) in list.texts() {
            ctx.set_font(&format!("{}px sans-serif", style.size));
            match style.anchor {
                TextAnchor::TopLeft => {
                    ctx.set_text_align("left");
                    ctx.set_text_baseline("top");
                }
                TextAnchor::Center => {
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                }
            }
            let (x, y) = (pos.x as f64, pos.y as f64);
            if let Some((width, color)) = style.outline {
                ctx.set_line_width(width as f64 * 2.0);
                ctx.set_stroke_style_str(&css_rgba(color));
                ctx.stroke_text(text, x, y).ok();
            }
            ctx.set_fill_style_str(&css_rgba(style.color));
            ctx.fill_text(text, x, y).ok();
        }
    }

    fn canvas_by_id(document: &web_sys::Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no #{} element", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)))
    }

    /// Size a canvas's backing store to its CSS size times the pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement, dpr: f64) -> (u32, u32) {
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Ledge Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas = canvas_by_id(&document, "canvas")?;
        let hud = canvas_by_id(&document, "hud")?;

        let dpr = window.device_pixel_ratio();
        let (width, height) = fit_canvas(&canvas, dpr);
        let overlay_size = fit_canvas(&hud, dpr);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings)));

        // 2D overlay for text
        {
            let ctx = hud
                .get_context("2d")?
                .ok_or("2d context unavailable")?
                .dyn_into::<CanvasRenderingContext2d>()?;
            let mut g = game.borrow_mut();
            g.overlay = Some(ctx);
            g.overlay_size = overlay_size;
        }

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {}", e)))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&hud, game.clone())?;
        setup_focus_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Ledge Runner running!");
        Ok(())
    }

    fn setup_input_handlers(hud: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard: arrows are held, R and Escape are one-shot
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    "ArrowUp" => g.input.up = true,
                    "r" | "R" => g.input.restart = true,
                    "Escape" => g.input.cancel = true,
                    "h" | "H" => {
                        g.settings.show_hitboxes = !g.settings.show_hitboxes;
                        g.settings.save();
                        log::info!("Hitboxes: {}", g.settings.show_hitboxes);
                    }
                    _ => return,
                }
                event.prevent_default();
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    "ArrowUp" => g.input.up = false,
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer press - menu buttons
        {
            let hud_clone = hud.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let client = (
                    hud_clone.client_width().max(1) as u32,
                    hud_clone.client_height().max(1) as u32,
                );
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                if g.state.pointer_down(viewport_to_screen(pos, client)) {
                    g.flush_audio();
                }
            });
            hud.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                // Held keys never see their keyup once focus is gone
                g.input = TickInput::default();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            if g.state.quit_requested {
                g.shut_down();
            } else {
                g.render();
            }

            if !g.running {
                return;
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Ledge Runner failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ledge_runner::Tuning;

    env_logger::init();
    log::info!("Ledge Runner (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(std::path::Path::new(&path)),
        None => Tuning::default(),
    };

    headless::run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run without a window: start from the menu, run right and jump
/// until the run ends or time is up
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ledge_runner::Tuning;
    use ledge_runner::audio::{self, HeadlessAudio, SoundBank};
    use ledge_runner::renderer::DrawList;
    use ledge_runner::sim::{GamePhase, GameState, TickInput, tick};
    use ledge_runner::ui::{self, MenuAction, ScreenOptions};

    /// Ten seconds of simulated play
    const MAX_TICKS: u64 = 600;

    pub fn run(tuning: Tuning) {
        let mut state = GameState::new(tuning, true);
        let mut audio = HeadlessAudio::new(SoundBank::default());
        let mut frame = DrawList::new();

        state.apply_menu_action(MenuAction::Start);
        audio::dispatch(state.drain_cues(), &mut audio);

        let input = TickInput {
            right: true,
            up: true,
            ..Default::default()
        };
        while state.phase == GamePhase::Playing && state.time_ticks < MAX_TICKS {
            tick(&mut state, &input);
            audio::dispatch(state.drain_cues(), &mut audio);
        }

        frame.reset();
        ui::draw(&state, &mut frame, ScreenOptions::default());

        match (state.phase, state.last_loss) {
            (GamePhase::GameOver, Some(cause)) => {
                log::info!("Run ended after {} ticks: {:?}", state.time_ticks, cause)
            }
            (phase, _) => log::info!("Still {:?} after {} ticks", phase, state.time_ticks),
        }
        if let Some(hero) = state.world.as_ref().map(|w| &w.hero) {
            log::info!("Hero at ({:.1}, {:.1})", hero.body.pos.x, hero.body.pos.y);
        }
        log::info!(
            "{} sounds played, last frame had {} draw calls",
            audio.played.len(),
            frame.commands().len()
        );
    }
}
