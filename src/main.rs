//! Nightscape entry point
//!
//! Web: paints onto the page's canvas from requestAnimationFrame.
//! Native: renders frames offline and writes them as PNG files.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use nightscape::renderer::CanvasSurface;
    use nightscape::{Animation, FrameRenderer, Scene, SceneSettings, SystemClock};

    /// Everything the frame callback needs
    struct App {
        animation: Animation<SystemClock>,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Nightscape starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas")?
            .dyn_into()?;

        canvas.set_width(canvas.client_width().max(1) as u32);
        canvas.set_height(canvas.client_height().max(1) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = SceneSettings::load_stored();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Scene seed: {}", seed);

        let scene = Scene::from_seed(&settings, seed);
        let renderer = FrameRenderer::new(scene, &settings);
        let app = Rc::new(RefCell::new(App {
            animation: Animation::new(renderer, SystemClock::new()),
            surface: CanvasSurface::new(canvas, ctx),
        }));

        request_animation_frame(app);
        log::info!("Nightscape running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut app = app.borrow_mut();
            let App { animation, surface } = &mut *app;
            animation.frame(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use nightscape::export;
    use nightscape::{
        Animation, Error, FrameInfo, FrameRenderer, ManualClock, Raster, Result, Scene,
        SceneSettings,
    };

    /// Render a procedural night landscape to PNG
    #[derive(Parser, Debug)]
    #[command(name = "nightscape", version, about)]
    pub struct Args {
        /// Scene seed (random when omitted)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Image width in pixels
        #[arg(long, default_value_t = 1280)]
        pub width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 720)]
        pub height: u32,

        /// Animation time of the first frame, in seconds
        #[arg(long, default_value_t = 0.0)]
        pub time: f64,

        /// Number of frames to render
        #[arg(long, default_value_t = 1)]
        pub frames: u64,

        /// Frame rate used to space frames in time
        #[arg(long, default_value_t = 30.0)]
        pub fps: f64,

        /// JSON settings file
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = ".")]
        pub out: PathBuf,

        /// Output file stem
        #[arg(long, default_value = export::DEFAULT_STEM)]
        pub title: String,

        /// Print the generated scene as JSON
        #[arg(long)]
        pub dump_scene: bool,
    }

    pub fn run(args: Args) -> Result<()> {
        let mut settings = match &args.config {
            Some(path) => SceneSettings::load(path)?,
            None => SceneSettings::default(),
        };
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        settings.validate()?;

        if args.width == 0 || args.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "image size must be non-zero, got {}x{}",
                args.width, args.height
            )));
        }
        if !(args.fps.is_finite() && args.fps > 0.0) {
            return Err(Error::InvalidSettings(format!("fps must be positive, got {}", args.fps)));
        }

        let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
        log::info!("Scene seed: {}", seed);
        let scene = Scene::from_seed(&settings, seed);

        if args.dump_scene {
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }

        std::fs::create_dir_all(&args.out)?;

        let clock = ManualClock::new(0.0);
        let mut animation = Animation::new(FrameRenderer::new(scene, &settings), clock.clone());
        clock.set(args.time);

        let frames = args.frames.max(1);
        let step = 1.0 / args.fps;
        let mut raster = Raster::new(args.width, args.height);
        let mut failure = None;

        animation.run(&mut raster, |frame: &FrameInfo, surface: &Raster| {
            let index = (frames > 1).then_some(frame.index);
            let path = args.out.join(export::file_name(&args.title, index));
            if let Err(e) = export::save_png(surface, &path) {
                failure = Some(e);
                return false;
            }
            log::info!("Frame {} ({:.3}s) -> {}", frame.index, frame.elapsed, path.display());

            clock.advance(step);
            frame.index + 1 < frames
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Nightscape (native) starting...");

    let args = native::Args::parse();
    if let Err(e) = native::run(args) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
