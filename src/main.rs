use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use gasket::cli::Cli;
use gasket::config::GasketConfig;
use gasket::headless::{dump_mesh, run_headless, HeadlessRenderer};
use gasket::renderer::GasketRenderer;
use gasket::session::Session;
use gasket::traits::RenderCollaborator;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 800;

struct App {
    session: Session,
    window: Option<Arc<Window>>,
    renderer: Option<GasketRenderer>,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            window: None,
            renderer: None,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        if let Err(e) = self.session.tick() {
            error!("Animation halted: {}", e);
            if !self.session.is_paused() {
                self.session.toggle_pause();
            }
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        renderer.set_fps(self.fps);
        if let Err(e) = renderer.present(&self.session.frame()) {
            error!("Render error: {}", e);
        }

        for event in renderer.drain_events() {
            if let Err(e) = self.session.apply(event) {
                warn!("Ignored {:?}: {}", event, e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Sierpinski Gasket")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(GasketRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(renderer) = &mut self.renderer {
            if renderer.handle_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config(cli: &Cli) -> Result<GasketConfig> {
    let mut config = match &cli.config {
        Some(path) => GasketConfig::load(path)?,
        None => GasketConfig::default(),
    };
    cli.apply_to(&mut config)?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut session = Session::new(&config)?;

    if let Some(path) = &cli.dump_mesh {
        dump_mesh(&session, path)?;
    }

    if cli.headless {
        let mut renderer = HeadlessRenderer::new(cli.log_every);
        let report = run_headless(&mut session, &mut renderer, cli.ticks)?;
        println!("Ticks:      {}", report.ticks);
        println!("Frames:     {}", report.frames);
        match report.free_roam_at {
            Some(tick) => println!("Free roam:  tick {}", tick),
            None => println!("Free roam:  not reached"),
        }
        println!("Phase:      {}", report.phase);
        let t = report.transform;
        println!(
            "Transform:  theta=({:.2}, {:.2}, {:.2}) scale={:.3} trans=({:.4}, {:.4})",
            t.theta[0], t.theta[1], t.theta[2], t.scale, t.trans[0], t.trans[1]
        );
        return Ok(());
    }

    if cli.dump_mesh.is_some() {
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session);

    info!("Sierpinski Gasket - Start in the panel, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
