//! Host simulator: runs the demo menu against an in-memory 128x64 panel
//! and logs frames as ASCII art. `LUMEN_INPUT=rotary` drives the menu
//! through the quadrature decoder instead of the event script.

use std::{
    env,
    fmt::Debug,
    thread,
    time::{Duration, Instant},
};

use log::{LevelFilter, error, info, trace, warn};
use lumen_core::app::App;
use lumen_hal::{
    FrameSurface,
    clock::{Clock, FnClock},
};

use demo::DemoMenu;
use knob::SimulatedKnob;
use script::{FrameInput, PacedInput};

#[path = "main/demo.rs"]
mod demo;
#[path = "main/knob.rs"]
mod knob;
#[path = "main/script.rs"]
mod script;

const SCREEN_LINE_BYTES: usize = 16;
const SCREEN_HEIGHT: usize = 64;

const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_FRAME_MS: u64 = 16;
const DEFAULT_DUMP_EVERY: u64 = 60;
/// Frames between scripted encoder events.
const NAV_INTERVAL_FRAMES: u64 = 45;

type Surface<C> = FrameSurface<SCREEN_LINE_BYTES, SCREEN_HEIGHT, C>;

struct RunSettings {
    frames: u64,
    frame_ms: u64,
    dump_every: u64,
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not a number, using {default}");
            default
        }),
        Err(_) => default,
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = RunSettings {
        frames: env_u64("LUMEN_FRAMES", DEFAULT_FRAMES),
        frame_ms: env_u64("LUMEN_FRAME_MS", DEFAULT_FRAME_MS),
        dump_every: env_u64("LUMEN_DUMP_EVERY", DEFAULT_DUMP_EVERY).max(1),
    };
    let source = env::var("LUMEN_INPUT").unwrap_or_else(|_| "script".into());
    info!(
        "lumen: {} frames at {} ms, dump every {}, input {source}",
        settings.frames, settings.frame_ms, settings.dump_every
    );

    let start = Instant::now();
    let clock = FnClock(move || start.elapsed().as_millis() as u64);
    let mut app = App::new(Surface::new(clock));
    let Ok(()) = app.begin();
    let menu = DemoMenu::install(&mut app);

    match source.trim() {
        "rotary" => match SimulatedKnob::new(script::DEMO_SCRIPT, NAV_INTERVAL_FRAMES) {
            Ok(mut knob) => run(&mut app, &menu, &mut knob, &settings),
            Err(err) => error!("lumen: rotary input unavailable: {err:?}"),
        },
        other => {
            if other != "script" {
                warn!("LUMEN_INPUT={other:?} is not `script` or `rotary`, using script");
            }
            let mut input = PacedInput::new(script::DEMO_SCRIPT, NAV_INTERVAL_FRAMES);
            run(&mut app, &menu, &mut input, &settings);
        }
    }
}

fn run<C, I>(app: &mut App<Surface<C>>, menu: &DemoMenu, input: &mut I, settings: &RunSettings)
where
    C: Clock,
    I: FrameInput,
    I::Error: Debug,
{
    let frame_budget = Duration::from_millis(settings.frame_ms);

    for frame in 0..settings.frames {
        let started = Instant::now();

        input.advance_frame();
        match app.process_inputs(input) {
            Ok(0) => {}
            Ok(_) => info!("frame {frame}: selected {:?}", menu.selected_text(app)),
            Err(err) => warn!("frame {frame}: input error {err:?}"),
        }

        let Ok(()) = app.frame();
        trace!(
            "frame {frame}: camera {:?} settled={}",
            app.camera().position(),
            app.camera().is_settled()
        );

        if frame % settings.dump_every == 0 {
            let mut art = String::new();
            if app.surface().write_ascii(&mut art).is_ok() {
                info!("frame {frame}\n{art}");
            }
        }

        if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!(
        "lumen: done after {} frames ({} presented), selection {:?}",
        app.frame_count(),
        app.surface().presented_frames(),
        menu.selected_text(app)
    );
}
