use std::time::Instant;

use effects_core::{
    Canvas, EffectEngine, EffectKind, EngineConfig, ManualClock, Paint, Path, Rgba, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEWPORT_WIDTH: i32 = 1280;
const VIEWPORT_HEIGHT: i32 = 720;
const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES_PER_EFFECT: usize = 600;

/// Canvas that only counts what it is asked to draw.
#[derive(Default, Debug, Clone, Copy)]
struct TallyCanvas {
    clears: usize,
    texts: usize,
    paths: usize,
    path_cmds: usize,
    circles: usize,
}

impl Canvas for TallyCanvas {
    fn clear(&mut self, _color: Rgba) {
        self.clears += 1;
    }

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _paint: &Paint) {
        self.texts += 1;
    }

    fn draw_path(&mut self, path: &Path, _paint: &Paint) {
        self.paths += 1;
        self.path_cmds += path.len();
    }

    fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32, _paint: &Paint) {
        self.circles += 1;
    }
}

fn run_effect(
    engine: &mut EffectEngine<StdRng, ManualClock>,
    clock: &ManualClock,
    viewport: Viewport,
) -> TallyCanvas {
    let mut tally = TallyCanvas::default();
    let mut peak_live = 0usize;
    let mut collisions = 0usize;
    for _ in 0..FRAMES_PER_EFFECT {
        clock.advance_secs(FRAME_DT);
        engine.render_frame(&mut tally, viewport);
        let live: usize = match engine.current() {
            EffectKind::MatrixRain => engine
                .matrix()
                .columns()
                .iter()
                .map(|c| c.history.len())
                .sum(),
            EffectKind::RecursiveUniverse => engine.universe().shapes().len(),
            EffectKind::ButterflyEffect => {
                collisions += engine.butterflies().last_collisions();
                engine.butterflies().butterflies().len()
            }
        };
        peak_live = peak_live.max(live);
    }
    log::info!(
        "[{}] peak live={} collisions={} texts={} paths={} path_cmds={} circles={}",
        engine.current(),
        peak_live,
        collisions,
        tally.texts,
        tally.paths,
        tally.path_cmds,
        tally.circles
    );
    tally
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = ManualClock::new();
    let viewport = Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let mut engine =
        EffectEngine::with_config(StdRng::from_entropy(), clock.clone(), EngineConfig::default())?;
    log::info!(
        "headless run: {}x{}, {} frames per effect",
        viewport.width,
        viewport.height,
        FRAMES_PER_EFFECT
    );

    let started = Instant::now();
    let mut frames = 0usize;
    for _ in 0..EffectKind::ALL.len() {
        let tally = run_effect(&mut engine, &clock, viewport);
        frames += tally.clears;
        engine.advance();
    }
    let elapsed = started.elapsed();
    log::info!(
        "{} frames in {:.2?} ({:.3} ms/frame)",
        frames,
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / frames.max(1) as f64
    );
    Ok(())
}
