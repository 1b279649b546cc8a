//! Command runner - everything `main` does after logging is up.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};

use crate::cli::{Args, Command, Dataset, SimulateArgs, SliderKind};
use crate::config::Settings;
use crate::core::{ChangeCause, EventBus, SlideChange, Slider};
use crate::data::{self, CONSTELLATION, HERO_SLIDES, HOBBIES};
use crate::design::{Breakpoint, tokens};
use crate::motion::{AnimationScope, Motion, Stage, Target, TextRevealOptions};
use crate::paths::{self, PathConfig, SETTINGS_FILE};

/// Run the parsed command.
pub fn run(args: Args) -> Result<()> {
    let path_config = PathConfig::from_env_and_cli(args.config_dir.clone());
    info!(
        "Config path: {}",
        paths::config_file(SETTINGS_FILE, &path_config).display()
    );
    let settings = Settings::load_or_default(&path_config);

    match args.command {
        Command::Validate => validate(),
        Command::Token { path } => {
            let value = tokens::lookup(&path).with_context(|| format!("Unknown token '{}'", path))?;
            println!("{}", value);
            Ok(())
        }
        Command::Breakpoint { width } => {
            let bp = Breakpoint::for_width(width);
            println!("{} (min-width {}px)", bp, bp.min_width());
            Ok(())
        }
        Command::Slides { dataset } => {
            let json = match dataset {
                Dataset::Hero => serde_json::to_string_pretty(&*HERO_SLIDES),
                Dataset::Hobbies => serde_json::to_string_pretty(&*HOBBIES),
                Dataset::Skills => serde_json::to_string_pretty(&*CONSTELLATION),
            }
            .context("Failed to serialize content")?;
            println!("{}", json);
            Ok(())
        }
        Command::Simulate(sim) => {
            let report = simulate(&settings, &sim)?;
            print!("{}", report.render());
            Ok(())
        }
    }
}

fn validate() -> Result<()> {
    let problems = data::validate_all();
    for (dataset, problem) in &problems {
        println!("{}: {}", dataset, problem);
    }
    if !problems.is_empty() {
        bail!("{} content problems", problems.len());
    }
    println!(
        "ok: {} slides, {} hobbies, {} skills, {} lines",
        HERO_SLIDES.len(),
        HOBBIES.len(),
        CONSTELLATION.skills.len(),
        CONSTELLATION.lines.len()
    );
    Ok(())
}

/// Timed input to the simulated slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    GoTo(usize),
    /// A pause window opens or closes here
    PauseEdge,
}

/// Outcome of a simulated run
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub slider: String,
    pub slides: usize,
    /// `(ms, change)` in order
    pub changes: Vec<(u64, SlideChange)>,
    /// `(ms, reason)` for rejected navigation
    pub rejected: Vec<(u64, String)>,
    pub final_index: usize,
    pub events_published: usize,
    /// Tweens still running after unmount; always 0 unless something leaked
    pub leaked_tweens: usize,
}

impl SimulationReport {
    pub fn render(&self) -> String {
        let mut out = format!("{} slider, {} slides\n", self.slider, self.slides);
        for (ms, change) in &self.changes {
            let cause = match change.cause {
                ChangeCause::Autoplay => "autoplay",
                ChangeCause::Navigation => "goto",
            };
            out.push_str(&format!(
                "{:>8}ms  {} -> {}  {:<4}  {}\n",
                ms,
                change.from,
                change.to,
                change.direction.as_str(),
                cause
            ));
        }
        for (ms, reason) in &self.rejected {
            out.push_str(&format!("{:>8}ms  rejected: {}\n", ms, reason));
        }
        out.push_str(&format!(
            "final slide {}, {} events, {} leaked tweens\n",
            self.final_index, self.events_published, self.leaked_tweens
        ));
        out
    }
}

/// Drive a slider on a simulated clock: gotos and pause edges apply at their
/// exact time, autoplay is polled every `step`.
pub fn simulate(settings: &Settings, sim: &SimulateArgs) -> Result<SimulationReport> {
    if sim.step == 0 {
        bail!("Simulation step must be positive");
    }
    let env = Arc::new(settings.environment());
    if sim.reduced_motion {
        env.set_reduced_motion(true);
    }
    let stage = Stage::new(settings.viewport.width as f32, settings.viewport.height as f32);
    let motion = Motion::new(Arc::new(stage.clone()), env);

    let (mut options, slides, titles) = match sim.slider {
        SliderKind::Hero => (settings.hero_options(), HERO_SLIDES.len(), ".hero-title"),
        SliderKind::Hobbies => (settings.hobbies_options(), HOBBIES.len(), ".hobby-title"),
    };
    if let Some(autoplay) = sim.autoplay {
        options.autoplay = autoplay;
    }
    let viewport_height = settings.viewport.height as f32;
    if let Some(Target::Selector(sel)) = &options.container {
        stage.add_element(&[sel.as_str()], 0.0, viewport_height);
    }
    stage.add_element(&[titles], 120.0, 80.0);

    let mut inputs: Vec<(u64, Input)> = sim.gotos.iter().map(|g| (g.at_ms, Input::GoTo(g.index))).collect();
    for p in &sim.pauses {
        inputs.push((p.from_ms, Input::PauseEdge));
        inputs.push((p.to_ms, Input::PauseEdge));
    }
    inputs.sort_by_key(|(at, _)| *at);
    debug!("Simulation inputs: {:?}", inputs);

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);
    let bus = EventBus::new();
    let mut slider = Slider::new(slides, options, motion.clone(), t0)?.with_emitter(bus.emitter());

    let mut scope = AnimationScope::new(slider.name().to_string());
    scope.add(motion.text_reveal(&Target::selector(titles), TextRevealOptions::default()));

    let mut report = SimulationReport {
        slider: slider.name().to_string(),
        slides,
        ..SimulationReport::default()
    };

    let mut pending = inputs.into_iter().peekable();
    let mut ms = 0;
    while ms <= sim.duration {
        while let Some((input_ms, input)) = pending.next_if(|(input_ms, _)| *input_ms <= ms) {
            match input {
                Input::GoTo(index) => match slider.go_to(index, at(input_ms)) {
                    Ok(Some(change)) => report.changes.push((input_ms, change)),
                    Ok(None) => {}
                    Err(e) => report.rejected.push((input_ms, format!("{:#}", e))),
                },
                Input::PauseEdge => {
                    let paused = sim.pauses.iter().any(|p| p.contains(input_ms));
                    slider.set_paused(paused, at(input_ms));
                }
            }
        }
        if let Some(change) = slider.tick(at(ms)) {
            report.changes.push((ms, change));
        }
        stage.advance(Duration::from_millis(sim.step));
        ms += sim.step;
    }
    if pending.peek().is_some() {
        warn!("Inputs after {}ms were never applied", sim.duration);
    }

    report.final_index = slider.current();
    slider.unmount();
    scope.cancel_all();
    report.events_published = bus.poll().len();
    report.leaked_tweens = stage.live_tweens();
    info!(
        "Simulated {}ms: {} changes, {} rejected",
        sim.duration,
        report.changes.len(),
        report.rejected.len()
    );
    Ok(report)
}
