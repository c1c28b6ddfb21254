use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use seascape_input::{Action, InputDispatcher};
use seascape_kernel::SceneContext;
use seascape_render::{DebugTextRenderer, FrameUniforms, Renderer, SceneConfig};
use seascape_tools::SceneInspector;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seascape-cli", about = "CLI tool for the seascape demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the motion model headless and print the final frame
    Simulate {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Comma-separated key presses, one per frame: accelerate, brake or idle
        #[arg(short, long, default_value = "")]
        actions: String,
        /// JSON scene configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the scene summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load a glTF model and print its geometry statistics
    Model {
        /// Path to the .gltf file
        #[arg(default_value = seascape_assets::DEFAULT_MODEL_PATH)]
        path: PathBuf,
    },
}

/// One frame of scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Press(Action),
}

impl FromStr for Step {
    type Err = seascape_input::InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("idle") {
            return Ok(Step::Idle);
        }
        s.parse().map(Step::Press)
    }
}

fn parse_steps(list: &str) -> Result<Vec<Step>, seascape_input::InputError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// One line per bound key: the action it publishes and how many handlers
/// listen for its press and release.
fn binding_lines(dispatcher: &InputDispatcher<SceneContext>) -> Vec<String> {
    dispatcher
        .bindings()
        .iter()
        .map(|(key, action)| {
            format!(
                "{key} ({}) -> {action}: {} on press, {} on release",
                key.0,
                dispatcher.subscriber_count(action.pressed()),
                dispatcher.subscriber_count(action.released()),
            )
        })
        .collect()
}

/// Drive a scene through the input dispatcher, pressing and releasing the
/// bound key for each scripted step before that frame's update.
fn simulate(frames: u64, steps: &[Step]) -> anyhow::Result<SceneContext> {
    let mut dispatcher = InputDispatcher::default();
    SceneContext::bind_controls(&mut dispatcher);
    let mut scene = SceneContext::new();

    for frame in 0..frames {
        let step = usize::try_from(frame)
            .ok()
            .and_then(|i| steps.get(i))
            .copied()
            .unwrap_or(Step::Idle);
        if let Step::Press(action) = step {
            let Some(key) = dispatcher.bindings().key_for(action) else {
                bail!("no key bound to {action}");
            };
            dispatcher.on_key_down(key, &mut scene);
            dispatcher.on_key_up(key, &mut scene);
        }
        scene.update();
    }

    tracing::debug!(frames, steps = steps.len(), "simulation finished");
    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("seascape-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", SceneInspector::summary(&SceneContext::new()));
            println!("input: {}", seascape_input::crate_info());
            let mut dispatcher = InputDispatcher::default();
            SceneContext::bind_controls(&mut dispatcher);
            for line in binding_lines(&dispatcher) {
                println!("  {line}");
            }
            println!("assets: {}", seascape_assets::crate_info());
            println!("render: {}", seascape_render::crate_info());
            println!("tools: {}", seascape_tools::crate_info());
        }
        Commands::Simulate {
            frames,
            actions,
            config,
            json,
        } => {
            let steps = parse_steps(&actions)?;
            let config = match &config {
                Some(path) => SceneConfig::load(path)
                    .with_context(|| format!("failed to load scene config {}", path.display()))?,
                None => SceneConfig::default(),
            };

            let scene = simulate(frames, &steps)?;

            if json {
                let summary = SceneInspector::summary(&scene);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let frame = FrameUniforms::new(scene.scroll(), config.sky);
                print!(
                    "{}",
                    DebugTextRenderer::new().render(&scene, &frame, &config.view)
                );
            }
        }
        Commands::Model { path } => {
            let model = seascape_assets::load_scene_model(&path)
                .with_context(|| format!("failed to load scene model {}", path.display()))?;
            println!("{}", SceneInspector::model_info(&model));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seascape_kernel::MotionModel;

    #[test]
    fn parses_step_lists() {
        let steps = parse_steps("accelerate, idle,BRAKE").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Press(Action::Accelerate),
                Step::Idle,
                Step::Press(Action::Brake)
            ]
        );
        assert!(parse_steps("").unwrap().is_empty());
        assert!(parse_steps("accelerate,jump").is_err());
    }

    #[test]
    fn binding_lines_show_wired_handlers() {
        let mut dispatcher = InputDispatcher::default();
        SceneContext::bind_controls(&mut dispatcher);
        assert_eq!(
            binding_lines(&dispatcher),
            vec![
                "S (83) -> brake: 1 on press, 0 on release",
                "W (87) -> accelerate: 1 on press, 0 on release",
            ]
        );
    }

    #[test]
    fn idle_run_only_drifts() {
        let scene = simulate(10, &[]).unwrap();
        assert_eq!(scene.frame(), 10);
        assert!(!scene.motion.is_moving());
        assert_eq!(scene.scroll().travel, 0.0);
    }

    #[test]
    fn scripted_presses_match_direct_calls() {
        let steps = [
            Step::Press(Action::Accelerate),
            Step::Press(Action::Accelerate),
            Step::Idle,
            Step::Press(Action::Brake),
        ];
        let scene = simulate(6, &steps).unwrap();

        let mut expected = MotionModel::new();
        expected.accelerate();
        expected.accelerate();
        expected.brake();
        assert_eq!(scene.motion.state(), expected.state());
        assert_eq!(scene.frame(), 6);
        assert!(scene.scroll().travel > 0.0);
    }
}
