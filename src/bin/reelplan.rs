use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelplan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each scene's start and duration plus the reconciled total.
    Schedule(ScheduleArgs),
    /// Print what is on screen at one frame, as JSON.
    Frame(FrameArgs),
    /// Print the composition registration for the host, as JSON.
    Register(RegisterArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input video config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory audio references resolve against (defaults to the config's directory).
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct RegisterArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Composition id (a-z, A-Z, 0-9 and '-').
    #[arg(long)]
    id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Register(args) => cmd_register(args),
    }
}

fn register(input: &InputArgs, id: &str) -> anyhow::Result<reelplan::CompositionRegistration> {
    let config = reelplan::VideoConfig::from_path(&input.in_path)
        .with_context(|| format!("load video config '{}'", input.in_path.display()))?;

    let assets_root = match &input.assets_root {
        Some(root) => root.clone(),
        None => input
            .in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };
    let probe = reelplan::FfprobeAudioProbe::new(assets_root);

    let registration = pollster::block_on(reelplan::register_composition(id, config, &probe))
        .with_context(|| format!("register composition '{id}'"))?;
    Ok(registration)
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let reg = register(&args.input, "Preview")?;
    let plan = reg.plan();

    let mut out = std::io::stdout().lock();
    if args.json {
        let scenes: Vec<_> = plan
            .schedule()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "kind": s.kind,
                    "start": s.start,
                    "duration": s.duration,
                    "visible": plan.has_content(s.kind)
                        && !plan.render_range(s.kind).is_empty(),
                })
            })
            .collect();
        let doc = serde_json::json!({
            "scenes": scenes,
            "contentTotal": reg.timing.content_total,
            "durationInFrames": reg.duration_in_frames,
            "audio": reg.timing.audio,
        });
        serde_json::to_writer_pretty(&mut out, &doc).context("write schedule JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<14} {:>7} {:>9}", "scene", "start", "duration")?;
    for scene in plan.schedule().iter() {
        let marker = if plan.has_content(scene.kind) {
            ""
        } else {
            " (skipped)"
        };
        writeln!(
            out,
            "{:<14} {:>7} {:>9}{marker}",
            scene.kind.name(),
            scene.start.0,
            scene.duration
        )?;
    }
    writeln!(out, "content total: {}", reg.timing.content_total)?;
    writeln!(
        out,
        "duration: {} frames ({:.2}s)",
        reg.duration_in_frames,
        reg.fps.frames_to_secs(reg.duration_in_frames)
    )?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let reg = register(&args.input, "Preview")?;
    let view = reg
        .plan()
        .eval_frame(reelplan::FrameIndex(args.frame))
        .with_context(|| format!("evaluate frame {}", args.frame))?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &view).context("write frame JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_register(args: RegisterArgs) -> anyhow::Result<()> {
    let reg = register(&args.input, &args.id)?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &reg).context("write registration JSON")?;
    writeln!(out)?;
    eprintln!(
        "registered {} ({} frames)",
        reg.id, reg.duration_in_frames
    );
    Ok(())
}
