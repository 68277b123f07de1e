use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scriptreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a reel in the terminal (the built-in showcase by default).
    Play(PlayArgs),
    /// Write the built-in showcase reel as JSON.
    Dump(DumpArgs),
    /// Parse and validate a reel JSON.
    Validate(ValidateArgs),
    /// Print the scene table for a reel.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Reel JSON to play; omit for the built-in showcase.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Speed multiplier (2.0 plays twice as fast).
    #[arg(long, default_value_t = 1.0)]
    rate: f64,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output path; omit for stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Reel JSON to check.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Reel JSON; omit for the built-in showcase.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn read_reel_json(path: &Path) -> anyhow::Result<scriptreel::Reel> {
    let f = File::open(path).with_context(|| format!("open reel '{}'", path.display()))?;
    let r = BufReader::new(f);
    let reel: scriptreel::Reel = serde_json::from_reader(r).with_context(|| "parse reel JSON")?;
    Ok(reel)
}

fn load_or_showcase(path: Option<&Path>) -> anyhow::Result<scriptreel::Reel> {
    match path {
        Some(p) => read_reel_json(p),
        None => Ok(scriptreel::wellness_reel()),
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    if !args.rate.is_finite() || args.rate <= 0.0 {
        anyhow::bail!("--rate must be a positive number");
    }

    let reel = load_or_showcase(args.in_path.as_deref())?;
    let mut seq = scriptreel::Sequencer::new(reel)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", scriptreel::render_term::intro_card(seq.reel()))?;
    std::thread::sleep(Duration::from_millis(800));

    // The reel runs on a virtual clock: real time since t0, scaled by --rate.
    // Sequencer and evaluator both see the same virtual instants, so scene
    // pacing and in-scene animation stay in sync at any rate.
    let t0 = Instant::now();
    let virtual_now =
        |real: Instant| t0 + Duration::from_secs_f64((real - t0).as_secs_f64() * args.rate);

    const TICK: Duration = Duration::from_millis(33);

    seq.start(virtual_now(Instant::now()));
    loop {
        let now = virtual_now(Instant::now());
        let events = seq.poll(now);
        if events.contains(&scriptreel::SequencerEvent::Completed) {
            break;
        }

        let state = seq.state();
        let frame =
            scriptreel::Evaluator::eval_scene(seq.reel(), state.scene, seq.scene_clock(now))?;
        let view = scriptreel::render_term::scene_view(
            &frame,
            seq.reel().scenes.len(),
            seq.progress(now),
        );

        write!(stdout, "\x1b[2J\x1b[H{view}")?;
        stdout.flush()?;

        std::thread::sleep(TICK);
    }

    writeln!(stdout, "\x1b[2J\x1b[H{}", scriptreel::render_term::end_card(seq.reel()))?;
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let reel = scriptreel::wellness_reel();
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&path)
                .with_context(|| format!("create '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, &reel).with_context(|| "write reel JSON")?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let s = serde_json::to_string_pretty(&reel)?;
            println!("{s}");
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let reel = read_reel_json(&args.in_path)?;
    reel.validate()?;
    println!(
        "ok: '{}', {} scenes, {} ms total",
        reel.title,
        reel.scenes.len(),
        reel.total_duration_ms()
    );
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let reel = load_or_showcase(args.in_path.as_deref())?;
    reel.validate()?;

    println!("{} — {} scenes", reel.title, reel.scenes.len());
    println!("{:>3}  {:>8}  {:>8}  name", "#", "start", "duration");
    for (i, scene) in reel.scenes.iter().enumerate() {
        println!(
            "{:>3}  {:>6}ms  {:>6}ms  {}",
            i,
            reel.scene_start_ms(i),
            scene.duration_ms,
            scene.name
        );
    }
    println!("total: {} ms", reel.total_duration_ms());
    Ok(())
}
