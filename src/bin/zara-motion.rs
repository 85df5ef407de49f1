use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zara_motion::{Fps, Page, Scenario, Trigger};

#[derive(Parser, Debug)]
#[command(name = "zara-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario and emit one snapshot per frame as JSON.
    Simulate(SimulateArgs),
    /// List every animated element with its trigger and timing.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Page definition JSON (defaults to the built-in landing page).
    #[arg(long)]
    page: Option<PathBuf>,

    /// Override the scenario's frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Page definition JSON (defaults to the built-in landing page).
    #[arg(long)]
    page: Option<PathBuf>,

    /// Print the page definition as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn read_page(path: Option<&Path>) -> anyhow::Result<Page> {
    let Some(path) = path else {
        return Ok(Page::zara()?);
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open page '{}'", path.display()))?;
    Page::from_json(&s).with_context(|| format!("parse page '{}'", path.display()))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut scenario = Scenario::load(&args.in_path)
        .with_context(|| format!("load scenario '{}'", args.in_path.display()))?;
    if let Some(fps) = args.fps {
        scenario.fps = Fps::new(fps, 1)?;
    }
    let page = read_page(args.page.as_deref())?;

    let frames = scenario.run(page)?;
    let digest = frames
        .iter()
        .fold(0u64, |acc, f| acc.rotate_left(5) ^ f.fingerprint());

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &frames).context("write snapshots")?;
            w.flush().context("flush snapshots")?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            serde_json::to_writer_pretty(&mut w, &frames).context("write snapshots")?;
            writeln!(w)?;
        }
    }

    eprintln!("frames={} digest={digest:016x}", frames.len());
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let page = read_page(args.page.as_deref())?;
    if args.json {
        println!("{}", page.to_json_pretty()?);
        return Ok(());
    }

    println!(
        "{:<28} {:<9} {:<22} {:>6} {:>6} {:>7}",
        "element", "section", "trigger", "delay", "dur", "done"
    );
    for el in &page.elements {
        let trigger = match &el.trigger {
            Trigger::Mount => "mount".to_string(),
            Trigger::InView { observer } => format!("view:{observer}"),
        };
        println!(
            "{:<28} {:<9} {:<22} {:>6.2} {:>6.2} {:>7.2}",
            el.key,
            format!("{:?}", el.section).to_lowercase(),
            trigger,
            el.reveal.delay,
            el.reveal.duration,
            el.reveal.delay + el.reveal.duration,
        );
    }
    for deco in &page.decorations {
        println!(
            "{:<28} {:<9} {:<22} {:>6.2} {:>6.2} {:>7}",
            deco.key,
            format!("{:?}", deco.section).to_lowercase(),
            "loop",
            deco.cycle.delay,
            deco.cycle.period,
            "-",
        );
    }
    Ok(())
}
