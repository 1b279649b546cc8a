use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};

// Build version with data summary
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Slides: ",
    crate::design::tokens::TOTAL_SLIDES,
    "\n",
    "Target: ",
    std::env::consts::ARCH,
    "-",
    std::env::consts::OS
);

/// Portfolio content, design tokens and motion runtime
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging to file (default: folio.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE", global = true)]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check slide, hobby and skill data for consistency
    Validate,

    /// Look up a design token by dotted path (e.g. color.accent.blue)
    Token {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Report the breakpoint for a viewport width
    Breakpoint {
        #[arg(value_name = "WIDTH")]
        width: u32,
    },

    /// Print content as JSON
    Slides {
        #[arg(value_enum, default_value_t = Dataset::Hero)]
        dataset: Dataset,
    },

    /// Run a slider against a simulated clock and print every change
    Simulate(SimulateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Hero,
    Hobbies,
    Skills,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKind {
    Hero,
    Hobbies,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Which slider to drive
    #[arg(long, value_enum, default_value_t = SliderKind::Hero)]
    pub slider: SliderKind,

    /// Simulated run length in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 20_000)]
    pub duration: u64,

    /// Clock step in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub step: u64,

    /// Navigate to INDEX at MS (repeatable)
    #[arg(long = "goto", value_name = "INDEX@MS")]
    pub gotos: Vec<GotoAt>,

    /// Pause between FROM and TO milliseconds (repeatable)
    #[arg(long = "pause", value_name = "FROM..TO")]
    pub pauses: Vec<PauseWindow>,

    /// Force reduced motion
    #[arg(long)]
    pub reduced_motion: bool,

    /// Force autoplay on or off
    #[arg(long, value_name = "BOOL")]
    pub autoplay: Option<bool>,
}

/// `--goto 3@2000`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoAt {
    pub index: usize,
    pub at_ms: u64,
}

impl FromStr for GotoAt {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (index, at) = s.split_once('@').ok_or_else(|| anyhow!("expected INDEX@MS, got '{}'", s))?;
        Ok(Self {
            index: index.trim().parse().with_context(|| format!("bad index in '{}'", s))?,
            at_ms: at.trim().parse().with_context(|| format!("bad time in '{}'", s))?,
        })
    }
}

/// `--pause 1000..4000`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseWindow {
    pub from_ms: u64,
    pub to_ms: u64,
}

impl PauseWindow {
    pub fn contains(&self, ms: u64) -> bool {
        (self.from_ms..self.to_ms).contains(&ms)
    }
}

impl FromStr for PauseWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (from, to) = s.split_once("..").ok_or_else(|| anyhow!("expected FROM..TO, got '{}'", s))?;
        let from_ms: u64 = from.trim().parse().with_context(|| format!("bad start in '{}'", s))?;
        let to_ms: u64 = to.trim().parse().with_context(|| format!("bad end in '{}'", s))?;
        if to_ms <= from_ms {
            bail!("pause window '{}' ends before it starts", s);
        }
        Ok(Self { from_ms, to_ms })
    }
}
