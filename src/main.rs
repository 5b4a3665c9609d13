//! `fightsheet`: writes placeholder fighter sprite sheets.
//!
//! With no arguments it generates every built-in fighter under `assets/`:
//!
//! ```sh
//! cargo run --release
//! cargo run -- --variant high --manifest
//! cargo run -- --verify
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use fightsheet::batch::run_batch;
use fightsheet::config::{DEFAULT_ASSETS_ROOT, GeneratorConfig};
use fightsheet::roster::{builtin_roster, load_roster};
use fightsheet::verify::verify_assets;
use fightsheet::{Result, Variant};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Low,
    High,
    All,
}

impl VariantArg {
    fn variants(self) -> Vec<Variant> {
        match self {
            VariantArg::Low => vec![Variant::Low],
            VariantArg::High => vec![Variant::High],
            VariantArg::All => Variant::ALL.to_vec(),
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Generate placeholder fighter sprite sheets")]
struct Cli {
    /// Directory that receives `fighters/<id>/<id>.png`.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ASSETS_ROOT)]
    assets_root: PathBuf,

    /// Which sheet generation to build.
    #[arg(long, value_enum, default_value_t = VariantArg::All)]
    variant: VariantArg,

    /// JSON roster to use instead of the built-in fighters.
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Also write `<id>.json` frame ranges beside each sheet.
    #[arg(long)]
    manifest: bool,

    /// Check existing sheets instead of generating them.
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some character failed or verification found problems.
fn run(cli: Cli) -> Result<bool> {
    let config = GeneratorConfig {
        assets_root: cli.assets_root,
        variants: cli.variant.variants(),
        write_manifest: cli.manifest,
    };

    let roster = match &cli.roster {
        Some(path) => load_roster(path)?,
        None => builtin_roster(&config.variants),
    };

    if cli.verify {
        let selected: Vec<_> = roster.into_iter().filter(|c| config.includes(c.variant)).collect();
        let report = verify_assets(&config.assets_root, &selected)?;
        for problem in &report.problems {
            error!("{problem}");
        }
        info!("verified {} sheet(s), {} problem(s)", report.checked, report.problems.len());
        return Ok(report.is_ok());
    }

    let report = run_batch(&roster, &config);
    Ok(report.is_success())
}
