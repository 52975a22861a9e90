#![deny(unsafe_code)]
//! CLI binary for colorsync.
//!
//! Subcommands:
//! - `convert <model> <values>...`: apply one color edit, print every model
//! - `list`: print available models and strategies
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see
//! each conversion step.

mod error;

use clap::{Parser, Subcommand};
use colorsync_core::{
    Cmyk, Color, ColorError, ColorState, Hls, Hsv, Model, Rgb, Snapshot, StrategyKind, Xyz,
};
use error::CliError;
use std::process;

/// Model name accepted by `convert` in addition to the numeric models.
const HEX_MODEL: &str = "hex";
const DEFAULT_STRATEGY: &str = "direct";

#[derive(Parser)]
#[command(
    name = "colorsync",
    about = "Convert colors between RGB, CMYK, HSV, HLS and hex"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one color and print it in every model.
    Convert {
        /// Source model (rgb, cmyk, hsv, hls, hex).
        model: String,

        /// Channel values in model order (e.g. `h s v`), or one hex string.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Conversion strategy (direct, xyz).
        #[arg(short, long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// Also print the CIE XYZ pivot.
        #[arg(long)]
        xyz: bool,
    },
    /// List available color models and conversion strategies.
    List,
}

/// Builds a state by applying one edit given as CLI words.
fn edit_state(
    model: &str,
    values: &[String],
    strategy: StrategyKind,
) -> Result<ColorState, CliError> {
    let mut state = ColorState::new(Rgb::BLACK, strategy);

    if model.eq_ignore_ascii_case(HEX_MODEL) {
        let [hex] = values else {
            return Err(ColorError::ArityMismatch {
                model: HEX_MODEL.to_string(),
                expected: 1,
                got: values.len(),
            }
            .into());
        };
        state.set_hex(hex)?;
        return Ok(state);
    }

    let model = Model::from_name(model)?;
    let numbers = values
        .iter()
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| ColorError::InvalidNumber(v.clone()))
        })
        .collect::<Result<Vec<f64>, ColorError>>()?;
    state.apply(Color::from_values(model, &numbers)?);
    Ok(state)
}

/// Rounds for display, printing negative zero as `0`.
fn display(v: f64) -> f64 {
    let r = v.round();
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

fn format_rgb(c: Rgb) -> String {
    format!("{}, {}, {}", display(c.r), display(c.g), display(c.b))
}

fn format_cmyk(c: Cmyk) -> String {
    format!(
        "{}%, {}%, {}%, {}%",
        display(c.c),
        display(c.m),
        display(c.y),
        display(c.k)
    )
}

fn format_hls(c: Hls) -> String {
    format!("{}°, {}%, {}%", display(c.h), display(c.l), display(c.s))
}

fn format_hsv(c: Hsv) -> String {
    format!("{}°, {}%, {}%", display(c.h), display(c.s), display(c.v))
}

fn format_xyz(c: Xyz) -> String {
    format!("{:.2}, {:.2}, {:.2}", c.x, c.y, c.z)
}

/// Renders a snapshot as aligned `LABEL  value` lines.
fn render_text(snap: &Snapshot) -> String {
    let mut lines = vec![
        format!("HEX   {}", snap.hex.to_upper()),
        format!("RGB   {}", format_rgb(snap.rgb)),
        format!("CMYK  {}", format_cmyk(snap.cmyk)),
        format!("HLS   {}", format_hls(snap.hls)),
        format!("HSV   {}", format_hsv(snap.hsv)),
    ];
    if let Some(xyz) = snap.xyz {
        lines.push(format!("XYZ   {}", format_xyz(xyz)));
    }
    lines.join("\n")
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let models: Vec<&str> = Model::list_names()
                .iter()
                .copied()
                .chain([HEX_MODEL])
                .collect();
            let strategies = StrategyKind::list_strategies();
            if cli.json {
                let info = serde_json::json!({
                    "models": models,
                    "strategies": strategies,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Models:");
                println!("  {}", models.join(", "));
                println!("Strategies:");
                for name in strategies {
                    println!("  {name}");
                }
            }
        }
        Command::Convert {
            model,
            values,
            strategy,
            xyz,
        } => {
            let strategy = StrategyKind::from_name(&strategy)?;
            log::debug!("converting {model} {values:?} via {strategy:?}");

            let state = edit_state(&model, &values, strategy)?;
            let snap = if xyz {
                state.snapshot_with_xyz()
            } else {
                state.snapshot()
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snap)?);
            } else {
                println!("{}", render_text(&snap));
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
