// SPDX-License-Identifier: MIT
//
// grid-picker — command-line front end for the grid color picker.
//
// This binary wires the two crates together for use from a shell:
//
//   gp-color  → format detection, conversion, the built-in palette
//   gp-picker → picker state machine, click routing, in-memory fields
//
// Commands:
//
//   detect <color>                        print hex / rgb / rgba / unknown
//   convert <color> <format> [alpha]      print the converted string
//   palette                               paint the built-in swatches
//   demo [name=value ...]                 drive a picker through a session
//
// `-v` / `-vv` anywhere on the line turn on debug / trace logging (stderr).
// Argument errors are reported by clap.

use std::cell::RefCell;
use std::io::{self, Write};
use std::process;
use std::rc::Rc;

use clap::{ArgAction, Parser, Subcommand};
use gp_color::palette::GRID_COLUMNS;
use gp_color::{
    ColorFormat, DEFAULT_ALPHA, Palette, check_alpha, convert_with_alpha, detect_format, to_rgb8,
};
use gp_picker::{
    Click, Dispatcher, HostField, MemoryField, MemorySurface, OptionError, PickerController,
    PickerOptions, Target,
};
use tracing::Level;

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "grid-picker", version, about)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log debug output to stderr (`-vv` for trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the color's format: hex, rgb, rgba or unknown
    Detect { color: String },

    /// Convert a color to hex, rgb or rgba
    Convert {
        color: String,
        format: ColorFormat,
        /// Alpha for a synthesized rgba value, from 0 to 1
        #[arg(value_parser = parse_alpha, allow_negative_numbers = true)]
        alpha: Option<f64>,
    },

    /// Show the built-in swatches
    Palette,

    /// Run a scripted picker session
    Demo {
        /// Option directives: select=, main=, others=
        #[arg(value_name = "NAME=VALUE")]
        directives: Vec<String>,
    },
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Option(#[from] OptionError),

    #[error("the palette has no swatches to pick")]
    EmptyPalette,

    #[error(transparent)]
    Io(#[from] io::Error),
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut out = io::stdout().lock();
    if let Err(e) = run(cli.command, &mut out) {
        eprintln!("grid-picker: {e}");
        process::exit(1);
    }
}

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Detect { color } => detect(&color, out),
        Command::Convert {
            color,
            format,
            alpha,
        } => convert(&color, format, alpha.unwrap_or(DEFAULT_ALPHA), out),
        Command::Palette => palette(out),
        Command::Demo { directives } => demo(&directives, out),
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn detect(color: &str, out: &mut impl Write) -> Result<(), CliError> {
    let name = detect_format(color).map_or("unknown", ColorFormat::name);
    writeln!(out, "{name}")?;
    Ok(())
}

fn convert(
    color: &str,
    target: ColorFormat,
    alpha: f64,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", convert_with_alpha(color, target, alpha))?;
    Ok(())
}

fn parse_alpha(text: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .ok()
        .and_then(|alpha| check_alpha(alpha).ok())
        .ok_or_else(|| format!("`{text}` is not a number from 0 to 1"))
}

fn palette(out: &mut impl Write) -> Result<(), CliError> {
    let palette = Palette::default();

    write_row(out, &palette.main)?;
    writeln!(out)?;
    for row in palette.rows(GRID_COLUMNS) {
        write_row(out, row)?;
    }
    Ok(())
}

fn demo(args: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let options = PickerOptions::from_directives(args)?;
    let select_type = options.select_type;

    // Second swatch if there is one: the first built-in is plain white.
    let Some(swatch) = options
        .palette
        .swatches()
        .nth(1)
        .or_else(|| options.palette.swatches().next())
        .map(ToString::to_string)
    else {
        return Err(CliError::EmptyPalette);
    };

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    let options = options.with_callback(move |value| sink.borrow_mut().push(value.to_string()));

    let field = MemoryField::default();
    let surface = MemorySurface::new();
    let mut dispatcher = Dispatcher::new();
    let id = dispatcher.attach(PickerController::new(
        Some(Box::new(field.clone())),
        Box::new(surface.clone()),
        options,
    ));

    writeln!(out, "{id}: writes {select_type}")?;

    let steps = [
        ("click trigger".to_string(), Target::Trigger(id)),
        ("click popup body".to_string(), Target::Popup(id)),
        (format!("pick {swatch}"), Target::swatch(id, swatch.as_str())),
        ("click trigger".to_string(), Target::Trigger(id)),
        ("click elsewhere".to_string(), Target::Elsewhere),
    ];

    for (label, target) in steps {
        dispatcher.dispatch(&Click::on(target));
        let state = dispatcher
            .state(id)
            .map_or_else(|| "gone".to_string(), |s| s.to_string());
        writeln!(
            out,
            "{label:<24} {state:<7} field={:?} trigger={:?}",
            field.value(),
            surface.state().trigger_value,
        )?;
    }

    for value in picked.borrow().iter() {
        writeln!(out, "callback({value})")?;
    }

    dispatcher.dispose(id);
    writeln!(out, "disposed {id}, {} live", dispatcher.len())?;
    Ok(())
}

// ─── Swatch painting ────────────────────────────────────────────────────────

fn write_row(out: &mut impl Write, row: &[String]) -> io::Result<()> {
    for color in row {
        write_swatch(out, color)?;
    }
    writeln!(out)
}

/// Four cells of truecolor background, or `??` for unpaintable strings.
fn write_swatch(out: &mut impl Write, color: &str) -> io::Result<()> {
    if let Some((r, g, b)) = to_rgb8(color) {
        write!(out, "\x1b[48;2;{r};{g};{b}m    \x1b[0m")
    } else {
        tracing::warn!(color, "swatch can't be painted");
        write!(out, " ?? ")
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
