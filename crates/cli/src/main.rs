#![deny(unsafe_code)]
//! CLI binary for the backdrop composition engine.
//!
//! Subcommands:
//! - `render <variant>`: compose a scene and write SVG, CSS, PNG or JSON
//! - `list`: print available variants, palettes and parameter schemas

mod error;

use backdrop_core::{Generator, Palette, Recipe, Rgb};
use backdrop_engines::svg::{to_css_background, to_svg};
use backdrop_engines::{compose, export, ExportRequest, Exported, GeneratorKind, Variant};
use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Seeds at or above this value alias lower ones in the generator.
const SEED_SPACE: u64 = 233_280;

#[derive(Parser)]
#[command(name = "backdrop", about = "Procedural vector background generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Css,
    Png,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a background and write it out.
    Render {
        /// Variant name (e.g. "blob", "layeredWaves", "low-poly").
        variant: String,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 0, conflicts_with = "randomize")]
        seed: u64,

        /// Pick a fresh random seed.
        #[arg(long)]
        randomize: bool,

        /// Palette preset name.
        #[arg(short, long, default_value = "ocean")]
        palette: String,

        /// Explicit palette as comma-separated hex colors; overrides --palette.
        #[arg(long, value_delimiter = ',')]
        colors: Vec<String>,

        /// Append a color to the palette (ignored once the palette is full).
        #[arg(long = "add-color")]
        add_color: Vec<String>,

        /// Remove the color at an index (ignored at the minimum size).
        #[arg(long = "remove-color")]
        remove_color: Vec<usize>,

        /// Generator parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Raster width in pixels (png only).
        #[arg(short = 'W', long, default_value_t = 1920)]
        width: u32,

        /// Raster height in pixels (png only).
        #[arg(short = 'H', long, default_value_t = 1080)]
        height: u32,

        /// Output file path. Text formats go to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available variants, palettes and parameter schemas.
    List,
}

fn build_palette(
    preset: &str,
    colors: &[String],
    add: &[String],
    remove: &[usize],
) -> Result<Palette, CliError> {
    let mut palette = if colors.is_empty() {
        Palette::from_name(preset)?
    } else {
        Palette::from_hex(colors)?
    };

    for hex in add {
        let color: Rgb = hex.parse()?;
        if !palette.push(color) {
            warn!(color = %color, len = palette.len(), "palette is full, color not added");
        }
    }
    for &index in remove {
        if palette.remove(index).is_none() {
            warn!(index, len = palette.len(), "color not removed");
        }
    }
    Ok(palette)
}

fn write_text(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

fn list(json: bool) -> Result<(), CliError> {
    let palettes = Palette::list_names();
    if json {
        let variants: Vec<_> = Variant::ALL
            .into_iter()
            .map(|v| {
                let generator = GeneratorKind::from_variant(v, &serde_json::json!({}));
                serde_json::json!({
                    "name": v.name(),
                    "params": generator.params(),
                    "schema": generator.param_schema(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "variants": variants,
            "palettes": palettes,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Variants:");
        for name in Variant::list_names() {
            println!("  {name}");
        }
        println!("Palettes:");
        println!("  {}", palettes.join(", "));
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => list(cli.json)?,
        Command::Render {
            variant,
            seed,
            randomize,
            palette,
            colors,
            add_color,
            remove_color,
            params,
            format,
            width,
            height,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let palette = build_palette(&palette, &colors, &add_color, &remove_color)?;
            let generator = GeneratorKind::from_name(&variant, &params)
                .ok_or_else(|| CliError::UnknownVariant(variant.clone()))?;

            let seed = if randomize {
                rand::thread_rng().gen_range(0..SEED_SPACE)
            } else {
                seed
            };
            debug!(variant = generator.variant().name(), seed, "rendering");

            let scene = compose(&generator, seed, &palette);
            let recipe = Recipe::new(generator.variant().name(), seed)
                .with_params(generator.params())
                .with_palette(palette);

            let written = match format {
                Format::Svg => {
                    write_text(&to_svg(&scene), output.as_deref())?;
                    output
                }
                Format::Css => {
                    write_text(&to_css_background(&to_svg(&scene)), output.as_deref())?;
                    output
                }
                Format::Json => {
                    let doc = serde_json::json!({ "recipe": recipe, "scene": scene });
                    write_text(&serde_json::to_string_pretty(&doc)?, output.as_deref())?;
                    output
                }
                Format::Png => {
                    let path = output.unwrap_or_else(|| PathBuf::from("backdrop.png"));
                    let Exported::Raster(image) =
                        export(&scene, ExportRequest::Raster { width, height }).await?
                    else {
                        return Err(CliError::Input("raster export returned vector".into()));
                    };
                    backdrop_engines::snapshot::write_png(&image, &path)?;
                    Some(path)
                }
            };

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "shapes": scene.len(),
                    "output": written.map(|p| p.display().to_string()),
                });
                eprintln!("{}", serde_json::to_string_pretty(&info)?);
            } else if let Some(path) = written {
                info!(
                    variant = %recipe.variant,
                    seed,
                    shapes = scene.len(),
                    output = %path.display(),
                    "rendered"
                );
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli).await {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
