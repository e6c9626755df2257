use anyhow::Context;
use clap::{ArgAction, Parser};
use painter::Config;
use painter::draw::{self, ShapeType};
use painter::input::InputState;
use painter::script::Script;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "painter")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAINTER_GIT_HASH"), ")"),
    about = "Builds vector shapes from recorded pointer input"
)]
struct Cli {
    /// Pointer script to replay (TOML with [[steps]] tables)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/painter/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shape type selected before the script starts (line, rectangle, ellipse, polygon, polyline, pencil)
    #[arg(long, value_name = "TYPE")]
    shape: Option<ShapeType>,

    /// Write the resulting drawing to this PNG file
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Write the resulting drawing to a timestamped PNG in the configured output directory
    #[arg(long, action = ArgAction::SetTrue, requires = "script", conflicts_with = "output")]
    render: bool,

    /// Print the config file location and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config_path: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_config_path {
        println!("{}", Config::get_config_path()?.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("painter: Builds vector shapes from recorded pointer input");
        println!();
        println!("Usage:");
        println!("  painter --script FILE               Replay a pointer script and print a summary");
        println!("  painter --script FILE -o out.png    ...and render the drawing to PNG");
        println!("  painter --script FILE --render      ...and render to the configured output directory");
        println!("  painter --help                      Show all options");
        println!();
        println!("Script steps:");
        println!("  select {{ shape }}                    Pick line, rectangle, ellipse, polygon, polyline or pencil");
        println!("  style {{ stroke, fill, thickness }}   Change the style of shapes created afterwards");
        println!("  down {{ x, y, clicks }}               Press (clicks = 2 finishes polygons and polylines)");
        println!("  move {{ x, y }}                       Drag");
        println!("  up {{ x, y }}                         Release");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut state = InputState::from_config(&config);
    if let Some(shape) = cli.shape {
        state.set_shape_type(shape);
    }
    log::info!("Starting with shape type {}", state.shape_type());

    let script = Script::load(&script_path)?;
    let summary = script.replay(&mut state);
    print!("{summary}");

    let output = if cli.render {
        Some(config.default_output_path())
    } else {
        cli.output
    };

    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        draw::render_to_png(
            &state.collections,
            state.shape_under_construction(),
            config.canvas.width,
            config.canvas.height,
            config.background(),
            &path,
        )?;
        println!("Saved drawing to {}", path.display());
    }

    Ok(())
}
