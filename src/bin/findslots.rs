extern crate alien_textures;

use std::path::PathBuf;

use alien_textures::{
    slots::{annotate, detect_slots, report, DetectParams, ParamOverrides},
    util,
};
use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Clone,Copy,ValueEnum)]
enum Preset {
    /// Full slot listing (threshold 120, more than 100 pixels)
    Analyze,
    /// Container menu lines for the first four slots (threshold 130, more than 80 pixels, no region cap)
    Menu,
}

/// Finds item slot positions in GUI textures
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[clap(long, value_enum, default_value_t=Preset::Analyze)]
    /// Detection defaults to start from
    preset: Preset,
    #[clap(long)]
    /// Pixels with a mean RGB value below this are dark
    threshold: Option<u8>,
    #[clap(long)]
    /// Dark regions need more than this many pixels
    min_pixels: Option<u32>,
    #[clap(long)]
    /// Slot width and height must exceed this
    min_size: Option<u32>,
    #[clap(long)]
    /// Slot width and height must be below this
    max_size: Option<u32>,
    #[clap(long, conflicts_with="no_region_cap")]
    /// Only consider dark regions labelled below this number
    region_cap: Option<u32>,
    #[clap(long, default_value_t=false)]
    /// Consider every dark region
    no_region_cap: bool,
    #[clap(long, default_value_t=false)]
    /// Print container menu slot registrations
    menu: bool,
    #[clap(long)]
    /// Number of menu slot registrations to print
    menu_limit: Option<usize>,
    #[clap(long)]
    /// Write a copy of the image with detected slots outlined
    annotate: Option<PathBuf>,
    /// GUI texture to analyse
    image: PathBuf,
}

fn build_params(args: &Cli) -> Result<DetectParams> {
    let preset = match args.preset {
        Preset::Analyze => DetectParams::default(),
        Preset::Menu => DetectParams::menu_preset(),
    };
    let overrides = ParamOverrides{
        dark_threshold: args.threshold,
        min_region_pixels: args.min_pixels,
        min_size: args.min_size,
        max_size: args.max_size,
        region_cap: args.region_cap,
        no_region_cap: args.no_region_cap,
    };
    preset.with_overrides(&overrides)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let params = build_params(&args)?;
    let img = util::load_rgba(&args.image)?;

    println!("Texture size: {}x{}", img.width(), img.height());
    println!("Looking for slot positions ({}-{} px dark squares)...", params.size_bounds.lower + 1, params.size_bounds.upper - 1);
    println!();

    let slots = detect_slots(&img, &params);
    report::print_slots(&slots)?;

    let (show_menu, default_limit) = match args.preset {
        Preset::Analyze => (args.menu, None),
        Preset::Menu => (true, Some(4)),
    };
    if show_menu && !slots.is_empty() {
        println!();
        report::print_menu_slots(&slots, args.menu_limit.or(default_limit))?;
    }

    if let Some(out_path) = &args.annotate {
        let marked = annotate::annotate(&img, &slots);
        util::save_png(out_path, &marked)?;
        println!();
        println!("Annotated image written to {}", out_path.display());
    }
    Ok(())
}
