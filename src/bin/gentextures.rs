extern crate alien_textures;

use std::path::{Path, PathBuf};

use alien_textures::texgen::{
    self,
    block::BlockTexture,
    gui::{GuiTexture, Style},
    Texture,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Subcommand)]
enum CliCommand {
    /// Generates a GUI texture
    Gui {
        #[clap(value_enum)]
        /// GUI to draw
        gui: GuiTexture
    },
    /// Generates a 16x16 block texture
    Block {
        #[clap(value_enum)]
        /// Block to draw
        block: BlockTexture
    },
    /// Generates every texture
    All { },
    /// Lists textures and where they are written
    List { },
}

/// Draws the mod's GUI and block textures
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[clap(long, value_enum, default_value_t=Style::Egyptian)]
    /// Drawing style for GUI textures
    style: Style,
    #[clap(long, default_value="src/main/resources/assets/alientech")]
    /// Asset directory textures are written below
    out_dir: PathBuf,
    #[command(subcommand)]
    command: CliCommand
}

fn generate(textures: &[Texture], style: Style, out_dir: &Path) -> Result<()> {
    for texture in textures {
        let path = texgen::generate(*texture, style, out_dir)?;
        println!("Created {} ({})", path.display(), texture);
    }
    Ok(())
}

fn list(out_dir: &Path) -> Result<()> {
    for texture in Texture::ALL {
        println!("{:24} {}", texture.to_string(), out_dir.join(texture.asset_path()).display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let out_dir = args.out_dir.as_path();

    match args.command {
        CliCommand::Gui{ gui } => {
            generate(&[ Texture::Gui(gui) ], args.style, out_dir)
        },
        CliCommand::Block{ block } => {
            generate(&[ Texture::Block(block) ], args.style, out_dir)
        },
        CliCommand::All{ } => {
            generate(&Texture::ALL, args.style, out_dir)
        },
        CliCommand::List{ } => {
            list(out_dir)
        },
    }
}
