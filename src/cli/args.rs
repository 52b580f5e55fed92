use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image_cropper")]
#[command(about = "A tool for tiling images into fixed-size square crops")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tile every image in a directory into square crops
    Crop {
        /// Directory containing the source images (.jpg/.jpeg/.png)
        input_directory: PathBuf,

        /// Output directory for the cropped images
        #[arg(short, long, default_value = "output_crops")]
        output: PathBuf,

        /// Edge length of each square crop in pixels
        #[arg(short = 's', long, default_value = "1024")]
        crop_size: u32,
    },
}
