use anyhow::Result;
use clap::Parser;

use image_cropper::cli::{
    args::{Cli, Commands},
    commands::crop::{execute_crop, CropCommandConfig},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crop {
            input_directory,
            output,
            crop_size,
        } => {
            println!("🚀 バッチ画像クロップツール");
            if let Ok(working_dir) = std::env::current_dir() {
                println!("📁 Working dir: {}", working_dir.display());
            }
            println!("📂 入力フォルダ: {}", input_directory.display());
            println!("📂 出力フォルダ: {}", output.display());
            println!("⚙️  クロップサイズ: {crop_size}px");

            match execute_crop(CropCommandConfig {
                input_directory,
                output,
                crop_size,
            }) {
                Ok(summary) => {
                    println!("✅ Done! Processed {} images.", summary.processed_files);
                    if summary.skipped_files > 0 {
                        println!(
                            "⚠️  {}個のファイルをスキップしました",
                            summary.skipped_files
                        );
                    }
                    println!("📊 書き出したクロップ数: {}", summary.total_crops);
                }
                Err(error) => {
                    eprintln!("❌ エラー: {error:#}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
