use crate::batch::BatchProcessor;
use crate::core::{BatchSummary, CropConfig, CropperError};
use crate::image_loader::StandardImageLoader;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Configuration struct for the crop command
pub struct CropCommandConfig {
    pub input_directory: PathBuf,
    pub output: PathBuf,
    pub crop_size: u32,
}

/// Execute the crop command against the local filesystem
///
/// 入力フォルダ未発見・対象ファイルなしは警告を出して正常終了する
/// （処理0件のサマリーを返す）。書き込みエラーだけが Err になる。
pub fn execute_crop(config: CropCommandConfig) -> Result<BatchSummary> {
    if config.crop_size == 0 {
        bail!("クロップサイズは1以上を指定してください");
    }

    let processor = BatchProcessor::new(
        StandardImageLoader::new(),
        CropConfig::new(&config.output, config.crop_size),
    );

    match processor.run(&config.input_directory) {
        Ok(summary) => Ok(summary),
        Err(error @ CropperError::InputNotFound { .. }) => {
            println!("❌ {error}");
            Ok(BatchSummary::default())
        }
        Err(error @ CropperError::NoMatchingFiles { .. }) => {
            println!("⚠️ {error}");
            Ok(BatchSummary::default())
        }
        Err(fatal) => Err(fatal.into()),
    }
}
