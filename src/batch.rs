// バッチオーケストレーター - スキャン→デコード→クロップの逐次パイプライン

use crate::core::error::{CropperError, CropperResult};
use crate::core::types::{BatchSummary, CropConfig};
use crate::cropping;
use crate::file_scanner::FileScanner;
use crate::image_loader::ImageLoaderBackend;
use anyhow::Context;
use std::path::Path;

/// バッチ実行の開始連番（出力ファイル名は 001.png から始まる）
const FIRST_CROP_INDEX: u32 = 1;

/// 画像ローダーを注入して構築するバッチ処理本体
///
/// ファイルはスキャン順に1つずつ逐次処理される。連番カウンターは
/// バッチ全体で1つだけで、画像をまたいでもリセットされない。
pub struct BatchProcessor<L>
where
    L: ImageLoaderBackend,
{
    loader: L,
    config: CropConfig,
}

impl<L> BatchProcessor<L>
where
    L: ImageLoaderBackend,
{
    /// 新しいバッチ処理を作成（コンストラクタインジェクション）
    pub fn new(loader: L, config: CropConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// 入力フォルダ内の全画像をクロップする
    ///
    /// デコードに失敗したファイルは警告を出してスキップし、連番には
    /// 影響しない。対象ファイルが1つもない場合は `NoMatchingFiles`、
    /// 書き込み失敗はその時点で中断して `WriteFailure` を返す。
    pub fn run(&self, input_dir: &Path) -> CropperResult<BatchSummary> {
        let files = FileScanner::scan_directory(input_dir)?;
        if files.is_empty() {
            return Err(CropperError::no_matching_files(input_dir));
        }

        // 出力フォルダは親ごと作成。失敗は致命的
        std::fs::create_dir_all(&self.config.output_dir)
            .context("出力フォルダを作成できません")
            .map_err(|e| CropperError::write_failure(&self.config.output_dir, e))?;

        let mut summary = BatchSummary {
            total_files: files.len(),
            ..BatchSummary::default()
        };
        let mut next_index = FIRST_CROP_INDEX;

        for file in &files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            println!("📸 Processing: {name}");

            let image = match self.loader.load_from_path(file) {
                Ok(image) => image,
                Err(error) => {
                    // デコード失敗はこのファイルだけの問題。連番は進めない
                    let skip = CropperError::decode_failure(file, error);
                    println!("⚠️ Skipping invalid image: {name} ({skip})");
                    summary.skipped_files += 1;
                    continue;
                }
            };

            next_index = cropping::emit_crops(
                &image,
                &self.config.output_dir,
                self.config.crop_size,
                next_index,
            )?;
            summary.processed_files += 1;
        }

        summary.total_crops = (next_index - FIRST_CROP_INDEX) as usize;
        Ok(summary)
    }
}
