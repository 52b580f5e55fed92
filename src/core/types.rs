// クロップ処理に関連するデータ型定義

use std::path::PathBuf;

/// 1回のバッチ実行の設定
#[derive(Debug, Clone, PartialEq)]
pub struct CropConfig {
    /// クロップ画像の出力先フォルダ（なければ作成される）
    pub output_dir: PathBuf,
    /// 正方形クロップの一辺のピクセル数
    pub crop_size: u32,
}

impl CropConfig {
    pub fn new(output_dir: impl Into<PathBuf>, crop_size: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            crop_size,
        }
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output_crops"),
            crop_size: 1024,
        }
    }
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// 入力フォルダで見つかった対象ファイル数
    pub total_files: usize,
    /// 正常にクロップされたファイル数
    pub processed_files: usize,
    /// デコード失敗でスキップされたファイル数
    pub skipped_files: usize,
    /// バッチ全体で書き出されたクロップ数
    pub total_crops: usize,
}
