// クロップ処理レイヤー - タイル分割とPNG書き出し

use crate::core::error::{CropperError, CropperResult};
use anyhow::Context;
use image::DynamicImage;
use std::path::Path;

pub mod grid;

pub use grid::{CropGrid, TileOrigin};

/// 連番インデックスから出力ファイル名を作成
///
/// 3桁までゼロ埋めし、それを超える値はそのまま桁を伸ばす
/// （`7` → `007.png`、`1000` → `1000.png`）。
pub fn crop_file_name(index: u32) -> String {
    format!("{index:03}.png")
}

/// 1枚のデコード済み画像を正方形タイルに分割してPNGで書き出す
///
/// タイルは行優先で `output_dir/{連番}.png` に保存され、書き出しごとに
/// 連番が1ずつ進む。戻り値は次の画像に引き継ぐ連番。同名の既存ファイルは
/// 黙って上書きされる。書き込み失敗は実行全体を中断する致命的エラー。
pub fn emit_crops(
    image: &DynamicImage,
    output_dir: &Path,
    crop_size: u32,
    start_index: u32,
) -> CropperResult<u32> {
    let grid = CropGrid::new(image.width(), image.height(), crop_size);
    let mut index = start_index;

    for origin in grid.origins() {
        let tile = image.crop_imm(origin.x, origin.y, crop_size, crop_size);
        let output_path = output_dir.join(crop_file_name(index));

        tile.save(&output_path)
            .context("PNGエンコードまたは書き込みに失敗しました")
            .map_err(|e| CropperError::write_failure(&output_path, e))?;

        index += 1;
    }

    Ok(index)
}
