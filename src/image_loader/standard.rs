use super::ImageLoaderBackend;
use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// 標準的な画像ローダー実装
///
/// `image` クレートの自動フォーマット判定に委譲する。バッチ対象の
/// JPEG / PNG はどちらもこれでデコードできる。
#[derive(Clone, Debug, Default)]
pub struct StandardImageLoader;

impl StandardImageLoader {
    /// 新しい標準画像ローダーを作成
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoaderBackend for StandardImageLoader {
    fn load_from_path(&self, path: &Path) -> Result<DynamicImage> {
        image::open(path)
            .with_context(|| format!("Failed to load image from path: {}", path.display()))
    }

    fn strategy_name(&self) -> &'static str {
        "standard"
    }
}
