use anyhow::Result;
use image::DynamicImage;
use std::path::Path;

pub mod standard;

pub use standard::StandardImageLoader;

/// 画像読み込みバックエンドのトレイト
///
/// バッチ処理はこのトレイト越しに画像をデコードする。テストでは
/// 失敗を注入する実装に差し替えられる。
pub trait ImageLoaderBackend {
    /// ファイルパスから画像を読み込む
    fn load_from_path(&self, path: &Path) -> Result<DynamicImage>;

    /// 読み込み戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
