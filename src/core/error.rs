// バッチクロップ処理専用のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// クロップ処理固有のエラー型
///
/// 致命的なのは書き込みエラーのみ。それ以外はコンソール診断を出して
/// 処理を継続（またはそのまま正常終了）する。
#[derive(Error, Debug)]
pub enum CropperError {
    #[error("入力フォルダが見つかりません: {path}")]
    InputNotFound { path: PathBuf },

    #[error("画像ファイルが見つかりません: {path}")]
    NoMatchingFiles { path: PathBuf },

    #[error("画像デコードエラー: {path} - {source}")]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("書き込みエラー: {path} - {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl CropperError {
    /// 入力フォルダ未発見エラーの作成
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// 対象ファイルなしエラーの作成
    pub fn no_matching_files(path: impl Into<PathBuf>) -> Self {
        Self::NoMatchingFiles { path: path.into() }
    }

    /// デコードエラーの作成
    pub fn decode_failure(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::DecodeFailure {
            path: path.into(),
            source,
        }
    }

    /// 書き込みエラーの作成
    pub fn write_failure(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// 実行全体を中断すべきエラーかどうかを判定
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::WriteFailure { .. })
    }

    /// エラーに関連するパスを取得
    pub fn path(&self) -> &Path {
        match self {
            Self::InputNotFound { path }
            | Self::NoMatchingFiles { path }
            | Self::DecodeFailure { path, .. }
            | Self::WriteFailure { path, .. } => path,
        }
    }
}

/// クロップ処理の結果型
pub type CropperResult<T> = std::result::Result<T, CropperError>;
