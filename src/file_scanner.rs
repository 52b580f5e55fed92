use crate::core::error::{CropperError, CropperResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct FileScanner;

impl FileScanner {
    /// 入力フォルダ直下の画像ファイルを列挙する
    ///
    /// サブフォルダは辿らない。順序はファイルシステムの列挙順のままで、
    /// ソートはしない。フォルダが存在しない（またはフォルダでない）場合は
    /// `InputNotFound`。対象ファイルが0件なのはエラーではなく空のVec。
    pub fn scan_directory(directory: &Path) -> CropperResult<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(CropperError::input_not_found(directory));
        }

        let mut file_paths = Vec::new();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                CropperError::input_not_found(
                    e.path().unwrap_or(directory).to_path_buf(),
                )
            })?;

            if entry.file_type().is_file() {
                if let Some(extension) = entry.path().extension() {
                    let ext = extension.to_string_lossy().to_lowercase();
                    if Self::is_image_extension(&ext) {
                        file_paths.push(entry.path().to_path_buf());
                    }
                }
            }
        }

        Ok(file_paths)
    }

    fn is_image_extension(extension: &str) -> bool {
        matches!(extension, "jpg" | "jpeg" | "png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_directory() {
        let temp_dir = tempdir().unwrap();
        let temp_path = temp_dir.path();

        fs::write(temp_path.join("image1.jpg"), b"dummy").unwrap();
        fs::write(temp_path.join("image2.png"), b"dummy").unwrap();
        fs::write(temp_path.join("photo.JPEG"), b"dummy").unwrap();
        fs::write(temp_path.join("document.txt"), b"dummy").unwrap();

        let result = FileScanner::scan_directory(temp_path).unwrap();

        assert_eq!(result.len(), 3);
        assert!(
            result
                .iter()
                .any(|p| p.file_name().unwrap() == "image1.jpg")
        );
        assert!(
            result
                .iter()
                .any(|p| p.file_name().unwrap() == "photo.JPEG")
        );
    }

    #[test]
    fn test_scan_directory_is_not_recursive() {
        let temp_dir = tempdir().unwrap();
        let temp_path = temp_dir.path();

        let subdir = temp_path.join("nested");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("nested.png"), b"dummy").unwrap();
        fs::write(temp_path.join("top.png"), b"dummy").unwrap();

        let result = FileScanner::scan_directory(temp_path).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name().unwrap(), "top.png");
    }

    #[test]
    fn test_scan_missing_directory_is_input_not_found() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("no_such_folder");

        let error = FileScanner::scan_directory(&missing).unwrap_err();

        assert!(matches!(error, CropperError::InputNotFound { .. }));
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_scan_file_path_is_input_not_found() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("image.png");
        fs::write(&file_path, b"dummy").unwrap();

        let error = FileScanner::scan_directory(&file_path).unwrap_err();

        assert!(matches!(error, CropperError::InputNotFound { .. }));
    }

    #[test]
    fn test_scan_empty_directory_returns_empty_vec() {
        let temp_dir = tempdir().unwrap();

        let result = FileScanner::scan_directory(temp_dir.path()).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_is_image_extension() {
        assert!(FileScanner::is_image_extension("jpg"));
        assert!(FileScanner::is_image_extension("jpeg"));
        assert!(FileScanner::is_image_extension("png"));
        assert!(!FileScanner::is_image_extension("gif"));
        assert!(!FileScanner::is_image_extension("txt"));
    }
}
