use std::path::{Path, PathBuf};

use crate::job::JobError;

/// Raster formats offered by the image picker.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

pub fn validate_image_path(path: &Path) -> Result<PathBuf, JobError> {
    if !path.is_file() || !is_supported_image(path) {
        return Err(JobError::UnsupportedImage {
            path: path.display().to_string(),
        });
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("scan.png")));
        assert!(is_supported_image(Path::new("scan.JPG")));
        assert!(is_supported_image(Path::new("dir/scan.jpeg")));
        assert!(!is_supported_image(Path::new("scan.gif")));
        assert!(!is_supported_image(Path::new("scan")));
    }

    #[test]
    fn test_validate_image_path() {
        let temp_dir = tempdir().unwrap();
        let image = temp_dir.path().join("table.png");
        std::fs::write(&image, b"not really a png").unwrap();
        let text = temp_dir.path().join("notes.txt");
        std::fs::write(&text, b"hello").unwrap();

        assert_eq!(validate_image_path(&image).unwrap(), image);
        assert!(matches!(
            validate_image_path(&text),
            Err(JobError::UnsupportedImage { .. })
        ));
        assert!(validate_image_path(&temp_dir.path().join("missing.png")).is_err());
    }
}
