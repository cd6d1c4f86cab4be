use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `*.jpg` / `*.jpeg`，不分大小寫
static REGEX_JPEG_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*\.jpe?g$").expect("Invalid regex"));

/// 檔名是否為 JPEG 圖片
#[must_use]
pub fn is_jpeg_file_name(file_name: &str) -> bool {
    REGEX_JPEG_FILE_NAME.is_match(file_name)
}

/// 路徑的檔名部分是否符合圖片樣式
#[must_use]
pub fn matches_image_pattern(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| is_jpeg_file_name(&name.to_string_lossy()))
}

/// 路徑中是否有任一層名稱等於快取資料夾
#[must_use]
pub fn is_in_cache_dir(path: &Path, cache_dir_name: &str) -> bool {
    path.components()
        .any(|component| component.as_os_str() == cache_dir_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_file_name_case_insensitive() {
        for name in [
            "IMG.JPG",
            "img.jpg",
            "img.JpG",
            "photo.jpeg",
            "PHOTO.JPEG",
            "a.b.jPeG",
            ".jpg",
        ] {
            assert!(is_jpeg_file_name(name), "{name} 應該符合");
        }
    }

    #[test]
    fn test_non_jpeg_file_name() {
        for name in ["img.png", "img.jpg.png", "jpg", "img.jpgx", "img.gif", "img"] {
            assert!(!is_jpeg_file_name(name), "{name} 不應該符合");
        }
    }

    #[test]
    fn test_matches_image_pattern_uses_file_name() {
        assert!(matches_image_pattern(Path::new("/photos/2024/IMG_0001.JPG")));
        assert!(!matches_image_pattern(Path::new("/photos/album.jpg/readme.txt")));
        assert!(!matches_image_pattern(Path::new("/")));
    }

    #[test]
    fn test_is_in_cache_dir() {
        assert!(is_in_cache_dir(
            Path::new("/x/@eaDir/photo.jpg/SYNOPHOTO_THUMB_M.jpg"),
            "@eaDir"
        ));
        assert!(is_in_cache_dir(Path::new("@eaDir"), "@eaDir"));
        assert!(!is_in_cache_dir(Path::new("/x/photo.jpg"), "@eaDir"));
        // 只比對完整名稱，不做子字串比對
        assert!(!is_in_cache_dir(Path::new("/x/my@eaDir2/photo.jpg"), "@eaDir"));
    }
}
