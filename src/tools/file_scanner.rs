use crate::tools::path_filter::{is_in_cache_dir, matches_image_pattern};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴走訪目錄，依走訪順序逐一產出符合圖片樣式的檔案
///
/// 名稱為 `cache_dir_name` 的資料夾整個略過；走訪錯誤以 `Err` 產出，由呼叫端決定是否中止
pub fn walk_image_files<'a>(
    directory: &'a Path,
    cache_dir_name: &'a str,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_in_cache_dir(entry.path(), cache_dir_name))
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                // 連結本身不跟隨，但指向圖片的檔案連結照常處理
                let is_image = !entry.file_type().is_dir() && matches_image_pattern(entry.path());
                is_image.then(|| Ok(entry.into_path()))
            }
            Err(e) => {
                let path = e
                    .path()
                    .map_or_else(|| directory.to_path_buf(), Path::to_path_buf);
                Some(
                    Err::<PathBuf, _>(e)
                        .with_context(|| format!("無法走訪目錄: {}", path.display())),
                )
            }
        })
}
