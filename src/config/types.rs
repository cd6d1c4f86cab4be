use serde::Deserialize;

/// 單一縮圖輸出：檔名與目標長邊（像素）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThumbnailSpec {
    pub file_name: String,
    pub long_edge: u32,
}

impl ThumbnailSpec {
    #[must_use]
    pub fn new(file_name: &str, long_edge: u32) -> Self {
        Self {
            file_name: file_name.to_string(),
            long_edge,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailTable {
    /// 縮圖快取資料夾名稱（Synology 使用 `@eaDir`）
    #[serde(rename = "CACHE_DIR_NAME")]
    pub cache_dir_name: String,
    #[serde(rename = "JPEG_QUALITY")]
    pub jpeg_quality: u8,
    /// 依序產生的圖片縮圖，順序即輸出順序
    #[serde(rename = "IMAGE_THUMBNAIL")]
    pub image_thumbnails: Vec<ThumbnailSpec>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub thumbnail_table: ThumbnailTable,
}
