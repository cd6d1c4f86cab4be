use crate::config::types::{Config, ThumbnailTable};
use anyhow::{Context, Result, bail};
use std::collections::HashSet;

/// 編譯時嵌入的縮圖設定（不需要外部檔案）
const THUMBNAIL_TABLE_JSON: &str = include_str!("../data/thumbnail_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        let thumbnail_table = Self::load_embedded_thumbnail_table()?;
        Self::validate_thumbnail_table(&thumbnail_table)?;

        Ok(Self { thumbnail_table })
    }

    /// 從編譯時嵌入的 JSON 載入縮圖表
    fn load_embedded_thumbnail_table() -> Result<ThumbnailTable> {
        serde_json::from_str(THUMBNAIL_TABLE_JSON).context("無法解析嵌入的縮圖設定")
    }

    pub(crate) fn validate_thumbnail_table(table: &ThumbnailTable) -> Result<()> {
        let cache_dir_name = table.cache_dir_name.as_str();
        if cache_dir_name.is_empty() || cache_dir_name.contains(['/', '\\']) {
            bail!("快取資料夾名稱無效: {cache_dir_name:?}");
        }

        if !(1..=100).contains(&table.jpeg_quality) {
            bail!("JPEG 品質必須介於 1 到 100: {}", table.jpeg_quality);
        }

        if table.image_thumbnails.is_empty() {
            bail!("縮圖設定不可為空");
        }

        let mut seen = HashSet::new();
        for spec in &table.image_thumbnails {
            if spec.long_edge == 0 {
                bail!("縮圖長邊必須大於 0: {}", spec.file_name);
            }
            if !seen.insert(spec.file_name.as_str()) {
                bail!("縮圖檔名重複: {}", spec.file_name);
            }
        }

        Ok(())
    }
}
