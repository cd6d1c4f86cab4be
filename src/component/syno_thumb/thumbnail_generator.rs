use crate::config::{ThumbnailSpec, ThumbnailTable};
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result, bail};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageDecoder, ImageReader, Rgba, RgbaImage};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 已寫入的縮圖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// 單一圖片的縮圖產生結果
#[derive(Debug)]
pub struct GenerationResult {
    pub thumbnail_dir: PathBuf,
    pub thumbnails: Vec<GeneratedThumbnail>,
}

/// 縮圖產生器
///
/// 將圖片依縮圖表縮放後寫入 `<所在資料夾>/<快取資料夾>/<檔名>/`
pub struct ThumbnailGenerator {
    specs: Vec<ThumbnailSpec>,
    cache_dir_name: String,
    jpeg_quality: u8,
}

impl ThumbnailGenerator {
    #[must_use]
    pub fn new(table: &ThumbnailTable) -> Self {
        Self {
            specs: table.image_thumbnails.clone(),
            cache_dir_name: table.cache_dir_name.clone(),
            jpeg_quality: table.jpeg_quality,
        }
    }

    #[must_use]
    pub fn specs(&self) -> &[ThumbnailSpec] {
        &self.specs
    }

    /// 計算圖片對應的縮圖資料夾
    pub fn thumbnail_dir(&self, image_path: &Path) -> Result<PathBuf> {
        let Some(file_name) = image_path.file_name() else {
            bail!("無法取得檔名: {}", image_path.display());
        };
        let parent = image_path.parent().unwrap_or_else(|| Path::new(""));

        Ok(parent.join(&self.cache_dir_name).join(file_name))
    }

    /// 產生單一圖片的所有縮圖
    ///
    /// 任何一步失敗即中止，已寫入的縮圖不會被清除
    pub fn generate(&self, image_path: &Path) -> Result<GenerationResult> {
        let thumbnail_dir = self.thumbnail_dir(image_path)?;
        ensure_directory_exists(&thumbnail_dir)?;

        let source = open_oriented_image(image_path)?;
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            bail!("圖片尺寸無效 {}x{}: {}", width, height, image_path.display());
        }

        debug!("來源圖片 {} ({}x{})", image_path.display(), width, height);

        let mut thumbnails = Vec::with_capacity(self.specs.len());
        for spec in &self.specs {
            let (thumb_width, thumb_height) = fit_long_edge(width, height, spec.long_edge);
            let resized = imageops::resize(&source, thumb_width, thumb_height, FilterType::Lanczos3);
            let canvas = compose_on_transparent_canvas(&resized);

            let output_path = thumbnail_dir.join(&spec.file_name);
            save_jpeg(&canvas, &output_path, self.jpeg_quality)?;

            debug!(
                "寫入縮圖 {} ({}x{})",
                output_path.display(),
                thumb_width,
                thumb_height
            );

            thumbnails.push(GeneratedThumbnail {
                path: output_path,
                width: thumb_width,
                height: thumb_height,
            });
        }

        Ok(GenerationResult {
            thumbnail_dir,
            thumbnails,
        })
    }
}

/// 依長邊等比例計算縮圖尺寸
///
/// 橫向圖片（寬 > 高）以寬為準，其餘以高為準；計算出的邊最小為 1
#[must_use]
pub fn fit_long_edge(width: u32, height: u32, long_edge: u32) -> (u32, u32) {
    let scale = |edge: u32, numerator: u32, denominator: u32| -> u32 {
        let value = (f64::from(edge) * f64::from(numerator) / f64::from(denominator)).round();
        (value as u32).max(1)
    };

    if width > height {
        (long_edge, scale(long_edge, height, width))
    } else {
        (scale(long_edge, width, height), long_edge)
    }
}

/// 解碼圖片並依 EXIF 方向資訊轉正
///
/// 格式依檔案內容判斷，不依副檔名
pub fn open_oriented_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("無法開啟圖片: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("無法讀取圖片: {}", path.display()))?;

    let mut decoder = reader
        .into_decoder()
        .with_context(|| format!("無法辨識圖片格式: {}", path.display()))?;
    let orientation = decoder.orientation().ok();

    let mut image = DynamicImage::from_decoder(decoder)
        .with_context(|| format!("無法解碼圖片: {}", path.display()))?;

    if let Some(orientation) = orientation {
        image.apply_orientation(orientation);
    }

    Ok(image)
}

/// 貼到同尺寸的全透明畫布，統一輸出為 RGBA
fn compose_on_transparent_canvas(image: &RgbaImage) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(image.width(), image.height(), Rgba([0, 0, 0, 0]));
    imageops::replace(&mut canvas, image, 0, 0);
    canvas
}

/// 以 JPEG 編碼寫檔，Alpha 通道直接捨棄
fn save_jpeg(image: &RgbaImage, path: &Path, quality: u8) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();

    let file =
        File::create(path).with_context(|| format!("無法建立縮圖檔案: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(&rgb)
        .with_context(|| format!("無法編碼縮圖: {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("無法寫入縮圖: {}", path.display()))
}
