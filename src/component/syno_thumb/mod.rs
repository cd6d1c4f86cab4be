//! Synology 縮圖產生元件
//!
//! 掃描資料夾中的 JPEG 圖片，為每張圖片在同層的 `@eaDir/<檔名>/` 產生
//! `SYNOPHOTO_THUMB_XL.jpg`、`SYNOPHOTO_THUMB_SM.jpg`、`SYNOPHOTO_THUMB_M.jpg`

mod image_scanner;
mod main;
mod thumbnail_generator;

pub use image_scanner::{ImageScanner, ScanResult};
pub use main::SynoThumb;
pub use thumbnail_generator::{
    GeneratedThumbnail, GenerationResult, ThumbnailGenerator, fit_long_edge, open_oriented_image,
};
