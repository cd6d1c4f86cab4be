use super::image_scanner::{ImageScanner, ScanResult};
use super::thumbnail_generator::ThumbnailGenerator;
use crate::config::Config;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use log::info;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Synology 縮圖產生元件
pub struct SynoThumb {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl SynoThumb {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self, directory: &Path) -> Result<ScanResult> {
        validate_directory_exists(directory)?;

        let table = &self.config.thumbnail_table;
        let generator = ThumbnailGenerator::new(table);
        let scanner = ImageScanner::new(&table.cache_dir_name, Arc::clone(&self.shutdown_signal));

        info!(
            "縮圖設定: {}",
            generator
                .specs()
                .iter()
                .map(|spec| format!("{}={}px", spec.file_name, spec.long_edge))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let result = scanner.scan(directory, |path| {
            let generated = generator.generate(path)?;
            info!(
                "已產生 {} 張縮圖: {}",
                generated.thumbnails.len(),
                generated.thumbnail_dir.display()
            );
            println!("Thumbnails generated for {}", path.display());
            Ok(())
        })?;

        self.print_result(&result);

        Ok(result)
    }

    fn print_result(&self, result: &ScanResult) {
        println!();
        println!("{}", style("=== 縮圖產生結果 ===").cyan().bold());
        println!("  符合的圖片: {} 個", result.matched_files.len());
        println!("  成功產生: {} 個", style(result.processed).green());

        if result.errors() > 0 {
            println!("  失敗: {} 個", style(result.errors()).red());
            for path in &result.failed_files {
                println!("    {} {}", style("•").dim(), path.display());
            }
        }

        if result.interrupted {
            println!("{}", style("已因中斷訊號提前結束").yellow());
        }
    }
}
