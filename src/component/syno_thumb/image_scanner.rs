use crate::tools::walk_image_files;
use anyhow::Result;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 掃描結果
#[derive(Debug, Default)]
pub struct ScanResult {
    /// 依走訪順序記錄的符合檔案
    pub matched_files: Vec<PathBuf>,
    /// 成功處理的檔案數
    pub processed: usize,
    /// 處理失敗的檔案
    pub failed_files: Vec<PathBuf>,
    /// 是否因中斷訊號提前結束
    pub interrupted: bool,
}

impl ScanResult {
    #[must_use]
    pub fn errors(&self) -> usize {
        self.failed_files.len()
    }
}

/// 圖片掃描器
///
/// 走訪目錄並對每個符合的圖片呼叫處理函式，單一檔案失敗不會中止走訪
pub struct ImageScanner {
    cache_dir_name: String,
    shutdown_signal: Arc<AtomicBool>,
}

impl ImageScanner {
    pub fn new(cache_dir_name: &str, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            cache_dir_name: cache_dir_name.to_string(),
            shutdown_signal,
        }
    }

    /// 掃描目錄
    ///
    /// 走訪本身的錯誤（例如根目錄不存在）會直接回傳
    pub fn scan<F>(&self, directory: &Path, mut process: F) -> Result<ScanResult>
    where
        F: FnMut(&Path) -> Result<()>,
    {
        info!("開始掃描目錄: {}", directory.display());

        let mut result = ScanResult::default();

        for entry in walk_image_files(directory, &self.cache_dir_name) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止掃描");
                result.interrupted = true;
                break;
            }

            let path = entry?;

            match process(&path) {
                Ok(()) => result.processed += 1,
                Err(e) => {
                    error!("圖片處理失敗 {}: {:#}", path.display(), e);
                    println!("ERROR: Image not processed {}", path.display());
                    result.failed_files.push(path.clone());
                }
            }

            result.matched_files.push(path);
        }

        info!(
            "掃描完成 - 符合: {}, 成功: {}, 失敗: {}",
            result.matched_files.len(),
            result.processed,
            result.errors()
        );

        Ok(result)
    }
}
