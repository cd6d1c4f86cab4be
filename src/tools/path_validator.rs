use anyhow::{Context, Result, bail};
use std::fs::DirBuilder;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立資料夾（含上層），已存在時直接沿用
///
/// 在 Unix 上新建立的資料夾權限為 0700
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
        .create(path)
        .with_context(|| format!("無法建立資料夾: {}", path.display()))
}
