// src/output.rs — 输出落地：stdout / 文件 / 图片查看器

use crate::prompt;
use anyhow::{Context, Result};
use image::GrayImage;
use std::path::Path;

/// 文本版输出。Ok(false) 表示用户拒绝覆盖，什么都没写
pub fn write_text(text: &str, out: Option<&Path>) -> Result<bool> {
    let path = match out {
        Some(p) => p,
        None => {
            println!("{text}");
            return Ok(true);
        }
    };

    if !prompt::can_overwrite(path) {
        eprintln!("已取消，文件未修改");
        return Ok(false);
    }
    std::fs::write(path, text).with_context(|| format!("无法写入 \"{}\"", path.display()))?;
    Ok(true)
}

/// 图片版输出。未指定路径时写临时文件并调用系统查看器
pub fn write_image(image: &GrayImage, out: Option<&Path>) -> Result<bool> {
    let path = match out {
        Some(p) => p,
        None => {
            show(image)?;
            return Ok(true);
        }
    };

    if !prompt::can_overwrite(path) {
        eprintln!("已取消，文件未修改");
        return Ok(false);
    }
    image
        .save(path)
        .with_context(|| format!("无法保存 \"{}\"", path.display()))?;
    Ok(true)
}

/// 保存到临时文件后用 xdg-open 打开
fn show(image: &GrayImage) -> Result<()> {
    let path = std::env::temp_dir().join("wifiqr.png");
    image
        .save(&path)
        .with_context(|| format!("无法保存临时文件 \"{}\"", path.display()))?;
    log::debug!("临时图片 {}", path.display());

    let status = std::process::Command::new("xdg-open")
        .arg(&path)
        .status()
        .context("无法启动图片查看器 (xdg-open)")?;
    if !status.success() {
        anyhow::bail!("图片查看器异常退出");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_text_to_new_file() {
        let path = std::env::temp_dir().join("wifiqr-write-text-test.txt");
        let _ = std::fs::remove_file(&path);

        assert!(write_text("█▀▀█\n█▄▄█\n", Some(&path)).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "█▀▀█\n█▄▄█\n");

        let _ = std::fs::remove_file(&path);
    }
}
