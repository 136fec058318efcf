// src/qr.rs — 用 qrcode crate 渲染二维码（终端文本 / 灰度位图）

use crate::config::Config;
use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use qrcode::render::unicode;
use qrcode::QrCode;

/// 生成 UTF-8 块字符版本，适合 TTY 或保存为文本
pub fn render_text(payload: &str, cfg: &Config) -> Result<String> {
    let code = build(payload, cfg)?;
    let text = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(cfg.quiet_zone)
        .build();
    Ok(text)
}

/// 生成灰度位图版本，交给 image crate 编码保存
pub fn render_image(payload: &str, cfg: &Config) -> Result<GrayImage> {
    let code = build(payload, cfg)?;
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(cfg.quiet_zone)
        .min_dimensions(cfg.image_size, cfg.image_size)
        .build();
    Ok(image)
}

fn build(payload: &str, cfg: &Config) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), cfg.ec()).context("无法生成二维码")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_render_is_rectangular() {
        let text = render_text("WIFI:S:test;;", &Config::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(!lines.is_empty());
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn image_respects_min_dimensions() {
        let cfg = Config::default();
        let image = render_image("WIFI:S:test;;", &cfg).unwrap();
        assert!(image.width() >= cfg.image_size);
        assert!(image.height() >= cfg.image_size);
    }
}
