// src/config.rs — 配置加载，支持文件覆盖

use anyhow::Result;
use qrcode::EcLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 未指定 --auth 时使用的加密类型
    pub default_auth: String,
    /// 二维码纠错级别 (L/M/Q/H)
    pub ec_level: String,
    /// 图片最小边长（像素）
    pub image_size: u32,
    /// 是否渲染四周留白（quiet zone）
    pub quiet_zone: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_auth: "WPA2".into(),
            ec_level: "M".into(),
            image_size: 256,
            quiet_zone: true,
        }
    }
}

impl Config {
    /// 按优先级查找并加载配置文件
    pub fn load() -> Result<Self> {
        let candidates = config_candidates();
        for path in &candidates {
            if path.exists() {
                let text = std::fs::read_to_string(path)?;
                let cfg: Config = toml::from_str(&text)?;
                log::debug!("已加载配置 {}", path.display());
                return Ok(cfg);
            }
        }
        Ok(Config::default())
    }

    /// 纠错级别，无法识别时退回 M
    pub fn ec(&self) -> EcLevel {
        match self.ec_level.to_ascii_uppercase().as_str() {
            "L" => EcLevel::L,
            "Q" => EcLevel::Q,
            "H" => EcLevel::H,
            _ => EcLevel::M,
        }
    }
}

fn config_candidates() -> Vec<PathBuf> {
    let mut v = vec![];
    // 同目录下的 config.toml
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            v.push(dir.join("config.toml"));
        }
    }
    // ~/.config/wifiqr/config.toml
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".config/wifiqr/config.toml"));
    }
    v
}
