// src/main.rs — 主入口 & 流程编排
mod config;
mod output;
mod prompt;
mod qr;
mod types;
mod wifi;

use anyhow::Result;
use clap::Parser;
use config::Config;
use std::path::PathBuf;
use types::{Auth, Credentials};

// ════════════════════════════════════════════════════════════════
// CLI 参数
// ════════════════════════════════════════════════════════════════

const USAGE: &str = "\
用法: wifiqr [选项]

生成 Wi-Fi 网络二维码（Android / iOS 扫码即连）

选项
  -s, --ssid <SSID>        网络名称 (SSID)
  -k, --key <KEY>          密码
  -a, --auth <TYPE>        加密类型 WEP|WPA|WPA2|WPA2-EAP|nopass（默认 WPA2）
  -h, --hidden             网络为隐藏网络
  -o, --output <PATH>      输出到文件；图片模式下不指定则直接打开查看器
  -t, --terminal           输出终端文本版而不是图片
      --help               显示本帮助后退出

企业网络 (EAP) 选项
  -e, --eap-method <M>     PEAP|TLS|TTLS|PWD|SIM|AKA|AKA'|...
  -p, --ph2 <M>            MSCHAPV2|GTC|SIM|AKA|AKA'|...
  -i, --identity <ID>      身份
  -A, --anonymous-identity <ID>
                           匿名身份";

/// -h 留给 --hidden，所以关掉 clap 自带的 help 旗标
#[derive(Parser, Debug)]
#[command(name = "wifiqr", about = "生成 Wi-Fi 网络二维码", version, disable_help_flag = true)]
struct Cli {
    #[arg(short, long)]
    ssid: Option<String>,
    #[arg(short, long)]
    key: Option<String>,
    #[arg(short, long)]
    auth: Option<String>,
    #[arg(short = 'h', long)]
    hidden: bool,
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    terminal: bool,
    #[arg(short, long)]
    eap_method: Option<String>,
    #[arg(short = 'p', long)]
    ph2: Option<String>,
    #[arg(short, long)]
    identity: Option<String>,
    #[arg(short = 'A', long)]
    anonymous_identity: Option<String>,
    #[arg(long)]
    help: bool,
}

// ════════════════════════════════════════════════════════════════
// 入口
// ════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    env_logger::init();

    // 无参数等同于 --help：用法写到 stderr，退出码 1
    if std::env::args().len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --version 走 clap 的标准输出路径
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    if cli.help {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let cfg = Config::load().unwrap_or_default();
    let creds = build_credentials(&cli, &cfg);

    // 缺密码只警告，不中断
    if let (Some(auth), None) = (&creds.auth, &creds.password) {
        if auth.needs_password() {
            eprintln!("警告: {auth} 网络通常需要密码，未指定 --key，生成的二维码可能无法连接");
        }
    }

    let payload = wifi::encode(&creds);
    log::debug!("载荷: {payload}");

    let written = if cli.terminal {
        let text = qr::render_text(&payload, &cfg)?;
        output::write_text(&text, cli.output.as_deref())?
    } else {
        let image = qr::render_image(&payload, &cfg)?;
        output::write_image(&image, cli.output.as_deref())?
    };

    if !written {
        std::process::exit(1);
    }
    Ok(())
}

/// CLI 旗标 → 凭据字段。hidden 总是带上，旗标机制必然给出布尔值
fn build_credentials(cli: &Cli, cfg: &Config) -> Credentials {
    let auth = cli.auth.clone().unwrap_or_else(|| cfg.default_auth.clone());
    Credentials {
        auth: Some(Auth::from(auth.as_str())),
        ssid: cli.ssid.clone(),
        password: cli.key.clone(),
        hidden: Some(cli.hidden),
        eap_method: cli.eap_method.clone(),
        anonymous_identity: cli.anonymous_identity.clone(),
        identity: cli.identity.clone(),
        phase2_method: cli.ph2.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_auth_comes_from_config() {
        let cli = parse(&["wifiqr", "--ssid", "Home"]);
        let creds = build_credentials(&cli, &Config::default());
        assert_eq!(creds.auth, Some(Auth::Wpa2));
    }

    #[test]
    fn explicit_auth_wins_over_config() {
        let cli = parse(&["wifiqr", "--ssid", "Home", "--auth", "nopass"]);
        let creds = build_credentials(&cli, &Config::default());
        assert_eq!(creds.auth, Some(Auth::Nopass));
    }

    #[test]
    fn hidden_is_always_present() {
        let cli = parse(&["wifiqr", "--ssid", "Home"]);
        let creds = build_credentials(&cli, &Config::default());
        assert_eq!(creds.hidden, Some(false));

        let cli = parse(&["wifiqr", "--ssid", "Home", "--hidden"]);
        let creds = build_credentials(&cli, &Config::default());
        assert_eq!(creds.hidden, Some(true));
    }

    #[test]
    fn short_flags_match_long_forms() {
        let cli = parse(&[
            "wifiqr", "-s", "Home", "-k", "pw", "-a", "WEP", "-h", "-t", "-e", "PEAP", "-p",
            "MSCHAPV2", "-i", "me", "-A", "anon",
        ]);
        assert_eq!(cli.ssid.as_deref(), Some("Home"));
        assert_eq!(cli.key.as_deref(), Some("pw"));
        assert_eq!(cli.auth.as_deref(), Some("WEP"));
        assert!(cli.hidden);
        assert!(cli.terminal);
        assert_eq!(cli.eap_method.as_deref(), Some("PEAP"));
        assert_eq!(cli.ph2.as_deref(), Some("MSCHAPV2"));
        assert_eq!(cli.identity.as_deref(), Some("me"));
        assert_eq!(cli.anonymous_identity.as_deref(), Some("anon"));
    }

    #[test]
    fn full_pipeline_payload() {
        let cli = parse(&["wifiqr", "-s", "Corp", "-k", "s;cret", "-a", "WPA2-EAP"]);
        let creds = build_credentials(&cli, &Config::default());
        assert_eq!(
            wifi::encode(&creds),
            "WIFI:T:WPA2-EAP;S:Corp;P:s\\;cret;H:false;;"
        );
    }
}
