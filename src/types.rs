// src/types.rs — 核心数据类型

/// 认证 / 加密类型
#[derive(Debug, Clone, PartialEq)]
pub enum Auth {
    Nopass,
    Wep,
    Wpa,
    Wpa2,
    Wpa2Eap,
    Other(String),
}

impl Auth {
    /// nopass 以外的类型正常情况下都需要密码
    pub fn needs_password(&self) -> bool {
        !matches!(self, Auth::Nopass)
    }
}

impl std::fmt::Display for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::Nopass => write!(f, "nopass"),
            Auth::Wep => write!(f, "WEP"),
            Auth::Wpa => write!(f, "WPA"),
            Auth::Wpa2 => write!(f, "WPA2"),
            Auth::Wpa2Eap => write!(f, "WPA2-EAP"),
            Auth::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Auth {
    /// 已知写法大小写不敏感，未知写法原样保留
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("nopass") {
            Auth::Nopass
        } else if s.eq_ignore_ascii_case("WEP") {
            Auth::Wep
        } else if s.eq_ignore_ascii_case("WPA") {
            Auth::Wpa
        } else if s.eq_ignore_ascii_case("WPA2") {
            Auth::Wpa2
        } else if s.eq_ignore_ascii_case("WPA2-EAP") {
            Auth::Wpa2Eap
        } else {
            Auth::Other(s.to_string())
        }
    }
}

/// 一次调用要编码的全部凭据，字段均可选；
/// None 表示整个字段省略，与空字符串不同
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub auth: Option<Auth>,
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub hidden: Option<bool>,
    pub eap_method: Option<String>,
    pub anonymous_identity: Option<String>,
    pub identity: Option<String>,
    pub phase2_method: Option<String>,
}
