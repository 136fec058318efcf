// src/wifi.rs — Wi-Fi 凭据载荷编码（zxing 的 WIFI: 约定）
//
// 格式: WIFI:T:<auth>;S:<ssid>;P:<pass>;H:<true|false>;E:..;A:..;I:..;PH2:..;
// 末尾再补一个 ';'。细节见
// https://github.com/zxing/zxing/wiki/Barcode-Contents

use crate::types::Credentials;

/// 转义值中的保留字符（\ ; , "），在前面补反斜杠。
/// 单次扫描，不会把刚插入的反斜杠再转义一遍
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// 生成完整载荷。字段固定顺序，None 的字段整个省略
pub fn encode(creds: &Credentials) -> String {
    let auth = creds.auth.as_ref().map(|a| a.to_string());
    let hidden = creds.hidden.map(|h| if h { "true" } else { "false" });

    let mut out = String::from("WIFI:");
    push_field(&mut out, "T", auth.as_deref());
    push_field(&mut out, "S", creds.ssid.as_deref());
    push_field(&mut out, "P", creds.password.as_deref());
    push_field(&mut out, "H", hidden);
    push_field(&mut out, "E", creds.eap_method.as_deref());
    push_field(&mut out, "A", creds.anonymous_identity.as_deref());
    push_field(&mut out, "I", creds.identity.as_deref());
    push_field(&mut out, "PH2", creds.phase2_method.as_deref());
    out.push(';');
    out
}

/// 追加 `KEY:<转义后的值>;`；只转义值，不转义键
fn push_field(out: &mut String, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        out.push_str(key);
        out.push(':');
        out.push_str(&escape(v));
        out.push(';');
    }
}
