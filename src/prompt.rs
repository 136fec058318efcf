// src/prompt.rs — 终端 y/n 确认，解析与 I/O 分开

use std::io::BufRead;
use std::path::Path;

/// 解析一行回答，大小写不敏感；无法识别返回 None
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// 循环读取直到得到有效回答；EOF 或读取失败视为拒绝
pub fn confirm_from(mut input: impl BufRead, msg: &str) -> bool {
    loop {
        eprint!("{msg}");
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {
                if let Some(answer) = parse_answer(&line) {
                    return answer;
                }
            }
        }
    }
}

/// 交互式确认（stdin）
pub fn confirm(msg: &str) -> bool {
    let stdin = std::io::stdin();
    confirm_from(stdin.lock(), msg)
}

/// 目标已存在时询问是否覆盖，不存在直接放行
pub fn can_overwrite(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }
    confirm(&format!("确认覆盖 \"{}\"？[y|n] ", path.display()))
}
