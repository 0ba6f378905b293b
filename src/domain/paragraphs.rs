//! 段落分割器
//!
//! 章节正文中同时存在真实换行和转义换行（两个字符 `\` `n`），
//! 两者都作为段落分隔符

/// 转义换行序列
const ESCAPED_NEWLINE: &str = "\\n";

/// 将转义换行与 `\r\n` 统一为 `\n`
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace(ESCAPED_NEWLINE, "\n")
}

/// 检查片段是否只包含空白（应该被丢弃）
#[inline]
fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// 将章节正文切分为段落
///
/// 分割策略：
/// 1. 连续的一个或多个换行（真实或转义）视为一个分隔
/// 2. 丢弃空白段落
/// 3. 段落首尾空白被去除
pub fn split_paragraphs(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .split('\n')
        .filter(|s| !is_blank(s))
        .map(|s| s.trim().to_string())
        .collect()
}
