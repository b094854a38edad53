//! 從日誌文字中擷取 JSON 片段。

use std::fmt;

const OPENING: [char; 2] = ['{', '['];
const CLOSING: [char; 2] = ['}', ']'];

/// 無法擷取時退回原文的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    NoOpeningBracket,
    NoClosingBracket,
    /// 最後一個右括號出現在第一個左括號之前
    Inverted,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Fallback::NoOpeningBracket => "Can't find opening brackets",
            Fallback::NoClosingBracket => "Can't find closing brackets",
            Fallback::Inverted => "Closing bracket precedes the opening one",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPayload<'a> {
    pub text: &'a str,
    pub fallback: Option<Fallback>,
}

/// 取第一個 `{`/`[` 到最後一個 `}`/`]`（含）之間的內容；找不到時原樣返回
pub fn extract_payload(content: &str) -> ExtractedPayload<'_> {
    let fallback = |reason: Fallback| {
        tracing::debug!("{}. Returning input.", reason);
        ExtractedPayload {
            text: content,
            fallback: Some(reason),
        }
    };

    let Some(begin) = content.find(|c: char| OPENING.contains(&c)) else {
        return fallback(Fallback::NoOpeningBracket);
    };
    let Some(end) = content.rfind(|c: char| CLOSING.contains(&c)) else {
        return fallback(Fallback::NoClosingBracket);
    };
    if end < begin {
        return fallback(Fallback::Inverted);
    }

    // 括號皆為 ASCII，切片邊界一定合法
    ExtractedPayload {
        text: &content[begin..=end],
        fallback: None,
    }
}
