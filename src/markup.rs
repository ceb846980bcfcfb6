//! 标记文本工具

use std::borrow::Cow;

/// 渲染选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 是否转义插入标记中的文本（标题、单词）
    pub escape_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

impl RenderOptions {
    /// 按选项处理一段要插入元素内容的文本
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_text {
            html_escape::encode_text(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}
