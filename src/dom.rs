//! 渲染目标 (Render Target)
//!
//! 组件只依赖 [`RenderTarget`] 这一个原语：用一段标记整体替换容器内容。
//! [`Element`] 是内存中的容器实现，用 scraper 把标记解析成 HTML 片段，
//! 供查询与终端预览使用。

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::error::DomError;

/// 可被组件写入的外部容器
pub trait RenderTarget {
    /// 用标记整体替换容器的全部内容
    fn replace_content(&mut self, markup: &str);
}

/// 内存容器
#[derive(Debug)]
pub struct Element {
    id: Option<String>,
    fragment: Html,
    replace_count: usize,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: None,
            fragment: Html::parse_fragment(""),
            replace_count: 0,
        }
    }
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// 片段的根元素，其子节点即容器内容
    pub fn root(&self) -> ElementRef<'_> {
        self.fragment.root_element()
    }

    /// 内容被整体替换的次数
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// 重新序列化的内部标记
    pub fn inner_html(&self) -> String {
        self.root().inner_html()
    }

    pub fn text_content(&self) -> String {
        self.root().text().collect()
    }

    /// 文档顺序中第一个匹配选择器的元素
    pub fn query_selector(&self, selector: &str) -> Result<Option<ElementRef<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.fragment.select(&selector).next())
    }

    /// 文档顺序中所有匹配选择器的元素
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.fragment.select(&selector).collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector).map_err(|_| DomError::InvalidSelector(selector.to_string()))
}

impl RenderTarget for Element {
    fn replace_content(&mut self, markup: &str) {
        self.fragment = Html::parse_fragment(markup);
        self.replace_count += 1;
        trace!(
            id = self.id.as_deref().unwrap_or(""),
            bytes = markup.len(),
            "container content replaced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect()
    }

    #[test]
    fn test_parse_words_list_markup() {
        let mut root = Element::with_id("root");
        root.replace_content("<div><h1>Title 2</h1><ul><li>name</li></ul></div>");

        let title = root.query_selector("h1").unwrap().unwrap();
        assert_eq!(text_of(title), "Title 2");

        let items: Vec<String> = root
            .query_selector_all("li")
            .unwrap()
            .into_iter()
            .map(text_of)
            .collect();
        assert_eq!(items, vec!["name"]);
        assert_eq!(root.id(), Some("root"));
    }

    #[test]
    fn test_replace_discards_previous_content() {
        let mut root = Element::new();
        root.replace_content("<ul><li>a</li><li>b</li></ul>");
        root.replace_content("Count: 1");

        assert!(root.query_selector("li").unwrap().is_none());
        assert_eq!(root.text_content(), "Count: 1");
        assert_eq!(root.inner_html(), "Count: 1");
        assert_eq!(root.replace_count(), 2);
    }

    #[test]
    fn test_inner_html_roundtrips_escaped_text() {
        let mut root = Element::new();
        root.replace_content("<h1>Tom &amp; \"Jerry\" 's</h1>");

        assert_eq!(root.text_content(), "Tom & \"Jerry\" 's");
        assert_eq!(root.inner_html(), "<h1>Tom &amp; \"Jerry\" 's</h1>");
    }

    #[test]
    fn test_bare_angle_bracket_in_heading_stays_text() {
        let mut root = Element::new();
        root.replace_content("<div><h1>a < b</h1><ul><li>x</li></ul></div>");

        let title = root.query_selector("h1").unwrap().unwrap();
        assert_eq!(text_of(title), "a < b");
        assert_eq!(root.query_selector_all("h1 li").unwrap().len(), 0);
        assert_eq!(root.query_selector_all("ul > li").unwrap().len(), 1);
    }

    #[test]
    fn test_stray_close_tags_are_ignored() {
        let mut root = Element::new();
        root.replace_content("<div><p>open</span></div>tail");
        assert_eq!(root.inner_html(), "<div><p>open</p></div>tail");
    }

    #[test]
    fn test_unclosed_list_items_become_siblings() {
        let mut root = Element::new();
        root.replace_content("<ul><li>one<li>two");
        assert_eq!(root.query_selector_all("ul > li").unwrap().len(), 2);
        assert_eq!(root.text_content(), "onetwo");
    }

    #[test]
    fn test_empty_list_has_no_items() {
        let mut root = Element::new();
        root.replace_content("<div><h1></h1><ul></ul></div>");
        let list = root.query_selector("ul").unwrap().unwrap();
        assert!(list.children().next().is_none());
        assert!(root.query_selector_all("li").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let root = Element::new();
        assert_eq!(
            root.query_selector("li[").unwrap_err(),
            DomError::InvalidSelector("li[".to_string())
        );
    }
}
