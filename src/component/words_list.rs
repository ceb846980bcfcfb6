//! 单词列表组件
//!
//! 渲染标题与无序列表：`<div><h1>标题</h1><ul><li>单词</li>...</ul></div>`

use super::{Component, StateContainer};
use crate::error::ComponentError;
use crate::markup::RenderOptions;
use crate::models::State;

pub const TITLE: &str = "title";
pub const WORDS: &str = "words";

#[derive(Debug, Default)]
pub struct WordsList {
    container: StateContainer,
    options: RenderOptions,
}

impl WordsList {
    /// 以空 State 创建
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: State) -> Self {
        Self {
            container: StateContainer::new(state),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// 设置标题，其余字段由 set_state 的合并保留
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ComponentError> {
        self.set_state(State::new().with(TITLE, title.into()))
    }

    /// 在末尾追加单词
    ///
    /// 基于当前序列构造新序列，旧序列不被修改。
    pub fn add_word(&mut self, word: impl Into<String>) -> Result<(), ComponentError> {
        let mut words: Vec<String> = self
            .state()
            .string_list(WORDS)?
            .into_iter()
            .map(str::to_owned)
            .collect();
        words.push(word.into());
        self.set_state(State::new().with(WORDS, words))
    }

    /// 以 `-` 连接的单词，无单词时为空字符串
    pub fn show_words(&self) -> Result<String, ComponentError> {
        Ok(self.state().string_list(WORDS)?.join("-"))
    }
}

impl Component for WordsList {
    fn container(&self) -> &StateContainer {
        &self.container
    }

    fn container_mut(&mut self) -> &mut StateContainer {
        &mut self.container
    }

    /// 字段类型不符时按缺省处理（空标题、空列表）
    fn render(&self) -> String {
        let state = self.state();
        let title = state.str_field(TITLE).unwrap_or_default().unwrap_or("");
        let words = state.string_list(WORDS).unwrap_or_default();

        let mut markup = String::from("<div><h1>");
        markup.push_str(&self.options.text(title));
        markup.push_str("</h1><ul>");
        for word in words {
            markup.push_str("<li>");
            markup.push_str(&self.options.text(word));
            markup.push_str("</li>");
        }
        markup.push_str("</ul></div>");
        markup
    }
}
