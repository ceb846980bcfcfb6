//! 预览状态定义 (Model)

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::Element;

/// 一个面板：带标题的容器
pub struct Panel {
    pub title: String,
    pub root: Rc<RefCell<Element>>,
}

/// 预览状态
#[derive(Default)]
pub struct Preview {
    panels: Vec<Panel>,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加面板，默认以容器 id（`#id`）作为标题
    pub fn add(&mut self, root: &Rc<RefCell<Element>>) {
        let title = match root.borrow().id() {
            Some(id) => format!("#{}", id),
            None => "container".to_string(),
        };
        self.panels.push(Panel {
            title,
            root: Rc::clone(root),
        });
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// 每个面板的高度（内容行数加上下边框）
    pub fn panel_heights(&self) -> Vec<u16> {
        self.panels
            .iter()
            .map(|panel| {
                let lines = super::element_lines(&panel.root.borrow()).len().max(1);
                u16::try_from(lines + 2).unwrap_or(u16::MAX)
            })
            .collect()
    }

    /// 全部面板所需的总高度
    pub fn height(&self) -> u16 {
        self.panel_heights()
            .into_iter()
            .fold(0u16, |acc, h| acc.saturating_add(h))
    }
}
