//! stateview
//!
//! 最小的组件抽象：State → 标记 的同步更新循环。
//! - models: 开放的 State 记录与浅合并
//! - component: 组件基础能力 (set_state / force_update) 与具体组件
//! - dom: 渲染目标与内存容器
//! - ui: 容器内容的终端预览

pub mod component;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod markup;
pub mod models;
pub mod ui;

pub use component::{Component, Counter, StateContainer, WordsList};
pub use dom::{Element, RenderTarget};
pub use error::DomError;
pub use error::ComponentError;
pub use markup::RenderOptions;
pub use models::State;
