//! 错误类型

use thiserror::Error;

/// 组件操作可能出现的错误（均为前置条件违反）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// 调用 force_update 前未挂载渲染目标
    #[error("component is not mounted to a render target")]
    NotMounted,

    /// 挂载的渲染目标已被释放
    #[error("render target was dropped while the component was still mounted")]
    TargetDropped,

    /// 渲染目标正被其他地方借用
    #[error("render target is already borrowed")]
    TargetBusy,

    #[error("state field '{key}' is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    /// 计数超出 i64 范围
    #[error("count {count} cannot be stepped by {step} without overflowing")]
    CountOverflow { count: i64, step: i64 },
}

/// 容器查询错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("invalid CSS selector '{0}'")]
    InvalidSelector(String),
}

impl ComponentError {
    pub(crate) fn type_mismatch(key: &str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
        }
    }
}
