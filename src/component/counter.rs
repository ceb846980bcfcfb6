//! 计数器组件

use super::{Component, StateContainer};
use crate::error::ComponentError;
use crate::models::State;

pub const COUNT: &str = "count";

#[derive(Debug)]
pub struct Counter {
    container: StateContainer,
}

impl Counter {
    /// 从 `count = 0` 开始
    pub fn new() -> Self {
        Self {
            container: StateContainer::new(State::new().with(COUNT, 0)),
        }
    }

    pub fn count(&self) -> Result<i64, ComponentError> {
        Ok(self.state().integer_field(COUNT)?.unwrap_or(0))
    }

    pub fn increase(&mut self) -> Result<(), ComponentError> {
        self.step(1)
    }

    pub fn decrease(&mut self) -> Result<(), ComponentError> {
        self.step(-1)
    }

    /// 溢出时不调用 set_state，State 保持不变
    fn step(&mut self, step: i64) -> Result<(), ComponentError> {
        let count = self.count()?;
        let next = count
            .checked_add(step)
            .ok_or(ComponentError::CountOverflow { count, step })?;
        self.set_state(State::new().with(COUNT, next))
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Counter {
    fn container(&self) -> &StateContainer {
        &self.container
    }

    fn container_mut(&mut self) -> &mut StateContainer {
        &mut self.container
    }

    fn render(&self) -> String {
        format!("Count: {}", self.count().unwrap_or_default())
    }
}
