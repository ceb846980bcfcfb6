//! 组件模块
//!
//! 状态 → 标记 的单向更新循环：
//! - StateContainer: 持有当前 State 与渲染目标的弱引用
//! - Component: 所有组件共享的 set_state / force_update，具体组件只需提供 render
//! - 具体组件 (words_list.rs, counter.rs): 语义化的修改方法，全部经由 set_state

pub mod counter;
pub mod words_list;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use crate::dom::RenderTarget;
use crate::error::ComponentError;
use crate::models::State;

pub use counter::Counter;
pub use words_list::WordsList;

/// 状态容器
///
/// 组件独占自己的 State；渲染目标只以弱引用持有，生命周期归调用方。
#[derive(Debug, Default)]
pub struct StateContainer {
    state: Rc<State>,
    target: Option<Weak<RefCell<dyn RenderTarget>>>,
    revision: u64,
}

impl StateContainer {
    pub fn new(state: State) -> Self {
        Self {
            state: Rc::new(state),
            target: None,
            revision: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// 当前 State 的共享快照，之后的更新不会改变它
    pub fn snapshot(&self) -> Rc<State> {
        Rc::clone(&self.state)
    }

    /// set_state 被调用的次数
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_mounted(&self) -> bool {
        self.target.is_some()
    }

    /// 挂载渲染目标（弱引用）
    pub fn attach<T: RenderTarget + 'static>(&mut self, target: &Rc<RefCell<T>>) {
        let target: Rc<RefCell<dyn RenderTarget>> = target.clone();
        self.target = Some(Rc::downgrade(&target));
    }

    /// 合并 partial 并整体替换当前 State
    fn apply(&mut self, partial: &State) {
        let next = self.state.merge(partial);
        self.state = Rc::new(next);
        self.revision += 1;
        debug!(
            keys = partial.len(),
            revision = self.revision,
            "state merged"
        );
    }

    fn target(&self) -> Result<Rc<RefCell<dyn RenderTarget>>, ComponentError> {
        let weak = self.target.as_ref().ok_or(ComponentError::NotMounted)?;
        weak.upgrade().ok_or_else(|| {
            warn!("render target dropped while mounted");
            ComponentError::TargetDropped
        })
    }
}

/// 组件基础能力
///
/// set_state / force_update / mount 只在这里实现一次，具体组件不重复定义。
pub trait Component {
    fn container(&self) -> &StateContainer;

    fn container_mut(&mut self) -> &mut StateContainer;

    /// 由当前 State 生成标记，必须是纯函数
    fn render(&self) -> String;

    fn state(&self) -> &State {
        self.container().state()
    }

    fn snapshot(&self) -> Rc<State> {
        self.container().snapshot()
    }

    fn mount<T: RenderTarget + 'static>(&mut self, target: &Rc<RefCell<T>>)
    where
        Self: Sized,
    {
        self.container_mut().attach(target);
    }

    /// 浅合并 partial 到当前 State，然后立即 force_update
    ///
    /// 未挂载时只更新 State，跳过重绘。
    fn set_state(&mut self, partial: State) -> Result<(), ComponentError> {
        self.container_mut().apply(&partial);
        match self.force_update() {
            Err(ComponentError::NotMounted) => {
                debug!("component not mounted, redraw skipped");
                Ok(())
            }
            result => result,
        }
    }

    /// 渲染当前 State 并整体替换渲染目标的内容
    fn force_update(&self) -> Result<(), ComponentError> {
        let target = self.container().target()?;
        let markup = self.render();
        trace!(bytes = markup.len(), "rendered");

        let mut guard = target
            .try_borrow_mut()
            .map_err(|_| ComponentError::TargetBusy)?;
        guard.replace_content(&markup);
        Ok(())
    }
}
