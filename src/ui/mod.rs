//! 终端预览
//!
//! 把已挂载的容器画到终端上：
//! - Model (state.rs): Preview 及其面板列表
//! - View (view/): 纯函数，将容器内容映射为 ratatui 画面
//!
//! 只做一次性绘制，不处理输入。

pub mod state;
pub mod view;

pub use state::{Panel, Preview};
pub use view::{element_lines, render};
