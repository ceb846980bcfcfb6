//! 日志初始化
//!
//! 预览直接画在终端上，日志写到 stdout/stderr 会把画面打乱，
//! 所以只有设置了 `STATEVIEW_LOG` 才启用，并且只写文件。

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件路径：`{STATEVIEW_LOG}.{秒级时间戳}.{pid}`，多个实例互不覆盖
fn log_file_path(base: &str) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, timestamp, std::process::id()))
}

/// 初始化 tracing，级别由 `RUST_LOG` 控制（默认 `info`）
///
/// 组件的 State 合并与容器替换分别记录在 debug / trace 级别。
pub fn init_tracing() {
    let Ok(base) = std::env::var("STATEVIEW_LOG") else {
        return;
    };

    let path = log_file_path(&base);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("无法创建日志文件 {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}
