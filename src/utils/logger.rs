use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化全域 tracing subscriber，`RUST_LOG` 優先於預設過濾條件
///
/// 已有 subscriber（例如由宿主程式設定）時回傳 `false`
pub fn init_logger(verbose: bool) -> bool {
    let default_directives = if verbose {
        "small_greet=debug,info"
    } else {
        "small_greet=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
