use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 給人看的單行格式
    #[default]
    Compact,
    /// 每個事件一行 JSON，欄位攤平到頂層
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// 沒有 `RUST_LOG` 時使用的過濾規則
pub fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "json_triage=debug,info"
    } else {
        "json_triage=info"
    }
}

/// 安裝全域 subscriber。日誌一律寫到 stderr，stdout 只留給檢查報告。
///
/// `RUST_LOG` 有設定時優先，否則依 `verbose` 取 [`filter_directives`]。
pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry
            .with(layer.json().flatten_event(true).with_current_span(false))
            .init(),
    }
}
