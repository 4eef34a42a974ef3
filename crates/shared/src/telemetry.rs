use crate::config::{Config, LogFormat};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// トレーシングサブスクライバーを初期化
/// フィルタは RUST_LOG 環境変数で制御（未設定なら info）
pub fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        // 構造化ログ（JSON）
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).json())
            .try_init()?,
        LogFormat::Text => registry.with(fmt::layer()).try_init()?,
    }

    tracing::debug!(environment = %config.environment, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = Config {
            log_format: LogFormat::Json,
            ..Config::default()
        };

        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_err());
    }
}
