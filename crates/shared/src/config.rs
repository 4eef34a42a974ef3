use anyhow::{bail, Context, Result};
use domain::{PageOptions, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use std::env;

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// CloudWatch などに流す構造化ログ
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub log_format: LogFormat,
    pub default_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "dev".to_string(),
            log_format: LogFormat::Text,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 環境変数の代わりに任意の参照関数から読み込みます。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None => defaults.log_format,
            Some(raw) => parse_log_format(raw)?,
        };

        let default_page_size = match lookup("TODO_DEFAULT_PAGE_SIZE") {
            None => defaults.default_page_size,
            Some(raw) => {
                let size: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("TODO_DEFAULT_PAGE_SIZE is not a number: {raw:?}"))?;
                if size < 1 {
                    bail!("TODO_DEFAULT_PAGE_SIZE must be greater than 0");
                }
                size
            }
        };

        Ok(Config {
            environment,
            log_format,
            default_page_size,
        })
    }

    /// 一覧で省略時に使うページ指定
    pub fn default_page(&self) -> PageOptions {
        PageOptions::new(DEFAULT_PAGE_NUMBER, self.default_page_size)
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "text" | "pretty" => Ok(LogFormat::Text),
        other => bail!("unsupported LOG_FORMAT: {other}"),
    }
}
