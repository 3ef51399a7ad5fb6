use serde::{Deserialize, Serialize};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，`CD__SERVER__PORT=9999` 覆盖 `server.port`
pub const ENV_PREFIX: &str = "CD";
const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,area,population";
pub const DEFAULT_IDENTITY_HEADER: &str = "X-Authenticated-User";

/// 启动配置
///
/// 加载顺序（后者覆盖前者）：内置默认值 → TOML 文件 → `CD__*` 环境变量。
/// 缺失的段和字段都回落到默认值。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StaticConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub api: ApiConfig,
}

impl StaticConfig {
    /// 读取失败时打印到 stderr 并使用默认值（此时日志系统尚未初始化）
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let loaded = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<StaticConfig>());

        match loaded {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Invalid configuration ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// 默认配置的 TOML 文本
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# failed to render sample config: {}", e))
    }

    /// 写出 TOML，必要时创建父目录
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTTP worker 数量
    pub cpu_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cpu_count: num_cpus::get(),
        }
    }
}

/// 审计日志数据库，类型由 URL 推断（sqlite/mysql/postgres）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub database_url: String,
    /// 仅 MySQL/PostgreSQL 使用
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "country-density.db".to_string(),
            pool_size: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` 指令，如 `info` 或 `country_density=debug,sea_orm=warn`
    pub level: String,
    pub format: LogFormat,
    /// 未设置时输出到 stdout
    pub file: Option<String>,
    pub max_backups: u32,
    pub enable_rotation: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
            max_backups: 5,
            enable_rotation: true,
        }
    }
}

/// 国家数据来源
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub countries_url: String,
    /// 整个请求的超时；未设置时使用 HTTP 客户端默认值
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            countries_url: DEFAULT_COUNTRIES_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub prefix: String,
    pub health_prefix: String,
    /// 前置认证层写入已解析用户名的请求头
    pub identity_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/api/v1".to_string(),
            health_prefix: "/health".to_string(),
            identity_header: DEFAULT_IDENTITY_HEADER.to_string(),
        }
    }
}
