// ==========================================
// 资源生物经济引擎 - 配置加载器
// ==========================================
// 职责: JSON 文件加载、环境变量覆写、统一校验
// 优先级: 命令行路径 > 环境变量路径 > 内置默认值
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "RESOURCE_BIOECONOMICS_CONFIG";
/// 模拟年数覆写
pub const YEARS_ENV: &str = "RESOURCE_BIOECONOMICS_YEARS";
/// 输出语言覆写
pub const LOCALE_ENV: &str = "RESOURCE_BIOECONOMICS_LOCALE";

const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// ConfigLoader - 配置加载器
// ==========================================
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(raw: &str) -> ConfigResult<EngineConfig> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件解析并校验
    pub fn from_file(path: &Path) -> ConfigResult<EngineConfig> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// 完整加载流程
    ///
    /// # 参数
    /// - explicit_path: 命令行指定的配置路径（可选）
    ///
    /// # 返回
    /// 已应用环境变量覆写并通过校验的配置
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<EngineConfig> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::path_from_env);

        let mut config = match &path {
            Some(p) => {
                info!(path = %p.display(), "加载配置文件");
                let raw = std::fs::read_to_string(p).map_err(|e| ConfigError::FileRead {
                    path: p.display().to_string(),
                    message: e.to_string(),
                })?;
                serde_json::from_str(&raw)?
            }
            None => {
                info!("未指定配置文件,使用内置默认配置");
                EngineConfig::default()
            }
        };

        let years = std::env::var(YEARS_ENV).ok();
        let locale = std::env::var(LOCALE_ENV).ok();
        Self::apply_overrides(&mut config, years.as_deref(), locale.as_deref())?;

        config.validate()?;
        Ok(config)
    }

    /// 应用覆写值（与环境变量读取解耦,便于测试）
    pub fn apply_overrides(
        config: &mut EngineConfig,
        years: Option<&str>,
        locale: Option<&str>,
    ) -> ConfigResult<()> {
        if let Some(raw) = years.map(str::trim).filter(|v| !v.is_empty()) {
            let parsed = raw.parse::<u32>().map_err(|e| ConfigError::EnvOverride {
                key: YEARS_ENV.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            })?;
            debug!(years = parsed, "覆写模拟年数");
            config.scenario.years = parsed;
        }

        if let Some(raw) = locale.map(str::trim).filter(|v| !v.is_empty()) {
            if !SUPPORTED_LOCALES.contains(&raw) {
                return Err(ConfigError::EnvOverride {
                    key: LOCALE_ENV.to_string(),
                    value: raw.to_string(),
                    message: format!("仅支持 {}", SUPPORTED_LOCALES.join("/")),
                });
            }
            debug!(locale = raw, "覆写输出语言");
            config.locale = raw.to_string();
        }

        Ok(())
    }

    fn path_from_env() -> Option<PathBuf> {
        std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
