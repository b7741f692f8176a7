use crate::core::records::{DEFAULT_HISTORY_PREFIX, DEFAULT_ROSTER_FILE};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, RouletteError};
use crate::utils::validation::{validate_file_prefix, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteConfig {
    pub roster: Option<RosterConfig>,
    pub history: HistoryConfig,
    pub pairing: Option<PairingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub directory: String,
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingConfig {
    pub seed: Option<u64>,
}

impl RouletteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RouletteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RouletteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROULETTE_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RouletteError::ConfigError {
            message: format!("Environment variable pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("history.directory", &self.history.directory)?;
        validate_path("roster.file", self.roster_file())?;
        validate_file_prefix("history.prefix", self.history_prefix())?;
        Ok(())
    }

    /// 命令列的 --seed 優先於設定檔
    pub fn override_seed(&mut self, seed: u64) {
        self.pairing.get_or_insert_with(PairingConfig::default).seed = Some(seed);
    }
}

impl ConfigProvider for RouletteConfig {
    fn artifacts_dir(&self) -> &str {
        &self.history.directory
    }

    fn roster_file(&self) -> &str {
        self.roster
            .as_ref()
            .and_then(|r| r.file.as_deref())
            .unwrap_or(DEFAULT_ROSTER_FILE)
    }

    fn history_prefix(&self) -> &str {
        self.history.prefix.as_deref().unwrap_or(DEFAULT_HISTORY_PREFIX)
    }

    fn seed(&self) -> Option<u64> {
        self.pairing.as_ref().and_then(|p| p.seed)
    }
}

impl Validate for RouletteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
