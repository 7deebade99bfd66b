use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 출력 언어 코드(ko/en/auto)
    pub language: String,
    /// 금액 앞에 붙일 통화 기호
    pub currency_symbol: String,
    /// 누적 비용/매출 표를 기본으로 출력할지
    pub show_projection: bool,
    /// 연도별 대출 상환 요약을 기본으로 출력할지
    pub show_schedule: bool,
    /// RUST_LOG가 없을 때 쓰는 로그 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            currency_symbol: "$".to_string(),
            show_projection: false,
            show_schedule: false,
            log_filter: "loader_crane_tco=info".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로에서 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("tco-config-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let cfg = load_from(&path).expect("load default");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        fs::write(&path, "currency_symbol = \"€\"\nshow_projection = true\n").expect("write");
        let cfg = load_from(&path).expect("reload");
        assert_eq!(cfg.currency_symbol, "€");
        assert!(cfg.show_projection);
        assert_eq!(cfg.language, "auto");

        let _ = fs::remove_dir_all(&dir);
    }
}
