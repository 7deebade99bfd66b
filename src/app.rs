use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser};
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::params::{AssetParameters, InvalidInputError, ScenarioError};
use crate::tco::amortization::{monthly_schedule, yearly_summary};
use crate::tco::projection::projection;
use crate::tco::TcoEngine;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 파일 오류
    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),
    /// 계산 입력 오류
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// JSON 출력 오류
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 로더 크레인 총소유비용(TCO)과 손익분기 계산기.
#[derive(Debug, Parser)]
#[command(name = "loader_crane_tco", version, allow_negative_numbers = true)]
pub struct Cli {
    /// 시나리오 TOML 파일. 없으면 기본 시나리오에서 시작한다.
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// 각 필드를 기본값과 함께 대화형으로 입력받는다.
    #[arg(short, long)]
    pub interactive: bool,

    /// 출력 언어 (auto/ko/en)
    #[arg(short = 'L', long)]
    pub lang: Option<String>,

    /// 결과를 JSON으로 출력한다.
    #[arg(long)]
    pub json: bool,

    /// 누적 비용/매출 표를 출력한다.
    #[arg(long)]
    pub projection: bool,

    /// 연도별 대출 상환 요약을 출력한다.
    #[arg(long)]
    pub schedule: bool,

    #[command(flatten)]
    pub overrides: ParamOverrides,
}

/// 시나리오 위에 덮어쓸 개별 필드 값.
#[derive(Debug, Default, Clone, Args)]
pub struct ParamOverrides {
    #[arg(long)]
    pub truck_cost: Option<f64>,
    #[arg(long)]
    pub crane_cost: Option<f64>,
    #[arg(long)]
    pub installation_cost: Option<f64>,
    #[arg(long)]
    pub fuel_cost_per_l: Option<f64>,
    /// L/km
    #[arg(long)]
    pub fuel_consumption: Option<f64>,
    #[arg(long)]
    pub annual_km: Option<f64>,
    #[arg(long)]
    pub maintenance_cost: Option<f64>,
    #[arg(long)]
    pub operator_salary: Option<f64>,
    #[arg(long)]
    pub insurance_cost: Option<f64>,
    #[arg(long)]
    pub tax_cost: Option<f64>,
    /// 연이율 [%]
    #[arg(long)]
    pub loan_interest_rate: Option<f64>,
    /// 대출 기간 [년]
    #[arg(long)]
    pub loan_term: Option<u32>,
    #[arg(long)]
    pub resale_value: Option<f64>,
    /// 보유 기간 [년]
    #[arg(long)]
    pub years: Option<u32>,
    #[arg(long)]
    pub revenue_per_year: Option<f64>,
}

impl ParamOverrides {
    /// 지정된 필드만 덮어쓴다.
    pub fn apply(&self, p: &mut AssetParameters) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut p.truck_cost, self.truck_cost);
        set(&mut p.crane_cost, self.crane_cost);
        set(&mut p.installation_cost, self.installation_cost);
        set(&mut p.fuel_cost_per_l, self.fuel_cost_per_l);
        set(&mut p.fuel_consumption, self.fuel_consumption);
        set(&mut p.annual_km, self.annual_km);
        set(&mut p.maintenance_cost, self.maintenance_cost);
        set(&mut p.operator_salary, self.operator_salary);
        set(&mut p.insurance_cost, self.insurance_cost);
        set(&mut p.tax_cost, self.tax_cost);
        set(&mut p.loan_interest_rate, self.loan_interest_rate);
        set(&mut p.loan_term, self.loan_term);
        set(&mut p.resale_value, self.resale_value);
        set(&mut p.years, self.years);
        set(&mut p.revenue_per_year, self.revenue_per_year);
    }
}

/// 시나리오 파일, CLI 덮어쓰기, 대화형 입력 순으로 입력 레코드를 만든다.
pub fn build_parameters(cli: &Cli, tr: &Translator) -> Result<AssetParameters, AppError> {
    let mut params = match &cli.scenario {
        Some(path) => {
            debug!(path = %path.display(), "loading scenario");
            AssetParameters::load(path)?
        }
        None => AssetParameters::default(),
    };
    cli.overrides.apply(&mut params);
    if cli.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        params = ui_cli::prompt_parameters(&mut stdin.lock(), &mut stdout.lock(), tr, &params)?;
    }
    params.validate()?;
    Ok(params)
}

/// 한 번의 계산 요청을 처리하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(config.language.as_str()));
    let tr = Translator::new(&lang);
    let params = build_parameters(cli, &tr)?;
    let engine = TcoEngine::new(params)?;
    let result = engine.evaluate()?;
    info!(
        annual_costs = result.annual.total,
        tco = result.total_cost_of_ownership,
        break_even = ?result.break_even,
        "calculation complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
        return Ok(());
    }

    let symbol = config.currency_symbol.as_str();
    ui_cli::write_report(&mut out, &tr, symbol, &result)?;
    let p = engine.params();
    if cli.projection || config.show_projection {
        let points = projection(result.annual.total, p.revenue_per_year, p.years);
        ui_cli::write_projection(&mut out, &tr, symbol, &points)?;
    }
    if cli.schedule || config.show_schedule {
        let rows = monthly_schedule(p.acquisition_cost(), p.loan_interest_rate, p.loan_term);
        ui_cli::write_schedule(&mut out, &tr, symbol, &yearly_summary(&rows))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_touch_given_fields() {
        let cli = Cli::parse_from([
            "loader_crane_tco",
            "--loan-interest-rate",
            "0",
            "--years",
            "8",
        ]);
        let mut p = AssetParameters::default();
        cli.overrides.apply(&mut p);
        assert_eq!(p.loan_interest_rate, 0.0);
        assert_eq!(p.years, 8);
        assert_eq!(p.truck_cost, 100_000.0);
    }

    #[test]
    fn invalid_override_is_rejected_before_calculation() {
        let cli = Cli::parse_from(["loader_crane_tco", "--loan-term", "0"]);
        let err = build_parameters(&cli, &Translator::new("en")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(e) if e.field == "loan_term"));
    }
}
