use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 대출/보유 기간의 상한 [년]. 월별 스케줄과 연도별 시계열의 크기를 묶어 둔다.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// 입력값이 계산 전제조건을 만족하지 못한 이유.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidReason {
    /// 음수 값
    #[error("must not be negative")]
    Negative,
    /// NaN 또는 무한대
    #[error("must be a finite number")]
    NotFinite,
    /// 1 이상이어야 하는 정수(기간)가 0
    #[error("must be at least 1")]
    Zero,
    /// 허용 범위를 벗어남
    #[error("must be within [{min}, {max}]")]
    OutOfRange { min: f64, max: f64 },
    /// 계산 도중 값이 유한 범위를 벗어남
    #[error("overflowed to a non-finite value")]
    Overflow,
}

/// 잘못된 입력으로 계산을 진행할 수 없을 때의 유일한 오류 종류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid input `{field}`: {reason}")]
pub struct InvalidInputError {
    pub field: &'static str,
    pub reason: InvalidReason,
}

impl InvalidInputError {
    pub fn new(field: &'static str, reason: InvalidReason) -> Self {
        Self { field, reason }
    }
}

/// 시나리오 파일을 읽을 때 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
}

/// 크레인 한 대의 구매/금융/운영/수익 조건. 한 번의 계산 요청마다 새로 만든다.
///
/// 모든 금액은 같은 통화 단위를 쓴다. `loan_interest_rate`는 연 이율(%)이며
/// 엔진 내부에서 소수로 환산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetParameters {
    /// 트럭 구매가
    pub truck_cost: f64,
    /// 크레인 구매가
    pub crane_cost: f64,
    /// 장착/설치비
    pub installation_cost: f64,
    /// 연료 단가 [통화/L]
    pub fuel_cost_per_l: f64,
    /// 연비 [L/km]
    pub fuel_consumption: f64,
    /// 연간 주행거리 [km/년]
    pub annual_km: f64,
    /// 연간 정비비
    pub maintenance_cost: f64,
    /// 연간 운전원 급여
    pub operator_salary: f64,
    /// 연간 보험료
    pub insurance_cost: f64,
    /// 연간 세금(정액)
    pub tax_cost: f64,
    /// 대출 연이율 [%], 0~100
    pub loan_interest_rate: f64,
    /// 대출 상환 기간 [년]
    pub loan_term: u32,
    /// 처분 시 잔존가치
    pub resale_value: f64,
    /// 보유(분석) 기간 [년]
    pub years: u32,
    /// 연간 매출
    pub revenue_per_year: f64,
}

impl Default for AssetParameters {
    fn default() -> Self {
        Self {
            truck_cost: 100_000.0,
            crane_cost: 50_000.0,
            installation_cost: 10_000.0,
            fuel_cost_per_l: 1.5,
            fuel_consumption: 0.3,
            annual_km: 30_000.0,
            maintenance_cost: 5_000.0,
            operator_salary: 40_000.0,
            insurance_cost: 5_000.0,
            tax_cost: 2_000.0,
            loan_interest_rate: 5.0,
            loan_term: 5,
            resale_value: 30_000.0,
            years: 10,
            revenue_per_year: 120_000.0,
        }
    }
}

impl AssetParameters {
    /// 총 취득원가(트럭 + 크레인 + 설치).
    pub fn acquisition_cost(&self) -> f64 {
        self.truck_cost + self.crane_cost + self.installation_cost
    }

    /// 음수가 아니어야 하는 실수 필드 목록.
    pub fn amount_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("truck_cost", self.truck_cost),
            ("crane_cost", self.crane_cost),
            ("installation_cost", self.installation_cost),
            ("fuel_cost_per_l", self.fuel_cost_per_l),
            ("fuel_consumption", self.fuel_consumption),
            ("annual_km", self.annual_km),
            ("maintenance_cost", self.maintenance_cost),
            ("operator_salary", self.operator_salary),
            ("insurance_cost", self.insurance_cost),
            ("tax_cost", self.tax_cost),
            ("loan_interest_rate", self.loan_interest_rate),
            ("resale_value", self.resale_value),
            ("revenue_per_year", self.revenue_per_year),
        ]
    }

    /// 구조적 전제조건을 검사한다. 하나라도 어긋나면 첫 위반 필드를 돌려준다.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for (field, value) in self.amount_fields() {
            if !value.is_finite() {
                return Err(InvalidInputError::new(field, InvalidReason::NotFinite));
            }
            if value < 0.0 {
                return Err(InvalidInputError::new(field, InvalidReason::Negative));
            }
        }
        if self.loan_interest_rate > 100.0 {
            return Err(InvalidInputError::new(
                "loan_interest_rate",
                InvalidReason::OutOfRange {
                    min: 0.0,
                    max: 100.0,
                },
            ));
        }
        for (field, value) in [("loan_term", self.loan_term), ("years", self.years)] {
            if value == 0 {
                return Err(InvalidInputError::new(field, InvalidReason::Zero));
            }
            if value > MAX_HORIZON_YEARS {
                return Err(InvalidInputError::new(
                    field,
                    InvalidReason::OutOfRange {
                        min: 1.0,
                        max: f64::from(MAX_HORIZON_YEARS),
                    },
                ));
            }
        }
        Ok(())
    }

    /// TOML 문자열에서 시나리오를 읽는다. 빠진 필드는 기본값으로 채운다.
    pub fn from_toml_str(src: &str) -> Result<Self, ScenarioError> {
        let params: AssetParameters = toml::from_str(src)?;
        params.validate()?;
        Ok(params)
    }

    /// 시나리오 파일을 읽는다.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
