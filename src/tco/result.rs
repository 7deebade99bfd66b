use serde::Serialize;

/// 손익분기 결과. 분기점이 없으면 별도 태그로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum BreakEven {
    /// TCO를 연간 이익으로 나눈 연수(소수 둘째 자리 반올림)
    Years(f64),
    /// 연간 비용이 매출 이상이라 분기점이 없음
    NeverProfitable,
}

impl BreakEven {
    pub fn years(&self) -> Option<f64> {
        match self {
            BreakEven::Years(y) => Some(*y),
            BreakEven::NeverProfitable => None,
        }
    }

    pub fn is_profitable(&self) -> bool {
        matches!(self, BreakEven::Years(_))
    }
}

/// 계산은 가능하지만 사용자에게 알려야 하는 주의 사항.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caveat {
    /// 잔존가치가 취득원가보다 커서 감가상각비가 음수
    NegativeDepreciation,
    /// 대출 기간이 보유 기간보다 길다. 상환액은 보유 기간 내내 일정하게 본다.
    LoanOutlivesHorizon,
    /// 연간 매출이 연간 비용 이하
    NeverProfitable,
}

/// 연간 비용 분해. 매 계산마다 새로 만든다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualCostBreakdown {
    pub fuel: f64,
    pub depreciation: f64,
    pub loan_payment: f64,
    pub maintenance: f64,
    pub operator_salary: f64,
    pub insurance: f64,
    pub tax: f64,
    /// 위 일곱 항목의 합
    pub total: f64,
}

impl AnnualCostBreakdown {
    /// 이름이 붙은 비용 항목들을 순서대로 돌려준다.
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("fuel", self.fuel),
            ("depreciation", self.depreciation),
            ("loan_payment", self.loan_payment),
            ("maintenance", self.maintenance),
            ("operator_salary", self.operator_salary),
            ("insurance", self.insurance),
            ("tax", self.tax),
        ]
    }
}

/// 한 번의 계산 요청에 대한 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcoResult {
    pub annual: AnnualCostBreakdown,
    pub total_cost_of_ownership: f64,
    pub revenue_per_year: f64,
    pub annual_profit: f64,
    pub break_even: BreakEven,
    pub caveats: Vec<Caveat>,
}
