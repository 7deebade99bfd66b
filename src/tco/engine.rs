use tracing::{debug, warn};

use crate::params::{AssetParameters, InvalidInputError, InvalidReason};
use crate::tco::result::{AnnualCostBreakdown, BreakEven, Caveat, TcoResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// 검증된 입력 한 건에 대한 TCO 계산기.
///
/// 내부 상태는 입력 레코드뿐이며 모든 메서드는 순수 함수다. 같은 입력으로
/// 몇 번을 호출해도 같은 결과가 나오므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct TcoEngine {
    params: AssetParameters,
    /// 연이율을 소수로 환산한 값 (5% -> 0.05)
    annual_rate: f64,
}

/// 계산값이 유한한지 확인한다. 극단적인 입력으로 넘친 값은 입력 오류로 보고한다.
fn finite(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::new(field, InvalidReason::Overflow))
    }
}

/// 소수 둘째 자리에서 반올림한다.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 원금을 월복리 원리금균등으로 상환할 때의 연간 상환액.
///
/// `annual_rate`는 소수(0.05 = 5%)다. 이율이 정확히 0이면 단순 균등 분할한다.
/// 분모 `1 - (1+i)^-n`은 `ln_1p`/`exp_m1`로 계산해 아주 작은 이율에서도 0으로 소거되지 않는다.
pub fn annual_loan_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let term = f64::from(term_years);
    if annual_rate == 0.0 {
        return principal / term;
    }
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    let months = term * MONTHS_PER_YEAR;
    let discount = -(-months * monthly_rate.ln_1p()).exp_m1();
    if discount == 0.0 {
        // 이율이 표현 한계 아래라 이자가 사실상 0
        return principal / term;
    }
    (principal * monthly_rate) / discount * MONTHS_PER_YEAR
}

impl TcoEngine {
    /// 입력을 검증한 뒤 계산기를 만든다. 검증을 통과하지 못하면 어떤 값도 계산하지 않는다.
    pub fn new(params: AssetParameters) -> Result<Self, InvalidInputError> {
        params.validate()?;
        let annual_rate = params.loan_interest_rate / 100.0;
        Ok(Self {
            params,
            annual_rate,
        })
    }

    pub fn params(&self) -> &AssetParameters {
        &self.params
    }

    /// 소수로 환산된 대출 연이율.
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// 연간 연료비 = 단가 × 연비 × 주행거리.
    pub fn fuel_cost(&self) -> Result<f64, InvalidInputError> {
        let p = &self.params;
        finite(
            "fuel_cost",
            p.fuel_cost_per_l * p.fuel_consumption * p.annual_km,
        )
    }

    /// 연간 정액 감가상각비. 잔존가치가 취득원가보다 크면 음수가 되며 그대로 돌려준다.
    pub fn depreciation(&self) -> Result<f64, InvalidInputError> {
        let p = &self.params;
        finite(
            "depreciation",
            (p.acquisition_cost() - p.resale_value) / f64::from(p.years),
        )
    }

    /// 취득원가 전액을 `loan_term`년 동안 상환할 때의 연간 상환액.
    pub fn loan_payment(&self) -> Result<f64, InvalidInputError> {
        let p = &self.params;
        finite(
            "loan_payment",
            annual_loan_payment(p.acquisition_cost(), self.annual_rate, p.loan_term),
        )
    }

    /// 연간 비용 항목 전체를 계산한다.
    pub fn breakdown(&self) -> Result<AnnualCostBreakdown, InvalidInputError> {
        let p = &self.params;
        let fuel = self.fuel_cost()?;
        let depreciation = self.depreciation()?;
        let loan_payment = self.loan_payment()?;
        let total = finite(
            "annual_costs",
            fuel + depreciation
                + loan_payment
                + p.maintenance_cost
                + p.operator_salary
                + p.insurance_cost
                + p.tax_cost,
        )?;
        debug!(fuel, depreciation, loan_payment, total, "annual cost breakdown");
        Ok(AnnualCostBreakdown {
            fuel,
            depreciation,
            loan_payment,
            maintenance: p.maintenance_cost,
            operator_salary: p.operator_salary,
            insurance: p.insurance_cost,
            tax: p.tax_cost,
            total,
        })
    }

    /// 연간 총비용. 다른 모든 지표가 이 값을 기준으로 한다.
    pub fn annual_costs(&self) -> Result<f64, InvalidInputError> {
        Ok(self.breakdown()?.total)
    }

    /// 보유 기간 전체의 총소유비용. 연간 비용이 매년 같다고 가정한다.
    pub fn total_cost_of_ownership(&self) -> Result<f64, InvalidInputError> {
        let annual = self.annual_costs()?;
        finite(
            "total_cost_of_ownership",
            annual * f64::from(self.params.years),
        )
    }

    /// 연간 매출 - 연간 총비용.
    pub fn annual_profit(&self) -> Result<f64, InvalidInputError> {
        let annual = self.annual_costs()?;
        finite("annual_profit", self.params.revenue_per_year - annual)
    }

    /// TCO를 연간 이익으로 상각하는 데 걸리는 연수.
    ///
    /// 누적 곡선이 실제로 교차하는 해가 아니라 `TCO / 연간 이익`이다.
    /// 연간 이익이 0 이하이면 [`BreakEven::NeverProfitable`]을 돌려준다.
    pub fn break_even_years(&self) -> Result<BreakEven, InvalidInputError> {
        let profit = self.annual_profit()?;
        if profit <= 0.0 {
            return Ok(BreakEven::NeverProfitable);
        }
        let tco = self.total_cost_of_ownership()?;
        let years = finite("break_even_years", tco / profit)?;
        Ok(BreakEven::Years(round2(years)))
    }

    /// 계산은 되지만 표시할 때 알려야 하는 주의 사항.
    pub fn caveats(&self) -> Result<Vec<Caveat>, InvalidInputError> {
        let p = &self.params;
        let mut caveats = Vec::new();
        if p.resale_value > p.acquisition_cost() {
            caveats.push(Caveat::NegativeDepreciation);
        }
        if p.loan_term > p.years {
            caveats.push(Caveat::LoanOutlivesHorizon);
        }
        if !self.break_even_years()?.is_profitable() {
            caveats.push(Caveat::NeverProfitable);
        }
        Ok(caveats)
    }

    /// 모든 지표를 한 번에 계산한다.
    pub fn evaluate(&self) -> Result<TcoResult, InvalidInputError> {
        let annual = self.breakdown()?;
        let total_cost_of_ownership = self.total_cost_of_ownership()?;
        let annual_profit = self.annual_profit()?;
        let break_even = self.break_even_years()?;
        let caveats = self.caveats()?;
        for caveat in &caveats {
            warn!(?caveat, "calculation caveat");
        }
        Ok(TcoResult {
            annual,
            total_cost_of_ownership,
            revenue_per_year: self.params.revenue_per_year,
            annual_profit,
            break_even,
            caveats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(params: AssetParameters) -> TcoEngine {
        TcoEngine::new(params).expect("valid params")
    }

    #[test]
    fn rate_is_stored_as_fraction() {
        let e = engine(AssetParameters::default());
        assert!((e.annual_rate() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(annual_loan_payment(160_000.0, 0.0, 5), 32_000.0);
    }

    #[test]
    fn tiny_positive_rate_approaches_straight_line() {
        let e = engine(AssetParameters {
            loan_interest_rate: 1e-14,
            ..AssetParameters::default()
        });
        let payment = e.loan_payment().expect("finite payment");
        assert!((payment - 32_000.0).abs() < 1e-6, "payment={payment}");
        assert!(e.evaluate().is_ok());
        assert!(annual_loan_payment(160_000.0, f64::MIN_POSITIVE, 5).is_finite());
    }

    #[test]
    fn zero_principal_costs_nothing() {
        assert_eq!(annual_loan_payment(0.0, 0.07, 10), 0.0);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(10.644), 10.64);
        assert_eq!(round2(10.646), 10.65);
    }

    #[test]
    fn invalid_params_never_build_an_engine() {
        let p = AssetParameters {
            loan_interest_rate: -1.0,
            ..AssetParameters::default()
        };
        assert!(TcoEngine::new(p).is_err());
    }

    #[test]
    fn overflowing_costs_are_reported() {
        let e = engine(AssetParameters {
            fuel_cost_per_l: f64::MAX,
            fuel_consumption: 10.0,
            ..AssetParameters::default()
        });
        let err = e.fuel_cost().unwrap_err();
        assert_eq!(err.field, "fuel_cost");
        assert_eq!(err.reason, InvalidReason::Overflow);
        assert!(e.evaluate().is_err());
    }

    #[test]
    fn caveats_flag_unusual_but_valid_inputs() {
        let e = engine(AssetParameters {
            resale_value: 200_000.0,
            loan_term: 12,
            revenue_per_year: 10_000.0,
            ..AssetParameters::default()
        });
        assert!(e.depreciation().unwrap() < 0.0);
        let caveats = e.caveats().unwrap();
        assert_eq!(
            caveats,
            vec![
                Caveat::NegativeDepreciation,
                Caveat::LoanOutlivesHorizon,
                Caveat::NeverProfitable
            ]
        );
    }
}
