use serde::Serialize;

use crate::tco::engine::annual_loan_payment;

/// 월별 상환 스케줄의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// 1부터 시작하는 회차
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// 이번 회차 상환 후 잔액
    pub balance: f64,
}

/// 연 단위로 묶은 상환 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// 해당 연도 말 잔액
    pub closing_balance: f64,
}

/// 연간 상환액을 12로 나눈 월 상환액으로 원금을 갚아 나가는 스케줄을 만든다.
///
/// `annual_rate_pct`는 백분율(5.0 = 5%)이다. 마지막 회차 잔액은 부동소수 오차 범위에서 0이다.
pub fn monthly_schedule(principal: f64, annual_rate_pct: f64, term_years: u32) -> Vec<ScheduleRow> {
    let annual_rate = annual_rate_pct / 100.0;
    let monthly_rate = annual_rate / 12.0;
    let payment = annual_loan_payment(principal, annual_rate, term_years) / 12.0;
    let months = term_years.saturating_mul(12);
    let mut balance = principal;
    let mut rows = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let interest = balance * monthly_rate;
        let principal_part = payment - interest;
        balance -= principal_part;
        rows.push(ScheduleRow {
            month,
            payment,
            interest,
            principal: principal_part,
            balance,
        });
    }
    rows
}

/// 월별 행을 12개월 단위로 합산한다.
pub fn yearly_summary(rows: &[ScheduleRow]) -> Vec<YearSummary> {
    rows.chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearSummary {
            year: idx as u32 + 1,
            payment: chunk.iter().map(|r| r.payment).sum(),
            interest: chunk.iter().map(|r| r.interest).sum(),
            principal: chunk.iter().map(|r| r.principal).sum(),
            closing_balance: chunk.last().map(|r| r.balance).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_schedule_has_no_interest() {
        let rows = monthly_schedule(12_000.0, 0.0, 1);
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert!(rows[11].balance.abs() < 1e-9);
    }

    #[test]
    fn yearly_summary_groups_by_twelve() {
        let rows = monthly_schedule(160_000.0, 5.0, 5);
        let years = yearly_summary(&rows);
        assert_eq!(years.len(), 5);
        let paid: f64 = years.iter().map(|y| y.principal).sum();
        assert!((paid - 160_000.0).abs() < 1e-6);
        assert!(years[4].closing_balance.abs() < 1e-6);
        assert!(years[0].interest > years[4].interest);
    }
}
