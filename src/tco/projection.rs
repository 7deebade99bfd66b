use serde::Serialize;

/// 누적 비용/매출 시계열의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub cumulative_cost: f64,
    pub cumulative_revenue: f64,
    pub cumulative_profit: f64,
}

/// 연간 비용과 매출이 일정하다는 가정 아래 1..=years 년의 누적 값을 만든다.
pub fn projection(annual_cost: f64, revenue_per_year: f64, years: u32) -> Vec<ProjectionPoint> {
    (1..=years)
        .map(|year| {
            let y = f64::from(year);
            let cumulative_cost = annual_cost * y;
            let cumulative_revenue = revenue_per_year * y;
            ProjectionPoint {
                year,
                cumulative_cost,
                cumulative_revenue,
                cumulative_profit: cumulative_revenue - cumulative_cost,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_linear_in_year() {
        let pts = projection(1_000.0, 1_500.0, 4);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0].year, 1);
        assert_eq!(pts[3].cumulative_cost, 4_000.0);
        assert_eq!(pts[3].cumulative_revenue, 6_000.0);
        assert_eq!(pts[3].cumulative_profit, 2_000.0);
    }

    #[test]
    fn losses_accumulate_when_costs_dominate() {
        let pts = projection(2_000.0, 1_500.0, 3);
        assert!(pts.iter().all(|p| p.cumulative_profit < 0.0));
        assert_eq!(pts[2].cumulative_profit, -1_500.0);
    }
}
