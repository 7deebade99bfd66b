//! 입력 범위 전반에 걸친 계산 항등식 검사.
use loader_crane_tco::{AssetParameters, BreakEven, TcoEngine};
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

fn params(
    acquisition: [f64; 3],
    resale: f64,
    rate: f64,
    loan_term: u32,
    years: u32,
    revenue: f64,
) -> AssetParameters {
    AssetParameters {
        truck_cost: acquisition[0],
        crane_cost: acquisition[1],
        installation_cost: acquisition[2],
        loan_interest_rate: rate,
        loan_term,
        resale_value: resale,
        years,
        revenue_per_year: revenue,
        ..AssetParameters::default()
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn fuel_cost_is_the_plain_product(price in 0.0f64..5.0, use_l in 0.0f64..2.0, km in 0.0f64..200_000.0) {
        let e = TcoEngine::new(AssetParameters {
            fuel_cost_per_l: price,
            fuel_consumption: use_l,
            annual_km: km,
            ..AssetParameters::default()
        }).unwrap();
        prop_assert_eq!(e.fuel_cost().unwrap(), price * use_l * km);
    }

    #[test]
    fn depreciation_times_years_recovers_net_cost(
        truck in 0.0f64..500_000.0,
        crane in 0.0f64..300_000.0,
        install in 0.0f64..50_000.0,
        resale in 0.0f64..400_000.0,
        years in 1u32..40,
    ) {
        let e = TcoEngine::new(params([truck, crane, install], resale, 5.0, 5, years, 0.0)).unwrap();
        let net = truck + crane + install - resale;
        let back = e.depreciation().unwrap() * f64::from(years);
        prop_assert!((back - net).abs() <= 1e-6 * net.abs().max(1.0));
    }

    #[test]
    fn loan_payment_amortizes_principal(
        principal in 1_000.0f64..1_000_000.0,
        rate in 0.01f64..30.0,
        term in 1u32..30,
    ) {
        let e = TcoEngine::new(params([principal, 0.0, 0.0], 0.0, rate, term, 10, 0.0)).unwrap();
        let monthly_rate = rate / 100.0 / 12.0;
        let payment = e.loan_payment().unwrap() / 12.0;
        let mut balance = principal;
        for _ in 0..term * 12 {
            balance = balance * (1.0 + monthly_rate) - payment;
        }
        prop_assert!(balance.abs() <= 1e-6 * principal, "residual {}", balance);
    }

    #[test]
    fn tco_and_break_even_follow_annual_costs(
        rate in 0.0f64..20.0,
        term in 1u32..15,
        years in 1u32..25,
        revenue in 0.0f64..400_000.0,
    ) {
        let e = TcoEngine::new(params([100_000.0, 50_000.0, 10_000.0], 30_000.0, rate, term, years, revenue)).unwrap();
        let annual = e.annual_costs().unwrap();
        let tco = e.total_cost_of_ownership().unwrap();
        prop_assert_eq!(tco, annual * f64::from(years));
        match e.break_even_years().unwrap() {
            BreakEven::NeverProfitable => prop_assert!(revenue <= annual),
            BreakEven::Years(y) => {
                prop_assert!(revenue > annual);
                let expected = (tco / (revenue - annual) * 100.0).round() / 100.0;
                prop_assert_eq!(y, expected);
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_identical(revenue in 0.0f64..300_000.0) {
        let e = TcoEngine::new(params([100_000.0, 50_000.0, 10_000.0], 30_000.0, 5.0, 5, 10, revenue)).unwrap();
        prop_assert_eq!(e.evaluate().unwrap(), e.evaluate().unwrap());
    }
}
