use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::params::AssetParameters;
use crate::tco::amortization::YearSummary;
use crate::tco::projection::ProjectionPoint;
use crate::tco::{BreakEven, Caveat, TcoResult};

/// 금액을 천 단위 구분자와 소수 둘째 자리로 표시한다.
pub fn format_money(symbol: &str, value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

fn caveat_key(caveat: Caveat) -> &'static str {
    match caveat {
        Caveat::NegativeDepreciation => keys::CAVEAT_NEGATIVE_DEPRECIATION,
        Caveat::LoanOutlivesHorizon => keys::CAVEAT_LOAN_OUTLIVES_HORIZON,
        Caveat::NeverProfitable => keys::CAVEAT_NEVER_PROFITABLE,
    }
}

/// 계산 결과 요약을 출력한다.
pub fn write_report<W: Write>(
    out: &mut W,
    tr: &Translator,
    symbol: &str,
    result: &TcoResult,
) -> io::Result<()> {
    let a = &result.annual;
    writeln!(out, "{}", tr.t(keys::REPORT_TITLE))?;
    let lines = [
        (keys::FUEL_COST, a.fuel),
        (keys::DEPRECIATION, a.depreciation),
        (keys::LOAN_PAYMENT, a.loan_payment),
        (keys::MAINTENANCE, a.maintenance),
        (keys::OPERATOR_SALARY, a.operator_salary),
        (keys::INSURANCE, a.insurance),
        (keys::TAX, a.tax),
        (keys::ANNUAL_COSTS, a.total),
        (keys::TCO, result.total_cost_of_ownership),
        (keys::REVENUE, result.revenue_per_year),
        (keys::ANNUAL_PROFIT, result.annual_profit),
    ];
    for (key, value) in lines {
        writeln!(out, "{:<28} {:>18}", tr.t(key), format_money(symbol, value))?;
    }
    let break_even = match result.break_even {
        BreakEven::Years(y) => format!("{y:.2} {}", tr.t(keys::YEARS_SUFFIX)),
        BreakEven::NeverProfitable => tr.t(keys::NEVER_PROFITABLE).to_string(),
    };
    writeln!(out, "{:<28} {:>18}", tr.t(keys::BREAK_EVEN), break_even)?;

    if !result.caveats.is_empty() {
        writeln!(out, "{}", tr.t(keys::CAVEATS_HEADING))?;
        for caveat in &result.caveats {
            writeln!(out, "  - {}", tr.t(caveat_key(*caveat)))?;
        }
    }
    Ok(())
}

/// 누적 비용/매출 표를 출력한다.
pub fn write_projection<W: Write>(
    out: &mut W,
    tr: &Translator,
    symbol: &str,
    points: &[ProjectionPoint],
) -> io::Result<()> {
    writeln!(out, "\n{}", tr.t(keys::PROJECTION_HEADING))?;
    writeln!(out, "{}", tr.t(keys::PROJECTION_COLUMNS))?;
    for p in points {
        writeln!(
            out,
            "{:>4} | {:>16} | {:>16} | {:>16}",
            p.year,
            format_money(symbol, p.cumulative_cost),
            format_money(symbol, p.cumulative_revenue),
            format_money(symbol, p.cumulative_profit)
        )?;
    }
    Ok(())
}

/// 연도별 대출 상환 요약을 출력한다.
pub fn write_schedule<W: Write>(
    out: &mut W,
    tr: &Translator,
    symbol: &str,
    years: &[YearSummary],
) -> io::Result<()> {
    writeln!(out, "\n{}", tr.t(keys::SCHEDULE_HEADING))?;
    writeln!(out, "{}", tr.t(keys::SCHEDULE_COLUMNS))?;
    for y in years {
        writeln!(
            out,
            "{:>4} | {:>14} | {:>14} | {:>14} | {:>14}",
            y.year,
            format_money(symbol, y.payment),
            format_money(symbol, y.interest),
            format_money(symbol, y.principal),
            // 잔액은 부동소수 오차로 -0.00이 찍히지 않게 0으로 올린다
            format_money(symbol, y.closing_balance.max(0.0))
        )?;
    }
    Ok(())
}

fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf)
}

/// 기본값을 보여주고 실수를 입력받는다. 빈 입력이면 기본값을 유지한다.
fn read_f64_or<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    label: &str,
    default: f64,
) -> Result<f64, AppError> {
    loop {
        let prompt = format!("{label} [{} {default}]: ", tr.t(keys::INPUT_KEEP_DEFAULT));
        let s = read_line(input, out, &prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

fn read_u32_or<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    label: &str,
    default: u32,
) -> Result<u32, AppError> {
    loop {
        let prompt = format!("{label} [{} {default}]: ", tr.t(keys::INPUT_KEEP_DEFAULT));
        let s = read_line(input, out, &prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

/// 15개 입력 필드를 차례로 묻는다. 검증은 호출자가 한다.
pub fn prompt_parameters<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    defaults: &AssetParameters,
) -> Result<AssetParameters, AppError> {
    writeln!(out, "{}", tr.t(keys::INPUT_HEADING))?;
    let d = defaults;
    Ok(AssetParameters {
        truck_cost: read_f64_or(input, out, tr, "truck_cost", d.truck_cost)?,
        crane_cost: read_f64_or(input, out, tr, "crane_cost", d.crane_cost)?,
        installation_cost: read_f64_or(input, out, tr, "installation_cost", d.installation_cost)?,
        fuel_cost_per_l: read_f64_or(input, out, tr, "fuel_cost_per_l", d.fuel_cost_per_l)?,
        fuel_consumption: read_f64_or(input, out, tr, "fuel_consumption [L/km]", d.fuel_consumption)?,
        annual_km: read_f64_or(input, out, tr, "annual_km", d.annual_km)?,
        maintenance_cost: read_f64_or(input, out, tr, "maintenance_cost", d.maintenance_cost)?,
        operator_salary: read_f64_or(input, out, tr, "operator_salary", d.operator_salary)?,
        insurance_cost: read_f64_or(input, out, tr, "insurance_cost", d.insurance_cost)?,
        tax_cost: read_f64_or(input, out, tr, "tax_cost", d.tax_cost)?,
        loan_interest_rate: read_f64_or(input, out, tr, "loan_interest_rate [%]", d.loan_interest_rate)?,
        loan_term: read_u32_or(input, out, tr, "loan_term [years]", d.loan_term)?,
        resale_value: read_f64_or(input, out, tr, "resale_value", d.resale_value)?,
        years: read_u32_or(input, out, tr, "years", d.years)?,
        revenue_per_year: read_f64_or(input, out, tr, "revenue_per_year", d.revenue_per_year)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tco::TcoEngine;

    #[test]
    fn money_is_grouped_by_thousands() {
        assert_eq!(format_money("$", 1_096_828.7), "$1,096,828.70");
        assert_eq!(format_money("$", 999.994), "$999.99");
        assert_eq!(format_money("", -4_000.0), "-4,000.00");
        assert_eq!(format_money("€", 0.0), "€0.00");
    }

    #[test]
    fn report_mentions_never_profitable() {
        let engine = TcoEngine::new(AssetParameters {
            revenue_per_year: 50_000.0,
            ..AssetParameters::default()
        })
        .expect("engine");
        let result = engine.evaluate().expect("evaluate");
        let tr = Translator::new("en");
        let mut buf = Vec::new();
        write_report(&mut buf, &tr, "$", &result).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("never profitable"));
        assert!(text.contains("Caveats:"));
        assert!(text.contains("$13,500.00"));
    }

    #[test]
    fn empty_answers_keep_defaults() {
        let mut answers = "\n".repeat(10);
        answers.push_str("abc\n0\n\n\n\n\n");
        let mut input = answers.as_bytes();
        let mut out = Vec::new();
        let tr = Translator::new("en");
        let p = prompt_parameters(&mut input, &mut out, &tr, &AssetParameters::default())
            .expect("prompt");
        assert_eq!(p.loan_interest_rate, 0.0);
        assert_eq!(p.truck_cost, 100_000.0);
        assert_eq!(p.years, 10);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Please enter a number."));
    }
}
