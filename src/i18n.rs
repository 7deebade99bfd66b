use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_TITLE: &str = "report.title";
    pub const FUEL_COST: &str = "figure.fuel_cost";
    pub const DEPRECIATION: &str = "figure.depreciation";
    pub const LOAN_PAYMENT: &str = "figure.loan_payment";
    pub const MAINTENANCE: &str = "figure.maintenance";
    pub const OPERATOR_SALARY: &str = "figure.operator_salary";
    pub const INSURANCE: &str = "figure.insurance";
    pub const TAX: &str = "figure.tax";
    pub const ANNUAL_COSTS: &str = "figure.annual_costs";
    pub const TCO: &str = "figure.tco";
    pub const REVENUE: &str = "figure.revenue";
    pub const ANNUAL_PROFIT: &str = "figure.annual_profit";
    pub const BREAK_EVEN: &str = "figure.break_even";
    pub const YEARS_SUFFIX: &str = "figure.years_suffix";
    pub const NEVER_PROFITABLE: &str = "figure.never_profitable";

    pub const CAVEATS_HEADING: &str = "caveat.heading";
    pub const CAVEAT_NEGATIVE_DEPRECIATION: &str = "caveat.negative_depreciation";
    pub const CAVEAT_LOAN_OUTLIVES_HORIZON: &str = "caveat.loan_outlives_horizon";
    pub const CAVEAT_NEVER_PROFITABLE: &str = "caveat.never_profitable";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const PROJECTION_COLUMNS: &str = "projection.columns";
    pub const SCHEDULE_HEADING: &str = "schedule.heading";
    pub const SCHEDULE_COLUMNS: &str = "schedule.columns";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_KEEP_DEFAULT: &str = "input.keep_default";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 보고서 라벨 번역기.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    /// 번역을 가져온다. 키가 없으면 키 문자열 자체를 돌려준다.
    pub fn t(&self, key: &'static str) -> &'static str {
        let found = match self.lang {
            Language::Ko => ko(key),
            Language::En => en(key),
        };
        found.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        REPORT_TITLE => "=== 로더 크레인 총소유비용(TCO) ===",
        FUEL_COST => "연간 연료비",
        DEPRECIATION => "연간 감가상각비",
        LOAN_PAYMENT => "연간 대출 상환액",
        MAINTENANCE => "연간 정비비",
        OPERATOR_SALARY => "운전원 급여",
        INSURANCE => "보험료",
        TAX => "세금",
        ANNUAL_COSTS => "연간 총비용",
        TCO => "총소유비용",
        REVENUE => "연간 매출",
        ANNUAL_PROFIT => "연간 이익",
        BREAK_EVEN => "손익분기",
        YEARS_SUFFIX => "년",
        NEVER_PROFITABLE => "이익 없음(연간 비용 ≥ 매출)",
        CAVEATS_HEADING => "주의:",
        CAVEAT_NEGATIVE_DEPRECIATION => "잔존가치가 취득원가보다 커서 감가상각비가 음수입니다.",
        CAVEAT_LOAN_OUTLIVES_HORIZON => {
            "대출 기간이 보유 기간보다 깁니다. 상환액은 보유 기간 동안 일정하다고 가정합니다."
        }
        CAVEAT_NEVER_PROFITABLE => "연간 매출이 연간 비용 이하라 손익분기점이 없습니다.",
        PROJECTION_HEADING => "-- 누적 비용/매출 --",
        PROJECTION_COLUMNS => "연차 | 누적 비용 | 누적 매출 | 누적 이익",
        SCHEDULE_HEADING => "-- 연도별 대출 상환 --",
        SCHEDULE_COLUMNS => "연차 | 상환액 | 이자 | 원금 | 기말 잔액",
        INPUT_HEADING => "-- 입력 (엔터 = 기본값 유지) --",
        INPUT_KEEP_DEFAULT => "기본값",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        REPORT_TITLE => "=== Loader Crane Total Cost of Ownership ===",
        FUEL_COST => "Annual fuel cost",
        DEPRECIATION => "Annual depreciation",
        LOAN_PAYMENT => "Annual loan payment",
        MAINTENANCE => "Annual maintenance",
        OPERATOR_SALARY => "Operator salary",
        INSURANCE => "Insurance",
        TAX => "Tax",
        ANNUAL_COSTS => "Total annual cost",
        TCO => "Total cost of ownership",
        REVENUE => "Annual revenue",
        ANNUAL_PROFIT => "Annual profit",
        BREAK_EVEN => "Break-even",
        YEARS_SUFFIX => "years",
        NEVER_PROFITABLE => "never profitable (annual cost >= revenue)",
        CAVEATS_HEADING => "Caveats:",
        CAVEAT_NEGATIVE_DEPRECIATION => {
            "Resale value exceeds acquisition cost; depreciation is negative."
        }
        CAVEAT_LOAN_OUTLIVES_HORIZON => {
            "Loan term is longer than the ownership horizon; payments are assumed constant over the horizon."
        }
        CAVEAT_NEVER_PROFITABLE => "Annual revenue does not exceed annual cost; no break-even point.",
        PROJECTION_HEADING => "-- Cumulative cost / revenue --",
        PROJECTION_COLUMNS => "Year | Cum. cost | Cum. revenue | Cum. profit",
        SCHEDULE_HEADING => "-- Loan repayment by year --",
        SCHEDULE_COLUMNS => "Year | Payment | Interest | Principal | Closing balance",
        INPUT_HEADING => "-- Inputs (Enter keeps the default) --",
        INPUT_KEEP_DEFAULT => "default",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    };
    Some(s)
}
