//! 적재형 크레인(트럭 탑재 로더 크레인)의 총소유비용(TCO)과 손익분기 계산 로직을
//! 라이브러리로 분리하여 CLI 뿐 아니라 다른 프런트엔드에서도 재사용할 수 있게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod params;
pub mod tco;
pub mod ui_cli;

pub use params::{AssetParameters, InvalidInputError, InvalidReason};
pub use tco::{AnnualCostBreakdown, BreakEven, Caveat, TcoEngine, TcoResult};
