//! 총소유비용(TCO) 계산 모듈 모음.

pub mod amortization;
pub mod engine;
pub mod projection;
pub mod result;

pub use engine::*;
pub use result::*;
