//! Swamee, Jain (1976).
//!
//! 적용 범위: 5000 < Re < 10^8, e/D = 0.00001 ~ 0.5
//! 참고: <https://cedb.asce.org/CEDBsearch/record.jsp?dockey=0006693>

use crate::rounding::round_to;

/// Swamee-Jain 근사식으로 Darcy 마찰계수를 계산한다.
///
/// f = 0.25 / [log10(e/3.7 + 5.74 / Re^0.9)]²
pub fn swamee_jain(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let friction = 0.25 / (roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10().powf(2.0);
    round_to(friction, sigfig)
}
