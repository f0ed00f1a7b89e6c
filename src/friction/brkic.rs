//! Brkic (2011). 적용 범위: Re > 2300
//! 참고: <https://doi.org/10.1080%2F10916461003620453>

use crate::rounding::round_to;

/// Brkic 근사식. Lambert W 함수 근사값 `beta`를 먼저 구한 뒤 마찰계수를 계산한다.
pub fn brkic(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let inner = ((1.1 * reynolds) / (1.0 + 1.1 * reynolds).ln()).ln();
    let beta = (reynolds / (1.816 * inner)).ln();
    let friction = (-2.0 * ((2.18 * beta) / reynolds + roughness / 3.71).log10()).powf(-2.0);
    round_to(friction, sigfig)
}
