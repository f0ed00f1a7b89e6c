//! Avci, Kargoz (2009). 적용 범위: Re > 2300
//! 참고: <http://dx.doi.org/10.1115/1.3129132>

use crate::rounding::round_to;

/// Avci-Kargoz 근사식으로 Darcy 마찰계수를 계산한다.
///
/// 분모의 밑이 음수가 되면 2.4 거듭제곱이 정의되지 않으므로 NaN이 된다.
pub fn avci_kargoz(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let correction = 1.0 + 0.01 * reynolds * roughness * (1.0 + 10.0 * roughness.sqrt());
    let friction = 6.4 / (reynolds.ln() - correction.ln()).powf(2.4);
    round_to(friction, sigfig)
}
