//! Bellos, Nalbantis, Tsakris (2018).
//!
//! 층류~난류 전 영역을 하나의 식으로 다룬다. 두 개의 가중치(`param_a`, `param_b`)로
//! 층류 항과 난류 항을 섞는다.

use crate::rounding::round_to;

/// Bellos-Nalbantis-Tsakris 근사식으로 Darcy 마찰계수를 계산한다.
///
/// - `param_a`: Re/2712 기반 천이 가중치
/// - `param_b`: Re·e/150 기반 거칠기 가중치
///
/// 거칠기가 0이면 `1/e`가 무한대가 되어 결과가 그대로 전파된다.
pub fn bellos_nalbantis_tsakris(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let inv_roughness = 1.0 / roughness;
    let param_a = 1.0 / (1.0 + (reynolds / 2712.0).powf(8.4));
    let param_b = 1.0 / (1.0 + (reynolds / (150.0 * inv_roughness)).powf(1.8));
    let exponent_a = 2.0 * (param_a - 1.0) * param_b;
    let exponent_b = 2.0 * (param_a - 1.0) * (1.0 - param_b);
    let friction = (64.0 / reynolds).powf(param_a)
        * (0.75 * (reynolds / 5.37).ln()).powf(exponent_a)
        * (0.88 * (6.82 * inv_roughness).ln()).powf(exponent_b);
    round_to(friction, sigfig)
}
