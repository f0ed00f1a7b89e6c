//! Evangelides, Papaevangelou, Tzimopoulos (2010). 적용 범위: Re > 2300

use crate::rounding::round_to;

/// Evangelides-Papaevangelou-Tzimopoulos 근사식.
pub fn evangelides_papaevangelou_tzimopoulos(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let numerator = 0.2479 - 0.0000947 * (7.0 - reynolds.log10()).powf(4.0);
    let denominator = (roughness / 3.615 + 7.366 / reynolds.powf(0.9142))
        .log10()
        .powf(2.0);
    round_to(numerator / denominator, sigfig)
}
