//! Fang (2011). 적용 범위: Re > 2300 (난류/천이 영역만)

use crate::rounding::round_to;

/// Fang 근사식으로 Darcy 마찰계수를 계산한다.
///
/// 로그 인자가 0 이하가 되는 입력(예: Re = 1)은 NaN을 반환한다.
pub fn fang(reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
    let log_arg = 0.234 * roughness.powf(1.1007) - 60.525 / reynolds.powf(1.1105)
        + 56.291 / reynolds.powf(1.0712);
    let friction = 1.613 * log_arg.ln().powf(-2.0);
    round_to(friction, sigfig)
}
