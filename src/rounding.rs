/// 결과 출력 시 기본 소수 자릿수.
pub const DEFAULT_SIGFIG: u32 = 4;

/// f64의 이진 소수 전개가 가질 수 있는 최대 소수 자릿수.
const MAX_EXACT_DECIMALS: u32 = 1074;

/// 값을 소수점 이하 `sigfig` 자리로 반올림한다.
///
/// 저장된 이진값을 정확한 10진 전개로 보고 반올림하며, 정확히 중간값인 경우에만
/// 짝수 쪽으로 맞춘다(ties-to-even). NaN/inf는 그대로 통과하며, 자릿수가 이진
/// 전개 길이를 넘으면 원래 값을 반환한다.
pub fn round_to(value: f64, sigfig: u32) -> f64 {
    if !value.is_finite() || sigfig > MAX_EXACT_DECIMALS {
        return value;
    }
    let prec = sigfig as usize;
    format!("{value:.prec$}").parse().unwrap_or(value)
}
