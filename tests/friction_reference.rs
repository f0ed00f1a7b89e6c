//! 근사식 기준값 회귀 테스트. 배정밀도 기준 구현으로 계산한 값을 사용한다.
use colebrook::friction::{
    avci_kargoz, bellos_nalbantis_tsakris, brkic, evangelides_papaevangelou_tzimopoulos, fang,
    swamee_jain, Model,
};

type Formula = fn(f64, f64, u32) -> f64;

const FORMULAS: [(&str, Formula); 6] = [
    ("swamee_jain", swamee_jain),
    ("bellos_nalbantis_tsakris", bellos_nalbantis_tsakris),
    ("fang", fang),
    ("evangelides_papaevangelou_tzimopoulos", evangelides_papaevangelou_tzimopoulos),
    ("avci_kargoz", avci_kargoz),
    ("brkic", brkic),
];

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:e}, tol {tol})"
    );
}

/// (Re, e/D, [SJ, BNT, Fang, EPT, AK, Brkic]) 반올림 전 값
const REFERENCE: [(f64, f64, [f64; 6]); 4] = [
    (
        10_000.0,
        0.001,
        [
            0.032_665_345_317_911_85,
            0.031_205_553_281_671_37,
            0.032_277_992_086_304_84,
            0.032_440_964_754_804_51,
            0.032_063_175_404_626_45,
            0.032_717_414_290_020_08,
        ],
    ),
    (
        100_000.0,
        0.0002,
        [
            0.018_994_752_724_681_87,
            0.018_182_084_845_457_73,
            0.018_941_278_530_227_63,
            0.019_046_491_300_108_1,
            0.018_972_209_750_004_14,
            0.019_148_289_104_397_9,
        ],
    ),
    (
        1_000_000.0,
        0.00001,
        [
            0.011_853_158_126_668_62,
            0.012_025_380_529_229_51,
            0.011_864_362_264_035_98,
            0.011_861_237_438_246_46,
            0.011_932_542_461_417_18,
            0.011_911_965_227_835_49,
        ],
    ),
    (
        5_000.0,
        0.01,
        [
            0.048_595_532_156_821_72,
            0.036_777_288_114_156_61,
            0.047_176_008_481_964_1,
            0.047_390_848_442_476_6,
            0.045_913_946_538_607_25,
            0.048_395_550_867_444_23,
        ],
    ),
];

#[test]
fn unrounded_values_match_reference() {
    for (re, e, expected) in REFERENCE {
        for ((name, f), want) in FORMULAS.iter().zip(expected) {
            let label = format!("{name}(Re={re}, e={e})");
            assert_close(&label, f(re, e, 12), want, 1e-10);
        }
    }
}

#[test]
fn default_precision_matches_reference() {
    // Re = 10000, e/D = 0.001
    let expected = [0.0327, 0.0312, 0.0323, 0.0324, 0.0321, 0.0327];
    for ((name, f), want) in FORMULAS.iter().zip(expected) {
        assert_eq!(f(10_000.0, 0.001, 4), want, "{name}");
    }
    // Re = 100000, e/D = 0.0002
    let expected = [0.019, 0.0182, 0.0189, 0.019, 0.019, 0.0191];
    for ((name, f), want) in FORMULAS.iter().zip(expected) {
        assert_eq!(f(100_000.0, 0.0002, 4), want, "{name}");
    }
}

#[test]
fn higher_precision_keeps_leading_digits() {
    for (re, e, _) in REFERENCE {
        for (name, f) in FORMULAS {
            let coarse = f(re, e, 4);
            let fine = f(re, e, 8);
            assert_close(name, coarse, colebrook::round_to(fine, 4), 1e-15);
            assert!((fine - coarse).abs() <= 0.5e-4 + 1e-15, "{name}: {fine} vs {coarse}");
        }
    }
}

#[test]
fn unit_reynolds_is_not_clamped() {
    let (re, e) = (1.0, 0.001);
    assert!(fang(re, e, 4).is_nan());
    assert!(avci_kargoz(re, e, 4).is_nan());
    assert_eq!(bellos_nalbantis_tsakris(re, e, 4), 64.0);
    assert_close("swamee_jain", swamee_jain(re, e, 12), 0.434_044_131_301_869_5, 1e-10);
    assert_close(
        "evangelides_papaevangelou_tzimopoulos",
        evangelides_papaevangelou_tzimopoulos(re, e, 12),
        0.027_289_958_529_664_21,
        1e-10,
    );
    assert_close("brkic", brkic(re, e, 12), 13.519_756_452_162_122, 1e-10);
}

#[test]
fn non_positive_inputs_propagate_as_nan() {
    assert!(swamee_jain(-10_000.0, 0.001, 4).is_nan());
    assert!(fang(10_000.0, -0.001, 4).is_nan());
    assert!(avci_kargoz(10_000.0, -0.001, 4).is_nan());
    assert!(brkic(0.0, 0.001, 4).is_nan());
}

#[test]
fn friction_decreases_with_reynolds() {
    let reynolds = [1e4, 3e4, 1e5, 3e5, 1e6, 1e7];
    for model in Model::ALL {
        let values: Vec<f64> = reynolds
            .iter()
            .map(|&re| model.evaluate(re, 1e-4, 12))
            .collect();
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0], "{model:?}: {values:?}");
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    for model in Model::ALL {
        let a = model.evaluate(123_456.0, 0.000_37, 4);
        let b = model.evaluate(123_456.0, 0.000_37, 4);
        assert_eq!(a.to_bits(), b.to_bits(), "{model:?}");
    }
}
