//! Colebrook-White 식의 명시적(explicit) 근사식 모음.
//!
//! 모든 함수는 `(reynolds, roughness, sigfig) -> f64` 형태의 순수 함수이다.
//! 입력 범위 검증은 하지 않으며, 정의역 밖의 입력은 NaN/inf로 그대로 전파된다.
//! 적용 범위 확인은 호출자 책임이다.
//!
//! 참고: <https://en.wikipedia.org/wiki/Darcy_friction_factor_formulae>

pub mod avci_kargoz;
pub mod bellos_nalbantis_tsakris;
pub mod brkic;
pub mod evangelides_papaevangelou_tzimopoulos;
pub mod fang;
pub mod swamee_jain;

pub use avci_kargoz::avci_kargoz;
pub use bellos_nalbantis_tsakris::bellos_nalbantis_tsakris;
pub use brkic::brkic;
pub use evangelides_papaevangelou_tzimopoulos::evangelides_papaevangelou_tzimopoulos;
pub use fang::fang;
pub use swamee_jain::swamee_jain;

use serde::{Deserialize, Serialize};

/// 지원하는 마찰계수 근사 모델.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    SwameeJain,
    BellosNalbantisTsakris,
    Fang,
    EvangelidesPapaevangelouTzimopoulos,
    AvciKargoz,
    Brkic,
}

impl Model {
    /// 비교표 기본 출력 순서.
    pub const ALL: [Model; 6] = [
        Model::SwameeJain,
        Model::BellosNalbantisTsakris,
        Model::Fang,
        Model::AvciKargoz,
        Model::Brkic,
        Model::EvangelidesPapaevangelouTzimopoulos,
    ];

    /// 해당 모델의 근사식으로 마찰계수를 계산한다.
    pub fn evaluate(self, reynolds: f64, roughness: f64, sigfig: u32) -> f64 {
        let formula: fn(f64, f64, u32) -> f64 = match self {
            Model::SwameeJain => swamee_jain,
            Model::BellosNalbantisTsakris => bellos_nalbantis_tsakris,
            Model::Fang => fang,
            Model::EvangelidesPapaevangelouTzimopoulos => evangelides_papaevangelou_tzimopoulos,
            Model::AvciKargoz => avci_kargoz,
            Model::Brkic => brkic,
        };
        formula(reynolds, roughness, sigfig)
    }

    /// 표 출력용 짧은 이름 (15자 이내).
    pub fn label(self) -> &'static str {
        match self {
            Model::SwameeJain => "Swamee-Jain",
            Model::BellosNalbantisTsakris => "BNT",
            Model::Fang => "Fang",
            Model::EvangelidesPapaevangelouTzimopoulos => "EPT",
            Model::AvciKargoz => "Avci-Kargoz",
            Model::Brkic => "Brkic",
        }
    }

    /// 저자와 발표 연도.
    pub fn citation(self) -> &'static str {
        match self {
            Model::SwameeJain => "Swamee, Jain (1976)",
            Model::BellosNalbantisTsakris => "Bellos, Nalbantis, Tsakris (2018)",
            Model::Fang => "Fang (2011)",
            Model::EvangelidesPapaevangelouTzimopoulos => {
                "Evangelides, Papaevangelou, Tzimopoulos (2010)"
            }
            Model::AvciKargoz => "Avci, Kargoz (2009)",
            Model::Brkic => "Brkic (2011)",
        }
    }

    /// 문헌상 적용 범위. 참고용이며 계산 시 검사하지 않는다.
    pub fn applicability(self) -> &'static str {
        match self {
            Model::SwameeJain => "5000 < Re < 1e8, e/D = 1e-5 ~ 0.5",
            Model::BellosNalbantisTsakris => "all flow regimes",
            Model::Fang
            | Model::EvangelidesPapaevangelouTzimopoulos
            | Model::AvciKargoz
            | Model::Brkic => "Re > 2300 (turbulent and transition only)",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
