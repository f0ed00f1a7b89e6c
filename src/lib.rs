//! Colebrook-White 식의 명시적 근사식으로 Darcy 마찰계수를 계산한다.
//! 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod friction;
pub mod report;
pub mod rounding;

pub use friction::{
    avci_kargoz, bellos_nalbantis_tsakris, brkic, evangelides_papaevangelou_tzimopoulos, fang,
    swamee_jain, Model,
};
pub use report::Report;
pub use rounding::{round_to, DEFAULT_SIGFIG};
