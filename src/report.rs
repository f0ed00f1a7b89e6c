//! 여러 근사식의 결과를 한 표로 비교 출력한다.

use crate::friction::Model;

/// 표 앞에 출력하는 적용 범위 경고 문구.
pub const RANGE_WARNING: &str = "Ensure values are within range of applicability for equations (specifically around transition and laminar region)!";

/// 표 뒤에 출력하는 면책 문구.
pub const DISCLAIMER: &str = "DISCLAIMER: Use secondary verification. No guarantee of accuracy";

const SEPARATOR: &str = "---------------------------";

/// 모델 하나의 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub model: Model,
    pub value: f64,
}

/// 비교표. `Display`로 경고/헤더/결과/면책 문구를 순서대로 출력한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reynolds: f64,
    pub roughness: f64,
    pub sigfig: u32,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// 주어진 모델들을 순서대로 계산하여 표를 만든다.
    pub fn evaluate(reynolds: f64, roughness: f64, sigfig: u32, models: &[Model]) -> Self {
        let rows = models
            .iter()
            .map(|&model| {
                let value = model.evaluate(reynolds, roughness, sigfig);
                log::debug!(
                    "Report.evaluate | {} ({}) = {}",
                    model.label(),
                    model.citation(),
                    value
                );
                ReportRow { model, value }
            })
            .collect();
        Self {
            reynolds,
            roughness,
            sigfig,
            rows,
        }
    }

    /// 6개 모델 전체를 기본 순서로 계산한다.
    pub fn all(reynolds: f64, roughness: f64, sigfig: u32) -> Self {
        Self::evaluate(reynolds, roughness, sigfig, &Model::ALL)
    }
}

fn write_row(
    f: &mut std::fmt::Formatter<'_>,
    method: &dyn std::fmt::Display,
    value: &dyn std::fmt::Display,
) -> std::fmt::Result {
    // Display 구현체는 width를 무시할 수 있으므로 먼저 문자열로 만든다.
    writeln!(f, "|{:<15} | {:<7}|", method.to_string(), value.to_string())
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{RANGE_WARNING}")?;
        write_row(f, &"METHOD", &"VALUE")?;
        writeln!(f, "{SEPARATOR}")?;
        for row in &self.rows {
            write_row(f, &row.model, &row.value)?;
        }
        writeln!(f, "{DISCLAIMER}")
    }
}
