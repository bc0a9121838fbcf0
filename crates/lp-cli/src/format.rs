//! Renders a [`DomainResult`] into the output format of §6. Formatting lives
//! here rather than in `lp-solver`: the core's job ends at classifying the
//! problem and producing exact-rational witnesses, not at deciding how a
//! value looks on a line of text.

use lp_solver::DomainResult;
use lp_types::rational::to_decimal_string;
use lp_types::Rational;

fn values(xs: &[Rational]) -> String {
    xs.iter()
        .map(to_decimal_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(result: &DomainResult) -> String {
    match result {
        DomainResult::Optimal {
            value,
            solution,
            certificate,
        } => {
            let solucao = solution
                .iter()
                .map(|(_, v)| to_decimal_string(v))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "Status: otimo\nObjetivo: {}\nSolucao:\n{}\nCertificado:\n{}\n",
                to_decimal_string(value),
                solucao,
                values(certificate),
            )
        }
        DomainResult::Infeasible { certificate } => {
            format!("Status: inviavel\nCertificado:\n{}\n", values(certificate))
        }
        DomainResult::Unbounded { direction } => {
            format!("Status: ilimitado\nCertificado:\n{}\n", values(direction))
        }
    }
}
