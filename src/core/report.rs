//! Display assembly for the split report.
//!
//! Rebuilds all seven labeled lines from scratch on every call; there is no
//! memoization and no per-field dirty tracking. Callers hold the returned
//! snapshot until the next input change.

use crate::core::models::{DisplayLine, Formulas, SplitInputs, SplitReport};
use crate::core::split;
use crate::util::format::{FormatOptions, format_amount};

/// Report line labels, in display order.
pub const LABELS: [&str; 7] = [
    "FC/2",
    "A2",
    "B2",
    "Abs. Diff",
    "Diff",
    "A2 / A1",
    "B2 / B1",
];

/// Column width labels are padded to: longest label plus two.
#[must_use]
pub fn label_width() -> usize {
    LABELS.iter().map(|label| label.len()).max().unwrap_or(0) + 2
}

/// Build the full report for the given inputs.
#[must_use]
pub fn build_report(inputs: SplitInputs) -> SplitReport {
    let SplitInputs {
        income_a,
        income_b,
        fixed_costs,
    } = inputs;

    let result = split::compute(income_a, income_b, fixed_costs);
    let differential = result.differential;

    tracing::debug!(
        income_a,
        income_b,
        fixed_costs,
        differential,
        "report recomputed"
    );

    let lines = vec![
        DisplayLine::new(
            LABELS[0],
            format_amount(fixed_costs / 2.0, FormatOptions::ABS),
            None,
        ),
        DisplayLine::new(
            LABELS[1],
            format_amount(result.fix_a, FormatOptions::PLAIN),
            Some(format_amount(
                result.fix_a / fixed_costs * 100.0,
                FormatOptions::ABS_PERCENT,
            )),
        ),
        DisplayLine::new(
            LABELS[2],
            format_amount(result.fix_b, FormatOptions::PLAIN),
            Some(format_amount(
                result.fix_b / fixed_costs * 100.0,
                FormatOptions::ABS_PERCENT,
            )),
        ),
        DisplayLine::new(
            LABELS[3],
            format_amount(fixed_costs * differential, FormatOptions::ABS),
            Some(format_amount(
                differential * 100.0,
                FormatOptions::ABS_PERCENT,
            )),
        ),
        DisplayLine::new(
            LABELS[4],
            format_amount((fixed_costs * differential) / 2.0, FormatOptions::ABS),
            Some(format_amount(
                (differential * 100.0) / 2.0,
                FormatOptions::ABS_PERCENT,
            )),
        ),
        DisplayLine::new(
            LABELS[5],
            format_amount(
                result.fix_a / income_a * 100.0,
                FormatOptions::ABS_PERCENT,
            ),
            None,
        ),
        DisplayLine::new(
            LABELS[6],
            format_amount(
                result.fix_b / income_b * 100.0,
                FormatOptions::ABS_PERCENT,
            ),
            None,
        ),
    ];

    let formulas = Formulas {
        differential: split::differential_formula(income_a, income_b),
        fix_a: split::fix_a_formula(fixed_costs, differential),
        fix_b: split::fix_b_formula(fixed_costs, differential),
    };

    SplitReport {
        inputs,
        result,
        lines,
        formulas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_width_covers_longest_label() {
        // "Abs. Diff" is the longest label at nine columns.
        assert_eq!(label_width(), 11);
    }

    #[test]
    fn reference_scenario_lines() {
        let report = build_report(SplitInputs::default());

        assert_eq!(report.lines.len(), 7);
        let values: Vec<&str> = report.lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(
            values,
            ["75.00", "35.63", "114.38", "78.75", "39.38", "17.81%", "22.88%"]
        );

        let percents: Vec<Option<&str>> = report
            .lines
            .iter()
            .map(|l| l.percent.as_deref())
            .collect();
        assert_eq!(
            percents,
            [
                None,
                Some("23.75%"),
                Some("76.25%"),
                Some("52.50%"),
                Some("26.25%"),
                None,
                None,
            ]
        );
    }

    #[test]
    fn lines_align_on_the_equals_column() {
        let report = build_report(SplitInputs::default());
        let width = label_width();
        for line in &report.lines {
            let rendered = line.render_padded(width);
            assert_eq!(rendered.find("= "), Some(width), "misaligned: {rendered}");
        }
    }

    #[test]
    fn zero_incomes_render_even_split() {
        let report = build_report(SplitInputs {
            income_a: 0.0,
            income_b: 0.0,
            fixed_costs: 150.0,
        });

        assert_eq!(report.lines[0].value, "75.00");
        assert_eq!(report.lines[1].value, "75.00");
        assert_eq!(report.lines[2].value, "75.00");
        // Each share measured against a zero income divides into infinity.
        assert_eq!(report.lines[5].value, "Infinity%");
        assert_eq!(report.lines[6].value, "Infinity%");
    }

    #[test]
    fn nan_input_stays_visible_in_lines() {
        let report = build_report(SplitInputs {
            income_a: f64::NAN,
            income_b: 500.0,
            fixed_costs: 150.0,
        });

        assert_eq!(report.lines[1].value, "NaN");
        assert_eq!(report.lines[2].value, "NaN");
        assert!(report.formulas.differential.contains("NaN"));
    }

    #[test]
    fn formulas_match_inputs() {
        let report = build_report(SplitInputs::default());
        assert_eq!(
            report.formulas.differential,
            "(200 / 500 - 500 / 200) * 0.25"
        );
        assert_eq!(report.formulas.fix_a, "150 / 2 + (150 / 2) * -0.53");
        assert_eq!(report.formulas.fix_b, "150 / 2 - (150 / 2) * -0.53");
    }
}
