//! Contract tests for the report pipeline via the library API.
//!
//! Exercises the properties the display layer leans on: share conservation,
//! formatter sign/suffix guarantees, and the fixed line layout.

use fairsplit::core::models::SplitInputs;
use fairsplit::core::report::{LABELS, build_report, label_width};
use fairsplit::core::split::compute;
use fairsplit::util::format::{FormatOptions, format_amount};

// =============================================================================
// Share Conservation
// =============================================================================

#[test]
fn shares_always_sum_to_fixed_costs() {
    let incomes = [0.0, 1.0, 42.5, 200.0, 500.0, 12_345.0, 1e9];
    let costs = [0.0, 1.0, 150.0, 999.99, 1e6];

    for &a in &incomes {
        for &b in &incomes {
            for &fc in &costs {
                let result = compute(a, b, fc);
                if !result.differential.is_finite() {
                    continue;
                }
                let sum = result.fix_a + result.fix_b;
                // Tolerance scales with the magnitude of the shares, which
                // dwarf the fixed costs when incomes are wildly lopsided.
                let tolerance = 1e-9 * (result.fix_a.abs() + result.fix_b.abs()).max(1.0);
                assert!(
                    (sum - fc).abs() <= tolerance,
                    "compute({a}, {b}, {fc}) shares summed to {sum}"
                );
            }
        }
    }
}

#[test]
fn even_split_cases() {
    for (a, b) in [(0.0, 0.0), (300.0, 300.0), (1e6, 1e6)] {
        let result = compute(a, b, 150.0);
        assert_eq!(result.differential, 0.0, "incomes ({a}, {b})");
        assert!((result.fix_a - 75.0).abs() < f64::EPSILON);
        assert!((result.fix_b - 75.0).abs() < f64::EPSILON);
    }
}

// =============================================================================
// Formatter Guarantees
// =============================================================================

#[test]
fn abs_formatting_never_shows_a_sign() {
    let values = [
        -1e9, -12_345.678, -0.525, -0.005, -0.0, 0.0, 0.005, 0.525, 12_345.678, 1e9,
    ];
    for value in values {
        let text = format_amount(value, FormatOptions::ABS);
        assert!(
            !text.starts_with('-'),
            "format_amount({value}, abs) was {text}"
        );
    }
}

#[test]
fn percent_formatting_always_ends_with_suffix() {
    let values = [-52.5, -0.0, 0.0, 17.8125, 1e12, f64::NAN, f64::NEG_INFINITY];
    for value in values {
        let text = format_amount(value, FormatOptions::ABS_PERCENT);
        assert!(
            text.ends_with('%'),
            "format_amount({value}, abs+percent) was {text}"
        );
    }
}

// =============================================================================
// Report Layout
// =============================================================================

#[test]
fn report_always_has_seven_labeled_lines() {
    let cases = [
        SplitInputs::default(),
        SplitInputs {
            income_a: 0.0,
            income_b: 0.0,
            fixed_costs: 150.0,
        },
        SplitInputs {
            income_a: 100.0,
            income_b: 0.0,
            fixed_costs: 100.0,
        },
        SplitInputs {
            income_a: f64::NAN,
            income_b: 500.0,
            fixed_costs: 150.0,
        },
    ];

    for inputs in cases {
        let report = build_report(inputs);
        assert_eq!(report.lines.len(), LABELS.len());
        for (line, label) in report.lines.iter().zip(LABELS) {
            assert_eq!(line.label, label);
        }
    }
}

#[test]
fn infinite_share_chain_is_rendered_not_rejected() {
    let report = build_report(SplitInputs {
        income_a: 100.0,
        income_b: 0.0,
        fixed_costs: 100.0,
    });

    assert!(report.result.differential.is_infinite());
    assert_eq!(report.lines[1].value, "Infinity");
    assert_eq!(report.lines[2].value, "-Infinity");
    // The A2 percentage is Infinity/FC, the B2 one divides -inf by zero.
    assert_eq!(report.lines[1].percent.as_deref(), Some("Infinity%"));
    assert_eq!(report.lines[6].value, "Infinity%");
}

#[test]
fn rendered_lines_share_one_equals_column() {
    let width = label_width();
    let report = build_report(SplitInputs::default());
    for line in &report.lines {
        let rendered = line.render_padded(width);
        assert_eq!(rendered.find("= "), Some(width));
    }
}
