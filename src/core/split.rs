//! Pro-rata split computation.
//!
//! The whole calculation is total over the IEEE-754 domain: division by zero
//! and NaN operands propagate through `f64` arithmetic instead of raising,
//! so a half-filled input field degrades to visible `NaN`/`Infinity` output
//! rather than an error.

use crate::core::models::SplitResult;
use crate::util::format::{format_operand, format_sig};

/// Damping factor applied to the raw income-imbalance ratio.
///
/// `a/b - b/a` swings hard for lopsided incomes; scaling by a quarter keeps
/// the adjustment inside a plausible band instead of letting one party's
/// share run away.
pub const DIFFERENTIAL_SCALE: f64 = 0.25;

/// Significant digits used for the differential inside formula strings.
const FORMULA_PRECISION: u32 = 2;

/// Compute the fairness differential and both adjusted shares.
///
/// The differential guard takes the zero branch only when neither income is
/// strictly positive; with exactly one zero income the division by zero is
/// deliberate and yields infinite shares.
#[must_use]
pub fn compute(income_a: f64, income_b: f64, fixed_costs: f64) -> SplitResult {
    let differential = if income_a > 0.0 || income_b > 0.0 {
        (income_a / income_b - income_b / income_a) * DIFFERENTIAL_SCALE
    } else {
        0.0
    };

    let half = fixed_costs / 2.0;
    SplitResult {
        differential,
        fix_a: half + half * differential,
        fix_b: half - half * differential,
    }
}

/// Textual differential formula with operand values substituted.
#[must_use]
pub fn differential_formula(income_a: f64, income_b: f64) -> String {
    let a = format_operand(income_a);
    let b = format_operand(income_b);
    format!("({a} / {b} - {b} / {a}) * {DIFFERENTIAL_SCALE}")
}

/// Textual formula for party A's share.
#[must_use]
pub fn fix_a_formula(fixed_costs: f64, differential: f64) -> String {
    share_formula(fixed_costs, differential, '+')
}

/// Textual formula for party B's share.
#[must_use]
pub fn fix_b_formula(fixed_costs: f64, differential: f64) -> String {
    share_formula(fixed_costs, differential, '-')
}

fn share_formula(fixed_costs: f64, differential: f64, op: char) -> String {
    let fc = format_operand(fixed_costs);
    let d = format_sig(differential, FORMULA_PRECISION);
    format!("{fc} / 2 {op} ({fc} / 2) * {d}")
}
