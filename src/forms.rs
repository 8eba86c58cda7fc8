//! Form Validation and Derived-Field Synchronization
//!
//! Pure helpers behind the scheme create/edit form: the three numeric
//! fields obey `amount = months * monthly_pay`, kept in sync as the admin
//! types into either money field with `months` as the pivot.

use std::collections::BTreeMap;

use crate::models::SchemeDraft;

/// Tolerance for the mutual recomputation guard. A recomputed value within
/// this distance of the current one is not written back, which is what
/// stops the two derivations from oscillating over rounding residue.
pub const EPSILON: f64 = 0.01;

/// Round to two decimal places (currency precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recompute `monthly_pay` from `(months, amount)`.
///
/// Returns `Some(new_value)` only when both inputs are positive and the
/// recomputed value differs from `current` by more than [`EPSILON`].
/// `months == 0` suppresses recomputation entirely.
pub fn derive_monthly_pay(months: u32, amount: f64, current: f64) -> Option<f64> {
    if months == 0 || amount <= 0.0 {
        return None;
    }
    let next = round2(amount / months as f64);
    if (next - current).abs() > EPSILON {
        Some(next)
    } else {
        None
    }
}

/// Recompute `amount` from `(months, monthly_pay)`, same guard as
/// [`derive_monthly_pay`].
pub fn derive_amount(months: u32, monthly_pay: f64, current: f64) -> Option<f64> {
    if months == 0 || monthly_pay <= 0.0 {
        return None;
    }
    let next = round2(monthly_pay * months as f64);
    if (next - current).abs() > EPSILON {
        Some(next)
    } else {
        None
    }
}

/// Submit-time normalization: `monthly_pay` is recomputed one final time
/// from `(months, amount)` so the identity holds no matter which field the
/// admin touched last. Drafts with `months == 0` are left untouched (they
/// fail validation anyway).
pub fn finalize(mut draft: SchemeDraft) -> SchemeDraft {
    if draft.months > 0 {
        draft.monthly_pay = round2(draft.amount / draft.months as f64);
    }
    draft
}

/// Field-keyed validation errors. Empty map means the draft may be
/// submitted.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Validate a scheme draft at submit time. All fields are checked; the
/// first failure does not short-circuit.
pub fn validate_scheme(draft: &SchemeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.name.trim().is_empty() {
        errors.insert("name", "Name is required".to_string());
    }
    if draft.months == 0 {
        errors.insert("months", "Months must be a positive whole number".to_string());
    }
    if draft.amount <= 0.0 {
        errors.insert("amount", "Amount must be a positive number".to_string());
    }
    if draft.monthly_pay <= 0.0 {
        errors.insert("monthly_pay", "Monthly pay must be a positive number".to_string());
    }
    if draft.bonus < 0.0 {
        errors.insert("bonus", "Bonus cannot be negative".to_string());
    }
    errors
}

// Single-direction validators shared by the other forms.

pub fn required(field: &'static str, value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label(field)));
    }
}

pub fn positive_number(field: &'static str, value: f64, errors: &mut FieldErrors) {
    if value <= 0.0 {
        errors.insert(field, format!("{} must be a positive number", label(field)));
    }
}

pub fn valid_email(field: &'static str, value: &str, errors: &mut FieldErrors) {
    let v = value.trim();
    if v.is_empty() || !v.contains('@') || v.starts_with('@') || v.ends_with('@') {
        errors.insert(field, "A valid email address is required".to_string());
    }
}

fn label(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for (i, part) in field.split('_').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if i == 0 {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, months: u32, amount: f64, monthly_pay: f64, bonus: f64) -> SchemeDraft {
        SchemeDraft {
            name: name.to_string(),
            months,
            amount,
            monthly_pay,
            bonus,
        }
    }

    #[test]
    fn test_monthly_pay_derivation() {
        // 1200 over 12 months = 100.00
        assert_eq!(derive_monthly_pay(12, 1200.0, 0.0), Some(100.0));
        // already consistent: no write
        assert_eq!(derive_monthly_pay(12, 1200.0, 100.0), None);
        // within epsilon: no write
        assert_eq!(derive_monthly_pay(12, 1200.0, 100.005), None);
    }

    #[test]
    fn test_zero_months_suppresses_recomputation() {
        assert_eq!(derive_monthly_pay(0, 1200.0, 0.0), None);
        assert_eq!(derive_amount(0, 100.0, 0.0), None);
        assert_eq!(derive_monthly_pay(12, 0.0, 50.0), None);
    }

    // Simulate the two live effects bouncing writes at each other until
    // neither wants to update. Must settle, and settle consistent.
    fn settle(months: u32, mut amount: f64, mut monthly_pay: f64) -> (f64, f64, usize) {
        let mut steps = 0;
        loop {
            let mut changed = false;
            if let Some(next) = derive_monthly_pay(months, amount, monthly_pay) {
                monthly_pay = next;
                changed = true;
            }
            if let Some(next) = derive_amount(months, monthly_pay, amount) {
                amount = next;
                changed = true;
            }
            if !changed {
                return (amount, monthly_pay, steps);
            }
            steps += 1;
            assert!(steps < 10, "derivation did not settle for months={}", months);
        }
    }

    #[test]
    fn test_no_oscillation_on_non_divisible_amounts() {
        // months=7, amount=100: 100/7 does not round-trip exactly
        let (amount, monthly_pay, _) = settle(7, 100.0, 0.0);
        assert!((amount - 7.0 * monthly_pay).abs() < EPSILON);

        // sweep a grid of awkward pairs
        for months in 1u32..=36 {
            for amount_cents in [100.0, 99.99, 250.5, 1000.0, 1234.56, 77.77] {
                let (a, p, steps) = settle(months, amount_cents, 0.0);
                assert!(
                    (a - months as f64 * p).abs() < EPSILON,
                    "inconsistent at months={} amount={}",
                    months,
                    amount_cents
                );
                assert!(steps <= 3, "slow settle at months={} amount={}", months, amount_cents);
            }
        }
    }

    #[test]
    fn test_finalize_enforces_identity() {
        // admin edited monthly_pay last and left it inconsistent
        let d = finalize(draft("Gold Saver", 12, 1200.0, 95.0, 50.0));
        assert_eq!(d.monthly_pay, 100.0);
        assert!((d.amount - d.months as f64 * d.monthly_pay).abs() < EPSILON);

        // any edit sequence ends consistent after finalize
        for months in [1u32, 5, 7, 11, 12, 24] {
            for amount in [60.0, 100.0, 999.99] {
                let d = finalize(draft("s", months, amount, 1.0, 0.0));
                assert!((d.amount - d.months as f64 * d.monthly_pay).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let errors = validate_scheme(&draft("", 0, 0.0, 0.0, -1.0));
        assert_eq!(errors.len(), 5);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("months"));
        assert!(errors.contains_key("amount"));
        assert!(errors.contains_key("monthly_pay"));
        assert!(errors.contains_key("bonus"));
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate_scheme(&draft("Gold Saver", 12, 1200.0, 100.0, 50.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_field_validators() {
        let mut errors = FieldErrors::new();
        required("first_name", "  ", &mut errors);
        positive_number("price", 0.0, &mut errors);
        valid_email("email", "not-an-email", &mut errors);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["first_name"], "First name is required");

        let mut ok = FieldErrors::new();
        required("first_name", "Asha", &mut ok);
        positive_number("price", 12.5, &mut ok);
        valid_email("email", "asha@example.com", &mut ok);
        assert!(ok.is_empty());
    }
}
