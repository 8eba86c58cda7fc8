//! Detail Aggregator
//!
//! Read-only summaries over a single user's nested collections. All
//! aggregation is pure and recomputed from the loaded entity on every
//! render; there is no cached aggregate.

use crate::models::{LedgerEntry, UserDetail};

/// Parse a currency field that may be absent or garbage. Missing and
/// unparseable both count as zero for sums.
pub fn money(value: &Option<String>) -> f64 {
    value
        .as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Single-value display keeps "unknown" distinct from "zero"
pub fn money_display(value: &Option<String>) -> String {
    match value.as_deref().and_then(|v| v.trim().parse::<f64>().ok()) {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "N/A".to_string(),
    }
}

/// Payments made against expected months, as a whole percentage clamped
/// to at most 100.
pub fn progress_pct(payments_made: usize, expected_months: u32) -> u32 {
    if expected_months == 0 {
        return 0;
    }
    let pct = (payments_made as f64 / expected_months as f64) * 100.0;
    (pct.round() as u32).min(100)
}

pub fn sum_ledger(entries: &[LedgerEntry]) -> f64 {
    entries.iter().map(|e| money(&e.amount)).sum()
}

/// The summary cards at the top of the user detail screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailSummary {
    pub scheme_count: usize,
    pub aim_count: usize,
    pub scheme_saved: f64,
    pub aim_saved: f64,
    pub wallet_balance: Option<f64>,
    pub wallet_entries: usize,
}

pub fn summarize(detail: &UserDetail) -> DetailSummary {
    DetailSummary {
        scheme_count: detail.schemes.len(),
        aim_count: detail.aims.len(),
        scheme_saved: detail.schemes.iter().map(|s| sum_ledger(&s.payments)).sum(),
        aim_saved: detail.aims.iter().map(|a| sum_ledger(&a.payments)).sum(),
        wallet_balance: detail
            .wallet
            .as_ref()
            .map(|w| money(&w.balance)),
        wallet_entries: detail.wallet.as_ref().map_or(0, |w| w.payments.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserAim, UserScheme, Wallet};

    fn entry(id: u32, amount: Option<&str>) -> LedgerEntry {
        LedgerEntry {
            id,
            amount: amount.map(str::to_string),
            status: Some("success".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_money_defaults_to_zero() {
        assert_eq!(money(&None), 0.0);
        assert_eq!(money(&Some("".to_string())), 0.0);
        assert_eq!(money(&Some("garbage".to_string())), 0.0);
        assert_eq!(money(&Some("12.50".to_string())), 12.5);
        assert_eq!(money(&Some(" 3 ".to_string())), 3.0);
    }

    #[test]
    fn test_money_display_distinguishes_unknown_from_zero() {
        assert_eq!(money_display(&None), "N/A");
        assert_eq!(money_display(&Some("oops".to_string())), "N/A");
        assert_eq!(money_display(&Some("0".to_string())), "0.00");
        assert_eq!(money_display(&Some("99.9".to_string())), "99.90");
    }

    #[test]
    fn test_progress_clamps_at_100() {
        assert_eq!(progress_pct(0, 12), 0);
        assert_eq!(progress_pct(6, 12), 50);
        assert_eq!(progress_pct(12, 12), 100);
        assert_eq!(progress_pct(15, 12), 100);
        assert_eq!(progress_pct(5, 0), 0);
    }

    #[test]
    fn test_summarize_missing_collections_degrade_to_empty() {
        let detail = UserDetail {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Nair".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "0500000000".to_string(),
            is_active: true,
            schemes: Vec::new(),
            aims: Vec::new(),
            wallet: None,
        };
        let summary = summarize(&detail);
        assert_eq!(summary, DetailSummary::default());
    }

    #[test]
    fn test_summarize_sums_nested_ledgers() {
        let detail = UserDetail {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Nair".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "0500000000".to_string(),
            is_active: true,
            schemes: vec![UserScheme {
                id: 10,
                name: "Gold Saver".to_string(),
                months: 12,
                amount: Some("1200".to_string()),
                monthly_pay: Some("100".to_string()),
                payments: vec![entry(1, Some("100")), entry(2, Some("100")), entry(3, None)],
            }],
            aims: vec![UserAim {
                id: 20,
                name: "Vacation".to_string(),
                target_amount: None,
                payments: vec![entry(4, Some("50.25"))],
            }],
            wallet: Some(Wallet {
                id: 30,
                balance: Some("17.40".to_string()),
                payments: vec![entry(5, Some("17.40"))],
            }),
        };
        let summary = summarize(&detail);
        assert_eq!(summary.scheme_count, 1);
        assert_eq!(summary.aim_count, 1);
        // the None-amount entry counts as zero
        assert_eq!(summary.scheme_saved, 200.0);
        assert_eq!(summary.aim_saved, 50.25);
        assert_eq!(summary.wallet_balance, Some(17.4));
        assert_eq!(summary.wallet_entries, 1);
    }
}
