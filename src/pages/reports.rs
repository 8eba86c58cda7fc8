//! Reports Screen
//!
//! Static report rows with one-shot client-side export. Every export
//! contains exactly the rows on screen; nothing round-trips the server.

use leptos::prelude::*;

use crate::export;
use crate::models::ReportRow;
use crate::notify::Notifier;

const HEADERS: &[&str] = &["Period", "New users", "Active schemes", "Total collected", "Payouts"];

fn report_rows() -> Vec<ReportRow> {
    vec![
        ReportRow { period: "Jan 2025".to_string(), new_users: 112, active_schemes: 311, total_collected: 48_230.00, payouts: 12_400.00 },
        ReportRow { period: "Feb 2025".to_string(), new_users: 98, active_schemes: 334, total_collected: 51_870.50, payouts: 9_310.00 },
        ReportRow { period: "Mar 2025".to_string(), new_users: 140, active_schemes: 371, total_collected: 60_125.25, payouts: 15_780.00 },
        ReportRow { period: "Apr 2025".to_string(), new_users: 87, active_schemes: 389, total_collected: 57_440.00, payouts: 11_020.50 },
        ReportRow { period: "May 2025".to_string(), new_users: 131, active_schemes: 402, total_collected: 63_910.75, payouts: 14_615.00 },
        ReportRow { period: "Jun 2025".to_string(), new_users: 123, active_schemes: 425, total_collected: 66_381.00, payouts: 13_950.25 },
    ]
}

fn to_cells(rows: &[ReportRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.period.clone(),
                row.new_users.to_string(),
                row.active_schemes.to_string(),
                format!("{:.2}", row.total_collected),
                format!("{:.2}", row.payouts),
            ]
        })
        .collect()
}

fn export_as(format: &str, notifier: Notifier) {
    let cells = to_cells(&report_rows());
    let result = match format {
        "csv" => export::download("monthly-report.csv", "text/csv", &export::csv(HEADERS, &cells)),
        "xls" => export::download(
            "monthly-report.xls",
            "application/vnd.ms-excel",
            &export::spreadsheet("Monthly report", HEADERS, &cells),
        ),
        _ => {
            // PDF goes through the browser's print dialog
            web_sys::window()
                .map(|w| w.print().map_err(|e| format!("{:?}", e)))
                .unwrap_or(Err("no window".to_string()))
        }
    };
    match result {
        Ok(()) => notifier.info("Export ready"),
        Err(e) => {
            web_sys::console::error_1(&format!("[REPORTS] Export failed: {}", e).into());
            notifier.error("Export failed");
        }
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let rows = report_rows();

    view! {
        <div class="page reports-page">
            <div class="page-toolbar">
                <button on:click=move |_| export_as("csv", notifier)>"Export CSV"</button>
                <button on:click=move |_| export_as("xls", notifier)>"Export spreadsheet"</button>
                <button on:click=move |_| export_as("pdf", notifier)>"Export PDF"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        {HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td>{row.period.clone()}</td>
                            <td>{row.new_users}</td>
                            <td>{row.active_schemes}</td>
                            <td>{format!("{:.2}", row.total_collected)}</td>
                            <td>{format!("{:.2}", row.payouts)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_covers_all_visible_rows() {
        let rows = report_rows();
        let doc = crate::export::csv(HEADERS, &to_cells(&rows));
        for row in &rows {
            assert!(doc.contains(&row.period), "missing period {}", row.period);
        }
        // header + one line per row
        assert_eq!(doc.lines().count(), rows.len() + 1);
    }
}
