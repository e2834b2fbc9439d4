//! Terminal table adapter.

use crate::i18n::Translations;
use crate::report::model::GlobalReport;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn grade_color(grade: char) -> &'static str {
    match grade {
        'A' => "\x1b[32m",
        'B' => "\x1b[92m",
        'C' => "\x1b[93m",
        'D' => "\x1b[33m",
        'E' => "\x1b[91m",
        _ => "\x1b[31m",
    }
}

pub fn render(report: &GlobalReport, i18n: &Translations) -> String {
    let mut out = String::new();

    let grade_c = grade_color(report.grade);
    out.push_str(&format!("\n{BOLD}{}{RESET}\n", i18n.get("report.title")));
    out.push_str(&format!(
        "{DIM}────────────────────────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "{}: {BOLD}{:.1}/100{RESET}  {}: {grade_c}{BOLD}{}{RESET}  {}: {}\n\n",
        i18n.get("report.global"),
        report.eco_index,
        i18n.get("report.grade"),
        report.grade,
        i18n.get("report.status"),
        report.status,
    ));

    out.push_str(&format!(
        "{DIM}  {:<40} {:>9} {:>5} {:>8} {:>10} {:>7} {:>8}{RESET}\n",
        i18n.get("report.page"),
        i18n.get("metric.eco_index"),
        i18n.get("report.grade"),
        i18n.get("report.requests"),
        i18n.get("report.size"),
        i18n.get("report.dom"),
        i18n.get("report.status"),
    ));

    for page in &report.pages {
        let c = grade_color(page.grade);
        out.push_str(&format!(
            "  {:<40} {:>9.0} {c}{:>5}{RESET} {:>8} {:>10.1} {:>7} {:>8}\n",
            truncate(&page.metrics.url, 40),
            page.eco_index,
            page.grade,
            page.metrics.request_count,
            page.metrics.transfer_size_kib(),
            page.metrics.dom_element_count,
            page.worst_status(),
        ));
    }

    let footer: Vec<String> = [
        ("metric.performance", report.performance),
        ("metric.accessibility", report.accessibility),
        ("metric.best_practices", report.best_practices),
    ]
    .iter()
    .filter_map(|(key, score)| score.map(|s| format!("{}: {s:.0}", i18n.get(key))))
    .collect();
    if !footer.is_empty() {
        out.push_str(&format!("\n  {}\n", footer.join("  ")));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
