//! CSV adapter.
//!
//! One row per page in audit order, then a `global` summary row. Fields are
//! quoted per RFC 4180 when they contain a separator, a quote or a newline.

use crate::report::model::GlobalReport;

const HEADER: &str = "url,eco_index,grade,requests,transfer_size_bytes,dom_elements,ghg_grams,water_cl,performance,accessibility,best_practices,status";

pub fn render(report: &GlobalReport) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for page in &report.pages {
        let row = [
            escape(&page.metrics.url),
            format!("{:.0}", page.eco_index),
            page.grade.to_string(),
            page.metrics.request_count.to_string(),
            page.metrics.transfer_size_bytes.to_string(),
            page.metrics.dom_element_count.to_string(),
            format!("{:.2}", page.ghg_grams),
            format!("{:.2}", page.water_cl),
            opt(page.metrics.categories.performance),
            opt(page.metrics.categories.accessibility),
            opt(page.metrics.categories.best_practices),
            page.worst_status().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    let global = [
        "global".to_string(),
        format!("{:.1}", report.eco_index),
        report.grade.to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        opt(report.performance),
        opt(report.accessibility),
        opt(report.best_practices),
        report.status.to_string(),
    ];
    out.push_str(&global.join(","));
    out.push('\n');

    out
}

fn opt(score: Option<f64>) -> String {
    score.map(|s| format!("{s:.0}")).unwrap_or_default()
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render::tests::fixture_report;

    #[test]
    fn one_row_per_page_plus_header_and_summary() {
        let report = fixture_report();
        let out = render(&report);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2 + report.pages.len());
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("https://example.org/light,95,A,"));
        assert!(lines.last().expect("summary row").starts_with("global,83.5,A,"));
    }

    #[test]
    fn absent_category_scores_render_empty() {
        let report = fixture_report();
        let out = render(&report);
        // The heavy page has no best-practices score: row ends ",warning"
        // with an empty field before the status.
        let heavy = out
            .lines()
            .find(|l| l.contains("/heavy"))
            .expect("heavy row");
        assert!(heavy.contains(",60,20,,"));
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
