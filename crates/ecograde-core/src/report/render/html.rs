//! Standalone HTML adapter.
//!
//! Builds a self-contained document with embedded styles; viewable from the
//! filesystem without any server or template engine.

use crate::i18n::Translations;
use crate::report::model::{GlobalReport, PageReport};

pub fn render(report: &GlobalReport, i18n: &Translations) -> String {
    let mut html = String::new();

    html.push_str(&render_head(report, i18n));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(report, i18n));
    html.push_str(&render_pages_table(report, i18n));
    for page in &report.pages {
        html.push_str(&render_recommendations(page, i18n));
    }
    html.push_str(&render_footer(report));
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn render_head(report: &GlobalReport, i18n: &Translations) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        i18n.language(),
        escape(i18n.get("report.title")),
        report.grade
    )
}

fn render_header(report: &GlobalReport, i18n: &Translations) -> String {
    format!(
        r#"<div class="header">
    <h1>{}</h1>
    <p class="timestamp">{} {}</p>
    <div class="grade grade-{}">{}</div>
    <p class="score">{} {:.1}/100</p>
</div>
"#,
        escape(i18n.get("report.title")),
        escape(i18n.get("report.generated")),
        escape(&report.generated_at),
        report.grade,
        report.grade,
        escape(i18n.get("metric.eco_index")),
        report.eco_index,
    )
}

fn render_pages_table(report: &GlobalReport, i18n: &Translations) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for key in [
        "report.page",
        "metric.eco_index",
        "report.grade",
        "report.requests",
        "report.size",
        "report.dom",
        "report.ghg",
        "report.water",
        "report.status",
    ] {
        out.push_str(&format!("<th>{}</th>", escape(i18n.get(key))));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for page in &report.pages {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{:.0}</td><td class=\"grade-cell grade-{}\">{}</td><td>{}</td><td>{:.1}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td class=\"status-{}\">{}</td></tr>\n",
            escape(&page.metrics.url),
            page.eco_index,
            page.grade,
            page.grade,
            page.metrics.request_count,
            page.metrics.transfer_size_kib(),
            page.metrics.dom_element_count,
            page.ghg_grams,
            page.water_cl,
            page.worst_status(),
            page.worst_status(),
        ));
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn render_recommendations(page: &PageReport, i18n: &Translations) -> String {
    if page.recommendations.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "<div class=\"recommendations\">\n<h2>{} - {}</h2>\n<ul>\n",
        escape(i18n.get("report.recommendations")),
        escape(&page.metrics.url)
    );
    for recommendation in &page.recommendations {
        out.push_str(&format!("<li>{}</li>\n", escape(recommendation)));
    }
    out.push_str("</ul>\n</div>\n");
    out
}

fn render_footer(report: &GlobalReport) -> String {
    format!(
        "<div class=\"footer\">{} {}</div>\n",
        escape(&report.tool.name),
        escape(&report.tool.version)
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#":root {
    --pass: #15803d;
    --warn: #b45309;
    --fail: #b91c1c;
    --border: #e2e8f0;
    --text: #1e293b;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    background: #f8fafc;
    padding: 2rem;
}

.container { max-width: 960px; margin: 0 auto; }

.header { text-align: center; margin-bottom: 2rem; }
.header .timestamp { color: #64748b; margin: 0.5rem 0; }

.grade {
    display: inline-block;
    font-size: 3rem;
    font-weight: 700;
    width: 5rem;
    line-height: 5rem;
    border-radius: 50%;
    color: white;
    margin: 1rem 0;
}
.grade-A, .grade-B { background: var(--pass); }
.grade-C, .grade-D { background: var(--warn); }
.grade-E, .grade-F, .grade-G { background: var(--fail); }
.grade-cell { font-weight: 700; color: white; text-align: center; }

table { width: 100%; border-collapse: collapse; background: white; }
th, td { padding: 0.5rem 0.75rem; border: 1px solid var(--border); text-align: left; }
th { background: #f1f5f9; }

.status-pass { color: var(--pass); }
.status-warning { color: var(--warn); }
.status-error { color: var(--fail); }

.recommendations { margin-top: 1.5rem; background: white; padding: 1rem; border: 1px solid var(--border); }
.recommendations h2 { font-size: 1rem; margin-bottom: 0.5rem; }
.recommendations li { margin-left: 1.25rem; }

.footer { margin-top: 2rem; text-align: center; color: #64748b; font-size: 0.85rem; }
"#;
