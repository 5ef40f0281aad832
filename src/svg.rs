use crate::contributions::{ContributionRecord, PrStatus};
use crate::date::PartialDate;
use crate::stats::AggregateStats;
use chrono::NaiveDate;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 56;
const MAX_TITLE_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub merged: &'static str,
    pub open: &'static str,
    pub closed: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                merged: "#a371f7",
                open: "#3fb950",
                closed: "#f85149",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                merged: "#8250df",
                open: "#1a7f37",
                closed: "#cf222e",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "oss_dark.svg",
            Theme::Light => "oss_light.svg",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Cuts `s` to at most `max` chars, marking the cut with `...`.
fn clamp_chars(s: &str, max: usize) -> String {
    let s = s.trim();
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Stat { k: String, d: String, v: String },
    CardHeader { text: String, link: &'static str, status: PrStatus },
    Plain { class: &'static str, text: String },
}

fn stats_lines(stats: &AggregateStats, align_width: usize) -> Vec<Line> {
    let mut lines = vec![Line::Header(build_header_line("- Open Source", align_width))];

    if stats.is_loading {
        lines.push(Line::Plain {
            class: "cc",
            text: "loading...".to_string(),
        });
        return lines;
    }

    let prs = format!(
        "{} ({} merged, {}%)",
        stats.total_prs,
        stats.merged_prs,
        stats.merge_rate()
    );
    let rows = [
        ("Pull Requests", prs),
        ("Repositories", stats.repos_contributed.to_string()),
        ("Organizations", stats.organizations.to_string()),
    ];

    for (key, value) in rows {
        let (k, d, v) = build_stat_row(key, &value, align_width);
        lines.push(Line::Stat { k, d, v });
    }

    lines
}

fn card_lines(record: &ContributionRecord, today: NaiveDate, align_width: usize) -> Vec<Line> {
    let heading = format!("- {} #{} [{}]", record.repo, record.number, record.status.as_str());

    let when = match PartialDate::parse(record.date) {
        Ok(d) => format!("{} ({})", d.label(), d.elapsed_string(today)),
        Err(_) => record.date.to_string(),
    };

    let mut lines = vec![
        Line::CardHeader {
            text: build_header_line(&heading, align_width),
            link: record.link,
            status: record.status,
        },
        Line::Plain {
            class: "value",
            text: format!("  {}", clamp_chars(record.title, MAX_TITLE_CHARS)),
        },
        Line::Plain {
            class: "cc",
            text: format!("  {} · {when}", record.organization),
        },
    ];

    if let Some(description) = record.description {
        lines.push(Line::Plain {
            class: "cc",
            text: format!("  {}", clamp_chars(description, MAX_TITLE_CHARS)),
        });
    }

    if !record.display_labels().is_empty() {
        lines.push(Line::Plain {
            class: "key",
            text: format!("  {}", record.display_labels().join(", ")),
        });
    }

    let mut parts = Vec::new();
    if let Some(add) = record.stats.additions {
        match record.stats.deletions {
            Some(del) => parts.push(format!("+{add} -{del}")),
            None => parts.push(format!("+{add}")),
        }
    }
    if let Some(c) = record.stats.comments {
        parts.push(format!("{c} comment{}", if c == 1 { "" } else { "s" }));
    }
    if let Some(f) = record.stats.files {
        parts.push(format!("{f} file{}", if f == 1 { "" } else { "s" }));
    }
    if !parts.is_empty() {
        lines.push(Line::Plain {
            class: "cc",
            text: format!("  {}", parts.join(" · ")),
        });
    }

    lines
}

/// Renders the stats header followed by one card per record.
pub fn generate_svg(
    stats: &AggregateStats,
    records: &[ContributionRecord],
    theme: Theme,
    today: NaiveDate,
) -> String {
    let colors = theme.colors();

    let widest_heading = records
        .iter()
        .map(|r| format!("- {} #{} [{}]", r.repo, r.number, r.status.as_str()).chars().count())
        .max()
        .unwrap_or(0);
    let align_width = (widest_heading + 2).max(MIN_COL_CHARS);

    let mut lines = stats_lines(stats, align_width);
    for record in records {
        lines.push(Line::Blank);
        lines.extend(card_lines(record, today, align_width));
    }

    let mut body = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) => {
                body.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                body.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
            Line::CardHeader { text, link, status } => {
                body.push_str(&format!(
                    r#"<a href="{}"><tspan x="{LEFT_PADDING}" y="{y}" class="{}">{}</tspan></a>
"#,
                    escape_xml(link),
                    status.as_str(),
                    escape_xml(text)
                ));
            }
            Line::Plain { class, text } => {
                body.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="{class}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
        }
    }

    let w = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key    {{ fill: {key}; }}
.value  {{ fill: {value}; }}
.cc     {{ fill: {cc}; }}
.merged {{ fill: {merged}; }}
.open   {{ fill: {open}; }}
.closed {{ fill: {closed}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{body}
</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        merged = colors.merged,
        open = colors.open,
        closed = colors.closed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributions::{CONTRIBUTIONS, PrStats};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    #[test]
    fn stat_row_pads_with_dots() {
        let (k, d, v) = build_stat_row("Repositories", "3", 18);
        assert_eq!(k, "Repositories: ");
        assert_eq!(d, "...");
        assert_eq!(v, "3");
        assert_eq!(build_stat_row("Repositories", "3", 17).1, ". ");
        assert_eq!(build_stat_row("Repositories", "3", 5).1, "");
    }

    #[test]
    fn clamps_long_titles() {
        assert_eq!(clamp_chars("  short ", 10), "short");
        assert_eq!(clamp_chars("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn renders_stats_and_every_card() {
        let stats = AggregateStats::from_records(CONTRIBUTIONS);
        let svg = generate_svg(&stats, CONTRIBUTIONS, Theme::Dark, today());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("12 (10 merged, 83%)"));
        assert!(svg.contains(r##"fill="#161b22""##));
        for r in CONTRIBUTIONS {
            assert!(svg.contains(r.link), "missing card for {}", r.link);
        }
        assert!(svg.contains("Sep 2025 (1 month ago)"));
    }

    #[test]
    fn only_first_three_labels_are_shown() {
        let svg = generate_svg(&AggregateStats::loading(), &CONTRIBUTIONS[..1], Theme::Light, today());
        assert!(svg.contains("feature, helm, deployment"));
        assert!(!svg.contains("kubeflow-pipelines"));
        assert!(svg.contains("+11902 -15 · 7 comments · 135 files"));
    }

    #[test]
    fn loading_shows_placeholder() {
        let svg = generate_svg(&AggregateStats::loading(), &[], Theme::Light, today());
        assert!(svg.contains("loading..."));
        assert!(!svg.contains("Pull Requests"));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn missing_stats_are_omitted_and_text_escaped() {
        let record = ContributionRecord {
            number: 7,
            title: "Fix <script> & friends",
            repo: "a/b",
            organization: "A",
            description: None,
            status: PrStatus::Closed,
            date: "2025-10",
            labels: &[],
            stats: PrStats {
                additions: Some(5),
                ..PrStats::default()
            },
            link: "https://github.com/a/b/pull/7",
        };
        let svg = generate_svg(&AggregateStats::loading(), &[record], Theme::Dark, today());
        assert!(svg.contains("Fix &lt;script&gt; &amp; friends"));
        assert!(svg.contains("  +5</tspan>"));
        assert!(!svg.contains("comment"));
        assert!(svg.contains(r#"class="closed""#));
        assert!(svg.contains("this month"));
    }
}
