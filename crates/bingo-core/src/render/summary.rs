use crate::catalogue::Category;
use crate::model::Delta;
use crate::mvp::MvpReport;

/// Render the non-zero changes of one participant's delta.
///
/// Rank changes are listed like any other metric; a negative rank delta
/// means the participant climbed.
pub fn render_delta_summary(team: &str, participant: &str, delta: &Delta) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {} ({})\n\n", participant, team));

    let changes = delta.changes();
    if changes.is_empty() {
        out.push_str("_No progress recorded._\n");
        return out;
    }

    for category in Category::ALL.iter().copied() {
        let rows: Vec<_> = changes
            .iter()
            .filter(|(sub, _, _)| sub.category() == category)
            .collect();
        if rows.is_empty() {
            continue;
        }
        out.push_str(&format!("### {}\n\n", category.title()));
        for (sub, metric, value) in rows {
            out.push_str(&format!("- {} {}: {}\n", sub.key(), metric, signed(*value)));
        }
        out.push('\n');
    }

    out
}

/// Render the Event MVP and Team MVPs of every subcategory with a leader.
pub fn render_mvp_summary(report: &MvpReport) -> String {
    let mut out = String::new();
    out.push_str("## Event MVPs\n\n");
    out.push_str(&format!("**Run**: `{}`\n\n", report.run_id));

    let mut any = false;
    for category in Category::ALL.iter().copied() {
        let metric = report.metrics.for_category(category);
        let ranked: Vec<_> = category
            .subcategories()
            .into_iter()
            .filter(|sub| !report.entries(*sub).is_empty())
            .collect();
        if ranked.is_empty() {
            continue;
        }
        any = true;

        out.push_str(&format!("### {} (by {})\n\n", category.title(), metric));
        for sub in ranked {
            let entries = report.entries(sub);
            out.push_str(&format!("**{}**\n", sub.key()));
            for (idx, entry) in entries.iter().enumerate() {
                let label = if idx == 0 { "Event MVP" } else { "Team MVP" };
                out.push_str(&format!(
                    "- {}: {} ({}) {}\n",
                    label,
                    entry.participant,
                    entry.team,
                    signed(entry.difference)
                ));
            }
            out.push('\n');
        }
    }

    if !any {
        out.push_str("_Nobody progressed in any tracked subcategory._\n\n");
    }

    if !report.skipped.is_empty() {
        out.push_str("### Skipped\n\n");
        for skipped in &report.skipped {
            out.push_str(&format!(
                "- {} ({}): `{}`\n",
                skipped.participant, skipped.team, skipped.code
            ));
        }
    }

    out
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
