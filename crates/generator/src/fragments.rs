//! Partial HTML returned by the donation API for htmx to swap into the page

use crate::template::{Template, html_escape};
use campaign_core::{Donation, DonationStats, format_amount};
use chrono::SecondsFormat;

pub struct StatsFragment {
    pub stats: DonationStats,
}

impl Template for StatsFragment {
    fn to_html(&self) -> String {
        let label = if self.stats.count == 1 { "donor" } else { "donors" };
        format!(
            r#"<div class="stats">
    <div class="stat"><span class="stat-value">{}</span> <span class="stat-label">raised</span></div>
    <div class="stat"><span class="stat-value">{}</span> <span class="stat-label">{}</span></div>
</div>
"#,
            format_amount(self.stats.total),
            self.stats.count,
            label
        )
    }
}

pub struct RecentDonorsFragment<'a> {
    pub donations: &'a [Donation],
}

impl Template for RecentDonorsFragment<'_> {
    fn to_html(&self) -> String {
        if self.donations.is_empty() {
            return "<p class=\"donor-empty\">No donations yet. Be the first!</p>\n".to_string();
        }

        let items: String = self
            .donations
            .iter()
            .map(|d| {
                let message = d
                    .message
                    .as_deref()
                    .map(|m| format!("\n        <p class=\"donor-message\">{}</p>", html_escape(m)))
                    .unwrap_or_default();

                format!(
                    r#"    <li class="donor">
        <span class="donor-name">{}</span>
        <span class="donor-amount">{}</span>{}
        <time datetime="{}">{}</time>
    </li>
"#,
                    html_escape(&d.name),
                    format_amount(d.amount),
                    message,
                    d.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                    d.created_at.format("%b %-d, %Y %H:%M UTC"),
                )
            })
            .collect();

        format!("<ul class=\"donor-list\">\n{items}</ul>\n")
    }
}

pub struct DonationSuccessFragment<'a> {
    pub name: &'a str,
    pub amount: f64,
}

impl Template for DonationSuccessFragment<'_> {
    fn to_html(&self) -> String {
        format!(
            "<div class=\"donation-success\">\n    <p>Thank you, {}! Your donation of {} has been received.</p>\n</div>\n",
            html_escape(self.name),
            format_amount(self.amount)
        )
    }
}
