//! Full pages written by the static site generator.
//!
//! The home page carries the donation form and the two live fragments. They
//! are loaded by htmx on page load and reloaded whenever the server answers a
//! donation with the `donationComplete` trigger.

use crate::template::{Template, html_escape, layout, markdown_to_html};
use campaign_core::BlogPost;
use campaign_core::config::SiteConfig;

/// Event name sent in `HX-Trigger` after a successful donation
pub const DONATION_COMPLETE_EVENT: &str = "donationComplete";

/// Human readable publication date, falling back to the raw value
fn display_date(post: &BlogPost) -> String {
    post.published_on()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| post.date.to_string())
}

pub struct HomePage<'a> {
    pub site: &'a SiteConfig,
}

impl Template for HomePage<'_> {
    fn to_html(&self) -> String {
        let title = html_escape(&self.site.title);
        let tagline = html_escape(&self.site.tagline);
        let refresh = format!("load, {DONATION_COMPLETE_EVENT} from:body");

        let main = format!(
            r##"        <section class="hero">
            <h1>{title}</h1>
            <p class="tagline">{tagline}</p>
        </section>

        <section id="stats" class="stats-panel" hx-get="/api/stats" hx-trigger="{refresh}">
            <p>Loading totals...</p>
        </section>

        <section class="donate">
            <h2>Make a Donation</h2>
            <form hx-post="/api/donations" hx-target="#donation-result" hx-swap="innerHTML">
                <label>Name <input type="text" name="name" required></label>
                <label>Email <input type="email" name="email" required></label>
                <label>Amount <input type="number" name="amount" min="0.01" step="0.01" required></label>
                <label>Message <textarea name="message" rows="3"></textarea></label>
                <button type="submit">Donate</button>
            </form>
            <div id="donation-result"></div>
        </section>

        <section class="recent">
            <h2>Recent Donors</h2>
            <div id="recent-donors" hx-get="/api/recent-donors" hx-trigger="{refresh}">
                <p>Loading donors...</p>
            </div>
        </section>"##
        );

        layout(self.site, "", &main)
    }
}

pub struct AboutPage<'a> {
    pub site: &'a SiteConfig,
}

impl Template for AboutPage<'_> {
    fn to_html(&self) -> String {
        let title = html_escape(&self.site.title);
        let main = format!(
            r#"        <article class="about">
            <h1>About {title}</h1>
            <p>{title} is a grassroots effort funded entirely by people like you.</p>
            <p>Every donation goes directly towards our goals. Follow our progress on the
            <a href="/blog.html">blog</a> or <a href="/">make a donation</a> today.</p>
        </article>"#
        );

        layout(self.site, "About", &main)
    }
}

pub struct BlogIndexPage<'a> {
    pub site: &'a SiteConfig,
    pub posts: &'a [BlogPost],
}

impl Template for BlogIndexPage<'_> {
    fn to_html(&self) -> String {
        let items: String = self
            .posts
            .iter()
            .map(|post| {
                format!(
                    r#"
                <li class="post-summary">
                    <a href="/blog/{}">{}</a>
                    <time datetime="{}">{}</time>
                </li>"#,
                    html_escape(&post.file_name()),
                    html_escape(post.title),
                    html_escape(post.date),
                    html_escape(&display_date(post)),
                )
            })
            .collect();

        let list = if self.posts.is_empty() {
            r#"            <p class="empty">No posts yet.</p>"#.to_string()
        } else {
            format!(
                r#"            <ul class="post-list">{items}
            </ul>"#
            )
        };

        let main = format!(
            r#"        <section class="blog">
            <h1>Blog</h1>
{list}
        </section>"#
        );

        layout(self.site, "Blog", &main)
    }
}

pub struct BlogPostPage<'a> {
    pub site: &'a SiteConfig,
    pub post: &'a BlogPost,
}

impl Template for BlogPostPage<'_> {
    fn to_html(&self) -> String {
        let main = format!(
            r#"        <article class="post">
            <h1>{}</h1>
            <time datetime="{}">{}</time>
            <div class="post-body">
{}            </div>
            <p><a href="/blog.html">&larr; All posts</a></p>
        </article>"#,
            html_escape(self.post.title),
            html_escape(self.post.date),
            html_escape(&display_date(self.post)),
            markdown_to_html(self.post.content),
        );

        layout(self.site, self.post.title, &main)
    }
}
