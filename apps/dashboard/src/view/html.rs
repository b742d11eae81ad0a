//! Server-side HTML for the dashboard pages. Every interpolated value goes
//! through `escape`.

use std::fmt::Write;

use crate::gate::navigation::RETURN_TO_PARAM;
use crate::view::{DashboardView, Heading, Navbar, ResumeCard, PAGE_DESCRIPTION, PAGE_TITLE};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         </head>\n<body>\n{body}</body>\n</html>\n",
        escape(PAGE_TITLE),
        escape(PAGE_DESCRIPTION),
    )
}

fn navbar(nav: &Navbar) -> String {
    format!(
        "<nav class=\"navbar\">\
         <a href=\"/\"><p class=\"text-gradient\">{}</p></a>\
         <a href=\"{}\" class=\"primary-button\">{}</a>\
         </nav>\n",
        escape(nav.brand),
        escape(nav.upload_href),
        escape(nav.upload_label),
    )
}

fn heading(heading: &Heading) -> String {
    format!(
        "<section class=\"main-section\"><div class=\"page-heading\">\
         <h1>{}</h1><h2>{}</h2>\
         </div></section>\n",
        escape(heading.title),
        escape(heading.subtitle),
    )
}

fn card(card: &ResumeCard) -> String {
    let mut html = format!(
        "<a class=\"resume-card\" data-key=\"{}\" href=\"{}\">",
        escape(&card.key),
        escape(&card.href()),
    );
    html.push_str("<div class=\"resume-card-header\">");
    if let Some(company) = &card.company_name {
        let _ = write!(html, "<h2>{}</h2>", escape(company));
    }
    if let Some(title) = &card.job_title {
        let _ = write!(html, "<h3>{}</h3>", escape(title));
    }
    if card.company_name.is_none() && card.job_title.is_none() {
        html.push_str("<h2>Resume</h2>");
    }
    let _ = write!(
        html,
        "<span class=\"score\">{}/100</span></div>\
         <img src=\"{}\" alt=\"resume\"></a>",
        card.score,
        escape(&card.image_path),
    );
    html
}

/// Full dashboard page. The grid section is omitted for an empty collection.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut body = String::from("<main class=\"dashboard\">\n");
    body.push_str(&navbar(&view.navbar));
    body.push_str(&heading(&view.heading));

    if let Some(grid) = &view.grid {
        body.push_str("<div class=\"resumes-section\">\n");
        for c in &grid.cards {
            body.push_str(&card(c));
            body.push('\n');
        }
        body.push_str("</div>\n");
    }

    body.push_str("</main>\n");
    document(&body)
}

/// Placeholder shown while the session is still resolving.
pub fn render_pending() -> String {
    document("<main class=\"dashboard\" aria-busy=\"true\"><p>Loading…</p></main>\n")
}

/// Sign-in form posting to `action`, carrying the return-to path along.
pub fn render_sign_in(action: &str, next: &str, error: Option<&str>) -> String {
    let mut body = String::from("<main class=\"auth\"><section class=\"auth-card\">\n");
    body.push_str("<h1>Welcome</h1><h2>Log In to Continue Your Job Journey</h2>\n");
    if let Some(error) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(error));
    }
    let _ = write!(
        body,
        "<form method=\"post\" action=\"{}\">\
         <input type=\"hidden\" name=\"{}\" value=\"{}\">\
         <label>Name <input type=\"text\" name=\"username\" required></label>\
         <button type=\"submit\" class=\"auth-button\">Log In</button>\
         </form>\n</section></main>\n",
        escape(action),
        RETURN_TO_PARAM,
        escape(next),
    );
    document(&body)
}
