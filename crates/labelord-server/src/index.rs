//! Status page.

use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::{constants::GITHUB_WEB_URL, server::AppContext};

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub(crate) fn render_index(peers: &[String]) -> String {
    let items: String = peers
        .iter()
        .map(|repo| {
            let repo = escape_html(repo);
            format!("    <li><a href=\"{GITHUB_WEB_URL}/{repo}\">{repo}</a></li>\n")
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>labelord</title></head>\n<body>\n  \
         <h1>labelord</h1>\n  <p>Master-to-master label replication between:</p>\n  \
         <ul>\n{items}  </ul>\n</body>\n</html>\n"
    )
}

pub(crate) async fn index_route(ctx: web::Data<AppContext>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(&ctx.peers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index() {
        let page = render_index(&["owner/repo".into(), "owner/<b>".into()]);
        assert!(page.contains(r#"<a href="https://github.com/owner/repo">owner/repo</a>"#));
        assert!(page.contains("owner/&lt;b&gt;"));
    }
}
