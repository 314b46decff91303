use capable_site::SiteConfig;
use moon::*;

async fn frontend() -> Frontend {
    let site = match SiteConfig::embedded() {
        Ok(config) => config.site,
        Err(error) => {
            eprintln!("Falling back to default site metadata: {error}");
            SiteConfig::default().site
        }
    };
    Frontend::new()
        .title(&site.title)
        .append_to_head(&format!(
            r#"<meta name="description" content="{}">"#,
            escape_attribute(&site.description)
        ))
        .append_to_head(&format!(
            r#"<meta name="keywords" content="{}">"#,
            escape_attribute(&site.keywords)
        ))
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

// The site sends nothing to the server.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
