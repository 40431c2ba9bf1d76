use askama::Template;

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub source_host: String,
}
