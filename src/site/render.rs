//! Gallery markup.
//!
//! Templates are plain minijinja files under `templates/`. Names end in
//! `.html`, which turns on HTML auto-escaping for every interpolated value.

use minijinja::{context, Environment};
use serde::Serialize;

use super::project::Project;
use crate::gallery::{tag_label, Catalog};

const CARDS_TEMPLATE: &str = include_str!("templates/cards.html");
const FILTERS_TEMPLATE: &str = include_str!("templates/filters.html");

#[derive(Serialize)]
struct CardView<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    url: &'a str,
    image: Option<&'a str>,
    tags: &'a [String],
    labels: Vec<String>,
}

impl<'a> From<&'a Project> for CardView<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: &project.id,
            title: &project.title,
            description: &project.description,
            url: &project.url,
            image: project.image.as_deref(),
            tags: &project.tags,
            labels: project.tags.iter().map(|t| tag_label(t)).collect(),
        }
    }
}

#[derive(Serialize)]
struct FilterView<'a> {
    tag: &'a str,
    label: &'a str,
}

pub struct GalleryRenderer {
    env: Environment<'static>,
}

impl GalleryRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("cards.html", CARDS_TEMPLATE)?;
        env.add_template("filters.html", FILTERS_TEMPLATE)?;
        Ok(Self { env })
    }

    /// One `project-card` element per project, in catalog order
    pub fn render_cards(&self, projects: &[Project]) -> Result<String, minijinja::Error> {
        let cards: Vec<CardView<'_>> = projects.iter().map(CardView::from).collect();
        self.env
            .get_template("cards.html")?
            .render(context! { cards => cards })
    }

    /// One `filter-btn` button per distinct tag
    pub fn render_filters(&self, catalog: &Catalog) -> Result<String, minijinja::Error> {
        let filters: Vec<FilterView<'_>> = catalog
            .filters()
            .iter()
            .map(|f| FilterView {
                tag: &f.tag,
                label: &f.label,
            })
            .collect();
        self.env
            .get_template("filters.html")?
            .render(context! { filters => filters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::parse_payload;

    fn projects() -> Vec<Project> {
        parse_payload(
            r#"[
                {"id": "weather", "title": "Weather <App>", "description": "Forecasts", "tags": ["javascript", "web-dev"]},
                {"id": "chess", "title": "Chess", "image": "chess.png", "tags": ["rust"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_cards() {
        let html = GalleryRenderer::new().unwrap().render_cards(&projects()).unwrap();

        assert!(html.contains(r#"id="weather""#));
        assert!(html.contains(r#"data-tags="javascript web-dev""#));
        assert!(html.contains("<li>web dev</li>"));
        assert!(html.contains("<p>Forecasts</p>"));
        assert!(html.contains(r#"src="chess.png""#));
        assert_eq!(html.matches("class=\"project-card\"").count(), 2);
    }

    #[test]
    fn test_render_cards_escapes_text() {
        let html = GalleryRenderer::new().unwrap().render_cards(&projects()).unwrap();
        assert!(html.contains("<h3>Weather &lt;App&gt;</h3>"));
        assert!(!html.contains("<App>"));
    }

    #[test]
    fn test_render_filters() {
        let cards = projects().iter().map(Project::to_card).collect();
        let catalog = Catalog::new(cards).unwrap();
        let html = GalleryRenderer::new().unwrap().render_filters(&catalog).unwrap();

        assert!(html.contains(r#"<button class="filter-btn" id="web-dev">web dev</button>"#));
        assert_eq!(html.matches("filter-btn").count(), 3);
    }
}
