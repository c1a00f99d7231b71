//! Embedded marketing copy for the browse screens.

use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub success_story: String,
    pub trusted_by: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub company: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteFormContent {
    pub license_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub steps: Vec<ProcessStep>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub quote_form: QuoteFormContent,
}

fn parse_builtin_site() -> SiteContent {
    const SITE_CONTENT: &str = include_str!("../builtin_site.toml");
    toml::from_str(SITE_CONTENT).expect("Failed to parse builtin_site.toml")
}

pub fn site_content() -> &'static SiteContent {
    static CONTENT: OnceLock<SiteContent> = OnceLock::new();
    CONTENT.get_or_init(parse_builtin_site)
}
