//! CSS selectors for the blog's markup, compiled once.

use once_cell::sync::Lazy;
use scraper::Selector;

pub(crate) static SELECTORS: Lazy<Selectors> = Lazy::new(Selectors::new);

pub(crate) struct Selectors {
    // Shared
    pub link: Selector,
    pub heading: Selector,

    // Article page
    pub hero_meta: Selector,
    pub hero_meta_span: Selector,
    pub tag_item: Selector,
    pub content: Selector,
    pub content_blocks: Selector,
    pub breadcrumbs: Selector,

    // Listing pages
    pub hero_title: Selector,
    pub card_title: Selector,
    pub card_title_span: Selector,
    pub card_image: Selector,
    pub grid: Selector,
    pub card_category: Selector,
}

impl Selectors {
    fn new() -> Self {
        let parse = |s: &str| Selector::parse(s).unwrap();
        Self {
            link: parse("a"),
            heading: parse("h1"),

            hero_meta: parse("div.hero__meta"),
            hero_meta_span: parse("span"),
            tag_item: parse("li.tags__tag"),
            content: parse("div.entry-content__content"),
            // Lead and body are not told apart; document order wins.
            content_blocks: parse("h2, h3, p"),
            breadcrumbs: parse("nav.breadcrumbs"),

            hero_title: parse("h1.hero__title"),
            card_title: parse("h3.card__title"),
            card_title_span: parse("span"),
            card_image: parse("div.card__image"),
            grid: parse("ul.grid"),
            card_category: parse("div.card__category.label"),
        }
    }
}
