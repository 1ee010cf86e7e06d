//! HTML fixtures mirroring the blog's markup, for tests.

use super::listing::{OTHER_COUNT, PICK_COUNT};

pub const BASE: &str = "https://blog.example.com/blog/";

pub fn article_html(date: &str, author: &str, tags: &[&str]) -> String {
    let tags: String = tags
        .iter()
        .map(|t| format!(r#"<li class="tags__tag"><a href="/tag/{t}/"> {t} </a></li>"#))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Article</title></head>
<body>
  <header class="hero">
    <div class="hero__meta"><span>{date} | {author}</span></div>
  </header>
  <div class="entry-content">
    <div class="entry-content__content"><p class="lead">A short lead.</p><h2>Why shard Postgres at all</h2><p>Sharding splits rows across nodes.</p><h3>Trade-offs</h3><p>Cross-shard joins get harder.</p></div>
  </div>
  <ul class="tags">{tags}</ul>
</body></html>"#
    )
}

/// Article page that also carries a breadcrumb trail.
pub fn breadcrumb_article_html(categories: &[&str]) -> String {
    let crumbs: String = categories
        .iter()
        .map(|c| format!(r#"<li><a href="/category/{c}/">{c}</a></li>"#))
        .collect();
    let article = article_html("February 1st, 2017", "Top Author", &["featured"]);
    article.replacen(
        "<body>",
        &format!(
            r#"<body><nav class="breadcrumbs"><ul><li><a href="/">Home</a></li>{crumbs}</ul></nav>"#
        ),
        1,
    )
}

pub fn top_url() -> String {
    format!("{BASE}top-story/")
}

pub fn pick_url(i: usize) -> String {
    format!("{BASE}pick-{i}/")
}

pub fn other_url(i: usize) -> String {
    format!("{BASE}other-{i}/")
}

fn category_div(names: &[String]) -> String {
    let links: String = names
        .iter()
        .map(|n| format!(r#"<a href="/category/{n}/">{n}</a>"#))
        .collect();
    format!(r#"<div class="card__category label">{links}</div>"#)
}

/// First listing page with the given number of picks and others split over
/// two grids.
pub fn first_page_html_with(picks: usize, others: usize) -> String {
    let pick_cards: String = (1..=picks)
        .map(|i| {
            format!(
                r#"<li class="card">
  <div class="card__image"><a href="{url}"><img src="/img/{i}.png"></a></div>
  {cat}
  <h3 class="card__title"><span> Pick {i} </span></h3>
</li>"#,
                url = pick_url(i),
                cat = category_div(&[format!("PickCat{i}")]),
            )
        })
        .collect();

    let other_card = |i: usize| {
        format!(
            r#"<li class="card">
  {cat}
  <h3 class="card__title"><a href="{url}" title="Other {i}"> Other {i} </a></h3>
</li>"#,
            url = other_url(i),
            cat = category_div(&[format!("Cat{i}"), "Shared".to_string()]),
        )
    };
    let split = others.div_ceil(2);
    let first_grid: String = (1..=split).map(other_card).collect();
    let second_grid: String = (split + 1..=others).map(other_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html><body>
  <section class="hero">
    <h1 class="hero__title"><a href="{top}"> Top Story </a></h1>
  </section>
  <ul class="grid picks">{pick_cards}</ul>
  <ul class="grid">{first_grid}</ul>
  <ul class="grid">{second_grid}</ul>
</body></html>"#,
        top = top_url(),
    )
}

pub fn first_page_html() -> String {
    first_page_html_with(PICK_COUNT, OTHER_COUNT)
}

/// Page N listing with `titles` cards and `categories` category regions.
pub fn page_n_html(page: i64, titles: usize, categories: usize) -> String {
    let cards: String = (1..=titles.max(categories))
        .map(|i| {
            let cat = if i <= categories {
                category_div(&[format!("P{page}Cat{i}")])
            } else {
                String::new()
            };
            let title = if i <= titles {
                format!(
                    r#"<h3 class="card__title"><a href="/blog/p{page}-{i}/" title="Page {page} Article {i}">Page {page} Article {i} (inner)</a></h3>"#
                )
            } else {
                String::new()
            };
            format!(r#"<li class="card">{cat}{title}</li>"#)
        })
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><body>
  <h1>Blog</h1>
  <ul class="grid">{cards}</ul>
</body></html>"#
    )
}

pub fn page_n_url(page: i64, i: usize) -> String {
    format!("https://blog.example.com/blog/p{page}-{i}/")
}

pub fn not_found_html() -> String {
    r#"<!DOCTYPE html>
<html><body>
  <h1>Page not found</h1>
  <ul class="grid"><li class="card"><h3 class="card__title"><a href="/x/" title="x">x</a></h3></li></ul>
</body></html>"#
        .to_string()
}
