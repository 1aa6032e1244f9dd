//! Homepage preview grid
//!
//! The first few records as cards linking to their full review.

use super::format::{escape_html, star_rating};
use super::RenderOptions;
use crate::reviews::ReviewRecord;

/// Render the preview cards for the homepage grid
pub fn render_home(reviews: &[ReviewRecord], options: &RenderOptions) -> String {
    reviews
        .iter()
        .take(options.home_limit)
        .map(|review| render_card(review, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(review: &ReviewRecord, options: &RenderOptions) -> String {
    let image = review
        .primary_image()
        .unwrap_or(options.placeholder_image.as_str());

    format!(
        r#"<article class="review-card">
    <div class="card-image">
        <img src="{image}" alt="{name}" onerror="{fallback}">
        <div class="card-badge">{category}</div>
    </div>
    <div class="card-content">
        <div class="card-rating">{stars}</div>
        <h3 class="card-title">{name}</h3>
        <p class="card-excerpt">{excerpt}</p>
        <a href="{detail_page}#{anchor}" class="card-link">Read Full Review →</a>
    </div>
</article>"#,
        image = escape_html(image),
        name = escape_html(&review.name),
        fallback = fallback_handler(review),
        category = escape_html(&review.category),
        stars = star_rating(review.ratings.overall),
        excerpt = escape_html(&review.review),
        detail_page = escape_html(&options.detail_page),
        anchor = escape_html(&review.anchor()),
    )
}

/// `onerror` handler swapping a broken card image for a gradient tile
fn fallback_handler(review: &ReviewRecord) -> String {
    format!(
        "this.onerror=null;this.src='data:image/svg+xml,{}'",
        urlencoding::encode(&gradient_tile(review))
    )
}

/// 600x400 gradient tile captioned with the record name
fn gradient_tile(review: &ReviewRecord) -> String {
    let gradient_id = format!("g{}", review.id)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>();

    format!(
        concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='600' height='400'>",
            "<defs><linearGradient id='{id}' x1='0%' y1='0%' x2='100%' y2='100%'>",
            "<stop offset='0%' style='stop-color:#E94B3C;stop-opacity:1'/>",
            "<stop offset='100%' style='stop-color:#FFB347;stop-opacity:1'/>",
            "</linearGradient></defs>",
            "<rect fill='url(#{id})' width='600' height='400'/>",
            "<text fill='white' font-family='Arial' font-size='24' font-weight='bold' ",
            "x='50%' y='50%' text-anchor='middle' dy='.3em'>{name}</text></svg>"
        ),
        id = gradient_id,
        name = escape_html(&review.name),
    )
}
