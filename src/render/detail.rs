//! Full reviews listing
//!
//! Every record as an addressable block with rating bars and a return badge.

use super::format::{escape_html, long_date, rating_bar};
use crate::reviews::ReviewRecord;

/// Render one detail block per record
pub fn render_reviews(reviews: &[ReviewRecord]) -> String {
    reviews
        .iter()
        .map(render_detail)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detail(review: &ReviewRecord) -> String {
    let bars = review
        .ratings
        .detail_rows()
        .iter()
        .map(|(label, value)| rating_bar(*value, label))
        .collect::<Vec<_>>()
        .join("\n");

    let (badge_class, badge_text) = if review.would_return.is_yes() {
        ("yes", "✓ Would Return")
    } else {
        ("no", "✗ Would Not Return")
    };

    format!(
        r#"<div class="review-detail-card" id="{anchor}">
    <div class="review-detail-header">
        <div>
            <h3>{name}</h3>
            <p class="review-location">{location} | {category}</p>
        </div>
        <div class="review-overall">
            <div class="overall-score">{overall}</div>
            <div class="overall-label">Overall</div>
        </div>
    </div>
    {images}
    <div class="review-ratings">
        <h4>Detailed Ratings</h4>
        {bars}
    </div>
    <div class="review-text">
        <p><strong>Review:</strong> {text}</p>
    </div>
    <div class="review-footer">
        <span class="would-return {badge_class}">{badge_text}</span>
        <span class="review-date">{date}</span>
    </div>
</div>"#,
        anchor = escape_html(&review.anchor()),
        name = escape_html(&review.name),
        location = escape_html(&review.location),
        category = escape_html(&review.category),
        overall = review.ratings.overall,
        images = render_image_strip(review),
        text = escape_html(&review.review),
        date = long_date(&review.date),
    )
}

/// Image strip; empty when the record has no images
fn render_image_strip(review: &ReviewRecord) -> String {
    if review.images().is_empty() {
        return String::new();
    }

    let name = escape_html(&review.name);
    let images = review
        .images()
        .iter()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" onerror="this.style.display='none'">"#,
                escape_html(src),
                name
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<div class="review-images">
        {}
    </div>"#,
        images
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::record;
    use crate::reviews::WouldReturn;

    #[test]
    fn test_one_block_per_record_with_anchor() {
        let reviews: Vec<_> = (1..=5).map(|i| record(i, &format!("Place {}", i))).collect();
        let html = render_reviews(&reviews);

        assert_eq!(html.matches(r#"class="review-detail-card""#).count(), 5);
        for i in 1..=5 {
            assert!(html.contains(&format!(r#"id="review-{}""#, i)));
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_reviews(&[]), "");
    }

    #[test]
    fn test_rating_bars_in_fixed_order() {
        let mut review = record(1, "Grill");
        review.ratings.food_quality = 9;
        review.ratings.value = 6;
        review.ratings.service = 4;
        review.ratings.portion_size = 8;
        review.ratings.overall = 7;
        let html = render_reviews(&[review]);

        let positions: Vec<usize> = ["Food Quality", "Value<", "Service", "Portion Size"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(html.matches(r#"class="rating-row""#).count(), 4);
        assert!(html.contains("width: 90%"));
        assert!(html.contains("4/10"));
        assert!(!html.contains("7/10"));
        assert!(html.contains(r#"<div class="overall-score">7</div>"#));
    }

    #[test]
    fn test_return_badge_states() {
        let mut review = record(1, "Grill");
        review.would_return = WouldReturn::Yes;
        let html = render_reviews(&[review.clone()]);
        assert!(html.contains(r#"<span class="would-return yes">✓ Would Return</span>"#));

        review.would_return = WouldReturn::from("nah".to_string());
        let html = render_reviews(&[review]);
        assert!(html.contains(r#"<span class="would-return no">✗ Would Not Return</span>"#));
    }

    #[test]
    fn test_image_strip_only_when_images_present() {
        let mut review = record(1, "Grill");
        review.images = Some(Vec::new());
        assert!(!render_reviews(&[review.clone()]).contains("review-images"));

        review.images = Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        let html = render_reviews(&[review]);
        assert!(html.contains(r#"<div class="review-images">"#));
        assert_eq!(html.matches("onerror=\"this.style.display='none'\"").count(), 2);
    }

    #[test]
    fn test_long_date_and_location_line() {
        let mut review = record(1, "Grill");
        review.date = "2024-03-03".to_string();
        review.location = "Harbourside".to_string();
        review.category = "BBQ".to_string();
        let html = render_reviews(&[review]);

        assert!(html.contains(r#"<span class="review-date">March 3, 2024</span>"#));
        assert!(html.contains("Harbourside | BBQ"));
    }
}
