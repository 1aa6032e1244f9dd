//! Image gallery
//!
//! Flattens every image of every record into one tile sequence.

use super::format::escape_html;
use crate::reviews::ReviewRecord;

/// Replaces a tile's content when its image fails to load
const MISSING_PHOTO_HANDLER: &str =
    "this.style.display='none'; this.parentElement.innerHTML='&lt;p&gt;Photo coming soon&lt;/p&gt;'";

/// Render one tile per image, in record order then image order
pub fn render_gallery(reviews: &[ReviewRecord]) -> String {
    reviews
        .iter()
        .flat_map(|review| {
            review
                .images()
                .iter()
                .map(move |src| render_tile(src, &review.name))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tile(src: &str, owner: &str) -> String {
    format!(
        r#"<div class="gallery-item">
    <img src="{}" alt="{}" onerror="{}">
</div>"#,
        escape_html(src),
        escape_html(owner),
        MISSING_PHOTO_HANDLER
    )
}
