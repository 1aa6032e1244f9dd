//! Formatters
//!
//! Pure helpers turning record values into markup fragments.

use crate::reviews::parse_calendar_date;

/// Upper bound of every rating dimension
pub const RATING_SCALE: i32 = 10;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Clamp a rating into `0..=RATING_SCALE`
pub fn clamp_rating(value: i32) -> i32 {
    value.clamp(0, RATING_SCALE)
}

/// Ten glyphs: `value` filled stars followed by empty ones
pub fn star_rating(value: i32) -> String {
    let filled = clamp_rating(value) as usize;
    let empty = RATING_SCALE as usize - filled;

    let mut stars = String::with_capacity(RATING_SCALE as usize * FILLED_STAR.len_utf8());
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    stars
}

/// Labeled horizontal bar filled to `value / 10`
pub fn rating_bar(value: i32, label: &str) -> String {
    let value = clamp_rating(value);
    let percentage = value * 100 / RATING_SCALE;

    format!(
        r#"<div class="rating-row">
    <span class="rating-label">{label}</span>
    <div class="rating-bar-container">
        <div class="rating-bar" style="width: {percentage}%"></div>
    </div>
    <span class="rating-value">{value}/10</span>
</div>"#,
        label = escape_html(label),
    )
}

/// Long calendar date such as "March 3, 2024"
///
/// Unparseable input is shown as-is.
pub fn long_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => escape_html(raw),
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_every_value() {
        for r in 0..=10 {
            let stars = star_rating(r);
            assert_eq!(stars.chars().count(), 10);

            let filled = stars.chars().take_while(|c| *c == FILLED_STAR).count();
            assert_eq!(filled, r as usize);
            assert!(stars.chars().skip(filled).all(|c| c == EMPTY_STAR));
        }
    }

    #[test]
    fn test_star_rating_clamps_out_of_range() {
        assert_eq!(star_rating(-3), "☆☆☆☆☆☆☆☆☆☆");
        assert_eq!(star_rating(14), "★★★★★★★★★★");
    }

    #[test]
    fn test_rating_bar_width_and_text() {
        for r in 0..=10 {
            let bar = rating_bar(r, "Value");
            assert!(bar.contains(&format!("{}/10", r)));
            assert!(bar.contains(&format!("width: {}%", r * 10)));
            assert!(bar.contains(r#"<span class="rating-label">Value</span>"#));
        }
    }

    #[test]
    fn test_rating_bar_clamps_and_escapes() {
        let bar = rating_bar(12, "Fish & Chips");
        assert!(bar.contains("width: 100%"));
        assert!(bar.contains("10/10"));
        assert!(bar.contains("Fish &amp; Chips"));
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-03-03"), "March 3, 2024");
        assert_eq!(long_date("2023-12-25T12:00:00Z"), "December 25, 2023");
        assert_eq!(long_date("soon <ish>"), "soon &lt;ish&gt;");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s&lt;/a&gt;"
        );
    }
}
