//! Shared formatting utilities for the rendering components.

/// Glyph for a filled star.
const STAR_FILLED: char = '★';
/// Glyph for a half star.
const STAR_HALF: char = '⯪';
/// Glyph for an empty star.
const STAR_EMPTY: char = '☆';

/// Total glyphs in the star scale.
const STAR_SCALE: usize = 5;

/// Renders a numeric rating as a fixed five-glyph star scale.
///
/// `floor(rating)` filled glyphs, one half glyph when the fractional part is
/// at least 0.5, and empty glyphs for the remainder. Ratings outside `[0, 5]`
/// are clamped first, so the output is always exactly five glyphs.
#[must_use]
pub fn star_glyphs(rating: f64) -> String {
    let clamped = rating.clamp(0.0, STAR_SCALE as f64);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = clamped.floor() as usize;
    let half = usize::from(clamped.fract() >= 0.5);
    let empty = STAR_SCALE - filled - half;

    let mut glyphs = String::with_capacity(STAR_SCALE * STAR_FILLED.len_utf8());
    for _ in 0..filled {
        glyphs.push(STAR_FILLED);
    }
    for _ in 0..half {
        glyphs.push(STAR_HALF);
    }
    for _ in 0..empty {
        glyphs.push(STAR_EMPTY);
    }
    glyphs
}

/// Formats a review count with pluralization: "1 review", otherwise
/// "N reviews" (including zero).
#[must_use]
pub fn review_count_label(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{count} reviews")
    }
}

/// Formats the full rating line: star glyphs, the rating to one decimal,
/// and the pluralized review count.
#[must_use]
pub fn rating_line(rating: f64, review_count: u32) -> String {
    format!(
        "{} {:.1} ({})",
        star_glyphs(rating),
        rating,
        review_count_label(review_count)
    )
}
