//! Emoji glyphs for coded event values. Unmapped codes render as `""`.

use eggwatch_core::Field;

#[must_use]
pub fn weather_emoji(weather_id: Field<i64>) -> &'static str {
    match weather_id {
        Field::Known(1) => "\u{2600}\u{fe0f}",
        Field::Known(2) => "\u{2614}\u{fe0f}",
        Field::Known(3) => "\u{26c5}",
        Field::Known(4) => "\u{2601}\u{fe0f}",
        Field::Known(5) => "\u{1f4a8}",
        Field::Known(6) => "\u{26c4}\u{fe0f}",
        Field::Known(7) => "\u{1f301}",
        _ => "",
    }
}

#[must_use]
pub fn team_emoji(team_id: Field<i64>) -> &'static str {
    match team_id {
        Field::Known(0) => "\u{26aa}",
        Field::Known(1) => "\u{1f535}",
        Field::Known(2) => "\u{1f534}",
        Field::Known(3) => "\u{1f7e1}",
        _ => "",
    }
}

/// Ticket glyph for gyms that can host EX raids.
#[must_use]
pub fn ex_eligible_emoji(ex_eligible: Field<i64>) -> &'static str {
    match ex_eligible {
        Field::Known(flag) if flag > 0 => "\u{1f39f}\u{fe0f}",
        _ => "",
    }
}
