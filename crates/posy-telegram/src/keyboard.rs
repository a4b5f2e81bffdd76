// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline keyboards built from view button rows.

use posy_core::{ButtonAction, CALLBACK_DATA_LIMIT, View};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::warn;
use url::Url;

/// Converts the view's rows to an inline keyboard.
///
/// Buttons Telegram would reject (oversized callback data, unparsable
/// URLs) are dropped with a warning. Returns `None` when nothing is left.
pub fn to_markup(view: &View) -> Option<InlineKeyboardMarkup> {
    let rows: Vec<Vec<InlineKeyboardButton>> = view
        .rows
        .iter()
        .map(|row| row.iter().filter_map(to_button).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup::new(rows))
    }
}

fn to_button(button: &posy_core::Button) -> Option<InlineKeyboardButton> {
    match &button.action {
        ButtonAction::Callback(intent) => {
            let data = intent.to_string();
            if data.len() > CALLBACK_DATA_LIMIT {
                warn!(label = %button.label, bytes = data.len(), "dropping button with oversized callback data");
                return None;
            }
            Some(InlineKeyboardButton::callback(button.label.clone(), data))
        }
        ButtonAction::Url(raw) => match Url::parse(raw) {
            Ok(url) => Some(InlineKeyboardButton::url(button.label.clone(), url)),
            Err(e) => {
                warn!(label = %button.label, error = %e, "dropping button with invalid URL");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use posy_core::{Button, Intent, Navigation};
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn rows_keep_their_shape() {
        let view = View::new()
            .button(Button::callback("Back", Intent::Navigation(Navigation::MainMenu)))
            .row(vec![
                Button::url("Shop", "https://shop.example/products/a"),
                Button::callback("All", Intent::Navigation(Navigation::AllProducts)),
            ]);

        let markup = to_markup(&view).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 2);
        match &markup.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "back_to_main"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn oversized_and_invalid_buttons_are_dropped() {
        let view = View::new()
            .button(Button::callback("Long", Intent::ShowProduct("x".repeat(80))))
            .button(Button::url("Broken", "not a url"));
        assert!(to_markup(&view).is_none());
    }

    #[test]
    fn view_without_buttons_has_no_markup() {
        assert!(to_markup(&View::new().text("hi")).is_none());
    }
}
