// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel-agnostic screens produced by the storefront.
//!
//! A [`View`] is a message body made of styled spans, an optional photo, and
//! rows of buttons. Channel adapters decide how spans are escaped and how
//! buttons are rendered.

use crate::intent::Intent;

/// One styled run of text in a view body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Link { text: String, url: String },
}

/// What happens when a button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends the intent back to the bot as callback data.
    Callback(Intent),
    /// Opens an external URL.
    Url(String),
}

/// A labelled inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(label: impl Into<String>, intent: Intent) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(intent),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// The intent carried by a callback button.
    pub fn intent(&self) -> Option<&Intent> {
        match &self.action {
            ButtonAction::Callback(intent) => Some(intent),
            ButtonAction::Url(_) => None,
        }
    }
}

/// A rendered screen: body text, optional photo, and a button keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub body: Vec<Span>,
    pub photo: Option<String>,
    pub rows: Vec<Vec<Button>>,
    /// Whether the channel may expand link previews.
    pub link_preview: bool,
}

impl View {
    pub fn new() -> Self {
        Self {
            link_preview: true,
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body.push(Span::Text(text.into()));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.body.push(Span::Bold(text.into()));
        self
    }

    pub fn link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.body.push(Span::Link {
            text: text.into(),
            url: url.into(),
        });
        self
    }

    pub fn photo(mut self, url: Option<String>) -> Self {
        self.photo = url;
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.link_preview = false;
        self
    }

    /// Appends a row of buttons.
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        self.rows.push(buttons);
        self
    }

    /// Appends a row holding a single button.
    pub fn button(self, button: Button) -> Self {
        self.row(vec![button])
    }

    /// The body with styling dropped. Links render as their text.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(|span| match span {
                Span::Text(t) | Span::Bold(t) => t.as_str(),
                Span::Link { text, .. } => text.as_str(),
            })
            .collect()
    }

    /// All buttons, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// How a reply relates to the message whose button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Edit the pressed message in place.
    Edit,
    /// Send fresh messages, then delete the pressed one.
    Replace,
}

/// One or more views answering a single interaction, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub delivery: Delivery,
    pub views: Vec<View>,
}

impl Reply {
    pub fn edit(view: View) -> Self {
        Self {
            delivery: Delivery::Edit,
            views: vec![view],
        }
    }

    pub fn replace(view: View) -> Self {
        Self {
            delivery: Delivery::Replace,
            views: vec![view],
        }
    }

    /// Appends a follow-up view, if any.
    pub fn then(mut self, view: Option<View>) -> Self {
        self.views.extend(view);
        self
    }

    /// The first view to send.
    pub fn primary(&self) -> Option<&View> {
        self.views.first()
    }
}
