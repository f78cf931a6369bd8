//! RichText Component
//!
//! Renders catalog text through the minimal markup transform: `**bold**`
//! segments become bold spans and `\n` markers stack lines. Plain strings
//! pass through untouched.

use gpui::{
    div, prelude::*, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, Styled,
    Window,
};

use crate::i18n::rich;

/// Localized text with optional markup
#[derive(IntoElement)]
pub struct RichText {
    text: String,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for RichText {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if !rich::is_rich(&self.text) {
            return div().child(self.text).into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rich::parse_lines(&self.text).into_iter().map(|line| {
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .children(line.into_iter().map(render_span))
            }))
            .into_any_element()
    }
}

fn render_span(span: rich::Span) -> AnyElement {
    let element = div().child(span.text);
    if span.bold {
        element.font_weight(FontWeight::BOLD).into_any_element()
    } else {
        element.into_any_element()
    }
}
