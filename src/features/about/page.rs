//! About Page
//!
//! A short localized introduction to the project.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::rich_text::RichText;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// About section
pub struct AboutPage {
    entities: AppEntities,
}

impl AboutPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for AboutPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale.read(cx);
        let title = locale.text("aboutTitle").to_string();
        let body = locale.text("aboutBody").to_string();

        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .px_8()
            .py_12()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(FlashColors::text_primary())
                    .child(title),
            )
            .child(
                div()
                    .max_w(px(760.0))
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(FlashColors::text_secondary())
                    .text_center()
                    .child(RichText::new(body)),
            )
    }
}
