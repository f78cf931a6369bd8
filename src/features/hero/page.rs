//! Hero Page
//!
//! The dark opening band: headline, subtitle, call to action.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::rich_text::RichText;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Hero section
pub struct HeroPage {
    entities: AppEntities,
}

impl HeroPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for HeroPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale.read(cx);
        let title = locale.text("heroTitle").to_string();
        let subtitle = locale.text("heroSubtitle").to_string();
        let cta = locale.text("heroCta").to_string();
        let entities = self.entities.clone();

        div()
            .w_full()
            .bg(FlashColors::hero_bg())
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .px_8()
            .py_16()
            .child(
                div()
                    .text_size(px(Typography::TEXT_4XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(FlashColors::text_light())
                    .text_center()
                    .child(RichText::new(title)),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(FlashColors::text_muted())
                    .text_center()
                    .child(RichText::new(subtitle)),
            )
            .child(
                Button::primary("hero-cta", cta)
                    .size(ButtonSize::Large)
                    .on_click(move |_event, _window, cx| {
                        entities.nav.update(cx, |nav, cx| {
                            nav.go_to(Section::Income);
                            cx.notify();
                        });
                    }),
            )
    }
}
