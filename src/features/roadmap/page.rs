//! Roadmap Page
//!
//! Four localized phases, in order.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::rich_text::RichText;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Roadmap section
pub struct RoadmapPage {
    entities: AppEntities,
}

impl RoadmapPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_phase(&self, text: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_3()
            .child(div().size(px(8.0)).rounded_full().bg(FlashColors::indigo()))
            .child(
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(FlashColors::text_secondary())
                    .child(RichText::new(text)),
            )
    }
}

impl Render for RoadmapPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale.read(cx);
        let title = locale.text("roadmapTitle").to_string();
        let phases: Vec<String> = (1..=4)
            .map(|i| locale.text(&format!("roadmapPhase{i}")).to_string())
            .collect();

        div()
            .w_full()
            .bg(FlashColors::background())
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
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
                    .flex()
                    .flex_col()
                    .gap_4()
                    .children(phases.into_iter().map(|text| self.render_phase(text))),
            )
    }
}
