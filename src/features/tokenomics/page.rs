//! Tokenomics Page
//!
//! The charts section: distribution doughnut and burn projection. Each
//! chart lives in a slot that tears the previous view down before a new
//! one is built, so a language switch or simulate click can never leave
//! two charts stacked on one surface.

use gpui::{
    div, prelude::*, px, Context, Entity, FontWeight, IntoElement, ParentElement, Render, Styled,
    Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::components::charts::bars::BarChart;
use crate::components::charts::doughnut::DoughnutChart;
use crate::components::charts::slot::ChartSlot;
use crate::components::primitives::button::Button;
use crate::components::primitives::rich_text::RichText;
use crate::constants::DISTRIBUTION_SPLIT;
use crate::features::tokenomics::controller::TokenomicsController;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Tokenomics section
pub struct TokenomicsPage {
    entities: AppEntities,
    controller: TokenomicsController,
    distribution_slot: ChartSlot<Entity<DoughnutChart>>,
    burn_slot: ChartSlot<Entity<BarChart>>,
}

impl TokenomicsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // A language switch rebuilds both charts; a burn update only the bars.
        cx.observe(&entities.locale, |this, _, cx| {
            this.rebuild_distribution(cx);
            this.rebuild_burn(cx);
            cx.notify();
        })
        .detach();

        cx.observe(&entities.burn, |this, _, cx| {
            this.rebuild_burn(cx);
            cx.notify();
        })
        .detach();

        let controller = TokenomicsController::new(entities.clone());
        let mut page = Self {
            entities,
            controller,
            distribution_slot: ChartSlot::new(),
            burn_slot: ChartSlot::new(),
        };
        page.rebuild_distribution(cx);
        page.rebuild_burn(cx);
        page
    }

    fn rebuild_distribution(&mut self, cx: &mut Context<Self>) {
        let labels: Vec<String> = {
            let locale = self.entities.locale.read(cx);
            (1..=4)
                .map(|i| locale.text(&format!("distributionLabel{i}")).to_string())
                .collect()
        };
        let values = DISTRIBUTION_SPLIT.to_vec();
        self.distribution_slot
            .replace(|| cx.new(|_| DoughnutChart::new(labels, values)));
    }

    fn rebuild_burn(&mut self, cx: &mut Context<Self>) {
        let (series_label, tooltip_label, lang) = {
            let locale = self.entities.locale.read(cx);
            (
                locale.text("burnLabel").to_string(),
                locale.text("burnTooltipText").to_string(),
                locale.lang(),
            )
        };
        let series = self.entities.burn.read(cx).series().clone();
        self.burn_slot.replace(|| {
            cx.new(|_| BarChart::new(series.labels, series.values, series_label, tooltip_label, lang))
        });
    }

    fn render_card_title(&self, icon: Option<Icon>, title: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .when_some(icon, |el, icon| {
                el.child(
                    div()
                        .size(px(18.0))
                        .text_color(FlashColors::burn_border())
                        .child(icon),
                )
            })
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(FlashColors::text_primary())
                    .child(title),
            )
    }
}

impl Render for TokenomicsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale.read(cx);
        let title = locale.text("tokenomicsTitle").to_string();
        let distribution_title = locale.text("distributionTitle").to_string();
        let burn_title = locale.text("burnTitle").to_string();
        let burn_description = locale.text("burnDescription").to_string();
        let simulate_label = locale.text("simulateBurn").to_string();
        let controller = self.controller.clone();

        div()
            .w_full()
            .bg(FlashColors::background())
            .flex()
            .flex_col()
            .items_center()
            .gap_8()
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
                    .flex_row()
                    .flex_wrap()
                    .justify_center()
                    .gap_6()
                    .child(
                        div()
                            .w(px(380.0))
                            .bg(FlashColors::card_bg())
                            .border_1()
                            .border_color(FlashColors::border())
                            .rounded_lg()
                            .p_6()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .child(self.render_card_title(None, distribution_title))
                            .children(self.distribution_slot.get().cloned()),
                    )
                    .child(
                        div()
                            .w(px(460.0))
                            .bg(FlashColors::card_bg())
                            .border_1()
                            .border_color(FlashColors::border())
                            .rounded_lg()
                            .p_6()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .child(self.render_card_title(
                                Some(Icon::from(CustomIconName::Flame)),
                                burn_title,
                            ))
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(FlashColors::text_secondary())
                                    .child(RichText::new(burn_description)),
                            )
                            .children(self.burn_slot.get().cloned())
                            .child(
                                div().flex().justify_center().child(
                                    Button::primary("simulate-burn", simulate_label).on_click(
                                        move |_event, _window, cx| {
                                            controller.simulate(cx);
                                        },
                                    ),
                                ),
                            ),
                    ),
            )
    }
}
