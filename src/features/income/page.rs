//! Income Page
//!
//! The NFT tier selector: thirteen Flash levels, one active at a time,
//! with the cost/return readout underneath.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::tier::{NftTier, TIERS};
use crate::features::income::controller::IncomeController;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Income Engine section
pub struct IncomePage {
    entities: AppEntities,
    controller: IncomeController,
}

impl IncomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        cx.observe(&entities.tiers, |_this, _, cx| cx.notify())
            .detach();

        let controller = IncomeController::new(entities.clone());
        Self {
            entities,
            controller,
        }
    }

    fn render_tier_button(&self, tier: &'static NftTier, cx: &Context<Self>) -> impl IntoElement {
        let active = self.entities.tiers.read(cx).is_selected(tier.name);
        let controller = self.controller.clone();

        let (bg_color, text_color) = if active {
            (FlashColors::tier_active_bg(), FlashColors::tier_active_text())
        } else {
            (FlashColors::tier_idle_bg(), FlashColors::tier_idle_text())
        };

        div()
            .id(SharedString::from(format!("tier-{}", tier.name)))
            .px_4()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .hover(|s| s.opacity(0.85))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                controller.select_tier(tier.name, cx);
            })
            .child(tier.name)
    }

    fn render_stat_card(&self, label: String, value: String) -> impl IntoElement {
        div()
            .w(px(240.0))
            .bg(FlashColors::card_bg())
            .border_1()
            .border_color(FlashColors::border())
            .rounded_lg()
            .p_6()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(FlashColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(FlashColors::indigo())
                    .child(value),
            )
    }
}

impl Render for IncomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale.read(cx);
        let title = locale.text("incomeTitle").to_string();
        let subtitle = locale.text("incomeSubtitle").to_string();
        let hint = locale.text("selectTierHint").to_string();
        let cost_label = locale.text("nftCostLabel").to_string();
        let payout_label = locale.text("nftReturnLabel").to_string();

        let tiers = self.entities.tiers.read(cx);
        let cost_value = if tiers.cost_text().is_empty() {
            hint.clone()
        } else {
            tiers.cost_text().to_string()
        };
        let payout_value = if tiers.payout_text().is_empty() {
            hint
        } else {
            tiers.payout_text().to_string()
        };

        div()
            .w_full()
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
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(FlashColors::text_secondary())
                    .child(subtitle),
            )
            .child(
                div()
                    .max_w(px(720.0))
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .justify_center()
                    .gap_2()
                    .children(TIERS.iter().map(|tier| self.render_tier_button(tier, cx))),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .justify_center()
                    .gap_4()
                    .child(self.render_stat_card(cost_label, cost_value))
                    .child(self.render_stat_card(payout_label, payout_value)),
            )
    }
}
