//! Bars - Burn Projection Chart
//!
//! The burn series as labeled bars with millions-scale y ticks, grid lines,
//! and a hover readout. Rebuilt whenever the series or the language change.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::components::charts::geometry::{bar_fractions, tick_values, value_range};
use crate::constants::{BURN_PLOT_HEIGHT, TOKEN_SYMBOL};
use crate::i18n::Lang;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_millions, format_whole};

const TICK_COUNT: usize = 5;
const Y_AXIS_WIDTH: f32 = 56.0;

/// The supply burn bar chart
pub struct BarChart {
    labels: Vec<String>,
    values: Vec<f64>,
    series_label: String,
    tooltip_label: String,
    lang: Lang,
    hovered: Option<usize>,
}

impl BarChart {
    pub fn new(
        labels: Vec<String>,
        values: Vec<f64>,
        series_label: String,
        tooltip_label: String,
        lang: Lang,
    ) -> Self {
        Self {
            labels,
            values,
            series_label,
            tooltip_label,
            lang,
            hovered: None,
        }
    }

    fn render_bar(
        &self,
        index: usize,
        fraction: f32,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let height = (fraction * BURN_PLOT_HEIGHT).max(2.0);
        div()
            .flex_1()
            .flex()
            .flex_col()
            .justify_end()
            .h_full()
            .child(
                div()
                    .id(("burn-bar", index))
                    .w_full()
                    .h(px(height))
                    .bg(FlashColors::burn_fill())
                    .border_1()
                    .border_color(FlashColors::burn_border())
                    .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
                        if *hovered {
                            this.hovered = Some(index);
                            cx.notify();
                        } else if this.hovered == Some(index) {
                            this.hovered = None;
                            cx.notify();
                        }
                    })),
            )
    }
}

impl Render for BarChart {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (min, max) = value_range(&self.values, false);
        let fractions = bar_fractions(&self.values, min, max);
        let ticks = tick_values(min, max, TICK_COUNT);
        let tick_fractions = bar_fractions(&ticks, min, max);
        let hover_line = self.hovered.map(|i| {
            format!(
                "{}: {} {}",
                self.tooltip_label,
                format_whole(self.values[i], self.lang),
                TOKEN_SYMBOL
            )
        });

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                // Series caption on the left, hover readout on the right
                div()
                    .h(px(24.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(FlashColors::chart_text())
                            .child(self.series_label.clone()),
                    )
                    .when_some(hover_line, |el, line| {
                        el.child(
                            div()
                                .px_2()
                                .py_1()
                                .rounded_md()
                                .bg(FlashColors::tooltip_bg())
                                .text_color(FlashColors::text_light())
                                .text_size(px(Typography::TEXT_XS))
                                .child(line),
                        )
                    }),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(
                        // Y axis: millions, top-down
                        div()
                            .w(px(Y_AXIS_WIDTH))
                            .h(px(BURN_PLOT_HEIGHT))
                            .flex()
                            .flex_col()
                            .justify_between()
                            .items_end()
                            .children(ticks.iter().rev().map(|tick| {
                                div()
                                    .text_size(px(Typography::TEXT_XS))
                                    .text_color(FlashColors::chart_text())
                                    .child(format_millions(*tick, self.lang))
                            })),
                    )
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .relative()
                                    .h(px(BURN_PLOT_HEIGHT))
                                    .children(tick_fractions.iter().map(|fraction| {
                                        div()
                                            .absolute()
                                            .left_0()
                                            .right_0()
                                            .bottom(px(fraction * BURN_PLOT_HEIGHT))
                                            .h(px(1.0))
                                            .bg(FlashColors::chart_grid())
                                    }))
                                    .child(
                                        div()
                                            .absolute()
                                            .top_0()
                                            .bottom_0()
                                            .left_0()
                                            .right_0()
                                            .flex()
                                            .flex_row()
                                            .items_end()
                                            .gap_1()
                                            .px_1()
                                            .children(
                                                fractions.iter().enumerate().map(
                                                    |(index, fraction)| {
                                                        self.render_bar(index, *fraction, cx)
                                                    },
                                                ),
                                            ),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .gap_1()
                                    .px_1()
                                    .children(self.labels.iter().map(|label| {
                                        div()
                                            .flex_1()
                                            .text_center()
                                            .text_size(px(Typography::TEXT_XS))
                                            .text_color(FlashColors::chart_text())
                                            .child(label.clone())
                                    })),
                            ),
                    ),
            )
    }
}
