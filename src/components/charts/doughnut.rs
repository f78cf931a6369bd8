//! Doughnut - Token Distribution Chart
//!
//! Canvas-painted doughnut with the legend row underneath and a hover
//! readout in place of a tooltip. The view is rebuilt from scratch on every
//! language switch, so labels are fixed for its lifetime.

use gpui::{
    canvas, div, point, prelude::*, px, Bounds, Context, Hsla, IntoElement, MouseMoveEvent,
    ParentElement, Path, Pixels, Point, Render, Styled, Window,
};

use crate::components::charts::geometry::{slice_angles, slice_at, Slice};
use crate::constants::DOUGHNUT_SIZE;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Hole radius as a share of the outer radius
const CUTOUT: f32 = 0.5;
/// Angular gap between slices, letting the white border show through
const BORDER_GAP: f32 = 0.02;
/// Arc step in radians when flattening a slice into a path
const ARC_STEP: f32 = 0.05;

/// The token distribution doughnut
pub struct DoughnutChart {
    labels: Vec<String>,
    values: Vec<f64>,
    slices: Vec<Slice>,
    hovered: Option<usize>,
    painted: Bounds<Pixels>,
}

impl DoughnutChart {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let slices = slice_angles(&values);
        Self {
            labels,
            values,
            slices,
            hovered: None,
            painted: Bounds::default(),
        }
    }

    /// Slice under the pointer, if it sits inside the ring
    fn hit_test(&self, position: Point<Pixels>) -> Option<usize> {
        let center = self.painted.center();
        let dx = f32::from(position.x - center.x);
        let dy = f32::from(position.y - center.y);
        let outer = f32::from(self.painted.size.width.min(self.painted.size.height)) / 2.0;
        if outer <= 0.0 {
            return None;
        }
        let radius = (dx * dx + dy * dy).sqrt();
        if radius < outer * CUTOUT || radius > outer {
            return None;
        }
        slice_at(&self.slices, dy.atan2(dx))
    }

    fn render_legend_item(&self, index: usize) -> impl IntoElement {
        let color = FlashColors::distribution_slices()[index % 4];
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(div().size(px(10.0)).rounded_sm().bg(color))
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(FlashColors::chart_text())
                    .child(self.labels[index].clone()),
            )
    }
}

impl Render for DoughnutChart {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let slices = self.slices.clone();
        let hover_line = self
            .hovered
            .map(|i| format!("{}: {}%", self.labels[i], self.values[i]));

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_3()
            .child(
                // Hover readout, shaped like the web page's chart tooltip
                div().h(px(24.0)).flex().items_center().when_some(
                    hover_line,
                    |el, line| {
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
                    },
                ),
            )
            .child(
                div()
                    .id("distribution-doughnut")
                    .size(px(DOUGHNUT_SIZE))
                    .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _window, cx| {
                        let hovered = this.hit_test(event.position);
                        if hovered != this.hovered {
                            this.hovered = hovered;
                            cx.notify();
                        }
                    }))
                    .child(
                        canvas(
                            move |bounds, _window, cx| {
                                entity.update(cx, |chart, _| chart.painted = bounds);
                            },
                            move |bounds, _, window, _cx| {
                                let center = bounds.center();
                                let outer =
                                    f32::from(bounds.size.width.min(bounds.size.height)) / 2.0;
                                let inner = outer * CUTOUT;
                                let colors = FlashColors::distribution_slices();
                                for (i, slice) in slices.iter().enumerate() {
                                    let path = slice_path(center, outer, inner, *slice);
                                    window.paint_path(path, Hsla::from(colors[i % colors.len()]));
                                }
                            },
                        )
                        .size_full(),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap_x_4()
                    .gap_y_2()
                    .children((0..self.labels.len()).map(|i| self.render_legend_item(i))),
            )
    }
}

/// Flatten one slice into a closed ring-segment path
fn slice_path(center: Point<Pixels>, outer: f32, inner: f32, slice: Slice) -> Path<Pixels> {
    let start = slice.start + BORDER_GAP / 2.0;
    let end = (slice.end - BORDER_GAP / 2.0).max(start);
    let steps = (((end - start) / ARC_STEP).ceil() as usize).max(1);
    let at = |radius: f32, angle: f32| {
        point(
            center.x + px(radius * angle.cos()),
            center.y + px(radius * angle.sin()),
        )
    };

    let mut path = Path::new(at(outer, start));
    for i in 1..=steps {
        let angle = start + (end - start) * i as f32 / steps as f32;
        path.line_to(at(outer, angle));
    }
    for i in (0..=steps).rev() {
        let angle = start + (end - start) * i as f32 / steps as f32;
        path.line_to(at(inner, angle));
    }
    path
}
