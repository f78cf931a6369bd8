//! NavMenu Component
//!
//! The collapsed navigation panel shown under the header on narrow
//! windows. Clicking a link scrolls to its section and folds the panel
//! away.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Collapsed nav panel
pub struct NavMenu {
    entities: AppEntities,
}

impl NavMenu {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_item(&self, section: Section, cx: &Context<Self>) -> impl IntoElement {
        let label = SharedString::from(
            self.entities
                .locale
                .read(cx)
                .text(section.title_key())
                .to_string(),
        );
        let entities = self.entities.clone();

        div()
            .id(SharedString::from(format!("menu-{:?}", section)))
            .w_full()
            .px_4()
            .py_3()
            .text_size(px(Typography::TEXT_BASE))
            .text_color(FlashColors::text_primary())
            .cursor_pointer()
            .hover(|s| s.bg(FlashColors::menu_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.go_to(section);
                    cx.notify();
                });
            })
            .child(label)
    }
}

impl Render for NavMenu {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .absolute()
            .top_0()
            .left_0()
            .right_0()
            .bg(FlashColors::menu_bg())
            .border_b_1()
            .border_color(FlashColors::border())
            .flex()
            .flex_col()
            .py_2()
            .children(
                Section::nav()
                    .iter()
                    .map(|section| self.render_item(*section, cx)),
            )
    }
}
