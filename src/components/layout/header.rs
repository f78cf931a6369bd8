//! Header Component
//!
//! Fixed page header with the logo, section nav links, the collapsed-menu
//! toggle for narrow windows, and the language dropdown.

use gpui::{
    div, img, prelude::*, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    MouseDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    Window,
};
use gpui_component::Icon;

use crate::app::application::apply_language;
use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::assets::CustomIconName;
use crate::constants::{COMPACT_NAV_BREAKPOINT, HEADER_HEIGHT};
use crate::i18n::Lang;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        // Observe menu/dropdown changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_link(&self, section: Section, cx: &Context<Self>) -> impl IntoElement {
        let label = SharedString::from(
            self.entities
                .locale
                .read(cx)
                .text(section.title_key())
                .to_string(),
        );
        let entities = self.entities.clone();

        div()
            .id(SharedString::from(format!("nav-{:?}", section)))
            .px_2()
            .py_1()
            .text_size(px(Typography::TEXT_SM))
            .text_color(FlashColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.text_color(FlashColors::indigo()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.go_to(section);
                    cx.notify();
                });
            })
            .child(label)
    }

    fn render_lang_option(&self, option: Lang) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .id(SharedString::from(format!("lang-option-{}", option.code())))
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .cursor_pointer()
            .hover(|s| s.bg(FlashColors::menu_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.close_lang_menu();
                    cx.notify();
                });
                apply_language(&entities, option, cx);
            })
            .child(img(option.flag_asset()).w(px(20.0)).h(px(14.0)).rounded_sm())
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(FlashColors::text_primary())
                    .child(option.button_label()),
            )
    }

    fn render_lang_dropdown(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let lang = self.entities.locale.read(cx).lang();
        let open = self.entities.nav.read(cx).lang_menu_open();
        let entities = self.entities.clone();

        let options: Vec<_> = Lang::all()
            .iter()
            .map(|option| self.render_lang_option(*option))
            .collect();
        let dismiss = cx.listener(|this: &mut Self, _event: &MouseDownEvent, _window, cx| {
            this.entities.nav.update(cx, |nav, cx| {
                nav.close_lang_menu();
                cx.notify();
            });
        });

        div()
            .id("lang-dropdown")
            .relative()
            // Presses outside the trigger and menu region fold the menu away
            .when(open, move |el| el.on_mouse_down_out(dismiss))
            .child(
                div()
                    .id("lang-dropdown-btn")
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(FlashColors::border())
                    .cursor_pointer()
                    .hover(|s| s.bg(FlashColors::menu_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.nav.update(cx, |nav, cx| {
                            nav.toggle_lang_menu();
                            cx.notify();
                        });
                    })
                    .child(img(lang.flag_asset()).w(px(20.0)).h(px(14.0)).rounded_sm())
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(FlashColors::text_primary())
                            .child(lang.button_label()),
                    )
                    .child(
                        div()
                            .size(px(14.0))
                            .text_color(FlashColors::text_muted())
                            .child(Icon::from(CustomIconName::ChevronDown)),
                    ),
            )
            .when(open, move |el| {
                el.child(
                    div()
                        .id("lang-dropdown-menu")
                        .absolute()
                        .top(px(36.0))
                        .right_0()
                        .w(px(176.0))
                        .bg(FlashColors::menu_bg())
                        .border_1()
                        .border_color(FlashColors::border())
                        .rounded_md()
                        .py_1()
                        .flex()
                        .flex_col()
                        .children(options),
                )
            })
    }
}

impl Render for Header {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let compact = window.viewport_size().width < px(COMPACT_NAV_BREAKPOINT);
        let menu_entities = self.entities.clone();

        let nav_links: Vec<_> = if compact {
            Vec::new()
        } else {
            Section::nav()
                .iter()
                .map(|section| self.render_nav_link(*section, cx))
                .collect()
        };

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(FlashColors::header_bg())
            .border_b_1()
            .border_color(FlashColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo mark and wordmark
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(FlashColors::indigo())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(FlashColors::text_light())
                            .child(Icon::from(CustomIconName::Bolt)),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(FlashColors::text_primary())
                            .child("FlashMint"),
                    ),
            )
            // Right side: nav links (wide) or menu toggle (narrow), plus the
            // language dropdown
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .when(!compact, move |el| {
                        el.child(div().flex().items_center().gap_1().children(nav_links))
                    })
                    .child(self.render_lang_dropdown(cx))
                    .when(compact, move |el| {
                        el.child(
                            div()
                                .id("mobile-menu-button")
                                .size(px(32.0))
                                .rounded_md()
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(FlashColors::text_secondary())
                                .cursor_pointer()
                                .hover(|s| s.bg(FlashColors::menu_hover()))
                                .on_click(move |_event: &ClickEvent, _window, cx| {
                                    menu_entities.nav.update(cx, |nav, cx| {
                                        nav.toggle_menu();
                                        cx.notify();
                                    });
                                })
                                .child(Icon::from(CustomIconName::Menu)),
                        )
                    }),
            )
    }
}
