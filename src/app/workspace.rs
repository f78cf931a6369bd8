//! Workspace - Main Shell with Layout and Scroll
//!
//! The workspace holds the header and the scrollable column of sections,
//! drives the eased scroll-to-section animation, and keeps the window
//! title in step with the localized app title.

use gpui::{
    div, point, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, ScrollHandle,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::nav_menu::NavMenu;
use crate::constants::{DISPLAY_FONT, SCROLL_EASE, SCROLL_SNAP_EPSILON};
use crate::features::about::page::AboutPage;
use crate::features::hero::page::HeroPage;
use crate::features::income::page::IncomePage;
use crate::features::roadmap::page::RoadmapPage;
use crate::features::tokenomics::page::TokenomicsPage;
use crate::theme::colors::FlashColors;
use crate::theme::typography::Typography;

/// Main workspace containing the page layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    nav_menu: Entity<NavMenu>,
    hero: Entity<HeroPage>,
    about: Entity<AboutPage>,
    tokenomics: Entity<TokenomicsPage>,
    income: Entity<IncomePage>,
    roadmap: Entity<RoadmapPage>,
    scroll_handle: ScrollHandle,
    scroll_target: Option<usize>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Create layout components and section views
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let nav_menu = cx.new(|cx| NavMenu::new(entities.clone(), cx));
        let hero = cx.new(|cx| HeroPage::new(entities.clone(), cx));
        let about = cx.new(|cx| AboutPage::new(entities.clone(), cx));
        let tokenomics = cx.new(|cx| TokenomicsPage::new(entities.clone(), cx));
        let income = cx.new(|cx| IncomePage::new(entities.clone(), cx));
        let roadmap = cx.new(|cx| RoadmapPage::new(entities.clone(), cx));

        // Window title and footer follow the locale
        cx.observe(&entities.locale, |_this, _, cx| cx.notify())
            .detach();

        // Pick up scroll requests and menu visibility from the nav state
        cx.observe(&entities.nav, |this: &mut Self, nav, cx| {
            if let Some(section) = nav.update(cx, |nav, _| nav.take_scroll_target()) {
                this.scroll_target = Some(section.scroll_index());
            }
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            nav_menu,
            hero,
            about,
            tokenomics,
            income,
            roadmap,
            scroll_handle: ScrollHandle::new(),
            scroll_target: None,
        }
    }

    /// One easing step toward the pending section. Re-renders every frame
    /// until the section top reaches the viewport top, then stops.
    fn step_scroll(&mut self, cx: &mut Context<Self>) {
        let Some(index) = self.scroll_target else {
            return;
        };
        let Some(item) = self.scroll_handle.bounds_for_item(index) else {
            // Not painted yet; jump without easing.
            self.scroll_handle.scroll_to_item(index);
            self.scroll_target = None;
            return;
        };
        let container = self.scroll_handle.bounds();
        let current = self.scroll_handle.offset();
        let distance = f32::from(item.origin.y - container.origin.y);

        if distance.abs() <= SCROLL_SNAP_EPSILON {
            self.scroll_handle
                .set_offset(point(current.x, current.y - px(distance)));
            self.scroll_target = None;
            return;
        }

        self.scroll_handle
            .set_offset(point(current.x, current.y - px(distance * SCROLL_EASE)));
        cx.notify();
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = self.entities.locale.read(cx).title().to_string();
        if !title.is_empty() {
            window.set_window_title(&title);
        }

        self.step_scroll(cx);

        let menu_open = self.entities.nav.read(cx).menu_open();
        let footer = self.entities.locale.read(cx).text("footerText").to_string();
        let nav_menu = self.nav_menu.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(FlashColors::background())
            .font_family(DISPLAY_FONT)
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Page body; the collapsed nav panel overlays it when open
                div()
                    .flex_1()
                    .relative()
                    .overflow_hidden()
                    .child(
                        div()
                            .id("page-scroll")
                            .size_full()
                            .overflow_y_scroll()
                            .track_scroll(&self.scroll_handle)
                            .flex()
                            .flex_col()
                            .child(self.hero.clone())
                            .child(self.about.clone())
                            .child(self.tokenomics.clone())
                            .child(self.income.clone())
                            .child(self.roadmap.clone())
                            .child(
                                div()
                                    .w_full()
                                    .py_6()
                                    .flex()
                                    .justify_center()
                                    .text_size(px(Typography::TEXT_XS))
                                    .text_color(FlashColors::text_muted())
                                    .child(footer),
                            ),
                    )
                    .when(menu_open, move |el| el.child(nav_menu)),
            )
    }
}
