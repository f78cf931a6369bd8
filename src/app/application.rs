//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, point, px, size, Action, App, AppContext, Application, Bounds, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, warn};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::i18n::Lang;
use crate::utils::config_store::{WindowPlacement, WindowState};

actions!(flashmint, [Quit]);

/// Language selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    Th,
    En,
    Zh,
}

impl From<LocaleAction> for Lang {
    fn from(action: LocaleAction) -> Self {
        match action {
            LocaleAction::Th => Lang::Th,
            LocaleAction::En => Lang::En,
            LocaleAction::Zh => Lang::Zh,
        }
    }
}

/// Switch the page language. The locale entity rewrites its text map; the
/// tier and burn states follow through their observers, and the tokenomics
/// page tears down and rebuilds both charts.
pub fn apply_language(entities: &AppEntities, lang: Lang, cx: &mut App) {
    entities.locale.update(cx, |locale, cx| {
        locale.set_language(lang);
        cx.notify();
    });
}

/// Run the FlashMint GUI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        {
            let entities = entities.clone();
            cx.on_action(move |action: &LocaleAction, cx: &mut App| {
                apply_language(&entities, (*action).into(), cx);
            });
        }

        // First render pass: apply the default language so the text map,
        // dropdown label, and both charts start populated.
        apply_language(&entities, Lang::default(), cx);

        let window_state = WindowState::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load window state");
            WindowState::default()
        });
        let bounds = match window_state.placement {
            Some(placement) => Bounds {
                origin: point(px(placement.x), px(placement.y)),
                size: size(px(placement.width), px(placement.height)),
            },
            None => Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            ),
        };

        let title = entities.locale.read(cx).title().to_string();
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let window_entities = entities.clone();
        let opened = cx.open_window(window_options, move |window, cx| {
            // Remember where the window sits for the next run. The language
            // is deliberately not part of the saved state.
            window.on_window_should_close(cx, |window, _cx| {
                let bounds = window.bounds();
                let state = WindowState {
                    placement: Some(WindowPlacement {
                        x: f32::from(bounds.origin.x),
                        y: f32::from(bounds.origin.y),
                        width: f32::from(bounds.size.width),
                        height: f32::from(bounds.size.height),
                    }),
                };
                if let Err(e) = state.save() {
                    warn!(error = %e, "Failed to save window state");
                }
                true
            });
            cx.new(|cx| Workspace::new(window_entities.clone(), cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
