//! NavState - Page Chrome State
//!
//! Visibility booleans for the collapsed nav menu and the language
//! dropdown, plus the pending scroll-to-section request.

use crate::app::navigation::Section;

/// State for page chrome
#[derive(Debug, Clone, Default)]
pub struct NavState {
    menu_open: bool,
    lang_menu_open: bool,
    scroll_target: Option<Section>,
}

impl NavState {
    /// Whether the collapsed nav menu is open
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the language dropdown is open
    pub fn lang_menu_open(&self) -> bool {
        self.lang_menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_lang_menu(&mut self) {
        self.lang_menu_open = !self.lang_menu_open;
    }

    pub fn close_lang_menu(&mut self) {
        self.lang_menu_open = false;
    }

    /// Nav link click: remember where to scroll and fold the menu away
    pub fn go_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.menu_open = false;
    }

    /// Consume the pending scroll request, if any
    pub fn take_scroll_target(&mut self) -> Option<Section> {
        self.scroll_target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_flip() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());

        state.toggle_lang_menu();
        assert!(state.lang_menu_open());
        state.close_lang_menu();
        assert!(!state.lang_menu_open());
    }

    #[test]
    fn test_nav_click_closes_menu_and_requests_scroll() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.go_to(Section::Income);
        assert!(!state.menu_open());
        assert_eq!(state.take_scroll_target(), Some(Section::Income));
        assert_eq!(state.take_scroll_target(), None);
    }
}
