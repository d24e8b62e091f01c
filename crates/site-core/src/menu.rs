//! Mobile menu open/closed state machine.

/// Events that can change the menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the hamburger toggle.
    Toggle,
    /// Click on a link inside the menu panel.
    LinkClick,
    /// Click anywhere outside both the toggle and the panel.
    OutsideClick,
}

/// Open/closed state. Starts closed; `apply` folds one event into the
/// state and returns whether the menu is now open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) -> bool {
        self.open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::LinkClick | MenuEvent::OutsideClick => false,
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut state = MenuState::default();
        assert!(state.apply(MenuEvent::Toggle));
        assert!(!state.apply(MenuEvent::Toggle));
    }

    #[test]
    fn link_and_outside_clicks_always_close() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        assert!(!state.apply(MenuEvent::LinkClick));

        state.apply(MenuEvent::Toggle);
        assert!(!state.apply(MenuEvent::OutsideClick));

        // Idempotent when already closed.
        assert!(!state.apply(MenuEvent::LinkClick));
        assert!(!state.apply(MenuEvent::OutsideClick));
    }

    #[test]
    fn folding_a_sequence_matches_per_event_effects() {
        use MenuEvent::*;
        let sequence = [Toggle, Toggle, Toggle, LinkClick, Toggle, OutsideClick, Toggle];
        let mut state = MenuState::default();
        let mut expected = false;
        for event in sequence {
            expected = match event {
                Toggle => !expected,
                LinkClick | OutsideClick => false,
            };
            assert_eq!(state.apply(event), expected);
        }
        assert!(state.is_open());
    }
}
