use crate::model::{ShellState, Theme, UiLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    SetSidebarOpen { open: bool },
    ToggleSidebar,
    SetTheme { theme: Theme },
    ToggleTheme,
    SetUiLanguage { language: UiLanguage },
    ToggleUiLanguage,
    Hydrate { state: ShellState },
}

/// Applies `action` to `state`, returning whether any field changed.
pub fn reduce_shell(state: &mut ShellState, action: ShellAction) -> bool {
    let previous = *state;

    match action {
        ShellAction::SetSidebarOpen { open } => state.sidebar_open = open,
        ShellAction::ToggleSidebar => state.sidebar_open = !state.sidebar_open,
        ShellAction::SetTheme { theme } => state.theme = theme,
        ShellAction::ToggleTheme => state.theme = state.theme.toggled(),
        ShellAction::SetUiLanguage { language } => state.ui_language = language,
        ShellAction::ToggleUiLanguage => state.ui_language = state.ui_language.toggled(),
        ShellAction::Hydrate { state: next } => *state = next,
    }

    *state != previous
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn setting_the_current_value_reports_no_change() {
        let mut state = ShellState::default();
        assert!(!reduce_shell(
            &mut state,
            ShellAction::SetTheme {
                theme: Theme::Light
            }
        ));
        assert!(!reduce_shell(
            &mut state,
            ShellAction::SetSidebarOpen { open: true }
        ));
        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn toggles_touch_only_their_field() {
        let mut state = ShellState::default();

        assert!(reduce_shell(&mut state, ShellAction::ToggleTheme));
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.ui_language, UiLanguage::Zh);
        assert!(state.sidebar_open);

        assert!(reduce_shell(&mut state, ShellAction::ToggleUiLanguage));
        assert_eq!(state.ui_language, UiLanguage::En);
        assert_eq!(state.theme, Theme::Dark);

        assert!(reduce_shell(&mut state, ShellAction::ToggleSidebar));
        assert!(!state.sidebar_open);
    }

    #[test]
    fn hydrate_replaces_whole_state() {
        let mut state = ShellState::default();
        let next = ShellState {
            sidebar_open: false,
            theme: Theme::Dark,
            ui_language: UiLanguage::En,
        };
        assert!(reduce_shell(&mut state, ShellAction::Hydrate { state: next }));
        assert_eq!(state, next);
        assert!(!reduce_shell(&mut state, ShellAction::Hydrate { state: next }));
    }
}
