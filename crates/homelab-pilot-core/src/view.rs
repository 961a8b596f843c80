//! View state machine
//!
//! The dashboard is either showing the service list, showing the detail of
//! exactly one service, or terminated. Keys are routed by state before the
//! controller applies any side effect, so the routing table can be checked
//! on its own.

/// Which screen is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Service list
    #[default]
    Normal,
    /// Detail view of the named service
    Detail(String),
    /// Quit was requested; absorbs all further events
    Terminated,
}

impl ViewState {
    pub fn is_normal(&self) -> bool {
        matches!(self, ViewState::Normal)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, ViewState::Detail(_))
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, ViewState::Terminated)
    }

    /// Service shown in the detail view, if any
    pub fn detail_target(&self) -> Option<&str> {
        match self {
            ViewState::Detail(name) => Some(name),
            _ => None,
        }
    }

    /// Decide what a key means in this state
    pub fn route(&self, key: Key) -> Route {
        match (self, key) {
            (ViewState::Terminated, _) => Route::Ignore,
            (_, Key::Quit) => Route::Quit,

            (ViewState::Normal, Key::Up) => Route::MoveCursor(Step::Up),
            (ViewState::Normal, Key::Down) => Route::MoveCursor(Step::Down),
            (ViewState::Normal, Key::Select) => Route::EnterDetail,
            (ViewState::Normal, Key::Escape | Key::Refresh) => Route::Ignore,

            (ViewState::Detail(_), Key::Escape) => Route::ExitDetail,
            (ViewState::Detail(_), Key::Refresh) => Route::RefreshDetail,
            (ViewState::Detail(_), Key::Up) => Route::ScrollDetail(Step::Up),
            (ViewState::Detail(_), Key::Down) => Route::ScrollDetail(Step::Down),
            (ViewState::Detail(_), Key::Select) => Route::Ignore,
        }
    }
}

/// Logical keys the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Select,
    Escape,
    Quit,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Effect of a key in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MoveCursor(Step),
    EnterDetail,
    ExitDetail,
    ScrollDetail(Step),
    RefreshDetail,
    Quit,
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [Key; 6] = [
        Key::Up,
        Key::Down,
        Key::Select,
        Key::Escape,
        Key::Quit,
        Key::Refresh,
    ];

    #[test]
    fn test_normal_routes() {
        let state = ViewState::Normal;
        assert_eq!(state.route(Key::Up), Route::MoveCursor(Step::Up));
        assert_eq!(state.route(Key::Down), Route::MoveCursor(Step::Down));
        assert_eq!(state.route(Key::Select), Route::EnterDetail);
        assert_eq!(state.route(Key::Escape), Route::Ignore);
        assert_eq!(state.route(Key::Refresh), Route::Ignore);
    }

    #[test]
    fn test_detail_never_moves_list_cursor() {
        let state = ViewState::Detail("Sonarr".to_string());
        for key in ALL_KEYS {
            assert!(!matches!(state.route(key), Route::MoveCursor(_) | Route::EnterDetail));
        }
        assert_eq!(state.route(Key::Escape), Route::ExitDetail);
        assert_eq!(state.route(Key::Refresh), Route::RefreshDetail);
    }

    #[test]
    fn test_quit_from_any_live_state() {
        assert_eq!(ViewState::Normal.route(Key::Quit), Route::Quit);
        assert_eq!(
            ViewState::Detail("Pi-hole".to_string()).route(Key::Quit),
            Route::Quit
        );
    }

    #[test]
    fn test_terminated_is_absorbing() {
        for key in ALL_KEYS {
            assert_eq!(ViewState::Terminated.route(key), Route::Ignore);
        }
    }

    #[test]
    fn test_detail_target() {
        assert_eq!(
            ViewState::Detail("Sonarr".into()).detail_target(),
            Some("Sonarr")
        );
        assert!(ViewState::Normal.detail_target().is_none());
        assert!(ViewState::default().is_normal());
    }
}
