//! Loading state for the detail pane
//!
//! The detail pane shows whatever snapshot is available while a fetch is
//! in flight, so loading, failure and data are tracked independently.

/// Data, loading flag and last error of an asynchronously fetched value
///
/// # Examples
///
/// ```
/// use homelab_pilot_core::async_state::AsyncState;
///
/// let mut state: AsyncState<Vec<String>> = AsyncState::new();
/// assert!(state.is_loading());
///
/// state.set_data(vec!["queries".to_string()]);
/// assert!(!state.is_loading());
/// assert!(state.data().is_some());
///
/// state.start_loading();
/// assert!(state.is_refreshing());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsyncState<T> {
    /// Create a state that is waiting for its first value
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// Create a state holding a value, not loading
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Loading while an older value is still on screen
    pub fn is_refreshing(&self) -> bool {
        self.loading && self.data.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Start a fetch, keeping the current value for display
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetched value and clear any error
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch; an older value stays available
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.loading = false;
    }

    /// Short status for a pane title
    pub fn status_text(&self) -> &'static str {
        if self.loading && self.data.is_none() {
            "loading"
        } else if self.loading {
            "refreshing"
        } else if self.error.is_some() {
            "error"
        } else if self.data.is_some() {
            "ready"
        } else {
            "empty"
        }
    }
}
