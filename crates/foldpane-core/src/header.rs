//! Toggle header model: title, fold state and indicator.

/// Expand/collapse state of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldState {
    #[default]
    Collapsed,
    Expanded,
}

impl FoldState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            FoldState::Expanded
        } else {
            FoldState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == FoldState::Expanded
    }

    /// The other state. Toggling is valid from either state.
    pub fn toggled(self) -> Self {
        match self {
            FoldState::Collapsed => FoldState::Expanded,
            FoldState::Expanded => FoldState::Collapsed,
        }
    }
}

/// Directional glyph shown beside the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Pointing right; content hidden.
    Closed,
    /// Pointing down; content shown.
    Open,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Closed => "▶",
            Indicator::Open => "▼",
        }
    }
}

impl From<FoldState> for Indicator {
    fn from(state: FoldState) -> Self {
        match state {
            FoldState::Collapsed => Indicator::Closed,
            FoldState::Expanded => Indicator::Open,
        }
    }
}

/// The checkable title bar. Owns the authoritative fold state.
#[derive(Debug, Clone, Default)]
pub struct ToggleHeader {
    title: String,
    state: FoldState,
}

impl ToggleHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: FoldState::Collapsed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn state(&self) -> FoldState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_expanded()
    }

    /// Indicator for the current state. Always in sync with [`Self::state`].
    pub fn indicator(&self) -> Indicator {
        self.state.into()
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> FoldState {
        self.state = self.state.toggled();
        self.state
    }

    /// Set the checked state. Returns `true` if it changed.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        let state = FoldState::from_expanded(checked);
        if state == self.state {
            return false;
        }
        self.state = state;
        true
    }
}
