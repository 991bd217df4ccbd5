use super::outcome::SubmissionOutcome;

/// Result panel lifecycle:
///
/// Hidden --submit--> Rendering --settle--> Shown(outcome) --clear--> Hidden
///
/// The panel is rebuilt wholesale on every submission; there is no
/// incremental patching and no separate loading indicator while Rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Hidden,
    Rendering,
    Shown(SubmissionOutcome),
}

impl PanelState {
    /// A submission begins: the container is revealed with cleared content.
    pub fn submit(&mut self) {
        *self = PanelState::Rendering;
    }

    /// A submission finished, one way or another.
    pub fn settle(&mut self, outcome: SubmissionOutcome) {
        *self = PanelState::Shown(outcome);
    }

    /// Back to hidden. Valid from every state, any number of times.
    pub fn clear(&mut self) {
        *self = PanelState::Hidden;
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, PanelState::Hidden)
    }

    /// CSS classes before the deferred `show` class is applied. Only a
    /// successful result gets the `result-box` styling.
    pub fn base_classes(&self) -> &'static str {
        match self {
            PanelState::Shown(SubmissionOutcome::Success(_)) => "fade result-box",
            _ => "fade",
        }
    }

    /// Inline display override; the container stays in the layout once a
    /// submission starts, cleared only by the clear action.
    pub fn display_style(&self) -> &'static str {
        if self.is_hidden() { "none" } else { "" }
    }
}
