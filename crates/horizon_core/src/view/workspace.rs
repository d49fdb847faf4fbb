//! The four period columns and horizontal focus between them.
//!
//! # Responsibility
//! - Own one panel per granularity, broadest on the left.
//! - Track which column holds input focus and move it left/right.
//! - Inject externally generated text into the focused editor through the
//!   same update path as keystrokes.

use crate::model::period::Period;
use crate::repo::goals::GoalsRepository;
use crate::storage::{GoalStore, StoreResult};
use crate::view::panel::PeriodPanel;

/// All period panels plus the horizontal focus position.
pub struct Workspace {
    panels: Vec<PeriodPanel>,
    focused: usize,
}

impl Workspace {
    /// Builds one panel per granularity; focus starts on the day column.
    pub fn new() -> Self {
        let panels: Vec<PeriodPanel> = Period::ALL.iter().map(|&p| PeriodPanel::new(p)).collect();
        let focused = panels.len() - 1;
        Self { panels, focused }
    }

    pub fn focused_period(&self) -> Period {
        self.panels[self.focused].period()
    }

    pub fn focused_panel(&mut self) -> &mut PeriodPanel {
        &mut self.panels[self.focused]
    }

    /// Panel for `period`. Panels sit in wire-tag order, so the tag doubles
    /// as the index.
    pub fn panel(&self, period: Period) -> &PeriodPanel {
        &self.panels[period.as_tag() as usize]
    }

    pub fn panel_mut(&mut self, period: Period) -> &mut PeriodPanel {
        &mut self.panels[period.as_tag() as usize]
    }

    /// Moves column focus one step toward broader granularities.
    pub fn focus_left(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Moves column focus one step toward finer granularities.
    pub fn focus_right(&mut self) {
        if self.focused + 1 < self.panels.len() {
            self.focused += 1;
        }
    }

    /// Appends generated text to the focused editor, flushing through the
    /// repository exactly like a keystroke.
    ///
    /// Returns whether an editor held focus to receive the text.
    pub fn inject_generated<S: GoalStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        text: &str,
    ) -> StoreResult<bool> {
        let applied = self
            .focused_panel()
            .edit_focused(goals, |editor| editor.insert(text))?;
        Ok(applied.is_some())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
