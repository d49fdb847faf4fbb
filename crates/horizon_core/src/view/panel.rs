//! Per-period window navigator.
//!
//! # Responsibility
//! - Track one period column's window position (`offset`), focus index and
//!   focused goal identity over the repository's padded sequence.
//! - Drive scrolling, focus transfer and zooming with the compensation that
//!   keeps the logically focused goal stable.
//! - Route edits of the focused editor through the goals repository.
//!
//! # Invariants
//! - `offset` defaults to 1 so the window opens at the current period and
//!   hides the upcoming placeholder until the user scrolls toward the future.
//! - Focus is restored by goal identity across re-renders; scroll operations
//!   instead pin the focus index so the window shifts under the cursor.
//! - Every operation reads state before mutating it; on a storage failure
//!   the panel state is left untouched.

use crate::model::goal::GoalId;
use crate::model::period::Period;
use crate::repo::goals::GoalsRepository;
use crate::repo::settings::SettingsRepository;
use crate::storage::{GoalStore, SettingStore, StoreResult};
use crate::view::editor::GoalEditor;
use crate::view::editor_cache::{EditorCache, EDITOR_CACHE_CAPACITY};

const INITIAL_OFFSET: usize = 1;

/// How a re-render resolves the focused entry.
enum FocusRestore {
    /// Follow the previously focused goal identity; fall back to the
    /// clamped focus index when it scrolled out of the window.
    ByIdentity,
    /// Keep the focus index; the goal under the cursor may change.
    ByIndex,
}

/// Windowed view state for a single period column.
pub struct PeriodPanel {
    period: Period,
    offset: usize,
    focus: usize,
    in_focus: Option<GoalId>,
    editors: EditorCache,
}

impl PeriodPanel {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            offset: INITIAL_OFFSET,
            focus: 0,
            in_focus: None,
            editors: EditorCache::new(EDITOR_CACHE_CAPACITY),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_goal_id(&self) -> Option<GoalId> {
        self.in_focus
    }

    /// Recomputes the visible window and restores focus by goal identity.
    ///
    /// Returns the goal ids in window order, newest first. One editor per id
    /// is available afterwards via [`PeriodPanel::editor`].
    pub fn visible<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        self.render(goals, settings, FocusRestore::ByIdentity)
    }

    /// Shifts the window one step toward the future, flooring at the
    /// upcoming placeholder. Always re-renders: "now" may have advanced and
    /// changed the padding even when the offset cannot move.
    pub fn scroll_future<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        self.offset = self.offset.saturating_sub(1);
        self.render(goals, settings, FocusRestore::ByIndex)
    }

    /// Snaps the window back to the current period and focuses its entry.
    pub fn scroll_now<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        self.offset = INITIAL_OFFSET;
        self.focus = 0;
        self.in_focus = None;
        self.render(goals, settings, FocusRestore::ByIndex)
    }

    /// Shifts the window one step toward the past, refusing once the oldest
    /// persisted entry is already visible.
    pub fn scroll_past<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        let amount = settings.amount_for(self.period);
        let padded_len = goals.find_for_period(self.period)?.len();
        if self.offset < padded_len.saturating_sub(amount) {
            self.offset += 1;
        }
        self.render(goals, settings, FocusRestore::ByIndex)
    }

    /// Moves focus one entry toward the future, shifting the window instead
    /// when focus already sits at the top edge.
    pub fn focus_future<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        if self.focus == 0 {
            return self.scroll_future(goals, settings);
        }
        let ids = self.render(goals, settings, FocusRestore::ByIdentity)?;
        self.focus = self.focus.saturating_sub(1);
        self.in_focus = ids.get(self.focus).copied();
        Ok(ids)
    }

    /// Moves focus one entry toward the past, shifting the window instead
    /// when focus already sits at the bottom edge.
    pub fn focus_past<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        let ids = self.render(goals, settings, FocusRestore::ByIdentity)?;
        if self.focus + 1 >= ids.len() {
            return self.scroll_past(goals, settings);
        }
        self.focus += 1;
        self.in_focus = ids.get(self.focus).copied();
        Ok(ids)
    }

    /// Shrinks the window by one entry, flooring at one.
    ///
    /// When the shrink would push the focused entry outside the window, the
    /// offset and focus index compensate so the same goal stays focused as
    /// the bottom-visible entry. The new amount is persisted before any
    /// state changes; a persistence failure leaves the window untouched.
    pub fn zoom_in<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &mut SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        let amount = settings.amount_for(self.period);
        if amount <= 1 {
            return self.render(goals, settings, FocusRestore::ByIdentity);
        }

        let shrunk = amount - 1;
        settings.set_amount_for(self.period, shrunk)?;
        if self.focus >= shrunk {
            self.offset += 1;
            self.focus -= 1;
        }
        self.render(goals, settings, FocusRestore::ByIdentity)
    }

    /// Grows the window by one entry.
    ///
    /// When the grown window still fits inside the padded sequence and the
    /// window is not already at the future edge, the offset and focus index
    /// compensate so the same goal keeps its place on screen.
    pub fn zoom_out<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &mut SettingsRepository<'_, K>,
    ) -> StoreResult<Vec<GoalId>> {
        let grown = settings.amount_for(self.period) + 1;
        settings.set_amount_for(self.period, grown)?;

        let padded_len = goals.find_for_period(self.period)?.len();
        if self.offset > 0 && grown <= padded_len {
            self.offset -= 1;
            self.focus += 1;
        }
        self.render(goals, settings, FocusRestore::ByIdentity)
    }

    /// Returns the editor currently holding input focus.
    pub fn editor_in_focus(&mut self) -> Option<&mut GoalEditor> {
        self.editors.get_mut(self.in_focus?)
    }

    /// Returns the cached editor for `id` without touching recency.
    pub fn editor(&self, id: GoalId) -> Option<&GoalEditor> {
        self.editors.peek(id)
    }

    /// Applies `apply` to the focused editor and flushes any content change
    /// through the repository before returning.
    ///
    /// Returns `Ok(None)` when no editor holds focus. The flush stamps the
    /// goal and syncs the stamped copy back into the editor, so a
    /// placeholder becomes durable on its first edit.
    pub fn edit_focused<S: GoalStore, T>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        apply: impl FnOnce(&mut GoalEditor) -> T,
    ) -> StoreResult<Option<T>> {
        let Some(focused) = self.in_focus else {
            return Ok(None);
        };
        let Some(editor) = self.editors.get_mut(focused) else {
            return Ok(None);
        };

        let outcome = apply(editor);
        if editor.is_dirty() {
            let stamped = goals.update(editor.goal().clone())?;
            editor.sync_goal(stamped);
            editor.take_dirty();
        }
        Ok(Some(outcome))
    }

    fn render<S: GoalStore, K: SettingStore>(
        &mut self,
        goals: &GoalsRepository<'_, S>,
        settings: &SettingsRepository<'_, K>,
        restore: FocusRestore,
    ) -> StoreResult<Vec<GoalId>> {
        let amount = settings.amount_for(self.period);
        let sequence = goals.find_for_period(self.period)?;

        let end = (self.offset + amount).min(sequence.len());
        let start = self.offset.min(end);
        let window = &sequence[start..end];

        let ids: Vec<GoalId> = window.iter().map(|goal| goal.id).collect();
        for goal in window {
            if let Some(editor) = self.editors.get_mut(goal.id) {
                editor.sync_goal(goal.clone());
            } else {
                self.editors.insert(GoalEditor::new(goal.clone()));
            }
        }

        let clamped = self.focus.min(ids.len().saturating_sub(1));
        self.focus = match restore {
            FocusRestore::ByIdentity => self
                .in_focus
                .and_then(|focused| ids.iter().position(|id| *id == focused))
                .unwrap_or(clamped),
            FocusRestore::ByIndex => clamped,
        };
        self.in_focus = ids.get(self.focus).copied();

        Ok(ids)
    }
}
