//! Editor widget state for a single goal.
//!
//! # Responsibility
//! - Hold a goal's text together with transient cursor and selection state.
//! - Implement the text operations the rendering layer maps keys onto,
//!   including bullet-list continuation on newline.
//!
//! # Invariants
//! - `cursor` and selection bounds always sit on UTF-8 character boundaries
//!   within the content.
//! - Every content mutation marks the editor dirty; the owning panel flushes
//!   dirty editors through the goals repository before handing control back.

use crate::model::goal::{Goal, GoalId};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Placeholder shown in an empty editor for the current or a past period.
pub const GOAL_PLACEHOLDER: &str = "* a things to do
* a thing to achieve

--
Some notes. This is just a placeholder in some opinionated format.
";

/// Placeholder shown in an empty editor for an upcoming period.
pub const FUTURE_GOAL_PLACEHOLDER: &str = "Goals and notes for the future";

const BULLET: char = '*';

/// Text-editing state bound to one goal.
#[derive(Debug, Clone)]
pub struct GoalEditor {
    goal: Goal,
    cursor: usize,
    selection: Option<(usize, usize)>,
    dirty: bool,
}

impl GoalEditor {
    /// Binds a fresh editor to `goal` with the cursor at the start.
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            cursor: 0,
            selection: None,
            dirty: false,
        }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn goal_id(&self) -> GoalId {
        self.goal.id
    }

    pub fn content(&self) -> &str {
        &self.goal.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Whether this editor holds content changes not yet flushed to storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears and returns the dirty flag. Called by the flush path.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Adopts a re-read goal while preserving cursor and selection state.
    ///
    /// The flush-on-edit contract keeps editor content equal to the stored
    /// row, so this normally only refreshes the `updated` stamp; bounds are
    /// clamped in case the row did change underneath.
    pub fn sync_goal(&mut self, goal: Goal) {
        self.goal = goal;
        self.cursor = clamp_to_boundary(&self.goal.content, self.cursor);
        self.selection = self.selection.and_then(|(start, end)| {
            let start = clamp_to_boundary(&self.goal.content, start);
            let end = clamp_to_boundary(&self.goal.content, end);
            (start < end).then_some((start, end))
        });
    }

    /// Heading for this editor: the goal title plus a now/future marker.
    pub fn title(&self, now: NaiveDateTime) -> String {
        match self.goal.compare_start(now) {
            Ordering::Greater => format!("{} (future)", self.goal.title()),
            Ordering::Equal => format!("{} (now)", self.goal.title()),
            Ordering::Less => self.goal.title(),
        }
    }

    /// Hint text shown while the editor is empty.
    pub fn placeholder(&self, now: NaiveDateTime) -> &'static str {
        if self.goal.compare_start(now) == Ordering::Greater {
            FUTURE_GOAL_PLACEHOLDER
        } else {
            GOAL_PLACEHOLDER
        }
    }

    /// Inserts `text` at the cursor, replacing the selection if one exists.
    pub fn insert(&mut self, text: &str) {
        self.delete_selection();
        if text.is_empty() {
            return;
        }
        self.goal.content.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.dirty = true;
    }

    /// Inserts a newline, continuing a bullet list when the cursor sits in
    /// one.
    ///
    /// A line holding only a bare bullet is removed instead of continued, so
    /// pressing enter twice ends the list.
    pub fn newline(&mut self) {
        if self.selection.is_some() {
            self.insert("\n");
            return;
        }

        let content = &self.goal.content;
        let line_start = line_start(content, self.cursor);
        if self.cursor == line_start || !content[line_start..].starts_with(BULLET) {
            self.insert("\n");
            return;
        }

        let line_end = line_end(content, line_start);
        let line = &content[line_start..line_end];
        if line.trim_end_matches([' ', '\t']) == "*" {
            let remove_end = (line_end + 1).min(content.len());
            self.goal.content.replace_range(line_start..remove_end, "");
            self.cursor = line_start;
            self.dirty = true;
            return;
        }

        if content.as_bytes().get(self.cursor) == Some(&b' ') {
            self.insert("\n*");
        } else {
            self.insert("\n* ");
        }
    }

    /// Removes the selection, or the character before the cursor.
    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        let Some(previous) = self.goal.content[..self.cursor].chars().next_back() else {
            return;
        };
        let from = self.cursor - previous.len_utf8();
        self.goal.content.replace_range(from..self.cursor, "");
        self.cursor = from;
        self.dirty = true;
    }

    /// Selects the byte range `start..end`, clamped to character boundaries.
    /// The cursor moves to the selection end.
    pub fn select(&mut self, start: usize, end: usize) {
        let start = clamp_to_boundary(&self.goal.content, start);
        let end = clamp_to_boundary(&self.goal.content, end);
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        if start == end {
            self.selection = None;
            self.cursor = start;
        } else {
            self.selection = Some((start, end));
            self.cursor = end;
        }
    }

    pub fn select_all(&mut self) {
        self.select(0, self.goal.content.len());
    }

    /// Collapses the selection, leaving the cursor at its start.
    pub fn clear_selection(&mut self) {
        if let Some((start, _)) = self.selection.take() {
            self.cursor = start;
        }
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection
            .map(|(start, end)| &self.goal.content[start..end])
    }

    /// Returns the selected text without modifying the content.
    pub fn copy_selection(&self) -> Option<String> {
        self.selected_text().map(str::to_owned)
    }

    /// Removes and returns the selected text.
    pub fn cut_selection(&mut self) -> Option<String> {
        let text = self.copy_selection()?;
        self.delete_selection();
        Some(text)
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection.take() else {
            return false;
        };
        self.goal.content.replace_range(start..end, "");
        self.cursor = start;
        self.dirty = true;
        true
    }
}

fn line_start(content: &str, pos: usize) -> usize {
    content[..pos].rfind('\n').map_or(0, |newline| newline + 1)
}

fn line_end(content: &str, pos: usize) -> usize {
    content[pos..]
        .find('\n')
        .map_or(content.len(), |newline| pos + newline)
}

fn clamp_to_boundary(content: &str, pos: usize) -> usize {
    let mut pos = pos.min(content.len());
    while !content.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
