//! Collapsible page sections
//!
//! The page is a vertical stack of three sections. One of them has focus; any
//! of them can be collapsed down to its header line.

use serde::{Deserialize, Serialize};

/// Identifies one collapsible section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Copyable API usage snippets
    Usage,
    /// Content editor and validation panel
    Submission,
    /// Submissions table
    Submissions,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 3] = [SectionId::Usage, SectionId::Submission, SectionId::Submissions];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Usage => "API Usage",
            SectionId::Submission => "Submission",
            SectionId::Submissions => "Submissions",
        }
    }

    fn index(&self) -> usize {
        match self {
            SectionId::Usage => 0,
            SectionId::Submission => 1,
            SectionId::Submissions => 2,
        }
    }
}

/// Collapsed flags, focus and scroll offset of the section stack
#[derive(Debug, Clone)]
pub struct SectionSet {
    collapsed: [bool; 3],
    focused: SectionId,
    /// Index of the first section drawn; sections above it are scrolled away
    first_visible: usize,
}

impl Default for SectionSet {
    fn default() -> Self {
        Self {
            collapsed: [false; 3],
            focused: SectionId::Submission,
            first_visible: 0,
        }
    }
}

impl SectionSet {
    /// Build a set with the given sections initially collapsed
    pub fn with_collapsed(collapsed: &[SectionId]) -> Self {
        let mut set = Self::default();
        for id in collapsed {
            set.collapsed[id.index()] = true;
        }
        set
    }

    pub fn is_collapsed(&self, id: SectionId) -> bool {
        self.collapsed[id.index()]
    }

    /// Flip the collapsed flag of `id`, returning the new value
    pub fn toggle(&mut self, id: SectionId) -> bool {
        let flag = &mut self.collapsed[id.index()];
        *flag = !*flag;
        *flag
    }

    /// Header arrow: down when expanded, right when collapsed
    pub fn arrow(&self, id: SectionId) -> &'static str {
        if self.is_collapsed(id) {
            "▶"
        } else {
            "▼"
        }
    }

    pub fn focused(&self) -> SectionId {
        self.focused
    }

    pub fn focus(&mut self, id: SectionId) {
        self.focused = id;
        // Keep the focused section on screen
        if id.index() < self.first_visible {
            self.first_visible = id.index();
        }
    }

    pub fn focus_next(&mut self) {
        let next = SectionId::ALL[(self.focused.index() + 1) % SectionId::ALL.len()];
        self.focus(next);
    }

    pub fn focus_prev(&mut self) {
        let len = SectionId::ALL.len();
        let prev = SectionId::ALL[(self.focused.index() + len - 1) % len];
        self.focus(prev);
    }

    /// Sections currently drawn, top to bottom
    pub fn visible(&self) -> &'static [SectionId] {
        static ORDER: [SectionId; 3] = SectionId::ALL;
        &ORDER[self.first_visible..]
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn scroll_down(&mut self) {
        if self.first_visible + 1 < SectionId::ALL.len() {
            self.first_visible += 1;
        }
        if self.focused.index() < self.first_visible {
            self.focused = SectionId::ALL[self.first_visible];
        }
    }

    pub fn scroll_up(&mut self) {
        self.first_visible = self.first_visible.saturating_sub(1);
    }

    /// Jump back to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.first_visible = 0;
    }
}
