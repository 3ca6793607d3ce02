use itertools::Itertools;
use rubik_core::Step;

/// Entry in the undo or redo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Single move.
    Step(Step),
    /// Moves made together, which undo and redo as one unit.
    Group(Vec<Entry>),
}
impl Entry {
    /// Returns all the moves in the entry, in the order they were made.
    pub fn steps(&self) -> Vec<Step> {
        let mut out = vec![];
        self.collect_steps(&mut out);
        out
    }
    fn collect_steps(&self, out: &mut Vec<Step>) {
        match self {
            Entry::Step(step) => out.push(*step),
            Entry::Group(entries) => entries.iter().for_each(|e| e.collect_steps(out)),
        }
    }
    /// Returns the number of moves in the entry.
    pub fn len(&self) -> usize {
        match self {
            Entry::Step(_) => 1,
            Entry::Group(entries) => entries.iter().map(Entry::len).sum(),
        }
    }
    /// Returns whether the entry contains no moves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Undo/redo history of moves.
///
/// Recording a move clears the redo history. Moves recorded between
/// [`CommandLog::begin_group()`] and [`CommandLog::end_group()`] form a
/// single entry, unless grouping is disabled.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    /// Entries to undo, oldest first.
    undo_stack: Vec<Entry>,
    /// Entries to redo, most recently undone last.
    redo_stack: Vec<Entry>,
    /// Groups that have been started but not finished, outermost first.
    open_groups: Vec<Vec<Entry>>,
    /// Whether groups are formed.
    grouping: bool,
}
impl CommandLog {
    /// Constructs an empty log.
    pub fn new(grouping: bool) -> Self {
        Self {
            grouping,
            ..Default::default()
        }
    }

    /// Returns whether groups are formed.
    pub fn grouping(&self) -> bool {
        self.grouping
    }
    /// Sets whether groups are formed. Disabling grouping closes any open
    /// groups.
    pub fn set_grouping(&mut self, grouping: bool) {
        if !grouping {
            self.close_open_groups();
        }
        self.grouping = grouping;
    }

    /// Records a move that has just been made.
    pub fn record(&mut self, step: Step) {
        self.redo_stack.clear();
        self.push(Entry::Step(step));
    }
    fn push(&mut self, entry: Entry) {
        match self.open_groups.last_mut() {
            Some(group) => group.push(entry),
            None => self.undo_stack.push(entry),
        }
    }

    /// Starts a group. Groups may be nested. Does nothing if grouping is
    /// disabled.
    pub fn begin_group(&mut self) {
        if self.grouping {
            self.open_groups.push(vec![]);
        }
    }
    /// Finishes the innermost group. Empty groups are discarded. Does nothing
    /// if grouping is disabled.
    pub fn end_group(&mut self) {
        if !self.grouping {
            return;
        }
        match self.open_groups.pop() {
            Some(entries) if entries.is_empty() => (),
            Some(entries) => self.push(Entry::Group(entries)),
            None => log::warn!("end_group() called with no open group"),
        }
    }
    fn close_open_groups(&mut self) {
        while !self.open_groups.is_empty() {
            self.end_group();
        }
    }

    /// Moves the most recent entry to the redo history and returns it. The
    /// caller is responsible for reverting its moves.
    ///
    /// Any open groups are closed first.
    pub fn undo(&mut self) -> Option<Entry> {
        self.close_open_groups();
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(entry.clone());
        Some(entry)
    }
    /// Moves the most recently undone entry back to the undo history and
    /// returns it. The caller is responsible for reapplying its moves.
    pub fn redo(&mut self) -> Option<Entry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(entry.clone());
        Some(entry)
    }

    /// Returns whether there is an entry to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.open_groups.iter().any(|g| !g.is_empty())
    }
    /// Returns whether there is an entry to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Discards all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open_groups.clear();
    }

    /// Returns the number of moves that can be undone.
    pub fn len(&self) -> usize {
        let open = self.open_groups.iter().flatten().map(Entry::len);
        self.undo_stack.iter().map(Entry::len).chain(open).sum()
    }
    /// Returns whether there are no moves to undo.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the number of entries that can be undone, counting each group
    /// once.
    pub fn entry_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns all the moves that can be undone, oldest first.
    pub fn steps(&self) -> Vec<Step> {
        self.undo_stack
            .iter()
            .chain(self.open_groups.iter().flatten())
            .flat_map(Entry::steps)
            .collect()
    }
    /// Returns all the moves that can be undone as a string, with groups in
    /// parentheses.
    pub fn to_notation(&self) -> String {
        fn fmt_entry(entry: &Entry) -> String {
            match entry {
                Entry::Step(step) => step.to_string(),
                Entry::Group(entries) => format!("({})", entries.iter().map(fmt_entry).join(" ")),
            }
        }
        self.undo_stack.iter().map(fmt_entry).join(" ")
    }
}
