use crate::content::{
    model::DiaryEntry,
    store::{next_of, position_of, previous_of},
};

/// Slot of an entry relative to the one being viewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    PrevPrev,
    Prev,
    Current,
    Next,
    NextNext,
}

impl Role {
    /// Every role, left to right.
    pub const ALL: [Role; 5] = [
        Role::PrevPrev,
        Role::Prev,
        Role::Current,
        Role::Next,
        Role::NextNext,
    ];

    /// Signed distance from the current entry (older entries are negative).
    pub fn offset(self) -> i8 {
        match self {
            Self::PrevPrev => -2,
            Self::Prev => -1,
            Self::Current => 0,
            Self::Next => 1,
            Self::NextNext => 2,
        }
    }

    fn index(self) -> usize {
        (self.offset() + 2) as usize
    }
}

/// The entry being viewed and up to two neighbours on each side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborWindow {
    slots: [Option<DiaryEntry>; 5],
}

impl NeighborWindow {
    /// Window around `id` in a newest-first list, or `None` if `id` is absent.
    pub fn around(entries: &[DiaryEntry], id: &str) -> Option<Self> {
        let idx = position_of(entries, id)?;
        let current = &entries[idx];
        let prev = previous_of(entries, id);
        let next = next_of(entries, id);
        let prev_prev = prev.and_then(|p| previous_of(entries, &p.id));
        let next_next = next.and_then(|n| next_of(entries, &n.id));
        Some(Self {
            slots: [
                prev_prev.cloned(),
                prev.cloned(),
                Some(current.clone()),
                next.cloned(),
                next_next.cloned(),
            ],
        })
    }

    /// Entry in `role`.
    pub fn get(&self, role: Role) -> Option<&DiaryEntry> {
        self.slots[role.index()].as_ref()
    }

    /// The viewed entry.
    pub fn current(&self) -> Option<&DiaryEntry> {
        self.get(Role::Current)
    }

    /// Filled roles with their entries, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &DiaryEntry)> {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|e| (role, e)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/neighbors.rs"]
mod tests;
