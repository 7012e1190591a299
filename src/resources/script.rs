//! Timed script state.
//!
//! [`ScriptState`] holds everything the
//! [`run_script`](crate::systems::script::run_script) system advances each
//! tick: the typewriter text queue, the interactive box slots, which text
//! branches already fired and the ending fade.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::scenedef::{ScriptDef, TextEntry};

/// Typewriter queue of time-windowed text entries.
///
/// The cursor walks the entries in list order. An entry starts revealing
/// once scene time reaches its start, one character per `interval`. When it
/// is fully shown, or its end time passes, the cursor moves on; the shown
/// text stays until its own end time or until the next entry starts
/// revealing.
#[derive(Debug, Clone, Default)]
pub struct TextScript {
    entries: Vec<TextEntry>,
    interval: f32,
    cursor: usize,
    revealed: usize,
    since_last_char: f32,
    shown: Option<(usize, usize)>,
}

impl TextScript {
    pub fn new(entries: Vec<TextEntry>, interval: f32) -> Self {
        Self {
            entries,
            interval,
            ..Default::default()
        }
    }

    /// Append entries behind the existing ones.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = TextEntry>) {
        self.entries.extend(entries);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Characters of the current entry revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Advance the queue to scene time `now`, `dt` seconds after the last call.
    pub fn advance(&mut self, now: f32, dt: f32) {
        if let Some((index, _)) = self.shown {
            if now >= self.entries[index].end {
                self.shown = None;
            }
        }

        while self.cursor < self.entries.len() && now >= self.entries[self.cursor].end {
            debug!("text entry {} expired", self.cursor);
            self.next_entry();
        }

        let Some(entry) = self.entries.get(self.cursor) else {
            return;
        };
        if now < entry.start {
            return;
        }

        let total = entry.text.chars().count();
        if self.revealed < total {
            self.since_last_char += dt;
            while self.revealed < total && self.since_last_char >= self.interval {
                self.since_last_char -= self.interval;
                self.revealed += 1;
            }
        }
        self.shown = Some((self.cursor, self.revealed));

        if self.revealed >= total {
            self.next_entry();
        }
    }

    fn next_entry(&mut self) {
        self.cursor += 1;
        self.revealed = 0;
        self.since_last_char = 0.0;
    }

    /// Text currently on screen, if any.
    pub fn visible_text(&self) -> Option<&str> {
        let (index, chars) = self.shown?;
        let text = &self.entries[index].text;
        let end = text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        Some(&text[..end])
    }
}

/// Lifecycle of an interactive box slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Spawned(Entity),
    Removed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoxSlot {
    pub state: SlotState,
    pub activated: bool,
}

/// Interactive boxes addressed by script index.
///
/// Indexing past the end grows the list with empty slots.
#[derive(Debug, Clone, Default)]
pub struct BoxSlots {
    slots: Vec<BoxSlot>,
}

impl BoxSlots {
    fn slot_mut(&mut self, index: usize) -> &mut BoxSlot {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, BoxSlot::default());
        }
        &mut self.slots[index]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self, index: usize) -> SlotState {
        self.slots.get(index).map(|s| s.state).unwrap_or_default()
    }

    pub fn entity(&self, index: usize) -> Option<Entity> {
        match self.state(index) {
            SlotState::Spawned(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the slot may receive a new entity.
    pub fn can_spawn(&mut self, index: usize) -> bool {
        self.slot_mut(index).state == SlotState::Empty
    }

    pub fn mark_spawned(&mut self, index: usize, entity: Entity) {
        self.slot_mut(index).state = SlotState::Spawned(entity);
    }

    /// Release the slot's entity, if it holds one. Further calls return `None`.
    pub fn take_for_removal(&mut self, index: usize) -> Option<Entity> {
        let slot = self.slot_mut(index);
        match slot.state {
            SlotState::Spawned(e) => {
                slot.state = SlotState::Removed;
                Some(e)
            }
            _ => None,
        }
    }

    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.state == SlotState::Spawned(entity))
    }

    /// Record an activation. Returns false if the slot was already active.
    pub fn activate(&mut self, index: usize) -> bool {
        let slot = self.slot_mut(index);
        let first = !slot.activated;
        slot.activated = true;
        first
    }

    pub fn is_activated(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.activated)
    }

    pub fn activated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.activated).count()
    }
}

/// Ending sequence progress.
#[derive(Debug, Clone, Default)]
pub struct Ending {
    pub started: bool,
    pub message: Option<String>,
    /// Fade overlay alpha in `0..=255`.
    pub alpha: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ScriptState {
    pub text: TextScript,
    pub boxes: BoxSlots,
    pub branches_done: Vec<bool>,
    pub ending: Ending,
}

impl ScriptState {
    pub fn from_def(def: &ScriptDef) -> Self {
        Self {
            text: TextScript::new(def.entries.clone(), def.interval),
            boxes: BoxSlots::default(),
            branches_done: vec![false; def.branches.len()],
            ending: Ending::default(),
        }
    }
}
