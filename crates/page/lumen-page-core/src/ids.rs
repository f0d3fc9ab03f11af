//! Identifiers and simple allocators for host-registered elements.

use serde::{Deserialize, Serialize};

/// A project card participating in the glow effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// A form input participating in live validity feedback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FieldId(pub u32);

/// An element registered for one-shot appearance animation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RevealId(pub u32);

/// A host timeout requested by the engine. Superseded timers keep firing
/// with their old id and are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// Monotonic allocator for CardId, RevealId, and TimerId.
/// Dense indices double as Vec slots; ids are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_card: u32,
    next_reveal: u32,
    next_timer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card = self.next_card.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_reveal(&mut self) -> RevealId {
        let id = RevealId(self.next_reveal);
        self.next_reveal = self.next_reveal.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_timer(&mut self) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
