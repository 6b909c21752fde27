use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::color::{Category, Color};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Unknown palette category: {0}")]
    UnknownCategory(String),
    #[error("Palette entry '{0}' was already used")]
    Consumed(Category),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub category: Category,
    pub color: Color,
}

impl PaletteEntry {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            color: category.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    entry: PaletteEntry,
    consumed: bool,
}

/// Draggable category templates shown beside the calendar.
///
/// With `consume_on_drop` set, an entry disappears from [`Palette::available`]
/// once it has been dropped, the way the sidebar behaves. Otherwise every entry
/// can be dropped any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: Vec<Slot>,
    consume_on_drop: bool,
}

impl Palette {
    pub fn new(consume_on_drop: bool) -> Self {
        let slots = Category::ALL
            .into_iter()
            .map(|category| Slot {
                entry: PaletteEntry::for_category(category),
                consumed: false,
            })
            .collect();
        Self { slots, consume_on_drop }
    }

    pub fn available(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.slots.iter().filter(|slot| !slot.consumed).map(|slot| &slot.entry)
    }

    /// Looks up an entry that can still be dropped.
    pub fn entry(&self, category_name: &str) -> Result<&PaletteEntry, PaletteError> {
        let category = Category::from_name(category_name)
            .ok_or_else(|| PaletteError::UnknownCategory(category_name.to_string()))?;
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.entry.category == category)
            .ok_or_else(|| PaletteError::UnknownCategory(category_name.to_string()))?;

        if slot.consumed {
            return Err(PaletteError::Consumed(category));
        }
        Ok(&slot.entry)
    }

    pub fn mark_dropped(&mut self, category: Category) {
        if !self.consume_on_drop {
            return;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.entry.category == category) {
            slot.consumed = true;
            tracing::debug!("Palette entry {} consumed", category);
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
