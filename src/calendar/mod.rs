pub mod color;
pub mod event;
pub mod palette;
pub mod store;

pub use color::{Category, Color, ColorError};
pub use event::{CalendarEvent, EventPatch, EventStart, StartParseError};
pub use palette::{Palette, PaletteEntry, PaletteError};
pub use store::{derive_from_challenge, CalendarEventStore, StoreError};
