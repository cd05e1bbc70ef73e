//! Static spiritual content: daily verses and mood mantras.

mod mantra;
mod verse;

pub use mantra::{mantra_for_mood, Mantra, Mood};
pub use verse::{verse_for_day, Localized, Verse, VERSES};
