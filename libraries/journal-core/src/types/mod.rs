mod category;
mod record;
mod wire;

pub use category::{Category, UnknownCategory};
pub use record::{SeriesDraft, SeriesRecord};
pub use wire::{RecordPayload, WIRE_DATE_FORMAT};
