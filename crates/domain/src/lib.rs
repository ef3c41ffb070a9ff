mod command;
mod date;
mod interval;
mod reminder;
mod shared;

pub use command::BatchCommand;
pub use date::{compute_due, daily_anchor, ANCHOR_HOUR_UTC};
pub use interval::{IntervalLabel, BATCH_INTERVALS};
pub use reminder::{batch_added_message, normalize_batch, Reminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
