use regex::Regex;
use std::sync::LazyLock;

/// Two letters, four digits, an optional letter and an optional signed day offset
static BATCH_COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2}[0-9]{4}[A-Z]?)(?:,(-?[0-9]+))?$").expect("valid regex")
});

/// A chat message asking to plan the reminders of a batch,
/// e.g. `AB1234`, `AB1234C` or `AB1234,-3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCommand {
    pub batch: String,
    pub day_offset: i32,
}

impl BatchCommand {
    /// Most chat messages are not commands, so anything not matching the
    /// grammar end to end is simply `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_uppercase();
        let captures = BATCH_COMMAND_RE.captures(&text)?;
        let batch = captures.get(1)?.as_str().to_string();
        let day_offset = match captures.get(2) {
            Some(offset) => offset.as_str().parse::<i32>().ok()?,
            None => 0,
        };
        Some(Self { batch, day_offset })
    }
}
