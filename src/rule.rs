//! The structured form of a repeat specifier.

/// Largest day-step a `d` rule may carry.
pub const MAX_DAILY_INTERVAL: u16 = 400;

/// A parsed repeat specifier.
///
/// Rules are transient: the task store keeps only the textual form, and a
/// rule is parsed fresh for each occurrence computation. The variants map
/// one-to-one onto the four sub-grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `y` — once a year on the anchor's month and day.
    Yearly,

    /// `d <n>` — every `n` days counted from the anchor, `1..=400`.
    Daily { interval: u16 },

    /// `w <d,...>` — on the listed ISO weekdays (Monday=1 … Sunday=7).
    ///
    /// Duplicates are kept as written; order carries no meaning.
    Weekly { days: Vec<u8> },

    /// `m <d,...> [<m,...>]` — on the listed days of month, optionally
    /// restricted to the listed months (empty list means every month).
    ///
    /// A day of `-1` means the last day of the month, `-2` the
    /// second-to-last.
    Monthly { days: Vec<i8>, months: Vec<u8> },
}
