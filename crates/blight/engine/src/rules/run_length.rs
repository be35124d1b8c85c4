//! Longest run of consecutive qualifying days.

/// Length of the longest maximal run of `true` values, or 0 if there is none.
///
/// Purely positional: consecutive entries are treated as consecutive days
/// whether or not the calendar has a gap between them.
pub fn longest_true_run<I>(flags: I) -> u32
where
    I: IntoIterator<Item = bool>,
{
    let mut run = 0u32;
    let mut best = 0u32;
    for flag in flags {
        run = if flag { run + 1 } else { 0 };
        best = best.max(run);
    }
    best
}
