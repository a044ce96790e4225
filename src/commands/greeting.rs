//! Repeated greeting lines (`dynamic-greet greet-subcommand`)

/// Build `repeat_count` lines of `"{greeting}, {name}!"`.
///
/// Zero and negative counts produce no lines.
pub fn greeting_lines(name: &str, greeting: &str, repeat_count: i64) -> Vec<String> {
    let count = usize::try_from(repeat_count.max(0)).unwrap_or(usize::MAX);
    std::iter::repeat_with(|| format!("{}, {}!", greeting, name))
        .take(count)
        .collect()
}
