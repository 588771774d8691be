/// Rounds to `places` decimals on the exact binary value, ties to even.
/// `{:.N}` formatting already rounds this way, so the value goes through it.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
