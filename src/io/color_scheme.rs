//! Host color-scheme signal, consulted when no theme preference is stored.

/// Environment variable that forces the answer (`dark` / `light`)
pub const OVERRIDE_VAR: &str = "TASKLIST_COLOR_SCHEME";

/// Reports whether the host prefers a dark color scheme
pub trait ColorSchemeProbe {
    /// `None` when the host gives no signal
    fn prefers_dark(&self) -> Option<bool>;
}

/// Fixed answer, for tests and for callers that already know
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Reads `TASKLIST_COLOR_SCHEME`, then the terminal's `COLORFGBG`
pub struct EnvColorScheme<F = fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl EnvColorScheme {
    pub fn new() -> Self {
        EnvColorScheme {
            lookup: |key: &str| std::env::var(key).ok(),
        }
    }
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EnvColorScheme<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Probe against a custom variable lookup
    pub fn with_lookup(lookup: F) -> Self {
        EnvColorScheme { lookup }
    }
}

impl<F> ColorSchemeProbe for EnvColorScheme<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(value) = (self.lookup)(OVERRIDE_VAR) {
            match value.trim().to_ascii_lowercase().as_str() {
                "dark" => return Some(true),
                "light" => return Some(false),
                _ => {}
            }
        }
        (self.lookup)("COLORFGBG").and_then(|v| colorfgbg_is_dark(&v))
    }
}

/// Interpret `COLORFGBG` (`fg;bg` or `fg;default;bg`). The last field is the
/// background palette index; 0-6 and 8 are dark.
fn colorfgbg_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn probe(vars: &[(&str, &str)]) -> Option<bool> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvColorScheme::with_lookup(move |key: &str| map.get(key).cloned()).prefers_dark()
    }

    #[test]
    fn no_signal() {
        assert_eq!(probe(&[]), None);
        assert_eq!(probe(&[("COLORFGBG", "garbage")]), None);
    }

    #[test]
    fn colorfgbg_background_index() {
        assert_eq!(probe(&[("COLORFGBG", "15;0")]), Some(true));
        assert_eq!(probe(&[("COLORFGBG", "0;15")]), Some(false));
        assert_eq!(probe(&[("COLORFGBG", "15;default;8")]), Some(true));
        assert_eq!(probe(&[("COLORFGBG", "0;7")]), Some(false));
    }

    #[test]
    fn override_wins() {
        assert_eq!(
            probe(&[(OVERRIDE_VAR, "light"), ("COLORFGBG", "15;0")]),
            Some(false)
        );
        assert_eq!(probe(&[(OVERRIDE_VAR, "DARK")]), Some(true));
        // Unrecognized override falls through to the terminal
        assert_eq!(
            probe(&[(OVERRIDE_VAR, "auto"), ("COLORFGBG", "15;0")]),
            Some(true)
        );
    }
}
