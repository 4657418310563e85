/// Compute effective limit with precedence: global flag -> configured default.
///
/// A zero limit falls back to the default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), 5);
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn zero_falls_back() {
        assert_eq!(effective_limit(Some(0), 20), 20);
    }
}
