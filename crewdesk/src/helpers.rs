/// Shorten a string to at most `max_chars`, keeping the tail.
///
/// File paths and email addresses carry their distinguishing part at the
/// end, so the head is the part dropped.
pub(crate) fn ellipsize(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total <= max_chars {
        return s.to_owned();
    }

    let keep = max_chars.saturating_sub(2);
    let tail: String = s
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    format!("..{}", tail)
}

#[cfg(test)]
mod tests {
    use super::ellipsize;

    #[test]
    fn given_short_string_when_ellipsized_then_returned_unchanged() {
        assert_eq!(ellipsize("avatar.png", 20), "avatar.png");
    }

    #[test]
    fn given_long_string_when_ellipsized_then_tail_is_kept() {
        let shortened = ellipsize("/home/user/pictures/avatar.png", 16);

        assert_eq!(shortened.chars().count(), 16);
        assert!(shortened.starts_with(".."));
        assert!(shortened.ends_with("avatar.png"));
    }
}
