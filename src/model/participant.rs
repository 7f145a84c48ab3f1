//! Participant helpers

/// Characters that separate name tokens in an email local part
const NAME_SEPARATORS: [char; 3] = ['.', '-', '_'];

/// Maximum length of an initials label, in characters
pub const INITIALS_LEN: usize = 2;

/// Derive the avatar label for a participant email.
///
/// The local part (before the first `@`) is split on `.`, `-` and `_`; the
/// first character of each token is kept, the result is cut to two characters
/// and upper-cased. Empty or odd local parts give a short or empty label.
pub fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let letters: String = local
        .split(NAME_SEPARATORS)
        .filter_map(|token| token.chars().next())
        .take(INITIALS_LEN)
        .collect();

    letters.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tokens() {
        assert_eq!(initials("jane.doe@x.com"), "JD");
        assert_eq!(initials("mary-ann@x.com"), "MA");
        assert_eq!(initials("li_wei@x.com"), "LW");
    }

    #[test]
    fn test_single_token() {
        assert_eq!(initials("bob@x.com"), "B");
    }

    #[test]
    fn test_only_first_two_tokens_kept() {
        assert_eq!(initials("a.b.c@x.com"), "AB");
    }

    #[test]
    fn test_empty_local_part() {
        assert_eq!(initials("@x.com"), "");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        assert_eq!(initials(".jane@x.com"), "J");
        assert_eq!(initials("jane..doe@x.com"), "JD");
        assert_eq!(initials("...@x.com"), "");
    }

    #[test]
    fn test_no_at_sign_uses_whole_string() {
        assert_eq!(initials("sam.lee"), "SL");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(initials("émile.zola@x.fr"), "ÉZ");
    }
}
