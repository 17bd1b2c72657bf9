//! Email masking for privacy-preserving display.
//!
//! Only a short prefix and suffix of the local part stay visible; every
//! character in between is replaced by the mask symbol. The domain is never
//! touched.

use crate::error::{Error, Result};

/// Mask the middle of an email address's local part.
///
/// The reveal window is a quarter of the local part (truncating) when the
/// whole address is at least four characters long, and a single character
/// otherwise. Every hidden character is replaced by one full copy of
/// `symbol`, so multi-character symbols widen the masked segment.
///
/// Lengths are counted in characters, not bytes. A local part shorter than
/// four characters has an empty reveal window and is masked entirely; when
/// the whole address is under four characters the overlapping windows leave
/// an empty masked segment.
///
/// # Examples
///
/// ```
/// use courier_core::mask_email;
///
/// assert_eq!(mask_email("johndoe@example.com", "*").unwrap(), "j*****e@example.com");
/// assert_eq!(mask_email("ab@x.com", "#").unwrap(), "##@x.com");
/// ```
pub fn mask_email(address: &str, symbol: &str) -> Result<String> {
    let (local, domain) = split_address(address)?;

    let local_chars: Vec<char> = local.chars().collect();
    let local_len = local_chars.len();
    let reveal = if address.chars().count() >= 4 {
        local_len / 4
    } else {
        1
    };

    let middle_len = local_len.saturating_sub(reveal * 2);

    let prefix: String = local_chars[..reveal].iter().collect();
    let suffix: String = local_chars[local_len - reveal..].iter().collect();
    let masked = symbol.repeat(middle_len);

    Ok(format!("{prefix}{masked}{suffix}@{domain}"))
}

/// Split `local@domain`, rejecting anything without exactly one `@` or with
/// an empty side.
pub(crate) fn split_address(address: &str) -> Result<(&str, &str)> {
    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::InvalidFormat(format!(
            "email address must contain exactly one '@': {address:?}"
        )));
    };

    if local.is_empty() || domain.is_empty() {
        return Err(Error::InvalidFormat(format!(
            "email address needs a local part and a domain: {address:?}"
        )));
    }

    Ok((local, domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn masks_middle_of_typical_address() {
        assert_eq!(
            mask_email("johndoe@example.com", "*").unwrap(),
            "j*****e@example.com"
        );
    }

    #[test]
    fn reveals_a_quarter_of_long_local_parts() {
        // 12 chars -> reveal 3
        assert_eq!(
            mask_email("abcdefghijkl@mail.org", "*").unwrap(),
            "abc******jkl@mail.org"
        );
    }

    #[test]
    fn short_local_part_is_fully_masked() {
        assert_eq!(mask_email("ab@x.com", "#").unwrap(), "##@x.com");
    }

    #[test]
    fn very_short_address_reveals_one_char_each_side() {
        // Address shorter than 4 chars: reveal 1, middle clamps to empty.
        assert_eq!(mask_email("a@b", "*").unwrap(), "aa@b");
    }

    #[test]
    fn multi_char_symbol_repeats_per_hidden_char() {
        assert_eq!(
            mask_email("johndoe@example.com", "<>").unwrap(),
            "j<><><><><>e@example.com"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(
            mask_email("jösé.müller@example.de", "*").unwrap(),
            "jö*******er@example.de"
        );
    }

    #[test]
    fn rejects_missing_at() {
        let error = mask_email("not-an-email", "*").unwrap_err();
        assert!(matches!(error, Error::InvalidFormat(_)));
    }

    #[test]
    fn rejects_multiple_at() {
        assert!(matches!(
            mask_email("a@b@c.com", "*"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_empty_sides() {
        assert!(mask_email("@example.com", "*").is_err());
        assert!(mask_email("john@", "*").is_err());
    }

    proptest! {
        #[test]
        fn keeps_reveal_window_and_domain(
            local in "[a-z0-9._]{4,40}",
            domain in "[a-z]{1,12}\\.[a-z]{2,4}",
        ) {
            let address = format!("{local}@{domain}");
            let masked = mask_email(&address, "*").unwrap();
            let reveal = local.len() / 4;
            let tail = format!("@{domain}");

            prop_assert!(masked.ends_with(&tail));
            prop_assert!(masked.starts_with(&local[..reveal]));

            let masked_local = masked.strip_suffix(&tail).unwrap();
            prop_assert!(masked_local.ends_with(&local[local.len() - reveal..]));
            prop_assert_eq!(masked_local.len(), local.len());
        }

        #[test]
        fn is_deterministic(local in "[a-z]{1,20}", symbol in "[*#x]{1,3}") {
            let address = format!("{local}@example.com");
            prop_assert_eq!(
                mask_email(&address, &symbol).unwrap(),
                mask_email(&address, &symbol).unwrap()
            );
        }
    }
}
