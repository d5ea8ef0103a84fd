use crate::club_errors::Rejection;

pub const NAME_MAX_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameErr {
    NameEmpty,
    NameTooLongMoreThanTenChars,
    NameContainsInvalidChars,
}

// First names and surnames share one rule
pub fn name_validate(name: &str) -> Result<(), Rejection> {
    if name.is_empty() {
        return Err(Rejection::ValidationNameError(NameErr::NameEmpty));
    }

    // Length in characters, not bytes
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(Rejection::ValidationNameError(
            NameErr::NameTooLongMoreThanTenChars,
        ));
    }

    // Allow only ASCII letters, whitespace and '-'
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
    {
        return Err(Rejection::ValidationNameError(
            NameErr::NameContainsInvalidChars,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_spaces_and_hyphens() {
        assert!(name_validate("Ann").is_ok());
        assert!(name_validate("Mary-Jo").is_ok());
        assert!(name_validate("De la Cruz").is_ok());
        assert!(name_validate("abcdefghij").is_ok());
    }

    #[test]
    fn rejects_empty_long_and_odd_chars() {
        assert_eq!(
            name_validate(""),
            Err(Rejection::ValidationNameError(NameErr::NameEmpty))
        );
        assert_eq!(
            name_validate("abcdefghijk"),
            Err(Rejection::ValidationNameError(
                NameErr::NameTooLongMoreThanTenChars
            ))
        );
        assert_eq!(
            name_validate("O'Neil"),
            Err(Rejection::ValidationNameError(
                NameErr::NameContainsInvalidChars
            ))
        );
        assert!(name_validate("Jo3").is_err());
        assert!(name_validate("Zoë").is_err());
    }
}
