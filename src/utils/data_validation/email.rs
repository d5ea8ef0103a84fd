use crate::club_errors::Rejection;

pub const EMAIL_MIN_CHARS: usize = 5;
pub const EMAIL_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailErr {
    EmailEmpty,
    EmailTooShortLessThanFiveChars,
    EmailTooLongMoreThanThirtyChars,
    EmailNotAMailbox,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// Shape of `local@label.label...tld`: the local part is word chars, '-' or
// '.', every domain label is non-empty word chars or '-', and the last label
// is 2 to 4 chars long.
pub fn is_mailbox(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| is_word_char(c) || c == '-' || c == '.')
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if !labels
        .iter()
        .all(|l| !l.is_empty() && l.chars().all(|c| is_word_char(c) || c == '-'))
    {
        return false;
    }

    let tld_len = labels[labels.len() - 1].chars().count();
    (2..=4).contains(&tld_len)
}

// Check mail for length and mailbox shape
pub fn email_validate(email: &str) -> Result<(), Rejection> {
    if email.is_empty() {
        return Err(Rejection::ValidationEmailError(EmailErr::EmailEmpty));
    }

    let len = email.chars().count();
    if len < EMAIL_MIN_CHARS {
        return Err(Rejection::ValidationEmailError(
            EmailErr::EmailTooShortLessThanFiveChars,
        ));
    }
    if len > EMAIL_MAX_CHARS {
        return Err(Rejection::ValidationEmailError(
            EmailErr::EmailTooLongMoreThanThirtyChars,
        ));
    }

    if !is_mailbox(email) {
        return Err(Rejection::ValidationEmailError(EmailErr::EmailNotAMailbox));
    }

    Ok(())
}
