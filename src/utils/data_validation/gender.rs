use crate::club_errors::Rejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenderErr {
    GenderNotSelected,
}

// Only presence is checked here. The M/F/O code is a declared constraint,
// see utils::constraints.
pub fn gender_validate(gender: &str) -> Result<(), Rejection> {
    if gender.is_empty() {
        return Err(Rejection::ValidationGenderError(
            GenderErr::GenderNotSelected,
        ));
    }
    Ok(())
}
