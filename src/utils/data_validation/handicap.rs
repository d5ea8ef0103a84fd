use crate::club_errors::Rejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandicapErr {
    HandicapNotSelected,
}

// 0.0 is what an untouched form field submits. Other out-of-range values are
// left to utils::constraints.
pub fn handicap_validate(handicap: f64) -> Result<(), Rejection> {
    if handicap == 0.0 {
        return Err(Rejection::ValidationHandicapError(
            HandicapErr::HandicapNotSelected,
        ));
    }
    Ok(())
}
