use chrono::{NaiveDateTime, NaiveTime};

use crate::club_errors::{BookingErr, Rejection};

pub fn slots_validate(slots: &[i32; 4]) -> Result<(), Rejection> {
    for (i, id) in slots.iter().enumerate() {
        if slots[i + 1..].contains(id) {
            return Err(BookingErr::PlayersNotUnique.into());
        }
    }
    Ok(())
}

// Midnight is what the form submits when no time was picked
pub fn game_time_validate(game_time: &NaiveDateTime) -> Result<(), Rejection> {
    if game_time.time() == NaiveTime::MIN {
        return Err(BookingErr::InvalidTime.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn slots_must_be_pairwise_distinct() {
        assert!(slots_validate(&[1, 2, 3, 4]).is_ok());
        assert!(slots_validate(&[99, 99, 98, 97]).is_err());
        assert!(slots_validate(&[1, 2, 3, 1]).is_err());
        assert!(slots_validate(&[1, 2, 4, 4]).is_err());
    }

    #[test]
    fn midnight_is_not_a_time() {
        let day = NaiveDate::from_ymd_opt(2029, 1, 29).unwrap();
        assert_eq!(
            game_time_validate(&day.and_hms_opt(0, 0, 0).unwrap()),
            Err(Rejection::BookingError(BookingErr::InvalidTime))
        );
        assert!(game_time_validate(&day.and_hms_opt(0, 1, 0).unwrap()).is_ok());
        assert!(game_time_validate(&day.and_hms_opt(17, 30, 0).unwrap()).is_ok());
    }
}
