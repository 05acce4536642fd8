use crate::modules::models::championship::RaceResult;
use crate::modules::models::driver::Driver;

pub const PARTICIPATION_BONUS: i32 = 5;
pub const POLE_POSITION_BONUS: i32 = 2;
pub const FASTEST_LAP_BONUS: i32 = 2;
pub const MOST_CONSISTENT_BONUS: i32 = 2;

pub struct Points {}

impl Points {
    /// points for a finishing position. 1st through 10th score, 11th
    /// through 15th classify but score 0.
    pub fn for_position(position: i32) -> i32 {
        match position {
            1 => 20,
            2 => 17,
            3 => 15,
            4 => 13,
            5 => 11,
            6 => 9,
            7 => 7,
            8 => 5,
            9 => 3,
            10 => 1,
            _ => 0,
        }
    }

    /// # points for one race result
    /// position points only count for a classified finish (participated,
    /// position 1-15). every participant except Max Verstappen gets the
    /// flat participation bonus on top. the pole/fastest-lap/consistency
    /// bonuses are awarded on their flags alone, independent of
    /// participation.
    ///
    /// ## Arguments
    /// * `result` - the race result to score
    /// * `driver` - the driver the result belongs to
    ///
    /// ## Returns
    /// * `i32` - total points for the result, never negative
    pub fn for_race(result: &RaceResult, driver: &Driver) -> i32 {
        let mut points = 0;

        if result.participated && (1..=15).contains(&result.position) {
            points += Points::for_position(result.position);
        }

        if result.participated && !driver.is_max_verstappen {
            points += PARTICIPATION_BONUS;
        }

        if result.pole_position {
            points += POLE_POSITION_BONUS;
        }
        if result.fastest_lap {
            points += FASTEST_LAP_BONUS;
        }
        if result.most_consistent {
            points += MOST_CONSISTENT_BONUS;
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn result(position: i32, participated: bool) -> RaceResult {
        RaceResult {
            id: "rossi".to_string(),
            name: "Marco Rossi".to_string(),
            position,
            pole_position: false,
            fastest_lap: false,
            most_consistent: false,
            participated,
            is_dropped: false,
        }
    }

    fn driver(name: &str) -> Driver {
        Driver {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            is_max_verstappen: name.to_lowercase().contains("max verstappen"),
        }
    }

    #[rstest]
    #[case(1, 20)]
    #[case(2, 17)]
    #[case(3, 15)]
    #[case(4, 13)]
    #[case(5, 11)]
    #[case(6, 9)]
    #[case(7, 7)]
    #[case(8, 5)]
    #[case(9, 3)]
    #[case(10, 1)]
    #[case(11, 0)]
    #[case(15, 0)]
    #[case(16, 0)]
    #[case(0, 0)]
    fn position_table(#[case] position: i32, #[case] expected: i32) {
        assert_eq!(Points::for_position(position), expected);
    }

    #[test]
    fn non_starter_without_bonuses_scores_zero() {
        assert_eq!(Points::for_race(&result(1, false), &driver("Marco Rossi")), 0);
    }

    #[rstest]
    #[case(11)]
    #[case(13)]
    #[case(15)]
    fn back_of_the_field_scores_only_bonuses(#[case] position: i32) {
        let mut race = result(position, true);
        race.pole_position = true;
        race.most_consistent = true;

        // participation bonus plus the two set bonuses, nothing for position
        assert_eq!(
            Points::for_race(&race, &driver("Marco Rossi")),
            PARTICIPATION_BONUS + POLE_POSITION_BONUS + MOST_CONSISTENT_BONUS
        );
    }

    #[test]
    fn max_verstappen_never_gets_the_participation_bonus() {
        let race = result(1, true);
        assert_eq!(Points::for_race(&race, &driver("Max Verstappen")), 20);
        assert_eq!(Points::for_race(&race, &driver("Marco Rossi")), 25);
    }

    #[test]
    fn flag_bonuses_apply_even_without_participation() {
        let mut race = result(3, false);
        race.fastest_lap = true;

        // observed behavior of the scoring rules: a non-starter keeps the
        // fastest-lap bonus
        assert_eq!(Points::for_race(&race, &driver("Marco Rossi")), FASTEST_LAP_BONUS);
    }
}
