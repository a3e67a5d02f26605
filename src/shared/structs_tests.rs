/*
 * Unit tests for shared structs
 *
 * Tests:
 * - test_direction_between
 * - test_passenger_from_pair
 * - test_passenger_serde_shape
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::Direction::{Down, Stop, Up};
    use crate::shared::{Direction, Passenger};

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(0, 3), Up);
        assert_eq!(Direction::between(3, -2), Down);
        assert_eq!(Direction::between(-1, -1), Stop);
        assert_eq!(Passenger::new(6, 2).direction(), Down);
    }

    #[test]
    fn test_passenger_from_pair() {
        // Arrange
        let pair = (-3, 7);

        // Act
        let passenger: Passenger = pair.into();

        // Assert
        assert_eq!(passenger.origin, -3);
        assert_eq!(passenger.destination, 7);
        assert_eq!(passenger.to_string(), "-3 -> 7");
    }

    #[test]
    fn test_passenger_serde_shape() {
        // Arrange
        let passenger = Passenger::new(1, 5);

        // Act
        let json = serde_json::to_string(&passenger).unwrap();

        // Assert
        assert_eq!(json, r#"{"origin":1,"destination":5}"#);
        assert_eq!(passenger.direction().to_string(), "up");
    }
}
