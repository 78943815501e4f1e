/*
 * Unit tests for the shared data model
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_direction_between
 *  - test_direction_same_floor
 *  - test_direction_step
 *  - test_direction_serde_names
 *  - test_request_between
 *  - test_request_between_same_floor
 *  - test_request_keeps_stated_direction
 *  - test_elevator_predicates
 *  - test_system_state_new
 *  - test_system_state_request_count
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Direction, DispatchError, ElevatorState, PickupRequest, SystemState};

    #[test]
    fn test_direction_between() {
        // Act
        let up = Direction::between(1, 4);
        let down = Direction::between(4, -1);

        // Assert
        assert_eq!(up, Ok(Up));
        assert_eq!(down, Ok(Down));
    }

    #[test]
    fn test_direction_same_floor() {
        // Act
        let result = Direction::between(3, 3);

        // Assert
        assert_eq!(result, Err(DispatchError::SameFloorDirection { floor: 3 }));
    }

    #[test]
    fn test_direction_step() {
        assert_eq!(Up.step(), 1);
        assert_eq!(Down.step(), -1);
    }

    #[test]
    fn test_direction_serde_names() {
        // Act
        let json = serde_json::to_string(&vec![Up, Down]).unwrap();

        // Assert
        assert_eq!(json, r#"["up","down"]"#);
    }

    #[test]
    fn test_request_between() {
        // Act
        let request = PickupRequest::between(5, 2).unwrap();

        // Assert
        assert_eq!(request, PickupRequest::new(5, Down, 2));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_between_same_floor() {
        // Act
        let result = PickupRequest::between(2, 2);

        // Assert
        assert_eq!(result, Err(DispatchError::MalformedRequest { floor: 2 }));
        assert_eq!(
            PickupRequest::new(2, Up, 2).validate(),
            Err(DispatchError::MalformedRequest { floor: 2 })
        );
    }

    #[test]
    fn test_request_keeps_stated_direction() {
        // Arrange
        // A rider pressing "up" and then choosing a lower floor is passed through as-is
        let request = PickupRequest::new(3, Up, 1);

        // Assert
        assert_eq!(request.direction, Up);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_elevator_predicates() {
        // Arrange
        let idle = ElevatorState::new(0);
        let fetching = ElevatorState {
            fetch_target: Some(4),
            ..ElevatorState::new(1)
        };
        let riding = ElevatorState {
            riding_queue: vec![PickupRequest::new(0, Up, 2)],
            ..ElevatorState::new(2)
        };

        // Assert
        assert!(idle.is_idle());
        assert!(!idle.is_fetching());
        assert!(!fetching.is_idle());
        assert!(fetching.is_fetching());
        assert!(!riding.is_idle());
        assert!(!riding.is_fetching());
    }

    #[test]
    fn test_system_state_new() {
        // Act
        let state = SystemState::new(3);

        // Assert
        assert!(state.pending_requests.is_empty());
        assert_eq!(state.elevators.len(), 3);
        for (index, elevator) in state.elevators.iter().enumerate() {
            assert_eq!(elevator.id, index);
            assert_eq!(elevator.floor, 0);
            assert!(elevator.is_idle());
        }
    }

    #[test]
    fn test_system_state_request_count() {
        // Arrange
        let mut state = SystemState::new(2);
        state.pending_requests.push(PickupRequest::new(1, Up, 2));
        state.elevators[0].riding_queue.push(PickupRequest::new(0, Up, 3));
        state.elevators[1].riding_queue.push(PickupRequest::new(0, Up, 1));
        state.elevators[1].riding_queue.push(PickupRequest::new(0, Up, 4));

        // Assert
        assert_eq!(state.request_count(), 4);
    }
}
