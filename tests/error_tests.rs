use sentvec::{SentVec, SentVecError};

#[test]
fn test_pop_empty_reports_failure() {
    let mut vec: SentVec<i32> = SentVec::new();

    assert_eq!(vec.pop(), None);
    assert_eq!(
        vec.try_pop().unwrap_err(),
        SentVecError::Empty { operation: "pop" }
    );

    // The container is still usable afterwards.
    vec.push(1);
    assert_eq!(vec.try_pop(), Ok(1));
}

#[test]
fn test_insert_on_empty_is_error() {
    let mut vec: SentVec<i32> = SentVec::new();

    assert_eq!(
        vec.insert_at(0, 1).unwrap_err(),
        SentVecError::Empty {
            operation: "insert"
        }
    );
    assert!(vec.is_empty());
}

#[test]
fn test_cursor_insert_on_empty_is_error() {
    let mut vec: SentVec<i32> = SentVec::new();

    let mut cur = vec.cursor_mut(0);
    assert_eq!(
        cur.insert(1).unwrap_err(),
        SentVecError::Empty {
            operation: "insert"
        }
    );
    // A failed insert does not move the cursor.
    assert_eq!(cur.position(), 0);
}

#[test]
fn test_erase_on_empty_is_error() {
    let mut vec: SentVec<i32> = SentVec::new();

    assert_eq!(
        vec.remove_at(0).unwrap_err(),
        SentVecError::Empty { operation: "erase" }
    );
}

#[test]
fn test_erase_out_of_bounds() {
    let mut vec: SentVec<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(
        vec.remove_at(5).unwrap_err(),
        SentVecError::PositionOutOfBounds {
            position: 5,
            length: 3
        }
    );
    assert_eq!(
        vec.remove_at(-1).unwrap_err(),
        SentVecError::PositionOutOfBounds {
            position: -1,
            length: 3
        }
    );
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_erase_at_end_position_is_error() {
    let mut vec: SentVec<i32> = [1, 2].into_iter().collect();

    let mut cur = vec.cursor_mut(2);
    assert_eq!(
        cur.remove().unwrap_err(),
        SentVecError::PositionOutOfBounds {
            position: 2,
            length: 2
        }
    );
}

#[test]
fn test_error_display_messages() {
    let empty = SentVecError::Empty { operation: "pop" };
    assert_eq!(empty.to_string(), "Operation on empty container: pop");

    let oob = SentVecError::PositionOutOfBounds {
        position: 5,
        length: 3,
    };
    assert_eq!(
        oob.to_string(),
        "Position out of bounds: position 5 is beyond container length 3"
    );
}

#[test]
fn test_errors_are_cloneable_and_comparable() {
    let err = SentVecError::Empty { operation: "erase" };
    let copy = err.clone();

    assert_eq!(err, copy);
    assert_ne!(err, SentVecError::Empty { operation: "pop" });
}
