use outcome_rail::combinators::{fold, fold_right};
use outcome_rail::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepError {
    E1,
    E2,
}

#[test]
fn fold_sums_all_elements() {
    let result = fold([20, 30, 40, 50], 10, |a, b| Outcome::<_, StepError>::success(a + b));
    assert_eq!(result, Outcome::Success(150));
}

#[test]
fn fold_returns_first_failure_and_stops() {
    let mut visited = Vec::new();
    let result = fold([5, 10, 15, 20, 25], 1, |acc, x| {
        visited.push(x);
        match x {
            15 => Outcome::failure(StepError::E1),
            60 => Outcome::failure(StepError::E2),
            _ => Outcome::success(acc + x),
        }
    });

    assert_eq!(result, Outcome::Failure(StepError::E1));
    assert_eq!(visited, vec![5, 10, 15]);
}

#[test]
fn fold_earliest_failure_wins_over_later_ones() {
    let result = fold([1, 2, 3, 4], 0, |_, x| match x {
        2 => Outcome::<i32, _>::failure(StepError::E2),
        4 => Outcome::failure(StepError::E1),
        _ => Outcome::success(x),
    });
    assert_eq!(result, Outcome::Failure(StepError::E2));
}

#[test]
fn fold_does_not_advance_input_past_failure() {
    let mut source = [1, 2, 3, 4].into_iter();
    let result = fold(source.by_ref(), 0, |acc, x| {
        if x == 2 {
            Outcome::failure(x)
        } else {
            Outcome::success(acc + x)
        }
    });

    assert_eq!(result, Outcome::Failure(2));
    assert_eq!(source.collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn fold_passes_accumulator_then_element() {
    let result = fold(["b", "c"], String::from("a"), |mut acc, s| {
        acc.push_str(s);
        Outcome::<_, ()>::success(acc)
    });
    assert_eq!(result, Outcome::Success("abc".to_string()));
}

#[test]
fn fold_on_empty_sequence_returns_initial_without_calling_operation() {
    let mut calls = 0;
    let result = fold(Vec::<i32>::new(), 7, |acc, x| {
        calls += 1;
        Outcome::<_, StepError>::success(acc + x)
    });
    assert_eq!(result, Outcome::Success(7));
    assert_eq!(calls, 0);
}

#[test]
fn fold_right_visits_tail_first_with_element_then_accumulator() {
    let result = fold_right(["a", "b", "c"], String::new(), |s, mut acc: String| {
        acc.push_str(s);
        Outcome::<_, ()>::success(acc)
    });
    assert_eq!(result, Outcome::Success("cba".to_string()));
}

#[test]
fn fold_right_returns_failure_nearest_the_tail() {
    let mut visited = Vec::new();
    let result = fold_right([1, 2, 3, 4, 5], 0, |x, acc| {
        visited.push(x);
        match x {
            2 => Outcome::failure(StepError::E1),
            4 => Outcome::failure(StepError::E2),
            _ => Outcome::success(acc + x),
        }
    });

    // The left-to-right fold would report E1; scanning from the tail meets E2 first.
    assert_eq!(result, Outcome::Failure(StepError::E2));
    assert_eq!(visited, vec![5, 4]);
}

#[test]
fn fold_and_fold_right_disagree_on_which_failure_wins() {
    let step = |x: i32| {
        if x % 3 == 0 {
            Outcome::failure(x)
        } else {
            Outcome::success(x)
        }
    };
    let input = [1, 3, 4, 6, 7];

    assert_eq!(fold(input, 0, |_, x| step(x)), Outcome::Failure(3));
    assert_eq!(fold_right(input, 0, |x, _| step(x)), Outcome::Failure(6));
}

#[test]
fn fold_right_on_empty_sequence_returns_initial() {
    let result = fold_right(Vec::<i32>::new(), 7, |x, acc| Outcome::<_, StepError>::success(acc + x));
    assert_eq!(result, Outcome::Success(7));
}

#[test]
fn folds_accept_borrowed_sequences() {
    let values = vec![1, 2, 3];
    let left = fold(&values, 0, |acc, x| Outcome::<_, ()>::success(acc * 10 + x));
    let right = fold_right(&values, 0, |x, acc| Outcome::<_, ()>::success(acc * 10 + x));

    assert_eq!(left, Outcome::Success(123));
    assert_eq!(right, Outcome::Success(321));
}
