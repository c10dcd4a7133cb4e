//! End-to-end checks of `compute_report` against the reference sample packages.
//!
//! Expected lines are the exact output of the original sensor-unit demo.

use workouts::prelude::*;

#[test]
fn test_swimming_sample() {
    let line = compute_report("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(
        line,
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn test_running_sample() {
    let line = compute_report("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(
        line,
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
    );
}

#[test]
fn test_walking_sample() {
    let line = compute_report("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(
        line,
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252."
    );
}

#[test]
fn test_other_packages() {
    let cases: [(&str, &[f64], &str); 4] = [
        (
            "RUN",
            &[100.0, 1.0, 70.0],
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 0.065 км; \
             Ср. скорость: 0.065 км/ч; Потрачено ккал: 12.432.",
        ),
        (
            "WLK",
            &[12000.0, 1.5, 80.0, 170.0],
            "Тип тренировки: SportsWalking; Длительность: 1.500 ч.; Дистанция: 7.800 км; \
             Ср. скорость: 5.200 км/ч; Потрачено ккал: 508.672.",
        ),
        (
            "SWM",
            &[1000.0, 2.0, 70.0, 50.0, 30.0],
            "Тип тренировки: Swimming; Длительность: 2.000 ч.; Дистанция: 1.380 км; \
             Ср. скорость: 0.750 км/ч; Потрачено ккал: 518.000.",
        ),
        (
            "RUN",
            &[7500.0, 0.5, 60.0],
            "Тип тренировки: Running; Длительность: 0.500 ч.; Дистанция: 4.875 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 319.122.",
        ),
    ];

    for (tag, readings, expected) in cases {
        assert_eq!(compute_report(tag, readings).unwrap(), expected, "{tag} {readings:?}");
    }
}

#[test]
fn test_sample_packages_report_in_order() {
    let kinds: Vec<_> = sample_packages()
        .iter()
        .map(|p| read_package(p).unwrap().show_training_info().training_type)
        .collect();
    assert_eq!(
        kinds,
        [
            WorkoutKind::Swimming,
            WorkoutKind::Running,
            WorkoutKind::SportsWalking
        ]
    );
}

#[test]
fn test_report_is_idempotent() {
    let readings = [9000.0, 1.0, 75.0, 180.0];
    let first = compute_report("WLK", &readings).unwrap();
    let second = compute_report("WLK", &readings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_type_is_reported() {
    let err = compute_report("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown training type: XYZ");
}

#[test]
fn test_zero_duration_is_invalid() {
    let err = compute_report("RUN", &[100.0, 0.0, 70.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::InvalidMeasurement {
            field: "duration",
            ..
        }
    ));
}

#[test]
fn test_arity_error_message() {
    let err = compute_report("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(err.to_string(), "Swimming expects 5 readings, got 3");
}
