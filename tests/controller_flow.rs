mod common;

use common::{date, memory_controller, third_student};
use roster_core::{
    core::{Event, Transition, ViewMode},
    domain::{Field, RecordCollection},
    errors::ControllerError,
    storage::{decode_collection, MemoryBackend},
};

#[test]
fn third_record_after_seeds_shows_three_rows_in_order() {
    let backend = MemoryBackend::new();
    let mut controller = memory_controller(&backend, date(2024, 9, 1));
    assert_eq!(controller.mode(), ViewMode::Listing);

    controller.handle(Event::ShowEntryForm).unwrap();
    assert_eq!(controller.mode(), ViewMode::Entry);

    let transition = controller.handle(Event::Submit(third_student())).unwrap();
    assert!(matches!(transition, Transition::Committed(_)));
    assert_eq!(controller.mode(), ViewMode::Listing);

    let rows = controller.rows();
    let names: Vec<&str> = rows.iter().map(|row| row.full_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Иванов Иван Иванович",
            "Петров Пётр Петрович",
            "Сидоров Алексей Павлович",
        ]
    );
    assert_eq!(rows[2].birth_text, "14.03.2003 (21 лет)");
    assert_eq!(rows[2].span_text, "2021-2025");
}

#[test]
fn persisted_state_matches_in_memory_after_commit() {
    let backend = MemoryBackend::new();
    let mut controller = memory_controller(&backend, date(2024, 9, 1));
    controller.show_entry_form();
    controller.submit(third_student()).unwrap();

    let stored = decode_collection(&backend.contents().expect("slot written")).unwrap();
    assert_eq!(&stored, controller.records());

    let reopened = memory_controller(&backend, date(2024, 9, 1));
    assert_eq!(reopened.records(), controller.records());
    assert_eq!(reopened.mode(), ViewMode::Listing);
}

#[test]
fn rejected_submit_can_be_corrected_and_resubmitted() {
    let backend = MemoryBackend::with_blob("[]");
    let mut controller = memory_controller(&backend, date(2024, 9, 1));
    assert_eq!(controller.mode(), ViewMode::Entry);

    let mut candidate = third_student();
    candidate.birth_date = "2030-01-01".into();
    candidate.start_year = "2031".into();
    let Err(ControllerError::Validation(report)) = controller.submit(candidate.clone()) else {
        panic!("expected validation failure");
    };
    assert_eq!(
        report.invalid_fields(),
        vec![Field::BirthDate, Field::StartYear]
    );
    assert_eq!(controller.input(), &candidate);
    assert_eq!(backend.contents().as_deref(), Some("[]"));

    let mut corrected = controller.input().clone();
    corrected.set(Field::BirthDate, "2003-03-14");
    corrected.set(Field::StartYear, "2021");
    controller.submit(corrected).unwrap();
    assert_eq!(controller.records().len(), 1);
    assert!(controller.input().is_blank());
}

#[test]
fn rows_are_recomputed_not_cached() {
    let backend = MemoryBackend::new();
    let controller = memory_controller(&backend, date(2024, 6, 11));
    let first = controller.rows();
    let second = controller.rows();
    assert_eq!(first, second);
    assert_eq!(first[0].birth_text, "12.06.2001 (22 лет)");

    let next_day = memory_controller(&backend, date(2024, 6, 12));
    assert_eq!(next_day.rows()[0].birth_text, "12.06.2001 (23 лет)");
    assert_eq!(next_day.records(), &RecordCollection::seeded());
}
