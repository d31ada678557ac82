use crate::{CalendarSystem, DateField, ExternalDate, FieldValue, LocalDate, MonthDay};

pub fn month_day(month: i32, day: i32) -> MonthDay {
    MonthDay::of(month, day).unwrap()
}

pub fn date(year: i32, month: i32, day: i32) -> LocalDate {
    LocalDate::of(year, month, day).unwrap()
}

/// 1 Ramadan 1445, which fell on 2024-03-11.
pub fn hijri_ramadan_first() -> ExternalDate {
    ExternalDate::new(
        CalendarSystem::Other("Hijrah".to_owned()),
        [
            FieldValue::of(DateField::MonthOfYear, 9),
            FieldValue::of(DateField::DayOfMonth, 1),
            FieldValue::of(DateField::EpochDay, 19_793),
        ],
    )
}
