use chrono::NaiveDate;

use crate::models::Appointment;

const SEED_ROWS: [(u64, &str, &str, (i32, u32, u32), &str, &str); 5] = [
    (1, "Jane Doe", "Jason Held", (2025, 5, 15), "10:00 AM", "Annual Physical Exam"),
    (2, "Julia Ribeiro", "Vincent Chen", (2025, 5, 20), "1:00 PM", "Blood Pressure Check"),
    (3, "Morgan", "Austin Shum", (2025, 5, 16), "3:00 PM", "Allergy Testing"),
    (4, "Jane Doe", "Manan Gosalia", (2025, 5, 18), "9:00 AM", "Follow-up Consultation"),
    (5, "Julia Ribeiro", "Yuhao Gao", (2025, 5, 26), "11:00 AM", "Vaccination Appointment"),
];

/// The fixed appointments every store starts with.
pub fn seed_appointments() -> Vec<Appointment> {
    SEED_ROWS
        .iter()
        .filter_map(|&(id, patient, doctor, (y, m, d), time, reason)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| Appointment::new(id, patient, doctor, date, time, reason))
        })
        .collect()
}
