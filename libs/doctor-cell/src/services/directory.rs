use crate::models::Doctor;

const KNOWN_DOCTORS: [&str; 5] = [
    "Jason Held",
    "Vincent Chen",
    "Austin Shum",
    "Manan Gosalia",
    "Yuhao Gao",
];

/// Receivers offered by the doctor messaging form.
pub const MESSAGE_RECEIVERS: [&str; 4] = [
    "Dr. Jason Held",
    "Dr. Vincent Chen",
    "Nurse Emily",
    "Admin Sara",
];

/// Fixed roster of doctors a patient can book with.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self {
            doctors: KNOWN_DOCTORS.iter().map(|name| Doctor::new(name)).collect(),
        }
    }
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Exact, case-sensitive lookup on the booking name.
    pub fn resolve(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
