use chrono::NaiveTime;
use tracing::debug;
use uuid::Uuid;

use billing_cell::Money;

use crate::models::{Doctor, DoctorError, DoctorSearchFilters};

/// Half-hour consultation slots offered by every listed practitioner:
/// a morning block (09:00-11:30) and an afternoon block (14:00-16:30).
const SLOT_TIMES: [(u32, u32); 12] = [
    (9, 0),
    (9, 30),
    (10, 0),
    (10, 30),
    (11, 0),
    (11, 30),
    (14, 0),
    (14, 30),
    (15, 0),
    (15, 30),
    (16, 0),
    (16, 30),
];

/// Read-only doctor directory.
///
/// Stands in for the doctors table; the platform seeds it at startup and
/// bookings resolve practitioners (and their listed fees) against it.
pub struct DoctorDirectoryService {
    doctors: Vec<Doctor>,
}

impl DoctorDirectoryService {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Directory seeded with the platform's launch practitioners.
    pub fn with_seed_directory() -> Self {
        Self::new(seed_doctors())
    }

    /// Case-insensitive substring search over name, specialty and clinic.
    pub fn search(&self, filters: &DoctorSearchFilters) -> Vec<Doctor> {
        debug!("Searching doctors with filters: {:?}", filters);

        let needle = filters.q.as_deref().unwrap_or("").to_lowercase();
        let available_only = filters.available_only.unwrap_or(false);

        self.doctors
            .iter()
            .filter(|doctor| {
                if available_only && !doctor.available {
                    return false;
                }
                if needle.is_empty() {
                    return true;
                }
                doctor.name.to_lowercase().contains(&needle)
                    || doctor.specialty.to_lowercase().contains(&needle)
                    || doctor.clinic.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, doctor_id: Uuid) -> Result<Doctor, DoctorError> {
        self.doctors
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .cloned()
            .ok_or(DoctorError::NotFound)
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    /// The consultation slots a patient can pick from.
    pub fn offered_slots(&self) -> Vec<NaiveTime> {
        SLOT_TIMES
            .iter()
            .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .collect()
    }
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Sarah Johnson".to_string(),
            specialty: "Cardiologist".to_string(),
            clinic: "City Heart Clinic".to_string(),
            rating: 4.9,
            review_count: 234,
            years_experience: 15,
            consultation_fee: Money::from_major(150),
            available: true,
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Michael Chen".to_string(),
            specialty: "General Physician".to_string(),
            clinic: "Central Medical Center".to_string(),
            rating: 4.8,
            review_count: 189,
            years_experience: 12,
            consultation_fee: Money::from_major(100),
            available: true,
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Emily Rodriguez".to_string(),
            specialty: "Dermatologist".to_string(),
            clinic: "Skin Care Excellence".to_string(),
            rating: 4.9,
            review_count: 312,
            years_experience: 10,
            consultation_fee: Money::from_major(120),
            available: true,
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. James Wilson".to_string(),
            specialty: "Orthopedic".to_string(),
            clinic: "Joint & Bone Center".to_string(),
            rating: 4.7,
            review_count: 156,
            years_experience: 18,
            consultation_fee: Money::from_major(180),
            available: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_specialty_and_clinic() {
        let directory = DoctorDirectoryService::with_seed_directory();

        let by_name = directory.search(&DoctorSearchFilters {
            q: Some("sarah".to_string()),
            ..Default::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Dr. Sarah Johnson");

        let by_specialty = directory.search(&DoctorSearchFilters {
            q: Some("DERMA".to_string()),
            ..Default::default()
        });
        assert_eq!(by_specialty.len(), 1);
        assert_eq!(by_specialty[0].clinic, "Skin Care Excellence");

        let by_clinic = directory.search(&DoctorSearchFilters {
            q: Some("bone".to_string()),
            ..Default::default()
        });
        assert_eq!(by_clinic.len(), 1);
    }

    #[test]
    fn test_search_available_only() {
        let directory = DoctorDirectoryService::with_seed_directory();

        let all = directory.search(&DoctorSearchFilters::default());
        assert_eq!(all.len(), 4);

        let available = directory.search(&DoctorSearchFilters {
            available_only: Some(true),
            ..Default::default()
        });
        assert_eq!(available.len(), 3);
        assert!(available.iter().all(|doctor| doctor.available));
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let directory = DoctorDirectoryService::with_seed_directory();
        let none = directory.search(&DoctorSearchFilters {
            q: Some("neurology".to_string()),
            ..Default::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn test_get_unknown_doctor() {
        let directory = DoctorDirectoryService::with_seed_directory();
        assert_eq!(directory.get(Uuid::new_v4()), Err(DoctorError::NotFound));
    }

    #[test]
    fn test_offered_slots_cover_both_blocks() {
        let directory = DoctorDirectoryService::with_seed_directory();
        let slots = directory.offered_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0], NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[11], NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        // Lunch break: nothing between 11:30 and 14:00.
        assert!(!slots.contains(&NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    }
}
