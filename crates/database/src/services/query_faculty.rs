use crate::{
    db::Store,
    error::DbResult,
    matcher::{DEFAULT_MAX_MATCHES, close_matches, threshold_cutoff},
    services::specializes_in,
    text::contains_ci,
};
use models::faculty_data::{Faculty, FacultyContact};

pub struct QueryFacultyService;

impl QueryFacultyService {
    /// Case-insensitive search across every faculty field
    pub fn search_faculty(store: &Store, query: &str) -> Vec<Faculty> {
        let q = query.to_lowercase();

        store.faculty().filter(|f| {
            f.id.to_string().contains(&q)
                || contains_ci(&f.first_name, &q)
                || contains_ci(&f.last_name, &q)
                || contains_ci(&f.email, &q)
                || contains_ci(&f.department, &q)
                || contains_ci(&f.office_location, &q)
                || contains_ci(&f.office_hours, &q)
                || specializes_in(f, &q)
        })
    }

    /// Faculty whose office hours mention `day`
    ///
    /// This is a plain substring test on the free-text office hours, so "Mon"
    /// matches "Mon/Wed 9:00-17:00" and so does "9:00".
    pub fn faculty_available_on(store: &Store, day: &str) -> Vec<Faculty> {
        let day = day.to_lowercase();
        store.faculty().filter(|f| contains_ci(&f.office_hours, &day))
    }

    pub fn faculty_by_specialization(store: &Store, topic: &str) -> Vec<Faculty> {
        let topic = topic.to_lowercase();
        store.faculty().filter(|f| specializes_in(f, &topic))
    }

    /// Contact cards for everyone in `department` (case-insensitive)
    pub fn contact_list(store: &Store, department: &str) -> Vec<FacultyContact> {
        let department = department.to_lowercase();

        store.faculty().read(|faculty| {
            faculty
                .iter()
                .filter(|f| f.department.to_lowercase() == department)
                .map(FacultyContact::from)
                .collect()
        })
    }

    /// Faculty whose "first last" name closely matches `term`
    pub fn fuzzy_faculty(store: &Store, term: &str, threshold: i64) -> DbResult<Vec<Faculty>> {
        let cutoff = threshold_cutoff(threshold)?;

        store.faculty().read(|faculty| {
            let names: Vec<String> = faculty.iter().map(Faculty::full_name).collect();
            let matches = close_matches(
                term,
                names.iter().map(String::as_str),
                DEFAULT_MAX_MATCHES,
                cutoff,
            )?;

            Ok(faculty
                .iter()
                .zip(&names)
                .filter(|(_, name)| matches.contains(&name.as_str()))
                .map(|(f, _)| f.clone())
                .collect())
        })
    }
}
