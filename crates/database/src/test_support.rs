use crate::{db::Store, persistence::MemoryStore};
use models::{collection::Collection, course_data::Course, faculty_data::Faculty};
use std::sync::Arc;

#[allow(clippy::too_many_arguments)]
pub(crate) fn course(
    id: i64,
    name: &str,
    code: &str,
    description: &str,
    credits: i64,
    department: &str,
    prerequisites: &[i64],
    faculty_id: i64,
) -> Course {
    Course {
        id,
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        credits,
        department: department.to_string(),
        prerequisites: prerequisites.to_vec(),
        faculty_id,
        semester: None,
    }
}

pub(crate) fn faculty(
    id: i64,
    first_name: &str,
    last_name: &str,
    department: &str,
    specialization: &[&str],
    office_hours: &str,
) -> Faculty {
    Faculty {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@college.edu",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department: department.to_string(),
        specialization: specialization.iter().map(|s| s.to_string()).collect(),
        office_location: format!("Room {}", 100 + id * 10),
        office_hours: office_hours.to_string(),
    }
}

pub(crate) fn sample_faculty() -> Vec<Faculty> {
    vec![
        faculty(1, "Ana", "Lee", "CSE", &["ML", "AI"], "Mon/Wed 9:00-17:00"),
        faculty(2, "Ravi", "Kumar", "ECE", &["VLSI", "Embedded"], "Tue/Thu 10:00-18:00"),
        faculty(3, "Maria", "Garcia", "AI", &["Deep Learning", "NLP"], "Fri/Mon 11:00-19:00"),
        faculty(
            4,
            "John",
            "Smith",
            "Mechanical",
            &["Thermodynamics", "Fluid Mechanics"],
            "Wed/Fri 9:00-17:00",
        ),
    ]
}

/// Seven courses with a dangling prerequisite (999), a dangling faculty (99)
/// and a prerequisite cycle between 106 and 107
pub(crate) fn sample_courses() -> Vec<Course> {
    let mut courses = vec![
        course(101, "Intro to AI", "CS101", "Covers search, logic and learning agents.", 3, "CSE", &[], 1),
        course(102, "Machine Learning", "CS201", "Covers supervised learning and neural nets.", 4, "CSE", &[101], 1),
        course(103, "Deep Learning", "AI301", "Covers deep neural networks for vision.", 4, "AI", &[102, 101], 3),
        course(104, "Digital Circuits", "EC110", "Covers logic gates and VLSI basics.", 3, "ECE", &[], 2),
        course(105, "Embedded Systems", "EC220", "Covers microcontrollers and firmware.", 2, "ECE", &[104, 999], 2),
        course(106, "Graph Theory", "CS150", "Covers graphs and trees.", 3, "CSE", &[107], 99),
        course(107, "Discrete Math", "CS140", "Covers proofs and combinatorics.", 2, "CSE", &[106], 1),
    ];
    courses[0].semester = Some("Fall".to_string());
    courses[1].semester = Some("Spring".to_string());
    courses
}

/// Opens a store over in-memory collections
pub(crate) fn store_with(courses: &[Course], faculty: &[Faculty]) -> (Store, Arc<MemoryStore>) {
    let persistence = Arc::new(
        MemoryStore::new()
            .with_records(
                Collection::Courses,
                courses.iter().map(|c| serde_json::to_value(c).unwrap()).collect(),
            )
            .with_records(
                Collection::Faculty,
                faculty.iter().map(|f| serde_json::to_value(f).unwrap()).collect(),
            ),
    );
    let store = Store::open(persistence.clone()).unwrap();

    (store, persistence)
}

pub(crate) fn sample_store() -> Store {
    store_with(&sample_courses(), &sample_faculty()).0
}

pub(crate) fn ids<T: crate::record::Record>(records: &[T]) -> Vec<i64> {
    records.iter().map(|r| r.id()).collect()
}
