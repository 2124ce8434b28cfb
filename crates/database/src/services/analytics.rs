use crate::{
    db::Store,
    error::{DbError, DbResult},
    services::{faculty_for, specializes_in},
    text::contains_ci,
};
use models::{
    collection::Collection,
    course_data::{Course, CourseWithFaculty, PrerequisiteDetail, PrerequisiteReport},
    faculty_data::{Faculty, FacultyLoad, FacultySummary, TopFaculty},
    query::SearchAll,
};
use std::collections::HashMap;

/// Joins and aggregations spanning both collections
pub struct AnalyticsService;

impl AnalyticsService {
    /// Attaches the course's faculty member, when one exists
    pub fn enrich(faculty: &[Faculty], course: Course) -> CourseWithFaculty {
        let faculty_details = faculty_for(faculty, &course).cloned();
        CourseWithFaculty {
            course,
            faculty_details,
        }
    }

    /// A single course with its faculty member attached
    pub fn enriched_course(store: &Store, course_id: i64) -> DbResult<CourseWithFaculty> {
        let course = store
            .courses()
            .get(course_id)
            .ok_or_else(|| DbError::not_found(Collection::Courses, course_id))?;

        Ok(store
            .faculty()
            .read(|faculty| Self::enrich(faculty, course)))
    }

    /// Every course whose faculty member exists, with that member attached
    ///
    /// Courses pointing at a missing faculty id are left out.
    pub fn courses_with_faculty(store: &Store) -> Vec<CourseWithFaculty> {
        store.read_both(|courses, faculty| {
            courses
                .iter()
                .filter_map(|c| {
                    faculty_for(faculty, c).map(|f| CourseWithFaculty {
                        course: c.clone(),
                        faculty_details: Some(f.clone()),
                    })
                })
                .collect()
        })
    }

    /// Direct prerequisites of a course with each one's instructor contact
    pub fn prerequisite_report(store: &Store, course_id: i64) -> DbResult<PrerequisiteReport> {
        store.read_both(|courses, faculty| {
            let course = courses
                .iter()
                .find(|c| c.id == course_id)
                .ok_or_else(|| DbError::not_found(Collection::Courses, course_id))?;

            let prerequisites = course
                .prerequisites
                .iter()
                .filter_map(|id| courses.iter().find(|c| c.id == *id))
                .map(|pre| {
                    let instructor = faculty_for(faculty, pre);
                    PrerequisiteDetail {
                        course_id: pre.id,
                        course_code: pre.code.clone(),
                        course_name: pre.name.clone(),
                        faculty_id: instructor.map(|f| f.id),
                        faculty_name: instructor.map(Faculty::full_name),
                        faculty_email: instructor.map(|f| f.email.clone()),
                    }
                })
                .collect();

            Ok(PrerequisiteReport {
                course: course.name.clone(),
                prerequisites,
            })
        })
    }

    /// Number of courses in each department
    pub fn department_course_count(store: &Store) -> HashMap<String, usize> {
        store.courses().read(|courses| {
            let mut counts = HashMap::new();
            for course in courses {
                *counts.entry(course.department.clone()).or_insert(0) += 1;
            }
            counts
        })
    }

    /// All faculty members tied for teaching the most courses
    ///
    /// Every faculty member starts at zero and courses pointing at unknown
    /// faculty are ignored, so a faculty with no courses can still tie at zero.
    pub fn faculty_with_most_courses(store: &Store) -> TopFaculty {
        store.read_both(|courses, faculty| {
            let mut counts: HashMap<i64, usize> = faculty.iter().map(|f| (f.id, 0)).collect();

            for course in courses {
                if let Some(count) = counts.get_mut(&course.faculty_id) {
                    *count += 1;
                }
            }

            let max_courses = counts.values().copied().max().unwrap_or(0);
            let top = faculty
                .iter()
                .filter(|f| counts.get(&f.id) == Some(&max_courses))
                .cloned()
                .collect();

            TopFaculty {
                max_courses,
                faculty: top,
            }
        })
    }

    /// The faculty member referenced by the most courses
    ///
    /// Unlike [`faculty_with_most_courses`](Self::faculty_with_most_courses),
    /// a tie goes to the faculty id that appears first in the course list.
    /// Returns `None` when there are no courses or the winning id has no
    /// faculty record.
    pub fn faculty_course_load(store: &Store) -> Option<FacultyLoad> {
        let (faculty_id, max_courses) = store.courses().read(|courses| {
            let mut order = Vec::new();
            let mut counts: HashMap<i64, usize> = HashMap::new();

            for course in courses {
                let count = counts.entry(course.faculty_id).or_insert_with(|| {
                    order.push(course.faculty_id);
                    0
                });
                *count += 1;
            }

            let mut best: Option<(i64, usize)> = None;
            for id in order {
                let count = counts[&id];
                if best.is_none_or(|(_, best_count)| count > best_count) {
                    best = Some((id, count));
                }
            }
            best
        })?;

        let faculty = store.faculty().get(faculty_id)?;
        Some(FacultyLoad {
            max_courses,
            faculty: FacultySummary::from(&faculty),
        })
    }

    /// Search course names, descriptions and codes alongside faculty names and
    /// specializations
    pub fn search_all(store: &Store, query: &str) -> SearchAll {
        let q = query.to_lowercase();

        let courses = store.courses().filter(|c| {
            contains_ci(&c.name, &q) || contains_ci(&c.description, &q) || contains_ci(&c.code, &q)
        });
        let faculty = store.faculty().filter(|f| {
            contains_ci(&f.first_name, &q) || contains_ci(&f.last_name, &q) || specializes_in(f, &q)
        });

        SearchAll { courses, faculty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course, faculty, ids, sample_courses, sample_faculty, sample_store, store_with};

    #[test]
    fn test_enrich_attaches_faculty() {
        let ana = faculty(1, "Ana", "Lee", "CSE", &["ML"], "Mon/Wed 9:00-17:00");
        let (store, _) = store_with(
            &[course(101, "Intro to AI", "CS101", "", 3, "CSE", &[], 1)],
            &[ana.clone()],
        );

        let enriched = AnalyticsService::enriched_course(&store, 101).unwrap();
        assert_eq!(enriched.course.id, 101);
        assert_eq!(enriched.faculty_details, Some(ana));
    }

    #[test]
    fn test_enrich_leaves_dangling_course_unmodified() {
        let store = sample_store();

        let enriched = AnalyticsService::enriched_course(&store, 106).unwrap();
        assert_eq!(enriched.faculty_details, None);
        assert_eq!(enriched.course, store.courses().get(106).unwrap());

        let value = serde_json::to_value(&enriched).unwrap();
        let original = serde_json::to_value(store.courses().get(106).unwrap()).unwrap();
        assert_eq!(value, original);

        assert!(AnalyticsService::enriched_course(&store, 4242)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_courses_with_faculty_skips_dangling_references() {
        let store = sample_store();

        let enriched = AnalyticsService::courses_with_faculty(&store);
        let course_ids: Vec<i64> = enriched.iter().map(|e| e.course.id).collect();

        assert_eq!(course_ids, [101, 102, 103, 104, 105, 107]);
        assert!(enriched.iter().all(|e| e.faculty_details.is_some()));
    }

    #[test]
    fn test_prerequisite_report() {
        let store = sample_store();

        let report = AnalyticsService::prerequisite_report(&store, 103).unwrap();
        assert_eq!(report.course, "Deep Learning");
        assert_eq!(report.prerequisites.len(), 2);
        assert_eq!(report.prerequisites[0].course_id, 102);
        assert_eq!(report.prerequisites[0].faculty_name.as_deref(), Some("Ana Lee"));
        assert_eq!(report.prerequisites[1].course_code, "CS101");

        // 999 does not exist and is skipped
        let report = AnalyticsService::prerequisite_report(&store, 105).unwrap();
        assert_eq!(report.prerequisites.len(), 1);

        // 106's faculty does not exist, so its contact is empty
        let report = AnalyticsService::prerequisite_report(&store, 107).unwrap();
        assert_eq!(report.prerequisites[0].course_id, 106);
        assert_eq!(report.prerequisites[0].faculty_id, None);
        assert_eq!(report.prerequisites[0].faculty_email, None);

        assert!(AnalyticsService::prerequisite_report(&store, 1).is_err());
    }

    #[test]
    fn test_department_course_count() {
        let (store, _) = store_with(
            &[
                course(1, "A", "A1", "", 3, "CSE", &[], 1),
                course(2, "B", "B1", "", 3, "CSE", &[], 1),
                course(3, "C", "C1", "", 3, "ECE", &[], 1),
            ],
            &[],
        );

        let counts = AnalyticsService::department_course_count(&store);
        assert_eq!(
            counts,
            HashMap::from([("CSE".to_string(), 2), ("ECE".to_string(), 1)])
        );
    }

    #[test]
    fn test_faculty_with_most_courses() {
        let store = sample_store();

        let top = AnalyticsService::faculty_with_most_courses(&store);
        assert_eq!(top.max_courses, 3);
        assert_eq!(ids(&top.faculty), [1]);
    }

    #[test]
    fn test_most_courses_tie_policies_differ() {
        let staff = sample_faculty();
        let (store, _) = store_with(
            &[
                course(1, "A", "A1", "", 3, "ECE", &[], 2),
                course(2, "B", "B1", "", 3, "CSE", &[], 1),
                course(3, "C", "C1", "", 3, "CSE", &[], 1),
                course(4, "D", "D1", "", 3, "ECE", &[], 2),
            ],
            &staff,
        );

        // Every faculty member at the maximum
        let top = AnalyticsService::faculty_with_most_courses(&store);
        assert_eq!(top.max_courses, 2);
        assert_eq!(ids(&top.faculty), [1, 2]);

        // Only the first faculty id reached in course order
        let load = AnalyticsService::faculty_course_load(&store).unwrap();
        assert_eq!(load.max_courses, 2);
        assert_eq!(load.faculty.id, 2);
        assert_eq!(load.faculty.name, "Ravi Kumar");
    }

    #[test]
    fn test_most_courses_edge_cases() {
        let (store, _) = store_with(&sample_courses(), &[]);
        let top = AnalyticsService::faculty_with_most_courses(&store);
        assert_eq!(top.max_courses, 0);
        assert!(top.faculty.is_empty());
        // Faculty 1 wins the raw count but has no record
        assert!(AnalyticsService::faculty_course_load(&store).is_none());

        let (store, _) = store_with(&[], &sample_faculty());
        let top = AnalyticsService::faculty_with_most_courses(&store);
        assert_eq!(top.max_courses, 0);
        assert_eq!(top.faculty.len(), 4);
        assert!(AnalyticsService::faculty_course_load(&store).is_none());
    }

    #[test]
    fn test_faculty_course_load_counts_dangling_ids() {
        let (store, _) = store_with(
            &[
                course(1, "A", "A1", "", 3, "CSE", &[], 99),
                course(2, "B", "B1", "", 3, "CSE", &[], 99),
                course(3, "C", "C1", "", 3, "CSE", &[], 1),
            ],
            &sample_faculty(),
        );

        assert!(AnalyticsService::faculty_course_load(&store).is_none());
    }

    #[test]
    fn test_search_all() {
        let store = sample_store();

        let results = AnalyticsService::search_all(&store, "ec1");
        assert_eq!(ids(&results.courses), [104]);
        assert!(results.faculty.is_empty());

        let results = AnalyticsService::search_all(&store, "nlp");
        assert!(results.courses.is_empty());
        assert_eq!(ids(&results.faculty), [3]);

        let results = AnalyticsService::search_all(&store, "lee");
        assert_eq!(ids(&results.faculty), [1]);
    }
}
