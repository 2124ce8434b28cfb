use crate::{
    db::Store,
    error::{DbError, DbResult},
    matcher::{DEFAULT_MAX_MATCHES, close_matches, threshold_cutoff},
    services::{faculty_for, specializes_in},
    text::{contains_ci, split_terms},
};
use models::{
    course_data::Course,
    query::{SortField, SortOrder},
};
use std::{cmp::Reverse, collections::HashSet, str::FromStr};

pub struct QueryCourseService;

impl QueryCourseService {
    /// List courses sorted by `sort_by`, then windowed by `offset` and `limit`
    ///
    /// Sorting is stable. A descending listing is the ascending one reversed,
    /// so courses with equal keys also come out in reverse collection order.
    pub fn list_courses(
        store: &Store,
        limit: usize,
        offset: usize,
        sort_by: &str,
        order: &str,
    ) -> DbResult<Vec<Course>> {
        let sort_by = SortField::from_str(sort_by).map_err(|_| {
            let allowed: Vec<String> = SortField::all().iter().map(|f| f.to_string()).collect();
            DbError::InvalidArgument(format!("Can only sort by [{}]", allowed.join(", ")))
        })?;
        let order = SortOrder::from_str(order).map_err(|_| {
            DbError::InvalidArgument(format!("Order must be asc or desc, got {order}"))
        })?;

        let mut courses = store.courses().all();
        match sort_by {
            SortField::Id => courses.sort_by_key(|c| c.id),
            SortField::Name => courses.sort_by(|a, b| a.name.cmp(&b.name)),
            SortField::Code => courses.sort_by(|a, b| a.code.cmp(&b.code)),
            SortField::Credits => courses.sort_by_key(|c| c.credits),
        }
        if order == SortOrder::Desc {
            courses.reverse();
        }

        Ok(courses.into_iter().skip(offset).take(limit).collect())
    }

    /// Case-insensitive search across every course field, numbers included
    pub fn search_courses(store: &Store, query: &str) -> Vec<Course> {
        let q = query.to_lowercase();

        store.courses().filter(|c| {
            c.id.to_string().contains(&q)
                || contains_ci(&c.name, &q)
                || contains_ci(&c.code, &q)
                || contains_ci(&c.description, &q)
                || contains_ci(&c.department, &q)
                || c.credits.to_string().contains(&q)
                || c.prerequisites.iter().any(|p| p.to_string().contains(&q))
                || c.faculty_id.to_string().contains(&q)
        })
    }

    /// Search course names and descriptions only
    pub fn search_course_text(store: &Store, query: &str) -> Vec<Course> {
        let q = query.to_lowercase();

        store
            .courses()
            .filter(|c| contains_ci(&c.name, &q) || contains_ci(&c.description, &q))
    }

    pub fn courses_by_min_credits(store: &Store, min_credits: i64) -> Vec<Course> {
        store.courses().filter(|c| c.credits >= min_credits)
    }

    pub fn courses_without_prerequisites(store: &Store) -> Vec<Course> {
        store.courses().filter(|c| !c.has_prerequisites())
    }

    /// The `top` courses with the most prerequisites; ties keep collection order
    pub fn most_prerequisites(store: &Store, top: usize) -> Vec<Course> {
        let mut courses = store.courses().all();
        courses.sort_by_key(|c| Reverse(c.prerequisites.len()));
        courses.truncate(top);
        courses
    }

    /// Courses offered in `semester`; courses with no semester never match
    pub fn courses_by_semester(store: &Store, semester: &str) -> Vec<Course> {
        store.courses().filter(|c| {
            c.semester
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == semester.to_lowercase())
        })
    }

    pub fn courses_by_faculty(store: &Store, faculty_id: i64) -> Vec<Course> {
        store.courses().filter(|c| c.faculty_id == faculty_id)
    }

    /// Courses whose faculty covers *every* comma separated topic
    pub fn courses_by_specializations(store: &Store, topics: &str) -> Vec<Course> {
        let topics = split_terms(topics);

        store.read_both(|courses, faculty| {
            courses
                .iter()
                .filter(|c| {
                    faculty_for(faculty, c)
                        .is_some_and(|f| topics.iter().all(|t| specializes_in(f, t)))
                })
                .cloned()
                .collect()
        })
    }

    /// Courses matching *any* interest, by description or faculty specialization
    pub fn courses_match_interest(store: &Store, fields: &str) -> Vec<Course> {
        Self::courses_matching_any(store, &split_terms(fields))
    }

    /// Recommends courses for a comma separated list of interests
    pub fn recommend_courses(store: &Store, interests: &str) -> Vec<Course> {
        Self::courses_matching_any(store, &split_terms(interests))
    }

    fn courses_matching_any(store: &Store, terms: &[String]) -> Vec<Course> {
        store.read_both(|courses, faculty| {
            courses
                .iter()
                .filter(|c| {
                    let in_description = terms.iter().any(|t| contains_ci(&c.description, t));
                    in_description
                        || faculty_for(faculty, c)
                            .is_some_and(|f| terms.iter().any(|t| specializes_in(f, t)))
                })
                .cloned()
                .collect()
        })
    }

    /// Flattens the transitive prerequisites of a course, dependencies first
    ///
    /// The starting course comes last. Each course appears at most once, even
    /// when the prerequisites form a cycle, and missing ids are skipped.
    pub fn prerequisite_chain(store: &Store, course_id: i64) -> Vec<Course> {
        store.courses().read(|courses| {
            let mut visited = HashSet::new();
            let mut chain = Vec::new();
            collect_prerequisites(courses, course_id, &mut visited, &mut chain);
            chain
        })
    }

    /// Courses whose name closely matches `term`
    ///
    /// `threshold` is a 0-100 similarity score. At most a few distinct names
    /// are matched, but every course carrying one of them is returned.
    pub fn fuzzy_courses(store: &Store, term: &str, threshold: i64) -> DbResult<Vec<Course>> {
        let cutoff = threshold_cutoff(threshold)?;

        store.courses().read(|courses| {
            let names = courses.iter().map(|c| c.name.as_str());
            let matches = close_matches(term, names, DEFAULT_MAX_MATCHES, cutoff)?;

            Ok(courses
                .iter()
                .filter(|c| matches.contains(&c.display_name()))
                .cloned()
                .collect())
        })
    }
}

/// Post-order walk of the prerequisite graph
///
/// `visited` is shared across all branches: once a course has been entered,
/// later edges into it add nothing.
fn collect_prerequisites(
    courses: &[Course],
    course_id: i64,
    visited: &mut HashSet<i64>,
    chain: &mut Vec<Course>,
) {
    if !visited.insert(course_id) {
        return;
    }

    let Some(course) = courses.iter().find(|c| c.id == course_id) else {
        return;
    };

    for &prerequisite in &course.prerequisites {
        collect_prerequisites(courses, prerequisite, visited, chain);
    }
    chain.push(course.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course, faculty, ids, sample_store, store_with};

    #[test]
    fn test_list_courses_sorting_and_window() {
        let store = sample_store();

        let courses = QueryCourseService::list_courses(&store, 3, 0, "id", "asc").unwrap();
        assert_eq!(ids(&courses), [101, 102, 103]);

        let courses = QueryCourseService::list_courses(&store, 2, 1, "name", "asc").unwrap();
        assert_eq!(ids(&courses), [104, 107]);

        let courses = QueryCourseService::list_courses(&store, 10, 5, "id", "desc").unwrap();
        assert_eq!(ids(&courses), [102, 101]);

        let courses = QueryCourseService::list_courses(&store, 10, 50, "id", "asc").unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_list_courses_descending_reverses_ties() {
        let store = sample_store();

        let courses = QueryCourseService::list_courses(&store, 10, 0, "credits", "asc").unwrap();
        assert_eq!(ids(&courses), [105, 107, 101, 104, 106, 102, 103]);

        let courses = QueryCourseService::list_courses(&store, 10, 0, "credits", "desc").unwrap();
        assert_eq!(ids(&courses), [103, 102, 106, 104, 101, 107, 105]);
    }

    #[test]
    fn test_list_courses_rejects_unknown_sort() {
        let store = sample_store();

        let err = QueryCourseService::list_courses(&store, 10, 0, "description", "asc")
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "invalid argument: Can only sort by [id, name, code, credits]"
        );

        assert!(QueryCourseService::list_courses(&store, 10, 0, "id", "up").is_err());
    }

    #[test]
    fn test_search_courses_covers_numeric_fields() {
        let store = sample_store();

        assert_eq!(ids(&QueryCourseService::search_courses(&store, "LEARNING")), [101, 102, 103]);
        assert_eq!(ids(&QueryCourseService::search_courses(&store, "ec2")), [105]);
        // 999 only appears as a dangling prerequisite
        assert_eq!(ids(&QueryCourseService::search_courses(&store, "999")), [105]);
        // 99 appears as a faculty id and inside prerequisite 999
        assert_eq!(ids(&QueryCourseService::search_courses(&store, "99")), [105, 106]);
        assert_eq!(QueryCourseService::search_courses(&store, "").len(), 7);
    }

    #[test]
    fn test_search_course_text() {
        let store = sample_store();

        assert_eq!(ids(&QueryCourseService::search_course_text(&store, "logic")), [101, 104]);
        assert!(QueryCourseService::search_course_text(&store, "CS101").is_empty());
    }

    #[test]
    fn test_simple_filters() {
        let store = sample_store();

        assert_eq!(
            ids(&QueryCourseService::courses_by_min_credits(&store, 4)),
            [102, 103]
        );
        assert_eq!(
            ids(&QueryCourseService::courses_without_prerequisites(&store)),
            [101, 104]
        );
        assert_eq!(
            ids(&QueryCourseService::courses_by_semester(&store, "fall")),
            [101]
        );
        assert!(QueryCourseService::courses_by_semester(&store, "summer").is_empty());
        assert_eq!(
            ids(&QueryCourseService::courses_by_faculty(&store, 1)),
            [101, 102, 107]
        );
    }

    #[test]
    fn test_most_prerequisites_keeps_collection_order_for_ties() {
        let store = sample_store();

        let courses = QueryCourseService::most_prerequisites(&store, 4);
        assert_eq!(ids(&courses), [103, 105, 102, 106]);
        assert!(QueryCourseService::most_prerequisites(&store, 0).is_empty());
    }

    #[test]
    fn test_specializations_require_every_topic() {
        let store = sample_store();

        assert_eq!(
            ids(&QueryCourseService::courses_by_specializations(&store, "ml, ai")),
            [101, 102, 107]
        );
        assert!(QueryCourseService::courses_by_specializations(&store, "ml,vlsi").is_empty());
        // Course 106 points at a missing faculty member and never matches
        assert!(
            !ids(&QueryCourseService::courses_by_specializations(&store, "")).contains(&106)
        );
    }

    #[test]
    fn test_interest_matches_any_term() {
        let store = sample_store();

        let by_interest = QueryCourseService::courses_match_interest(&store, "vlsi, firmware");
        assert_eq!(ids(&by_interest), [104, 105]);

        let recommended = QueryCourseService::recommend_courses(&store, "NLP,trees");
        assert_eq!(ids(&recommended), [103, 106]);

        assert!(QueryCourseService::recommend_courses(&store, "astronomy").is_empty());
    }

    #[test]
    fn test_prerequisite_chain_orders_dependencies_first() {
        let store = sample_store();

        let chain = QueryCourseService::prerequisite_chain(&store, 103);
        assert_eq!(ids(&chain), [101, 102, 103]);

        let chain = QueryCourseService::prerequisite_chain(&store, 105);
        assert_eq!(ids(&chain), [104, 105]);

        assert!(QueryCourseService::prerequisite_chain(&store, 4242).is_empty());
    }

    #[test]
    fn test_prerequisite_chain_survives_cycles() {
        let store = sample_store();

        let chain = QueryCourseService::prerequisite_chain(&store, 106);
        assert_eq!(ids(&chain), [107, 106]);

        let (store, _) = store_with(
            &[
                course(1, "A", "A1", "", 3, "CSE", &[2], 1),
                course(2, "B", "B1", "", 3, "CSE", &[1, 2], 1),
            ],
            &[],
        );
        let chain = QueryCourseService::prerequisite_chain(&store, 1);
        assert_eq!(ids(&chain), [2, 1]);
    }

    #[test]
    fn test_prerequisite_chain_shares_visited_across_branches() {
        let (store, _) = store_with(
            &[
                course(1, "Base", "B0", "", 3, "CSE", &[], 1),
                course(2, "Left", "L1", "", 3, "CSE", &[1], 1),
                course(3, "Right", "R1", "", 3, "CSE", &[1], 1),
                course(4, "Top", "T1", "", 3, "CSE", &[2, 3], 1),
            ],
            &[],
        );

        let chain = QueryCourseService::prerequisite_chain(&store, 4);
        assert_eq!(ids(&chain), [1, 2, 3, 4]);
    }

    #[test]
    fn test_fuzzy_courses() {
        let store = sample_store();

        let courses = QueryCourseService::fuzzy_courses(&store, "Deep Lerning", 80).unwrap();
        assert_eq!(ids(&courses), [103]);

        assert!(QueryCourseService::fuzzy_courses(&store, "Quantum Optics", 80)
            .unwrap()
            .is_empty());
        assert!(QueryCourseService::fuzzy_courses(&store, "Deep", 150).is_err());
    }

    #[test]
    fn test_fuzzy_courses_returns_every_course_with_a_matched_name() {
        let (store, _) = store_with(
            &[
                course(1, "Robotics", "R1", "", 3, "AI", &[], 1),
                course(2, "Statics", "S1", "", 3, "ME", &[], 1),
                course(3, "Robotics", "R2", "", 3, "AI", &[], 1),
            ],
            &[faculty(1, "Ana", "Lee", "CSE", &["ML"], "Mon")],
        );

        let courses = QueryCourseService::fuzzy_courses(&store, "Robotic", 80).unwrap();
        assert_eq!(ids(&courses), [1, 3]);
    }

    #[test]
    fn test_fuzzy_courses_threshold_is_monotonic() {
        let store = sample_store();

        for term in ["Learning", "Intro", "Digital Circuit", "Math"] {
            let loose = ids(&QueryCourseService::fuzzy_courses(&store, term, 50).unwrap());
            let strict = ids(&QueryCourseService::fuzzy_courses(&store, term, 90).unwrap());
            assert!(strict.iter().all(|id| loose.contains(id)), "{term}");
        }
    }
}
