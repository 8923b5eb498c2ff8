use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::database::models::UniversityRow;

/// University node of the nested listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityNode {
    pub university_id: i32,
    pub university_name: String,
    pub user_count: i64,
    pub faculties: Vec<FacultyNode>,
}

/// Faculty node holding only the names of its majors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyNode {
    pub faculty_id: i32,
    pub faculty_name: String,
    pub majors: Vec<String>,
}

/// Fold flat join rows into University → Faculty → major names.
///
/// Nodes are emitted in the order their identifiers first appear. A row
/// without a faculty only contributes its university, a row without a
/// major only contributes its faculty. `user_count` is taken from the first
/// row of each university; the listing query yields the same value on every
/// row of a university.
pub fn aggregate_universities<I>(rows: I) -> Vec<UniversityNode>
where
    I: IntoIterator<Item = UniversityRow>,
{
    let mut universities: Vec<UniversityNode> = Vec::new();
    let mut university_index: HashMap<i32, usize> = HashMap::new();
    // keyed by (university_id, faculty_id)
    let mut faculty_index: HashMap<(i32, i32), usize> = HashMap::new();

    for row in rows {
        let u_pos = *university_index.entry(row.university_id).or_insert_with(|| {
            universities.push(UniversityNode {
                university_id: row.university_id,
                university_name: row.university_name.clone(),
                user_count: row.user_count,
                faculties: Vec::new(),
            });
            universities.len() - 1
        });
        let university = &mut universities[u_pos];

        let Some(faculty_id) = row.faculty_id else {
            continue;
        };

        let f_pos = *faculty_index
            .entry((row.university_id, faculty_id))
            .or_insert_with(|| {
                university.faculties.push(FacultyNode {
                    faculty_id,
                    faculty_name: row.faculty_name.clone().unwrap_or_default(),
                    majors: Vec::new(),
                });
                university.faculties.len() - 1
            });
        let faculty = &mut university.faculties[f_pos];

        if let Some(major) = row.major_name {
            if !faculty.majors.contains(&major) {
                faculty.majors.push(major);
            }
        }
    }

    universities
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn row(
        university_id: i32,
        university_name: &str,
        user_count: i64,
        faculty: Option<(i32, &str)>,
        major_name: Option<&str>,
    ) -> UniversityRow {
        UniversityRow {
            university_id,
            university_name: university_name.to_string(),
            user_count,
            faculty_id: faculty.map(|(id, _)| id),
            faculty_name: faculty.map(|(_, name)| name.to_string()),
            major_name: major_name.map(str::to_string),
        }
    }

    fn sample_rows() -> Vec<UniversityRow> {
        vec![
            row(1, "A State", 5, Some((10, "Eng")), Some("CS")),
            row(1, "A State", 5, Some((10, "Eng")), Some("EE")),
            row(1, "A State", 5, Some((11, "Arts")), None),
            row(2, "B State", 0, None, None),
        ]
    }

    #[test]
    fn builds_nested_tree_for_mixed_rows() {
        let tree = aggregate_universities(sample_rows());

        let expected = json!([
            {
                "university_id": 1,
                "university_name": "A State",
                "user_count": 5,
                "faculties": [
                    { "faculty_id": 10, "faculty_name": "Eng", "majors": ["CS", "EE"] },
                    { "faculty_id": 11, "faculty_name": "Arts", "majors": [] }
                ]
            },
            {
                "university_id": 2,
                "university_name": "B State",
                "user_count": 0,
                "faculties": []
            }
        ]);
        assert_eq!(serde_json::to_value(&tree).unwrap(), expected);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_universities(Vec::new()).is_empty());
    }

    #[test]
    fn keeps_first_seen_order_without_sorting() {
        let rows = vec![
            row(9, "Zeta", 1, Some((90, "Law")), Some("Civil")),
            row(3, "Alpha", 2, Some((30, "Med")), None),
            row(9, "Zeta", 1, Some((91, "Arts")), None),
            row(9, "Zeta", 1, Some((90, "Law")), Some("Criminal")),
        ];

        let tree = aggregate_universities(rows);
        let ids: Vec<i32> = tree.iter().map(|u| u.university_id).collect();
        assert_eq!(ids, vec![9, 3]);

        let faculties: Vec<i32> = tree[0].faculties.iter().map(|f| f.faculty_id).collect();
        assert_eq!(faculties, vec![90, 91]);
        assert_eq!(tree[0].faculties[0].majors, vec!["Civil", "Criminal"]);
    }

    #[test]
    fn one_node_per_distinct_university() {
        let rows = sample_rows();
        let distinct: HashSet<i32> = rows.iter().map(|r| r.university_id).collect();

        let tree = aggregate_universities(rows);
        assert_eq!(tree.len(), distinct.len());
    }

    #[test]
    fn repeated_major_rows_collapse() {
        let rows = vec![
            row(1, "A State", 5, Some((10, "Eng")), Some("CS")),
            row(1, "A State", 5, Some((10, "Eng")), Some("CS")),
            row(1, "A State", 5, Some((10, "Eng")), None),
            row(1, "A State", 5, Some((10, "Eng")), Some("EE")),
        ];

        let tree = aggregate_universities(rows);
        assert_eq!(tree[0].faculties.len(), 1);
        assert_eq!(tree[0].faculties[0].majors, vec!["CS", "EE"]);
    }

    #[test]
    fn faculty_ids_are_scoped_per_university() {
        let rows = vec![
            row(1, "A State", 0, Some((10, "Eng")), Some("CS")),
            row(2, "B State", 0, Some((10, "Eng")), Some("Math")),
        ];

        let tree = aggregate_universities(rows);
        assert_eq!(tree[0].faculties[0].majors, vec!["CS"]);
        assert_eq!(tree[1].faculties[0].majors, vec!["Math"]);
    }

    #[test]
    fn user_count_comes_from_first_row() {
        let rows = vec![
            row(1, "A State", 4, Some((10, "Eng")), Some("CS")),
            row(1, "A State", 4, Some((11, "Arts")), None),
        ];

        let tree = aggregate_universities(rows);
        assert_eq!(tree[0].user_count, 4);
    }

    #[test]
    fn aggregation_is_repeatable() {
        let first = aggregate_universities(sample_rows());
        let second = aggregate_universities(sample_rows());
        assert_eq!(first, second);
    }
}
