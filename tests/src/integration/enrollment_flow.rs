//! The end-to-end enrollment flow: onboarding writes the student, the bus
//! carries the event, the indexer projects it, search finds it.

use crate::TestNode;
use awp_get_ready::SearchStudentsInput;
use awp_onboard::{CreateSchoolInput, CreateStudentInput};

#[tokio::test]
async fn test_enrolled_student_becomes_searchable() {
    let node = TestNode::start();

    let school = node
        .platform
        .onboard
        .create_school(CreateSchoolInput {
            name: "Springfield Elementary".into(),
        })
        .await
        .unwrap();
    let bart = node
        .platform
        .onboard
        .create_student(CreateStudentInput {
            first_name: "Bart".into(),
            last_name: "Simpson".into(),
            school_id: school.id.clone(),
        })
        .await
        .unwrap();

    node.wait_for_indexed(1).await;

    let hits = node
        .platform
        .get_ready
        .search_students(SearchStudentsInput {
            query: "bart".into(),
            school_id: None,
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, bart.id);
    assert_eq!(hits[0].school_id, school.id);
    assert!(!hits[0].enrolled_at.is_empty());
}

#[tokio::test]
async fn test_search_before_any_enrollment_is_empty() {
    let node = TestNode::start();

    let hits = node
        .platform
        .get_ready
        .search_students(SearchStudentsInput {
            query: "anyone".into(),
            school_id: None,
        })
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_reenrollment_overwrites_index_document() {
    let node = TestNode::start();

    let school = node
        .platform
        .onboard
        .create_school(CreateSchoolInput {
            name: "Springfield Elementary".into(),
        })
        .await
        .unwrap();

    for _ in 0..2 {
        node.platform
            .onboard
            .create_student(CreateStudentInput {
                first_name: "Lisa".into(),
                last_name: "Simpson".into(),
                school_id: school.id.clone(),
            })
            .await
            .unwrap();
    }

    // Two distinct students, two distinct index documents
    node.wait_for_indexed(2).await;
    let hits = node
        .platform
        .get_ready
        .search_students(SearchStudentsInput {
            query: "lisa".into(),
            school_id: None,
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
}
