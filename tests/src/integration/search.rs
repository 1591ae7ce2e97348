//! Search semantics through the whole stack.

use crate::TestNode;
use awp_get_ready::SearchStudentsInput;
use awp_onboard::{CreateSchoolInput, CreateStudentInput};
use shared_types::School;

async fn enroll(node: &TestNode, first: &str, last: &str, school_id: &str) {
    node.platform
        .onboard
        .create_student(CreateStudentInput {
            first_name: first.into(),
            last_name: last.into(),
            school_id: school_id.into(),
        })
        .await
        .unwrap();
}

async fn school(node: &TestNode, name: &str) -> School {
    node.platform
        .onboard
        .create_school(CreateSchoolInput { name: name.into() })
        .await
        .unwrap()
}

async fn search(node: &TestNode, query: &str, school_id: Option<String>) -> Vec<String> {
    let mut names: Vec<String> = node
        .platform
        .get_ready
        .search_students(SearchStudentsInput {
            query: query.into(),
            school_id,
        })
        .await
        .unwrap()
        .into_iter()
        .map(|hit| hit.first_name)
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_prefix_and_fragment_queries() {
    let node = TestNode::start();
    let springfield = school(&node, "Springfield Elementary").await;

    enroll(&node, "Ana", "Gomez", &springfield.id).await;
    enroll(&node, "Ned", "Flanders", &springfield.id).await;
    enroll(&node, "Bart", "Simpson", &springfield.id).await;
    node.wait_for_indexed(3).await;

    // Prefix of a first name
    assert_eq!(search(&node, "ana", None).await, vec!["Ana"]);
    // Fragment inside first and last names
    assert_eq!(search(&node, "an", None).await, vec!["Ana", "Ned"]);
    // Prefix of a last name
    assert_eq!(search(&node, "sim", None).await, vec!["Bart"]);
    // No hit at all
    assert!(search(&node, "xyz", None).await.is_empty());
}

#[tokio::test]
async fn test_school_filter_scopes_hits() {
    let node = TestNode::start();
    let springfield = school(&node, "Springfield Elementary").await;
    let shelbyville = school(&node, "Shelbyville Academy").await;

    enroll(&node, "Bart", "Simpson", &springfield.id).await;
    enroll(&node, "Lisa", "Simpson", &shelbyville.id).await;
    node.wait_for_indexed(2).await;

    assert_eq!(search(&node, "simpson", None).await, vec!["Bart", "Lisa"]);
    assert_eq!(
        search(&node, "simpson", Some(springfield.id)).await,
        vec!["Bart"]
    );
    assert!(search(&node, "simpson", Some("school-other".into()))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_queries_are_case_insensitive() {
    let node = TestNode::start();
    let springfield = school(&node, "Springfield Elementary").await;

    enroll(&node, "Bart", "Simpson", &springfield.id).await;
    node.wait_for_indexed(1).await;

    assert_eq!(search(&node, "BART", None).await, vec!["Bart"]);
    assert_eq!(search(&node, "SiMpSoN", None).await, vec!["Bart"]);
}
