//! Onboarding flows across both entity kinds.

use crate::TestNode;
use awp_onboard::{
    CreateSchoolInput, CreateStudentInput, DeleteSchoolInput, GetStudentsInput, OnboardError,
};
use shared_bus::EventPublisher;

#[tokio::test]
async fn test_delete_school_cascades_across_the_roster() {
    let node = TestNode::start();
    let onboard = &node.platform.onboard;

    let springfield = onboard
        .create_school(CreateSchoolInput {
            name: "Springfield Elementary".into(),
        })
        .await
        .unwrap();
    let shelbyville = onboard
        .create_school(CreateSchoolInput {
            name: "Shelbyville Academy".into(),
        })
        .await
        .unwrap();

    for (first, last) in [("Bart", "Simpson"), ("Lisa", "Simpson"), ("Nelson", "Muntz")] {
        onboard
            .create_student(CreateStudentInput {
                first_name: first.into(),
                last_name: last.into(),
                school_id: springfield.id.clone(),
            })
            .await
            .unwrap();
    }
    onboard
        .create_student(CreateStudentInput {
            first_name: "Milhouse".into(),
            last_name: "Van Houten".into(),
            school_id: shelbyville.id.clone(),
        })
        .await
        .unwrap();

    onboard
        .delete_school(DeleteSchoolInput {
            id: springfield.id.clone(),
        })
        .await
        .unwrap();

    // Springfield and its roster are gone; Shelbyville is untouched
    assert!(onboard
        .get_students(GetStudentsInput {
            school_id: springfield.id,
        })
        .await
        .unwrap()
        .is_empty());
    let schools = onboard.get_schools().await.unwrap();
    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].id, shelbyville.id);
    assert_eq!(
        onboard
            .get_students(GetStudentsInput {
                school_id: shelbyville.id,
            })
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_delete_school_is_idempotent() {
    let node = TestNode::start();
    let onboard = &node.platform.onboard;

    let school = onboard
        .create_school(CreateSchoolInput {
            name: "Springfield Elementary".into(),
        })
        .await
        .unwrap();

    onboard
        .delete_school(DeleteSchoolInput {
            id: school.id.clone(),
        })
        .await
        .unwrap();
    onboard
        .delete_school(DeleteSchoolInput { id: school.id })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_validation_runs_before_side_effects() {
    let node = TestNode::start();

    let err = node
        .platform
        .onboard
        .create_student(CreateStudentInput {
            first_name: String::new(),
            last_name: "Simpson".into(),
            school_id: "school-1".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OnboardError::Validation(_)));
    assert!(node.platform.store.is_empty().unwrap());
    assert_eq!(node.platform.bus.events_published(), 0);
}
