//! Session management flows.

use crate::TestNode;
use awp_get_ready::{
    AddStudentToSessionInput, CreateSessionInput, GetSessionStudentsInput, ListSessionsInput,
};

fn add_input(session_id: &str, student_id: &str) -> AddStudentToSessionInput {
    AddStudentToSessionInput {
        session_id: session_id.into(),
        student_id: student_id.into(),
        first_name: "Bart".into(),
        last_name: "Simpson".into(),
        school_id: "school-1".into(),
    }
}

#[tokio::test]
async fn test_adding_the_same_student_twice_keeps_one_row() {
    let node = TestNode::start();
    let get_ready = &node.platform.get_ready;

    let session = get_ready
        .create_session(CreateSessionInput {
            name: "Reading group".into(),
            school_id: "school-1".into(),
            date: "2026-09-01".into(),
        })
        .await
        .unwrap();

    // A double-submitted form, or a replayed request
    get_ready
        .add_student_to_session(add_input(&session.id, "student-1"))
        .await
        .unwrap();
    get_ready
        .add_student_to_session(add_input(&session.id, "student-1"))
        .await
        .unwrap();

    let roster = get_ready
        .get_session_students(GetSessionStudentsInput {
            session_id: session.id,
        })
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
}

#[tokio::test]
async fn test_rosters_are_scoped_to_their_session() {
    let node = TestNode::start();
    let get_ready = &node.platform.get_ready;

    let mut ids = Vec::new();
    for name in ["Reading group", "Math club"] {
        let session = get_ready
            .create_session(CreateSessionInput {
                name: name.into(),
                school_id: "school-1".into(),
                date: "2026-09-01".into(),
            })
            .await
            .unwrap();
        ids.push(session.id);
    }

    get_ready
        .add_student_to_session(add_input(&ids[0], "student-1"))
        .await
        .unwrap();
    get_ready
        .add_student_to_session(add_input(&ids[1], "student-1"))
        .await
        .unwrap();
    get_ready
        .add_student_to_session(add_input(&ids[1], "student-2"))
        .await
        .unwrap();

    let first = get_ready
        .get_session_students(GetSessionStudentsInput {
            session_id: ids[0].clone(),
        })
        .await
        .unwrap();
    assert_eq!(first.len(), 1);

    let second = get_ready
        .get_session_students(GetSessionStudentsInput {
            session_id: ids[1].clone(),
        })
        .await
        .unwrap();
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn test_sessions_list_by_school() {
    let node = TestNode::start();
    let get_ready = &node.platform.get_ready;

    for (name, school) in [("Reading group", "school-1"), ("Math club", "school-2")] {
        get_ready
            .create_session(CreateSessionInput {
                name: name.into(),
                school_id: school.into(),
                date: "2026-09-01".into(),
            })
            .await
            .unwrap();
    }

    let all = get_ready
        .get_sessions(ListSessionsInput { school_id: None })
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let scoped = get_ready
        .get_sessions(ListSessionsInput {
            school_id: Some("school-1".into()),
        })
        .await
        .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].name, "Reading group");
}
