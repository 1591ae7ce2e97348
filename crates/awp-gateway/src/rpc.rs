//! # Method Dispatch
//!
//! The JSON-RPC method registry. Each method deserializes its params object
//! into the matching router input and forwards the call; domain errors are
//! converted to JSON-RPC codes at this boundary.

use crate::error::{ApiError, ApiResult};
use awp_get_ready::{
    AddStudentToSessionInput, CreateSessionInput, GetReadyRouter, GetSessionStudentsInput,
    ListSessionsInput, SearchStudentsInput,
};
use awp_onboard::{
    CreateSchoolInput, CreateStudentInput, DeleteSchoolInput, DeleteStudentInput, GetStudentsInput,
    OnboardRouter,
};
use std::sync::Arc;

/// Shared handler state: the two domain routers, injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub onboard: Arc<OnboardRouter>,
    pub get_ready: Arc<GetReadyRouter>,
}

/// Route one method call to its handler.
pub async fn route_method(
    state: &AppState,
    method: &str,
    params: Option<&serde_json::Value>,
) -> ApiResult<serde_json::Value> {
    match method {
        // Onboarding: schools
        "schools.list" => to_result(state.onboard.get_schools().await?),

        "schools.create" => {
            let input: CreateSchoolInput = parse_input(params)?;
            to_result(state.onboard.create_school(input).await?)
        }

        "schools.delete" => {
            let input: DeleteSchoolInput = parse_input(params)?;
            state.onboard.delete_school(input).await?;
            Ok(serde_json::Value::Null)
        }

        // Onboarding: students
        "students.list" => {
            let input: GetStudentsInput = parse_input(params)?;
            to_result(state.onboard.get_students(input).await?)
        }

        "students.create" => {
            let input: CreateStudentInput = parse_input(params)?;
            to_result(state.onboard.create_student(input).await?)
        }

        "students.delete" => {
            let input: DeleteStudentInput = parse_input(params)?;
            state.onboard.delete_student(input).await?;
            Ok(serde_json::Value::Null)
        }

        // Get-ready: search
        "searchStudents" => {
            let input: SearchStudentsInput = parse_input(params)?;
            to_result(state.get_ready.search_students(input).await?)
        }

        // Get-ready: sessions
        "sessions.create" => {
            let input: CreateSessionInput = parse_input(params)?;
            to_result(state.get_ready.create_session(input).await?)
        }

        "sessions.list" => {
            let input: ListSessionsInput = parse_input(params)?;
            to_result(state.get_ready.get_sessions(input).await?)
        }

        "sessions.addStudent" => {
            let input: AddStudentToSessionInput = parse_input(params)?;
            to_result(state.get_ready.add_student_to_session(input).await?)
        }

        "sessions.listStudents" => {
            let input: GetSessionStudentsInput = parse_input(params)?;
            to_result(state.get_ready.get_session_students(input).await?)
        }

        _ => Err(ApiError::method_not_found(method)),
    }
}

/// Deserialize the params object. Absent or null params parse as an empty
/// object so methods with all-optional inputs accept bare calls.
fn parse_input<T: serde::de::DeserializeOwned>(
    params: Option<&serde_json::Value>,
) -> ApiResult<T> {
    let value = match params {
        None | Some(serde_json::Value::Null) => serde_json::json!({}),
        Some(value) => value.clone(),
    };
    serde_json::from_value(value)
        .map_err(|e| ApiError::invalid_params(format!("invalid params: {e}")))
}

fn to_result<T: serde::Serialize>(value: T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}
