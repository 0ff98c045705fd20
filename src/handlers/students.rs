use crate::middleware::RequireLogin;
use crate::types::{DashboardStats, Department, StudentEditForm, StudentForm, StudentRecord};
use crate::{RosterError, router::RosterState};
use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(
    State(state): State<RosterState>,
    _user: RequireLogin,
) -> Result<Json<Vec<StudentRecord>>, RosterError> {
    Ok(Json(state.service.list_records()?))
}

pub async fn show(
    State(state): State<RosterState>,
    _user: RequireLogin,
    Path(id): Path<String>,
) -> Result<Json<StudentRecord>, RosterError> {
    Ok(Json(state.service.get_record(&id)?))
}

pub async fn create(
    State(state): State<RosterState>,
    _user: RequireLogin,
    Form(form): Form<StudentForm>,
) -> Result<impl IntoResponse, RosterError> {
    let record = state.service.add_record(
        &form.id,
        &form.name,
        &form.section,
        &form.gpa,
        &form.department,
    )?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update(
    State(state): State<RosterState>,
    _user: RequireLogin,
    Path(id): Path<String>,
    Form(form): Form<StudentEditForm>,
) -> Result<Json<StudentRecord>, RosterError> {
    let record =
        state
            .service
            .edit_record(&id, &form.name, &form.section, &form.gpa, &form.department)?;
    Ok(Json(record))
}

/// DELETE /students/{id} -> 204 whether or not the student existed.
pub async fn remove(
    State(state): State<RosterState>,
    _user: RequireLogin,
    Path(id): Path<String>,
) -> Result<StatusCode, RosterError> {
    state.service.delete_record(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dashboard(
    State(state): State<RosterState>,
    _user: RequireLogin,
) -> Result<Json<DashboardStats>, RosterError> {
    Ok(Json(state.service.dashboard_stats()?))
}

pub async fn departments(State(state): State<RosterState>) -> Json<&'static [Department]> {
    Json(state.service.departments())
}
