use axum::{
    extract::{Path, RawForm, State},
    http::StatusCode,
};
use maud::{html, Markup};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    components,
    forms::{CourseForm, FieldKey},
};

use super::{AppError, AppState};

/// Rebuilds controller state from a posted urlencoded body by folding
/// every recognized field through `set_field`. Unknown keys are ignored.
fn decode_form(form: &RawForm) -> CourseForm {
    let mut course_form = CourseForm::default();
    for (key, value) in url::form_urlencoded::parse(&form.0) {
        if let Some(key) = FieldKey::from_name(&key) {
            course_form.set_field(key, &value);
        }
    }
    course_form
}

fn dialog(department_id: &str, form: &CourseForm) -> Markup {
    components::dialog::open(
        department_id,
        "Add New Course",
        "Fill out the details below to add a new course.",
        components::course_form::render(department_id, form),
    )
}

/// Dialog-open transition: a fresh form with the default draft.
#[instrument(level = "debug", skip(state))]
pub async fn new_form(
    Path(department_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Markup, AppError> {
    state
        .department(&department_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(dialog(&department_id, &CourseForm::default()))
}

#[instrument(level = "debug")]
pub async fn close_dialog(Path(_department_id): Path<String>) -> Markup {
    components::dialog::closed()
}

/// Re-validation on change. Pure with respect to the store: decodes,
/// re-runs the schema, re-renders the form fragment with the current
/// error map.
#[instrument(level = "debug", skip(formdata))]
pub async fn validate(Path(department_id): Path<String>, formdata: RawForm) -> Markup {
    let form = decode_form(&formdata);
    components::course_form::render(&department_id, &form)
}

/// Submit. Invalid drafts re-render the open dialog with errors and the
/// store is never touched; a valid draft goes to the store and the
/// response closes the dialog and refreshes the course list out-of-band.
#[instrument(level = "debug", skip(state, formdata))]
pub async fn create(
    Path(department_id): Path<String>,
    State(state): State<Arc<AppState>>,
    formdata: RawForm,
) -> Result<Markup, AppError> {
    state
        .department(&department_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut form = decode_form(&formdata);
    match form.submit() {
        Some(course) => {
            let record = state.add_course(&department_id, course).await?;
            debug!(course_id = %record.id, "course accepted");

            let courses = state.courses(&department_id).await?;
            Ok(html! {
                (components::dialog::closed())
                (components::course_list::render(true, courses))
            })
        }
        None => Ok(dialog(&department_id, &form)),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;

    use super::*;
    use crate::forms::{CourseDraft, ErrorKind};

    #[test]
    fn course_form_deserialization() {
        let bytes = b"course_name=Data+Structures&credits=4&num_lectures=3&semester=5";
        let rawform = RawForm(Bytes::copy_from_slice(bytes));

        let form = decode_form(&rawform);

        let expected = CourseDraft {
            course_name: "Data Structures".to_string(),
            credits: 4,
            num_lectures: 3,
            semester: 5,
        };
        assert_eq!(form.draft, expected);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let bytes = b"course_name=Algorithms&credits=3&num_lectures=2&semester=2&csrf=zzz";
        let rawform = RawForm(Bytes::copy_from_slice(bytes));

        let form = decode_form(&rawform);

        assert_eq!(form.draft.course_name, "Algorithms");
        assert!(form.errors.is_empty());
    }

    #[test]
    fn non_numeric_post_surfaces_range_errors() {
        let bytes = b"course_name=Algorithms&credits=abc&num_lectures=&semester=2";
        let rawform = RawForm(Bytes::copy_from_slice(bytes));

        let form = decode_form(&rawform);

        assert_eq!(form.draft.credits, 0);
        assert_eq!(form.draft.num_lectures, 0);
        assert_eq!(form.errors[&FieldKey::Credits].kind, ErrorKind::Range);
        assert_eq!(form.errors[&FieldKey::NumLectures].kind, ErrorKind::Range);
        assert!(!form.errors.contains_key(&FieldKey::CourseName));
    }
}
