use axum::{
    debug_middleware,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};
use maud::{html, Markup};
use std::sync::Arc;
use tracing::instrument;

use crate::components;

use super::{AppError, AppState};

#[instrument(level = "debug", skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> Markup {
    let departments = state.departments().await;

    components::base(
        "departments",
        html! {
            div class="flex flex-col gap-4 p-4 max-w-2xl mx-auto" {
                h1 class="text-2xl dark:text-white" { "Departments" }
                div class="flex flex-col gap-2" {
                    @for department in &departments {
                        a href={"/departments/" (department.id)}
                            class="flex justify-between bg-blue-500 dark:bg-blue-600 hover:bg-blue-700 hover:dark:bg-blue-800 rounded-lg transition text-white p-2" {
                            p { (department.name) }
                            p { (department.id) }
                        }
                    }
                }
            }
        },
    )
}

#[instrument(level = "debug", skip(state))]
pub async fn show(
    Path(department_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Markup, AppError> {
    let department = state
        .department(&department_id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;
    let courses = state.courses(&department_id).await?;

    Ok(components::base(
        &department.name,
        html! {
            div class="flex flex-col gap-4 p-4 max-w-2xl mx-auto" {
                div class="flex justify-between items-center" {
                    h1 class="text-2xl dark:text-white" { (department.name) }
                    button class="rounded-full bg-blue-500 dark:bg-blue-600 hover:bg-blue-700 hover:dark:bg-blue-800 transition text-white px-4 py-2"
                        hx-get={"/departments/" (department_id) "/courses/new"}
                        hx-target="#dialog-root" hx-swap="outerHTML" {
                        "Add Course"
                    }
                }
                (components::course_list::render(false, courses))
                (components::dialog::closed())
            }
        },
    ))
}

#[instrument(level = "debug", skip(_state))]
#[debug_middleware]
pub async fn not_found(
    State(_state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, AppError> {
    let res = next.run(req).await;
    if res.status() == StatusCode::NOT_FOUND {
        return Ok(components::base(
            "not found",
            html! {
                div class="h-full flex items-center justify-center dark:text-white" {
                    "That department could not be found."
                }
            },
        )
        .into_response());
    }

    Ok(res)
}
