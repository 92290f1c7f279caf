use maud::{html, Markup};

use crate::forms::{CourseForm, FIELDS};

/// One label+input+error block per field descriptor, in table order.
/// Edits re-validate through the validate endpoint; submitting targets
/// the whole dialog so the server decides whether it closes.
pub fn render(department_id: &str, form: &CourseForm) -> Markup {
    html! {
        form id="course-form" class="flex flex-col gap-4"
            hx-post={"/departments/" (department_id) "/courses"}
            hx-target="#dialog-root" hx-swap="outerHTML" {
            @for field in &FIELDS {
                div class="flex flex-col gap-1" {
                    label for=(field.key.name()) class="text-sm dark:text-white" {
                        (field.label)
                    }
                    input id=(field.key.name()) name=(field.key.name())
                        type=(field.kind.input_type())
                        value=(form.draft.display_value(field.key))
                        placeholder=(field.placeholder)
                        hx-post={"/departments/" (department_id) "/courses/validate"}
                        hx-trigger="change"
                        hx-include="closest form"
                        hx-target="#course-form"
                        hx-swap="outerHTML"
                        class="form-control rounded-lg border dark:border-neutral-600 p-2 bg-white dark:bg-neutral-700 dark:text-white dark:placeholder:text-neutral-400" {}
                    @if let Some(error) = form.errors.get(&field.key) {
                        p class="text-sm text-red-600 dark:text-red-400" { (error.message) }
                    }
                }
            }
            div class="flex justify-end gap-2" {
                button type="button"
                    class="rounded-full border-2 dark:border-neutral-600 hover:bg-slate-200 hover:dark:bg-neutral-700 transition dark:text-white px-4 py-2"
                    hx-get={"/departments/" (department_id) "/dialog/close"}
                    hx-target="#dialog-root" hx-swap="outerHTML" {
                    "Cancel"
                }
                button type="submit"
                    class="rounded-full bg-blue-500 dark:bg-blue-600 hover:bg-blue-700 hover:dark:bg-blue-800 transition text-white px-4 py-2" {
                    "Save Course"
                }
            }
        }
    }
}
