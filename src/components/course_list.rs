use maud::{html, Markup};

use crate::data::store::CourseRecord;

/// Existing courses for the department page, ordered by semester then
/// name. Rendered out-of-band after a successful submit so the open
/// page refreshes without a reload.
pub fn render(oob: bool, mut courses: Vec<CourseRecord>) -> Markup {
    courses.sort_by_key(|c| (c.course.semester, c.course.course_name.clone()));
    html! {
        div id="course-list" hx-swap-oob=[oob.then_some("true")] class="flex flex-col gap-2" {
            @if courses.is_empty() {
                p class="text-neutral-500 dark:text-neutral-400" {
                    "No courses yet."
                }
            }
            @for record in &courses {
                div class="flex justify-between items-center rounded-lg bg-white dark:bg-neutral-800 dark:text-white p-2 shadow-lg" {
                    div class="text-xl" {
                        (record.course.course_name)
                    }
                    div class="flex gap-2 text-sm text-neutral-500 dark:text-neutral-400" {
                        p { "semester " (record.course.semester) }
                        p { (record.course.credits) " credits" }
                        p { (record.course.num_lectures) " lectures" }
                    }
                }
            }
        }
    }
}
