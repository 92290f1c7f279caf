use maud::{html, Markup};

/// The empty slot the add-course dialog is swapped into.
pub fn closed() -> Markup {
    html! {
        div id="dialog-root" {}
    }
}

/// Overlay and panel, swapped over the empty slot. The close button and
/// a successful submit are the only ways back to the empty slot; a
/// failed submit re-renders the open dialog.
pub fn open(department_id: &str, title: &str, description: &str, body: Markup) -> Markup {
    html! {
        div id="dialog-root" {
            div class="fixed inset-0 z-10 bg-black/50" {}
            div class="fixed inset-0 z-20 flex items-center justify-center p-4" {
                div class="w-full max-w-md rounded-lg bg-white dark:bg-neutral-800 p-4 shadow-xl" {
                    div class="flex items-start justify-between mb-4" {
                        div {
                            h2 class="text-xl font-bold dark:text-white" { (title) }
                            p class="text-sm text-neutral-500 dark:text-neutral-400" { (description) }
                        }
                        button class="w-8 h-8 flex justify-center items-center rounded-lg hover:bg-slate-200 hover:dark:bg-neutral-700 transition dark:text-white"
                            hx-get={"/departments/" (department_id) "/dialog/close"}
                            hx-target="#dialog-root" hx-swap="outerHTML" {
                            ("x")
                        }
                    }
                    (body)
                }
            }
        }
    }
}
