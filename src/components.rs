use maud::{html, Markup};

pub mod course_form;
pub mod course_list;
pub mod dialog;

pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        html {
            head {
                title { "course admin - " (title) }
                script src="/assets/htmx.min.js" {}
                script src="/assets/tailwind.js" {}
                meta name="viewport" content="width=device-width,initial-scale=1.0" {}
            }
            body class="bg-slate-100 dark:bg-neutral-900" {
                header class="w-full p-2 bg-white dark:bg-neutral-800 shadow-lg" {
                    a href="/departments" class="text-xl dark:text-white" { "course admin" }
                }
                div id="app-container" class="contents" {
                    (content)
                }
            }
        }
    }
}
