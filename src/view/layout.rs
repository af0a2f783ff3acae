use dioxus::prelude::*;

use crate::view::SITE_NAME;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

/// Head and body shared by every page; `render` wraps them in the `html` element.
#[component]
pub fn Layout(page_title: String, children: Element) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{page_title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: DAISYUI_CSS }
            script { src: TAILWIND_JS }
        }
        body {
            class: "min-h-screen bg-base-100",
            Header {}
            main {
                class: "max-w-3xl mx-auto p-4",
                {children}
            }
        }
    )
}

#[component]
fn Header() -> Element {
    rsx!(div {
        class: "navbar bg-base-200 px-4 gap-2",
        div {
            class: "flex-1",
            a {
                class: "text-xl font-bold",
                href: "/",
                {SITE_NAME}
            }
        }
        div {
            class: "flex items-center gap-2",
            a { class: "btn btn-ghost btn-sm", href: "/", "Customers" }
            a { class: "btn btn-ghost btn-sm", href: "/add/", "Add Customer" }
            a { class: "btn btn-ghost btn-sm", href: "/best-customers/", "Top 10 Customers" }
            form {
                class: "flex gap-2",
                action: "/search/",
                method: "get",
                input {
                    class: "input input-bordered input-sm",
                    r#type: "search",
                    name: "q",
                    placeholder: "Search by name",
                }
                button {
                    class: "btn btn-sm btn-primary",
                    r#type: "submit",
                    "Search"
                }
            }
        }
    })
}
