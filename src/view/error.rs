use dioxus::prelude::*;

use crate::view::layout::Layout;

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx!(
        Layout {
            page_title: "Error".to_string(),
            div {
                class: "flex items-center justify-center min-h-[300px]",
                div {
                    class: "text-center",
                    p { class: "text-4xl font-bold", "{status}" }
                    p { class: "text-lg opacity-70 mt-2", "{message}" }
                    a { class: "btn btn-outline mt-4", href: "/", "Back to customers" }
                }
            }
        }
    )
}
