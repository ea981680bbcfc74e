//! Section heading used by each form group.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "margin: 0 0 16px 0; font-size: 20px; font-weight: 600;",
            "{props.title}"
        }
    }
}
