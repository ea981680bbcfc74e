//! Footnote telling the user about the theme shortcut.

use dioxus::prelude::*;

#[component]
pub fn ShortcutHint() -> Element {
    rsx! {
        p {
            style: "font-size: 14px; color: #6b7280; margin-top: 8px;",
            "Press Alt+Q to switch between themes"
        }
    }
}
