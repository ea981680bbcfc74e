//! Floating cart summary with remove buttons and the running total.

use crate::state::AppState;
use crate::style::format_price;
use dioxus::prelude::*;
use tee_core::CartItemId;

#[derive(Clone, PartialEq)]
struct CartRow {
    id: CartItemId,
    name: String,
    size: &'static str,
    price: String,
}

/// Renders the cart store's items and total. Removal goes back through the store.
#[component]
pub fn CartPanel() -> Element {
    let mut state = use_context::<AppState>();
    let (rows, total) = {
        let cart = state.cart.read();
        let rows: Vec<CartRow> = cart
            .items()
            .iter()
            .map(|item| CartRow {
                id: item.id(),
                name: item.name().to_string(),
                size: item.size().code(),
                price: format_price(item.price()),
            })
            .collect();
        (rows, format_price(cart.total_price()))
    };

    rsx! {
        div {
            style: "position: fixed; right: 16px; top: 16px; width: 320px; background: #ffffff; color: #1f2937; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); padding: 16px; z-index: 10;",
            h2 { style: "font-size: 20px; font-weight: bold; margin: 0 0 16px 0;", "Shopping Cart" }
            if rows.is_empty() {
                p { style: "color: #6b7280; margin: 0;", "Your cart is empty" }
            } else {
                div {
                    for row in rows {
                        div {
                            key: "{row.id}",
                            style: "display: flex; align-items: center; justify-content: space-between; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px; margin-bottom: 16px;",
                            div {
                                h3 { style: "font-weight: 500; margin: 0; font-size: 16px;", "{row.name}" }
                                p { style: "font-size: 14px; color: #6b7280; margin: 0;", "Size: {row.size}" }
                            }
                            div {
                                style: "display: flex; align-items: center; gap: 16px;",
                                span { style: "font-weight: 500;", "{row.price}" }
                                button {
                                    style: "color: #ef4444; background: none; border: none; cursor: pointer; font: inherit;",
                                    onclick: move |_| state.remove_from_cart(row.id),
                                    "Remove"
                                }
                            }
                        }
                    }
                }
                div {
                    style: "margin-top: 16px; padding-top: 16px; border-top: 1px solid #e5e7eb; display: flex; justify-content: space-between; font-weight: bold;",
                    span { "Total:" }
                    span { "{total}" }
                }
            }
        }
    }
}
