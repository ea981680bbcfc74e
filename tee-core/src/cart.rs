//! In-memory shopping cart.
//!
//! `CartStore` is the single source of truth for what the user has committed
//! to buy. Views hold it behind a signal and only mutate it through
//! [`CartStore::add_to_cart`] and [`CartStore::remove_from_cart`]. Every
//! mutation is followed by a synchronous notification of all observers, so
//! the item list and the total never disagree.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::upload::ImageData;

/// Identity assigned to a cart item when it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartItemId(pub u64);

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    S,
    #[default]
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::XL];

    /// Short code used as the select value and in the cart ("M").
    pub fn code(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }

    /// Human-readable option label ("Medium").
    pub fn label(&self) -> &'static str {
        match self {
            Size::S => "Small",
            Size::M => "Medium",
            Size::L => "Large",
            Size::XL => "Extra Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Size::ALL
            .into_iter()
            .find(|size| size.code() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unknown size: {s:?}"))
    }
}

/// Body build of the wearer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    pub fn value(&self) -> &'static str {
        match self {
            Build::Lean => "lean",
            Build::Regular => "regular",
            Build::Athletic => "athletic",
            Build::Big => "big",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Build::Lean => "Lean",
            Build::Regular => "Regular",
            Build::Athletic => "Athletic",
            Build::Big => "Big",
        }
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Build {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Build::ALL
            .into_iter()
            .find(|build| build.value() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unknown build: {s:?}"))
    }
}

/// Body measurements captured from the form at add-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    /// Height in centimetres
    pub height: u32,
    /// Weight in kilograms
    pub weight: u32,
    pub build: Build,
}

/// Everything needed to create a cart item, minus its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    pub name: String,
    pub size: Size,
    pub price: Decimal,
    pub custom_image: Option<ImageData>,
    pub custom_text: Option<String>,
    pub specifications: Specifications,
}

/// A committed cart entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    id: CartItemId,
    #[serde(flatten)]
    input: CartItemInput,
}

impl CartItem {
    pub fn id(&self) -> CartItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.input.name
    }

    pub fn size(&self) -> Size {
        self.input.size
    }

    pub fn price(&self) -> Decimal {
        self.input.price
    }

    pub fn custom_image(&self) -> Option<&ImageData> {
        self.input.custom_image.as_ref()
    }

    pub fn custom_text(&self) -> Option<&str> {
        self.input.custom_text.as_deref()
    }

    pub fn specifications(&self) -> &Specifications {
        &self.input.specifications
    }
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&[CartItem])>;

/// Ordered cart contents with observer notification.
pub struct CartStore {
    items: Vec<CartItem>,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Append a new item and return the id assigned to it.
    ///
    /// No validation is performed beyond the shape of `CartItemInput`.
    pub fn add_to_cart(&mut self, input: CartItemInput) -> CartItemId {
        let id = CartItemId(self.next_id);
        self.next_id += 1;
        log::debug!("cart: add {} ({}, size {}, {})", id, input.name, input.size, input.price);
        self.items.push(CartItem { id, input });
        self.notify();
        id
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: CartItemId) {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            log::debug!("cart: remove {} ignored, not in cart", id);
            return;
        };
        self.items.remove(pos);
        log::debug!("cart: removed {}", id);
        self.notify();
    }

    /// Sum of all item prices; zero for an empty cart.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::price).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register an observer called after every mutation with the current items.
    pub fn subscribe(&mut self, observer: impl Fn(&[CartItem]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNIT_PRICE;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shirt(size: Size, price: Decimal) -> CartItemInput {
        CartItemInput {
            name: "Custom T-Shirt".to_string(),
            size,
            price,
            custom_image: None,
            custom_text: None,
            specifications: Specifications {
                height: 180,
                weight: 80,
                build: Build::Athletic,
            },
        }
    }

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn add_single_item() {
        let mut cart = CartStore::new();
        cart.add_to_cart(shirt(Size::M, price("29.99")));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), price("29.99"));
        assert_eq!(cart.items()[0].name(), "Custom T-Shirt");
        assert_eq!(cart.items()[0].size(), Size::M);
    }

    #[test]
    fn add_two_then_remove_first() {
        let mut cart = CartStore::new();
        let first = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        let second = cart.add_to_cart(shirt(Size::L, UNIT_PRICE));
        assert_eq!(cart.total_price(), price("59.98"));

        cart.remove_from_cart(first);
        assert_eq!(cart.total_price(), price("29.99"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id(), second);
        assert_eq!(cart.items()[0].size(), Size::L);
    }

    #[test]
    fn total_matches_sum_of_prices() {
        let mut cart = CartStore::new();
        let prices = ["0", "10.50", "29.99", "0.01", "100"];
        for p in prices {
            cart.add_to_cart(shirt(Size::S, price(p)));
        }
        let expected: Decimal = prices.iter().map(|p| price(p)).sum();
        assert_eq!(cart.total_price(), expected);
        assert_eq!(cart.total_price(), price("140.50"));
    }

    #[test]
    fn ids_are_unique_even_after_removal() {
        let mut cart = CartStore::new();
        let a = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        let b = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        cart.remove_from_cart(b);
        let c = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut cart = CartStore::new();
        let ids: Vec<CartItemId> = Size::ALL
            .into_iter()
            .map(|size| cart.add_to_cart(shirt(size, UNIT_PRICE)))
            .collect();
        cart.remove_from_cart(ids[1]);
        let remaining: Vec<CartItemId> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut cart = CartStore::new();
        let id = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        let before = cart.items().to_vec();

        cart.remove_from_cart(CartItemId(999));
        assert_eq!(cart.items(), before.as_slice());

        cart.remove_from_cart(id);
        cart.remove_from_cart(id);
        assert!(cart.is_empty());
    }

    #[test]
    fn observers_see_every_mutation() {
        let mut cart = CartStore::new();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();
        cart.subscribe(move |items| sink.borrow_mut().push(items.len()));

        let id = cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        cart.add_to_cart(shirt(Size::XL, UNIT_PRICE));
        cart.remove_from_cart(id);
        cart.remove_from_cart(id);

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut cart = CartStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let sub = cart.subscribe(move |_| *sink.borrow_mut() += 1);

        cart.add_to_cart(shirt(Size::M, UNIT_PRICE));
        assert!(cart.unsubscribe(sub));
        assert!(!cart.unsubscribe(sub));
        cart.add_to_cart(shirt(Size::M, UNIT_PRICE));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn parse_size_and_build() {
        assert_eq!("XL".parse::<Size>().unwrap(), Size::XL);
        assert_eq!("lean".parse::<Build>().unwrap(), Build::Lean);
        assert!("XXL".parse::<Size>().is_err());
        assert!("huge".parse::<Build>().is_err());
        assert_eq!(Size::default(), Size::M);
        assert_eq!(Build::default(), Build::Athletic);
    }
}
