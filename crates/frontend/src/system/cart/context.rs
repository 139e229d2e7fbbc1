use contracts::system::cart::CartItem;
use leptos::prelude::*;

/// Cart collaborator handed to the view layer through context. The page
/// shell only reads how many items it holds.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub items: RwSignal<Vec<CartItem>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, item: CartItem) {
        log::debug!("cart add: {}", item.route);
        self.items.update(|items| items.push(item));
    }

    /// Removes the first item booked for `route`.
    pub fn remove(&self, route: &str) {
        self.items.update(|items| {
            if let Some(pos) = items.iter().position(|item| item.route == route) {
                items.remove(pos);
            }
        });
    }

    pub fn clear(&self) {
        self.items.update(|items| items.clear());
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found in component tree")
}
