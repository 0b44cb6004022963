//! The single shared cart instance and its persistence.
//!
//! [`CartService`] is built once by the application root and handed to whichever
//! command needs the cart. Every mutation applies the [`Cart`] operation, writes
//! the full snapshot through its [`CartStore`], then notifies subscribers
//! synchronously, in that order.

use crate::core::cart::{Cart, CartLine};
use crate::core::catalog::{find_product, Product};
use crate::core::error::Result;
use crate::core::state::{read_json_file, write_json_file, CartSnapshot, StoredCartLine};
use chrono::Utc;
use std::path::PathBuf;

/// Where the cart lives between invocations.
pub trait CartStore {
    fn load(&self) -> Result<Option<CartSnapshot>>;
    fn save(&mut self, snapshot: &CartSnapshot) -> Result<()>;
}

/// `cart.json` in the data directory.
pub struct JsonCartStore {
    path: PathBuf,
}

impl JsonCartStore {
    pub const FILE_NAME: &'static str = "cart.json";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(Self::FILE_NAME),
        }
    }
}

impl CartStore for JsonCartStore {
    fn load(&self) -> Result<Option<CartSnapshot>> {
        read_json_file(&self.path)
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<()> {
        write_json_file(&self.path, snapshot)
    }
}

#[derive(Debug, Default)]
pub struct MemoryCartStore {
    pub snapshot: Option<CartSnapshot>,
    pub saves: usize,
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<CartSnapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}

type Listener = Box<dyn FnMut(&Cart)>;

pub struct CartService<S: CartStore> {
    cart: Cart,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: CartStore> CartService<S> {
    /// Restore the cart from `store`. Lines whose product left the catalog are dropped.
    pub fn load(store: S) -> Result<Self> {
        let cart = match store.load()? {
            Some(snapshot) => restore(&snapshot),
            None => Cart::new(),
        };
        log::debug!(
            "Loaded cart with {} line(s), {} item(s)",
            cart.lines().len(),
            cart.total_items()
        );
        Ok(Self {
            cart,
            store,
            listeners: Vec::new(),
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register an observer called after every committed mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_to_cart(&mut self, product: &Product) -> Result<()> {
        self.commit(|cart| cart.add_to_cart(product))
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> Result<()> {
        self.commit(|cart| cart.remove_from_cart(product_id))
    }

    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) -> Result<()> {
        self.commit(|cart| cart.update_quantity(product_id, new_quantity))
    }

    pub fn increment(&mut self, product_id: &str) -> Result<()> {
        self.commit(|cart| cart.increment(product_id))
    }

    pub fn decrement(&mut self, product_id: &str) -> Result<()> {
        self.commit(|cart| cart.decrement(product_id))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(Cart::clear)
    }

    pub fn set_is_cart_open(&mut self, open: bool) -> Result<()> {
        self.commit(|cart| cart.set_is_cart_open(open))
    }

    fn commit(&mut self, op: impl FnOnce(&mut Cart)) -> Result<()> {
        let mut next = self.cart.clone();
        op(&mut next);

        self.store.save(&snapshot(&next))?;
        self.cart = next;

        for listener in &mut self.listeners {
            listener(&self.cart);
        }
        Ok(())
    }
}

fn snapshot(cart: &Cart) -> CartSnapshot {
    CartSnapshot {
        lines: cart
            .lines()
            .iter()
            .map(|l| StoredCartLine {
                product_id: l.product.id.clone(),
                quantity: l.quantity,
            })
            .collect(),
        is_open: cart.is_open(),
        last_updated: Utc::now(),
    }
}

fn restore(snapshot: &CartSnapshot) -> Cart {
    let lines = snapshot.lines.iter().filter_map(|stored| {
        match find_product(&stored.product_id) {
            Some(product) => Some(CartLine {
                product: product.clone(),
                quantity: stored.quantity,
            }),
            None => {
                log::warn!(
                    "Dropping cart line for unknown product '{}'",
                    stored.product_id
                );
                None
            }
        }
    });
    let mut cart = Cart::from_lines(lines);
    cart.set_is_cart_open(snapshot.is_open);
    cart
}
