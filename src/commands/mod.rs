pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use account::*;
pub use admin::*;
pub use cart::*;
pub use catalog::*;
pub use checkout::*;
