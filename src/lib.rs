/* ===============================================================================
Tiffin kitchen storefront.
Order composition and pricing core. 11 Mar 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

//! The engine behind a home-kitchen tiffin storefront: the rotating menu with
//! per-dish delivery-date availability, the per-dish add-on catalog, cart
//! line composition and merging, running totals and the checkout ticket.
//! Prices are integer sen throughout, rendered as two-decimal text only at
//! the display boundary. Rendering, persistence and auth live elsewhere.

pub mod environment;
pub mod loc;
pub mod dish;
pub mod addons;
pub mod availability;
pub mod orders;
pub mod cart;
pub mod ticket;

pub use addons::{AddOnItem, AddOnSection};
pub use availability::Availability;
pub use cart::{add_to_cart, AddOnPick, AddRequest, CartError};
pub use dish::{Dish, Schedule};
pub use loc::Lang;
pub use orders::{Cart, CartInfo, CartLine, DeliverySlot};
pub use ticket::{make_ticket, Ticket};
