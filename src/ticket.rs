/* ===============================================================================
Tiffin kitchen storefront.
Checkout ticket handed to the persistence collaborator. 20 May 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::cart::CartError;
use crate::environment as env;
use crate::orders::Cart;

// Payment is simulated, there is no processor behind checkout
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payment {
   Simulated,
}

// One line of the order payload
#[derive(Clone, Debug, Serialize)]
pub struct TicketLine {
   pub name: String,
   pub name_en: String,
   pub amount: usize,
   // Sen per unit
   pub price: usize,
   pub is_add_on: bool,
   pub delivery_date: NaiveDate,
   pub delivery_time: String,
   pub note: Option<String>,
}

// The composed order as handed off for storage and status tracking
#[derive(Clone, Debug, Serialize)]
pub struct Ticket {
   pub lines: Vec<TicketLine>,
   // Sen, recomputed from the lines at assembly
   pub total_cost: usize,
   // Display rendering of the total, i.e. "RM 36.30"
   pub total_text: String,
   pub created_at: NaiveDateTime,
   pub payment: Payment,
}

impl Ticket {
   pub fn to_json(&self) -> serde_json::Value {
      serde_json::json!(self)
   }
}

// Snapshot the cart into an order payload, stamp the local time and empty the
// cart. An empty cart cannot be checked out.
pub fn make_ticket(cart: &mut Cart) -> Result<Ticket, CartError> {
   if cart.is_empty() {
      return Err(CartError::EmptyCart);
   }

   let info = cart.info();
   let lines = cart.lines().iter()
   .map(|line| TicketLine {
      name: line.name.clone(),
      name_en: line.name_en.clone(),
      amount: line.amount,
      price: line.price,
      is_add_on: line.is_add_on,
      delivery_date: line.slot.date,
      delivery_time: line.slot.time.clone(),
      note: line.note.clone(),
   })
   .collect();

   let ticket = Ticket {
      lines,
      total_cost: info.total_cost,
      total_text: env::price_with_unit(info.total_cost),
      created_at: env::current_date_time(),
      payment: Payment::Simulated,
   };

   cart.clear();
   Ok(ticket)
}
