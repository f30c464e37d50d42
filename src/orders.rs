/* ===============================================================================
Tiffin kitchen storefront.
Cart lines and the session cart. 07 May 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::NaiveDate;
use parse_display::{Display, FromStr};
use serde::Serialize;

// The delivery dimension: (date, time window) pair distinguishing otherwise
// identical lines, i.e. "2025-05-07 11:30-13:30"
#[derive(Display, FromStr, Clone, Debug, PartialEq, Eq, Serialize)]
#[display("{date} {time}")]
pub struct DeliverySlot {
   pub date: NaiveDate,
   pub time: String,
}

impl DeliverySlot {
   pub fn new(date: NaiveDate, time: &str) -> Self {
      Self { date, time: String::from(time) }
   }
}

// One priced, quantified entry of the order in progress
#[derive(Clone, Debug, Serialize)]
pub struct CartLine {
   // Item identity + delivery slot (+ add-on discriminator), unique in a cart
   pub key: String,
   // Dish line key for an add-on line, None for a dish line
   pub parent: Option<String>,
   pub name: String,
   pub name_en: String,
   // Sen per unit
   pub price: usize,
   // Always positive, a line at zero is removed instead
   pub amount: usize,
   pub is_add_on: bool,
   // Free text, dish lines only
   pub note: Option<String>,
   pub slot: DeliverySlot,
}

impl CartLine {
   pub fn cost(&self) -> usize {
      self.amount * self.price
   }
}

// Derived totals, recomputed from the lines on every query
#[derive(Debug, PartialEq, Eq)]
pub struct CartInfo {
   pub items_num: usize,
   pub total_cost: usize,
}

// The session cart. One owned instance per session, created at session start,
// mutated only through these operations, cleared at checkout.
#[derive(Default)]
pub struct Cart {
   lines: Vec<CartLine>,
}

impl Cart {
   pub fn new() -> Self {
      Self { lines: Vec::new() }
   }

   pub fn lines(&self) -> &[CartLine] {
      &self.lines
   }

   pub fn is_empty(&self) -> bool {
      self.lines.is_empty()
   }

   // Merge by key, two lines with the same key never coexist. A repeat dish
   // add overwrites the note when the new line carries one (last write wins).
   pub fn add_or_merge(&mut self, line: CartLine) {
      match self.lines.iter_mut().find(|l| l.key == line.key) {
         Some(existing) => {
            existing.amount += line.amount;
            if line.note.is_some() {
               existing.note = line.note;
            }
         }
         None => self.lines.push(line),
      }
   }

   // Stepper action. Unknown key is a no-op, dropping to zero or below
   // removes the line.
   pub fn update_amount(&mut self, key: &str, delta: i64) {
      let pos = match self.lines.iter().position(|l| l.key == key) {
         Some(pos) => pos,
         None => {
            log::debug!("cart: update_amount for absent key {}", key);
            return;
         }
      };

      let new_amount = self.lines[pos].amount as i64 + delta;
      if new_amount <= 0 {
         self.lines.remove(pos);
      } else {
         self.lines[pos].amount = new_amount as usize;
      }
   }

   pub fn inc_amount(&mut self, key: &str) {
      self.update_amount(key, 1);
   }

   pub fn dec_amount(&mut self, key: &str) {
      self.update_amount(key, -1);
   }

   // Unconditional removal regardless of amount
   pub fn remove(&mut self, key: &str) {
      self.lines.retain(|l| l.key != key);
   }

   pub fn clear(&mut self) {
      self.lines.clear();
   }

   // Totals over all lines, add-ons included
   pub fn info(&self) -> CartInfo {
      let (items_num, total_cost) = self.lines.iter()
      .fold((0, 0), |acc, line| {
         (acc.0 + line.amount, acc.1 + line.cost())
      });

      CartInfo { items_num, total_cost }
   }
}
