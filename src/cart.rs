/* ===============================================================================
Tiffin kitchen storefront.
Line-item composer: dish + add-ons into cart lines. 07 May 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use thiserror::Error;

use crate::addons::{self, AddOnItem, AddOnSection};
use crate::availability::Availability;
use crate::dish::Dish;
use crate::loc::{loc, Key, Lang};
use crate::orders::{Cart, CartLine, DeliverySlot};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
   // Caller contract violation: adds on a disabled availability are refused
   // without touching the cart
   #[error("the nearest slot for dish {0} already closed")]
   SlotClosed(u32),
   #[error("the cart is empty")]
   EmptyCart,
}

// One add-on chosen in the dish dialog
#[derive(Clone, Debug)]
pub struct AddOnPick {
   pub section: String,
   pub item: String,
   pub amount: usize,
}

// A confirmed "add to cart" action
#[derive(Clone, Debug)]
pub struct AddRequest<'a> {
   pub dish: &'a Dish,
   pub amount: usize,
   pub note: Option<String>,
   pub picks: Vec<AddOnPick>,
   pub slot: DeliverySlot,
}

// Dish line key: item identity + delivery dimension
pub fn dish_cart_id(dish_id: u32, slot: &DeliverySlot) -> String {
   format!("{}@{}", dish_id, slot)
}

// Add-on line key: parent key + a stable discriminator
pub fn add_on_cart_id(dish_key: &str, section: &AddOnSection, item: &AddOnItem) -> String {
   format!("{}+{}/{}", dish_key, section.id, item.id)
}

fn picked_amount(picks: &[AddOnPick], section: &AddOnSection, item: &AddOnItem) -> usize {
   picks.iter()
   .filter(|p| p.section == section.id && p.item == item.id)
   .map(|p| p.amount)
   .sum()
}

// Merge a confirmed add into the cart and return the sen this action
// contributed. The same value falls out of Cart::info() when recomputed over
// the changed lines, the two must never diverge.
//
// Defensive behavior: a disabled availability is refused, a zero dish amount
// is a logged no-op, add-on amounts over the per-item cap or the section cap
// are clamped silently in section item order.
pub fn add_to_cart(cart: &mut Cart, req: AddRequest, avail: &Availability) -> Result<usize, CartError> {
   if avail.disabled {
      return Err(CartError::SlotClosed(req.dish.id));
   }
   if req.amount == 0 {
      log::warn!("cart: add of dish {} with zero amount ignored", req.dish.id);
      return Ok(0);
   }

   let dish_key = dish_cart_id(req.dish.id, &req.slot);
   let mut added = req.dish.price * req.amount;

   cart.add_or_merge(CartLine {
      key: dish_key.clone(),
      parent: None,
      name: req.dish.name.clone(),
      name_en: req.dish.name_en.clone(),
      price: req.dish.price,
      amount: req.amount,
      is_add_on: false,
      note: req.note,
      slot: req.slot.clone(),
   });

   // Resolve sections fresh for this dish, picks outside them are ignored
   for section in addons::sections_for(req.dish.id) {
      let mut remaining = section.max_select;

      for item in &section.items {
         let wanted = picked_amount(&req.picks, &section, item);
         if wanted == 0 {
            continue;
         }

         let take = wanted.min(item.max_qty).min(remaining);
         if take < wanted {
            log::warn!("cart: add-on {}/{} clamped from {} to {}", section.id, item.id, wanted, take);
         }
         if take == 0 {
            continue;
         }
         remaining -= take;
         added += item.price * take;

         cart.add_or_merge(CartLine {
            key: add_on_cart_id(&dish_key, &section, item),
            parent: Some(dish_key.clone()),
            // Subordinated under the dish in any listing
            name: loc(Key::CartAddOnName, Lang::Zh, &[&item.name]),
            name_en: loc(Key::CartAddOnName, Lang::En, &[&item.name_en]),
            price: item.price,
            amount: take,
            is_add_on: true,
            note: None,
            slot: req.slot.clone(),
         });
      }
   }

   Ok(added)
}

#[cfg(test)]
mod tests {
   use super::*;
   use chrono::NaiveDate;
   use crate::dish;
   use crate::orders::CartInfo;

   fn slot() -> DeliverySlot {
      DeliverySlot::new(NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(), "11:30-13:30")
   }

   fn open(date: NaiveDate) -> Availability {
      Availability {
         top_tag: String::new(),
         btn_text: String::new(),
         disabled: false,
         actual_date: date,
      }
   }

   fn closed(date: NaiveDate) -> Availability {
      Availability { disabled: true, ..open(date) }
   }

   fn pick(section: &str, item: &str, amount: usize) -> AddOnPick {
      AddOnPick {
         section: String::from(section),
         item: String::from(item),
         amount,
      }
   }

   #[test]
   fn basic_composition_scenario() {
      // Dish RM 16.90 x2 plus one RM 2.50 side: grand total RM 36.30
      let mut cart = Cart::new();
      let curry = dish::dish(1).unwrap();
      let added = add_to_cart(&mut cart, AddRequest {
         dish: curry,
         amount: 2,
         note: None,
         picks: vec![pick("sides", "pickled-cucumber", 1)],
         slot: slot(),
      }, &open(slot().date)).unwrap();

      assert_eq!(added, 3630);
      assert_eq!(cart.lines().len(), 2);

      let dish_line = &cart.lines()[0];
      assert_eq!((dish_line.amount, dish_line.price), (2, 1690));
      assert!(!dish_line.is_add_on);

      let side_line = &cart.lines()[1];
      assert_eq!((side_line.amount, side_line.price), (1, 250));
      assert!(side_line.is_add_on);
      assert_eq!(side_line.parent.as_deref(), Some(dish_line.key.as_str()));

      // The composer's figure and the recomputed cart total are one invariant
      assert_eq!(cart.info(), CartInfo { items_num: 3, total_cost: 3630 });
   }

   #[test]
   fn repeat_add_merges_instead_of_duplicating() {
      let mut cart = Cart::new();
      let curry = dish::dish(1).unwrap();
      let avail = open(slot().date);

      for _ in 0..2 {
         add_to_cart(&mut cart, AddRequest {
            dish: curry,
            amount: 1,
            note: None,
            picks: vec![pick("sides", "braised-egg", 2)],
            slot: slot(),
         }, &avail).unwrap();
      }

      assert_eq!(cart.lines().len(), 2);
      assert_eq!(cart.lines()[0].amount, 2);
      assert_eq!(cart.lines()[1].amount, 4);
   }

   #[test]
   fn same_dish_different_slot_stays_separate() {
      let mut cart = Cart::new();
      let curry = dish::dish(1).unwrap();
      let other = DeliverySlot::new(NaiveDate::from_ymd_opt(2025, 5, 19).unwrap(), "11:30-13:30");

      add_to_cart(&mut cart, AddRequest {
         dish: curry, amount: 1, note: None, picks: vec![], slot: slot(),
      }, &open(slot().date)).unwrap();
      add_to_cart(&mut cart, AddRequest {
         dish: curry, amount: 1, note: None, picks: vec![], slot: other.clone(),
      }, &open(other.date)).unwrap();

      assert_eq!(cart.lines().len(), 2);
   }

   #[test]
   fn disabled_availability_is_refused_without_mutation() {
      let mut cart = Cart::new();
      let curry = dish::dish(1).unwrap();
      let res = add_to_cart(&mut cart, AddRequest {
         dish: curry, amount: 1, note: None, picks: vec![], slot: slot(),
      }, &closed(slot().date));

      assert_eq!(res, Err(CartError::SlotClosed(1)));
      assert!(cart.is_empty());
   }

   #[test]
   fn section_cap_clamps_summed_quantity() {
      // Sides cap is 3: three items at 2 each clamp to 2 + 1 + 0
      let mut cart = Cart::new();
      let pork = dish::dish(3).unwrap();
      let added = add_to_cart(&mut cart, AddRequest {
         dish: pork,
         amount: 1,
         note: None,
         picks: vec![
            pick("sides", "braised-egg", 2),
            pick("sides", "extra-rice", 2),
            pick("sides", "pickled-cucumber", 2),
         ],
         slot: slot(),
      }, &open(slot().date)).unwrap();

      let section_total: usize = cart.lines().iter()
      .filter(|l| l.is_add_on)
      .map(|l| l.amount)
      .sum();
      assert_eq!(section_total, 3);
      // 15.90 + 2x2.00 + 1x1.50
      assert_eq!(added, 1590 + 400 + 150);
   }

   #[test]
   fn combo_section_caps_at_one() {
      let mut cart = Cart::new();
      let pork = dish::dish(4).unwrap();
      // The combo section caps at one per order
      add_to_cart(&mut cart, AddRequest {
         dish: pork,
         amount: 1,
         note: None,
         picks: vec![pick("combo", "soup-tea-combo", 5)],
         slot: slot(),
      }, &open(slot().date)).unwrap();

      let combo = cart.lines().iter().find(|l| l.is_add_on).unwrap();
      assert_eq!(combo.amount, 1);
   }

   #[test]
   fn unknown_picks_are_ignored() {
      let mut cart = Cart::new();
      let natto = dish::dish(6).unwrap();
      // The baseline sides were substituted away for this dish
      let added = add_to_cart(&mut cart, AddRequest {
         dish: natto,
         amount: 1,
         note: None,
         picks: vec![pick("sides", "braised-egg", 1), pick("sides", "natto", 1)],
         slot: slot(),
      }, &open(slot().date)).unwrap();

      assert_eq!(added, 1890 + 300);
      assert_eq!(cart.lines().len(), 2);
      assert!(cart.lines()[1].key.ends_with("+sides/natto"));
   }

   #[test]
   fn zero_amount_add_is_a_no_op() {
      let mut cart = Cart::new();
      let curry = dish::dish(1).unwrap();
      let added = add_to_cart(&mut cart, AddRequest {
         dish: curry, amount: 0, note: None, picks: vec![pick("tea", "barley-tea", 1)], slot: slot(),
      }, &open(slot().date)).unwrap();

      assert_eq!(added, 0);
      assert!(cart.is_empty());
   }

   #[test]
   fn add_on_names_are_subordinated() {
      let mut cart = Cart::new();
      let natto = dish::dish(6).unwrap();
      add_to_cart(&mut cart, AddRequest {
         dish: natto, amount: 1, note: None, picks: vec![pick("sides", "seaweed", 1)], slot: slot(),
      }, &open(slot().date)).unwrap();

      let line = &cart.lines()[1];
      assert_eq!(line.name, "└ 海苔");
      assert_eq!(line.name_en, "└ Seaweed");
   }
}
