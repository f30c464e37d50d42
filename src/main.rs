/* ===============================================================================
Tiffin kitchen storefront.
Demo driver: menu, availability, a sample order. 20 May 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use tiffin::environment as env;
use tiffin::loc::{loc, Key};
use tiffin::{add_to_cart, availability, dish, make_ticket, AddOnPick, AddRequest, Cart, DeliverySlot, Lang};

fn main() {
   pretty_env_logger::init();

   let now = env::current_date_time();
   let lang = Lang::En;
   println!("Menu at {} ({})\n", now, env::time_zone_info());

   for dish in dish::MENU.iter() {
      let avail = availability::for_dish(dish, now, lang);
      println!("{} {} — {}", dish.image, dish.name(lang), env::price_with_unit(dish.price));
      println!("   {} | {}{}\n",
         avail.top_tag,
         avail.btn_text,
         if avail.disabled { " (closed)" } else { "" });
   }

   // Order the first dish that is still open, with one side
   let mut cart = Cart::new();
   for dish in dish::MENU.iter() {
      let avail = availability::for_dish(dish, now, lang);
      if avail.disabled {
         continue;
      }

      let sections = tiffin::addons::sections_for(dish.id);
      let picks = sections.first()
      .and_then(|s| s.items.first().map(|i| AddOnPick {
         section: s.id.clone(),
         item: i.id.clone(),
         amount: 1,
      }))
      .into_iter()
      .collect();

      let slot = DeliverySlot::new(avail.actual_date, &env::delivery_time());
      match add_to_cart(&mut cart, AddRequest { dish, amount: 1, note: None, picks, slot }, &avail) {
         Ok(added) => println!("Added {} for {}", dish.name(lang), env::price_with_unit(added)),
         Err(e) => log::error!("demo add failed: {}", e),
      }
      break;
   }

   let info = cart.info();
   let total = loc(Key::TicketTotal, lang, &[&env::price_with_unit(info.total_cost)]);
   println!("Cart: {} items, {}", info.items_num, total);

   match make_ticket(&mut cart) {
      Ok(ticket) => println!("\nTicket:\n{}", serde_json::to_string_pretty(&ticket.to_json()).unwrap_or_default()),
      Err(e) => log::error!("checkout failed: {}", e),
   }
}
