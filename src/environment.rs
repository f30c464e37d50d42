/* ===============================================================================
Tiffin kitchen storefront.
Global vars and wall clock. 11 Mar 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::{FixedOffset, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::OnceCell;
use std::env;

// Settings
pub static VARS: OnceCell<Vars> = OnceCell::new();

// Environment variables
pub struct Vars {
   // Price prefix, i.e. "RM "
   price_unit: String,

   // Time zone, UTC
   time_zone: FixedOffset,

   // Orders for tomorrow close at this local time
   order_cutoff: NaiveTime,

   // Delivery window offered at checkout, i.e. "11:30-13:30"
   delivery_time: String,
}

impl Vars {
   pub fn from_env() -> Self {
      Vars {
         // Price prefix
         price_unit: {
            match env::var("PRICE_UNIT") {
               Ok(s) => s,
               Err(_) => {
                  log::info!("There is no environment variable PRICE_UNIT, using 'RM '");
                  String::from("RM ")
               }
            }
         },

         // Time zone, UTC
         time_zone: {
            let fallback = || FixedOffset::east_opt(8 * 3600).unwrap();
            match env::var("TIME_ZONE") {
               Ok(s) => match s.parse::<i32>() {
                  Ok(n) => FixedOffset::east_opt(n * 3600).unwrap_or_else(fallback),
                  Err(e) => {
                     log::info!("Something wrong with TIME_ZONE: {}", e);
                     fallback()
                  }
               }
               Err(_) => {
                  log::info!("There is no environment variable TIME_ZONE, using UTC+8");
                  fallback()
               }
            }
         },

         // Order cutoff
         order_cutoff: {
            let fallback = || NaiveTime::from_hms_opt(22, 30, 0).unwrap();
            match env::var("ORDER_CUTOFF") {
               Ok(s) => match NaiveTime::parse_from_str(&s, "%H:%M") {
                  Ok(t) => t,
                  Err(e) => {
                     log::info!("Something wrong with ORDER_CUTOFF: {}", e);
                     fallback()
                  }
               }
               Err(_) => fallback(),
            }
         },

         // Delivery window
         delivery_time: {
            match env::var("DELIVERY_TIME") {
               Ok(s) => s,
               Err(_) => String::from("11:30-13:30"),
            }
         },
      }
   }
}

// Lazy initialization, so tests and library consumers need no setup call
fn vars() -> &'static Vars {
   VARS.get_or_init(Vars::from_env)
}

// Current local time
pub fn current_date_time() -> NaiveDateTime {
   let our_timezone = vars().time_zone;
   Utc::now().with_timezone(&our_timezone).naive_local()
}

// String with info about time zone
pub fn time_zone_info() -> String {
   let our_timezone = vars().time_zone.local_minus_utc() / 3600;
   if our_timezone > 0 {
      format!("UTC+{}", our_timezone)
   } else {
      format!("UTC{}", our_timezone)
   }
}

// Local time of day after which tomorrow's slot is closed
pub fn order_cutoff() -> NaiveTime {
   vars().order_cutoff
}

// Delivery window offered at checkout
pub fn delivery_time() -> String {
   vars().delivery_time.clone()
}

// Price in sen as two-decimal text with the currency prefix, i.e. "RM 16.90"
pub fn price_with_unit(price: usize) -> String {
   format!("{}{}.{:02}", vars().price_unit, price / 100, price % 100)
}
