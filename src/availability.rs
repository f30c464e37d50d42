/* ===============================================================================
Tiffin kitchen storefront.
Next orderable delivery date per dish. 18 Apr 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::dish::{Dish, Schedule};
use crate::environment as env;
use crate::loc::{self, loc, Key, Lang};

// What the menu card shows for one dish, recomputed from "now" on each
// render and never persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
   // Human label for the resolved date
   pub top_tag: String,
   // Call to action, changes when the nearest slot already closed
   pub btn_text: String,
   // True only when falling back to next week's occurrence
   pub disabled: bool,
   pub actual_date: NaiveDate,
}

// Saturday and Sunday are not delivered, roll to Monday
fn skip_weekend(date: NaiveDate) -> NaiveDate {
   match date.weekday() {
      Weekday::Sat => date + Duration::days(2),
      Weekday::Sun => date + Duration::days(1),
      _ => date,
   }
}

// First date strictly after `today` falling on `target`
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
   let mut date = today + Duration::days(1);
   while date.weekday() != target {
      date += Duration::days(1);
   }
   date
}

// Resolve the next orderable delivery date for a dish. Pure in `now`, the
// cutoff time comes from the environment (22:30 unless overridden).
pub fn for_dish(dish: &Dish, now: NaiveDateTime, lang: Lang) -> Availability {
   let cutoff = env::order_cutoff();

   match dish.schedule {
      Schedule::Daily => {
         // Tomorrow, one more day once the cutoff passed, then weekend skip.
         // The boundary itself counts as passed.
         let mut date = now.date() + Duration::days(1);
         if now.time() >= cutoff {
            date += Duration::days(1);
         }
         let date = skip_weekend(date);

         let label = loc::date_label(date, lang);
         Availability {
            top_tag: loc(Key::AvailTag, lang, &[&label]),
            btn_text: loc(Key::AvailBtnOpen, lang, &[&label]),
            disabled: false,
            actual_date: date,
         }
      }
      Schedule::Weekly(target) => {
         let nearest = next_weekday(now.date(), target);
         // Orders close at the cutoff of the day before delivery
         let closes_at = (nearest - Duration::days(1)).and_time(cutoff);

         if now >= closes_at {
            let date = nearest + Duration::days(7);
            Availability {
               top_tag: loc(Key::AvailTag, lang, &[&loc::date_label(date, lang)]),
               btn_text: loc(Key::AvailBtnClosed, lang, &[&loc::weekday_name(target, lang)]),
               disabled: true,
               actual_date: date,
            }
         } else {
            let label = loc::date_label(nearest, lang);
            Availability {
               top_tag: loc(Key::AvailTag, lang, &[&label]),
               btn_text: loc(Key::AvailBtnOpen, lang, &[&label]),
               disabled: false,
               actual_date: nearest,
            }
         }
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::dish;

   fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
      NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hh, mm, 0).unwrap()
   }

   fn date(y: i32, m: u32, d: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(y, m, d).unwrap()
   }

   // 2025-04-14 is a Monday

   #[test]
   fn weekday_dish_open_before_cutoff() {
      // Monday dish asked on Sunday evening, before 22:30
      let monday_dish = dish::dish(1).unwrap();
      let avail = for_dish(monday_dish, at(2025, 4, 13, 22, 29), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 14));
   }

   #[test]
   fn weekday_dish_cutoff_boundary_is_inclusive() {
      // Exactly 22:30 the evening before: closed, pushed a full week
      let monday_dish = dish::dish(1).unwrap();
      let avail = for_dish(monday_dish, at(2025, 4, 13, 22, 30), Lang::En);
      assert!(avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 21));
   }

   #[test]
   fn weekday_dish_far_target_ignores_todays_cutoff() {
      // Friday dish asked late Monday night: Friday is days away, still open
      let friday_dish = dish::dish(5).unwrap();
      let avail = for_dish(friday_dish, at(2025, 4, 14, 23, 50), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 18));
   }

   #[test]
   fn weekday_dish_same_day_never_offered() {
      // Monday dish asked on Monday morning resolves to next Monday, open
      let monday_dish = dish::dish(1).unwrap();
      let avail = for_dish(monday_dish, at(2025, 4, 14, 9, 0), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 21));
   }

   #[test]
   fn daily_dish_plain_tomorrow() {
      let natto = dish::dish(6).unwrap();
      let avail = for_dish(natto, at(2025, 4, 14, 12, 0), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 15));
   }

   #[test]
   fn daily_dish_saturday_rolls_to_monday() {
      // Friday before cutoff: tomorrow is Saturday, delivered Monday
      let natto = dish::dish(6).unwrap();
      let avail = for_dish(natto, at(2025, 4, 18, 12, 0), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 21));
   }

   #[test]
   fn daily_dish_sunday_rolls_to_monday() {
      // Saturday past cutoff: tomorrow+1 is Monday already
      let natto = dish::dish(6).unwrap();
      let avail = for_dish(natto, at(2025, 4, 19, 23, 0), Lang::En);
      assert_eq!(avail.actual_date, date(2025, 4, 21));

      // Saturday before cutoff: tomorrow is Sunday, single-day skip to Monday
      let avail = for_dish(natto, at(2025, 4, 19, 12, 0), Lang::En);
      assert_eq!(avail.actual_date, date(2025, 4, 21));
   }

   #[test]
   fn daily_dish_past_cutoff_adds_a_day() {
      // Monday at exactly 22:30: tomorrow+1 is Wednesday
      let natto = dish::dish(6).unwrap();
      let avail = for_dish(natto, at(2025, 4, 14, 22, 30), Lang::En);
      assert!(!avail.disabled);
      assert_eq!(avail.actual_date, date(2025, 4, 16));
   }

   #[test]
   fn closed_button_text_names_next_week() {
      let monday_dish = dish::dish(1).unwrap();
      let avail = for_dish(monday_dish, at(2025, 4, 13, 23, 0), Lang::En);
      assert_eq!(avail.btn_text, "Tomorrow is closed, next Monday instead");
      let avail_zh = for_dish(monday_dish, at(2025, 4, 13, 23, 0), Lang::Zh);
      assert_eq!(avail_zh.btn_text, "明日已截单，改订下周一");
   }
}
