/* ===============================================================================
Tiffin kitchen storefront.
Localized display strings. 14 Mar 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::{Datelike, NaiveDate, Weekday};
use strum::{AsRefStr, EnumString};

// Customer-facing language tag
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, AsRefStr, EnumString)]
pub enum Lang {
   #[default]
   #[strum(to_string = "zh")]
   Zh,
   #[strum(to_string = "en")]
   En,
}

// Generated strings, the catalog itself carries its own bilingual names
#[derive(AsRefStr, Debug)]
pub enum Key {
   AvailTag, // "{}配送" | "Delivers {}"
   AvailBtnOpen, // "预订 {} 的餐" | "Order for {}"
   AvailBtnClosed, // "明日已截单，改订下周{}" | "Tomorrow is closed, next {} instead"
   CartAddOnName, // "└ {}"
   TicketTotal, // "合计 {}" | "Total {}"
}

fn template(key: &Key, lang: Lang) -> &'static str {
   match lang {
      Lang::Zh => match key {
         Key::AvailTag => "{}配送",
         Key::AvailBtnOpen => "预订 {} 的餐",
         Key::AvailBtnClosed => "明日已截单，改订下周{}",
         Key::CartAddOnName => "└ {}",
         Key::TicketTotal => "合计 {}",
      }
      Lang::En => match key {
         Key::AvailTag => "Delivers {}",
         Key::AvailBtnOpen => "Order for {}",
         Key::AvailBtnClosed => "Tomorrow is closed, next {} instead",
         Key::CartAddOnName => "└ {}",
         Key::TicketTotal => "Total {}",
      }
   }
}

// Substitute args into the "{}" placeholders, left to right
pub fn loc<T>(key: Key, lang: Lang, args: &[&T]) -> String
where T: ToString
{
   let mut res = String::from(template(&key, lang));
   for arg in args {
      match res.find("{}") {
         Some(pos) => res.replace_range(pos..pos + 2, &arg.to_string()),
         None => {
            log::warn!("loc: too many args for {}", key.as_ref());
            break;
         }
      }
   }
   res
}

// Weekday as shown to the customer
pub fn weekday_name(weekday: Weekday, lang: Lang) -> &'static str {
   match lang {
      Lang::Zh => match weekday {
         Weekday::Mon => "一",
         Weekday::Tue => "二",
         Weekday::Wed => "三",
         Weekday::Thu => "四",
         Weekday::Fri => "五",
         Weekday::Sat => "六",
         Weekday::Sun => "日",
      }
      Lang::En => match weekday {
         Weekday::Mon => "Monday",
         Weekday::Tue => "Tuesday",
         Weekday::Wed => "Wednesday",
         Weekday::Thu => "Thursday",
         Weekday::Fri => "Friday",
         Weekday::Sat => "Saturday",
         Weekday::Sun => "Sunday",
      }
   }
}

// Date with its weekday, i.e. "3月12日 (周三)" or "Wed, Mar 12"
pub fn date_label(date: NaiveDate, lang: Lang) -> String {
   match lang {
      Lang::Zh => format!("{}月{}日 (周{})", date.month(), date.day(), weekday_name(date.weekday(), lang)),
      Lang::En => date.format("%a, %b %-d").to_string(),
   }
}
