/* ===============================================================================
Tiffin kitchen storefront.
Rotating menu catalog. 02 Apr 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use chrono::Weekday;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::loc::Lang;

// When a dish can be delivered
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum Schedule {
   // Every orderable day, weekends skipped
   Daily,
   // One fixed weekday, Monday to Friday
   Weekly(#[serde(with = "weekday_ser")] Weekday),
}

// chrono's Weekday has no Serialize of its own under our feature set
mod weekday_ser {
   use chrono::Weekday;
   use serde::Serializer;

   pub fn serialize<S: Serializer>(weekday: &Weekday, ser: S) -> Result<S::Ok, S::Error> {
      ser.serialize_u8(weekday.number_from_monday() as u8)
   }
}

// A purchasable base meal, immutable catalog data
#[derive(Clone, Debug, Serialize)]
pub struct Dish {
   pub id: u32,
   pub name: String,
   pub name_en: String,
   // Sen, hundredths of a ringgit
   pub price: usize,
   // Path or emoji glyph
   pub image: String,
   pub tags: Vec<String>,
   pub desc: String,
   pub schedule: Schedule,
}

impl Dish {
   pub fn name(&self, lang: Lang) -> &str {
      match lang {
         Lang::Zh => &self.name,
         Lang::En => &self.name_en,
      }
   }
}

fn dish_raw(id: u32, name: &str, name_en: &str, price: usize, image: &str, tags: &[&str], desc: &str, schedule: Schedule) -> Dish {
   Dish {
      id,
      name: String::from(name),
      name_en: String::from(name_en),
      price,
      image: String::from(image),
      tags: tags.iter().map(|s| String::from(*s)).collect(),
      desc: String::from(desc),
      schedule,
   }
}

lazy_static! {
   // One dish per weekday plus the daily natto set
   pub static ref MENU: Vec<Dish> = vec![
      dish_raw(1, "咖喱鸡饭", "Curry Chicken Rice", 1690, "🍛", &["招牌", "微辣"],
         "慢火咖喱鸡腿，配香米饭", Schedule::Weekly(Weekday::Mon)),
      dish_raw(2, "三杯鸡饭", "Three Cup Chicken Rice", 1690, "🍗", &["下饭"],
         "麻油九层塔三杯鸡", Schedule::Weekly(Weekday::Tue)),
      dish_raw(3, "卤肉饭", "Braised Pork Rice", 1590, "🍚", &["家常"],
         "古早味卤肉，半颗卤蛋", Schedule::Weekly(Weekday::Wed)),
      dish_raw(4, "香茅猪扒饭", "Lemongrass Pork Chop Rice", 1790, "🥩", &["人气"],
         "香茅腌制猪扒，现煎", Schedule::Weekly(Weekday::Thu)),
      dish_raw(5, "姜葱鸡饭", "Ginger Scallion Chicken Rice", 1690, "🐔", &["清淡"],
         "姜葱油淋鸡，配时蔬", Schedule::Weekly(Weekday::Fri)),
      dish_raw(6, "纳豆定食", "Natto Set", 1890, "🍱", &["每日", "健康"],
         "纳豆配温泉蛋定食，每日供应", Schedule::Daily),
   ];
}

// Catalog lookup
pub fn dish(id: u32) -> Option<&'static Dish> {
   MENU.iter().find(|d| d.id == id)
}
