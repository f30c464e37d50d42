/* ===============================================================================
Tiffin kitchen storefront.
Add-on catalog and per-dish resolver. 02 Apr 2025.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
=============================================================================== */

use lazy_static::lazy_static;
use serde::Serialize;
use smart_default::SmartDefault;
use std::collections::HashMap;

use crate::loc::Lang;

// Optional supplementary item attached to a dish order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SmartDefault)]
pub struct AddOnItem {
   // Slug, unique within its section
   pub id: String,
   pub name: String,
   pub name_en: String,
   // Sen, may be zero ("less rice")
   pub price: usize,
   pub image: Option<String>,
   // Echoes the owning section id
   pub category: String,
   // Per-item cap
   #[default = 10]
   pub max_qty: usize,
}

impl AddOnItem {
   pub fn name(&self, lang: Lang) -> &str {
      match lang {
         Lang::Zh => &self.name,
         Lang::En => &self.name_en,
      }
   }
}

// Named group of add-ons with a selection cap
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SmartDefault)]
pub struct AddOnSection {
   pub id: String,
   pub title: String,
   pub title_en: String,
   // Advisory only, nothing blocks checkout below it
   pub min_select: usize,
   // Cap on total quantity summed across the section's items
   #[default = 10]
   pub max_select: usize,
   pub items: Vec<AddOnItem>,
}

// Section ids of the baseline catalog
pub const SIDES: &str = "sides";
pub const ALACARTE: &str = "alacarte";
pub const TEA: &str = "tea";

fn item(section: &str, id: &str, name: &str, name_en: &str, price: usize) -> AddOnItem {
   AddOnItem {
      id: String::from(id),
      name: String::from(name),
      name_en: String::from(name_en),
      price,
      category: String::from(section),
      ..Default::default()
   }
}

fn section(id: &str, title: &str, title_en: &str, max_select: usize, items: Vec<AddOnItem>) -> AddOnSection {
   AddOnSection {
      id: String::from(id),
      title: String::from(title),
      title_en: String::from(title_en),
      max_select,
      items,
      ..Default::default()
   }
}

// What a dish identity changes in the baseline catalog. Pure data, the
// resolver below applies it, so a new dish needs a table entry and no code.
#[derive(Clone, Debug, Default)]
pub struct CatalogOverride {
   // Extra promotional section placed before the baseline ones
   pub prepend: Option<AddOnSection>,
   // (section id, replacement item list), position and identity kept
   pub replace: Vec<(&'static str, Vec<AddOnItem>)>,
}

lazy_static! {
   // Baseline sections in fixed order: sides, a-la-carte, tea
   static ref BASELINE: Vec<AddOnSection> = vec![
      section(SIDES, "小菜", "Sides", 3, vec![
         item(SIDES, "braised-egg", "卤蛋", "Braised Egg", 200),
         item(SIDES, "extra-rice", "加饭", "Extra Rice", 150),
         item(SIDES, "less-rice", "少饭", "Less Rice", 0),
         item(SIDES, "pickled-cucumber", "酸辣黄瓜", "Pickled Cucumber", 250),
      ]),
      section(ALACARTE, "单点", "A La Carte", 4, vec![
         item(ALACARTE, "fried-chicken-leg", "炸鸡腿", "Fried Chicken Leg", 600),
         item(ALACARTE, "pan-fried-tofu", "煎豆腐", "Pan-fried Tofu", 350),
      ]),
      section(TEA, "茶饮", "Tea", 2, vec![
         item(TEA, "iced-lemon-tea", "冰柠檬茶", "Iced Lemon Tea", 300),
         item(TEA, "barley-tea", "麦茶", "Barley Tea", 250),
      ]),
   ];

   // Dish identity to catalog changes
   static ref OVERRIDES: HashMap<u32, CatalogOverride> = {
      let mut map = HashMap::new();

      // The daily natto set swaps the generic sides for its own
      map.insert(6, CatalogOverride {
         replace: vec![(SIDES, vec![
            item(SIDES, "natto", "纳豆", "Natto", 300),
            item(SIDES, "seaweed", "海苔", "Seaweed", 150),
            item(SIDES, "onsen-egg", "温泉蛋", "Onsen Egg", 250),
         ])],
         ..Default::default()
      });

      // Monday curry carries extra protein and greens a la carte
      map.insert(1, CatalogOverride {
         replace: vec![(ALACARTE, vec![
            item(ALACARTE, "fried-chicken-leg", "炸鸡腿", "Fried Chicken Leg", 600),
            item(ALACARTE, "pan-fried-tofu", "煎豆腐", "Pan-fried Tofu", 350),
            item(ALACARTE, "extra-curry-chicken", "加咖喱鸡", "Extra Curry Chicken", 500),
            item(ALACARTE, "blanched-greens", "烫青菜", "Blanched Greens", 300),
         ])],
         ..Default::default()
      });

      // Thursday pork chop offers a one-per-order combo upgrade
      map.insert(4, CatalogOverride {
         prepend: Some(section("combo", "超值套餐", "Combo Upgrade", 1, vec![
            item("combo", "soup-tea-combo", "套餐升级（例汤+麦茶）", "Upgrade: Soup + Barley Tea", 450),
         ])),
         ..Default::default()
      });

      map
   };
}

// Sections the customer may pick from for a dish. Pure function of the dish
// identity, the baseline tables are never touched.
pub fn sections_for(dish_id: u32) -> Vec<AddOnSection> {
   let mut sections = BASELINE.clone();

   if let Some(ovr) = OVERRIDES.get(&dish_id) {
      for (section_id, items) in &ovr.replace {
         if let Some(sec) = sections.iter_mut().find(|s| s.id == *section_id) {
            sec.items = items.clone();
         } else {
            log::warn!("addons: override for dish {} names unknown section {}", dish_id, section_id);
         }
      }
      if let Some(promo) = &ovr.prepend {
         sections.insert(0, promo.clone());
      }
   }

   sections
}
