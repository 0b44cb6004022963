//! The static product catalog.
//!
//! Products are built once on first use and never mutated afterwards. The cart and
//! the filter engine only ever borrow or clone them.
//!
//! # Public API
//! - [`Product`]: One saree in the catalog
//! - [`Category`] / [`Collection`]: The fixed enumerations products are drawn from
//! - [`catalog`]: The full catalog in its canonical order
//! - [`find_product`]: Lookup by id, `None` for unknown ids
//! - [`new_arrivals`], [`best_sellers`], [`featured`]: Home page sections
//! - [`format_price`]: Rupee formatting with Indian digit grouping

use crate::core::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of products shown in each home page section.
pub const HOME_SECTION_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Kanchipuram Silk")]
    KanchipuramSilk,
    #[serde(rename = "Banarasi Silk")]
    BanarasiSilk,
    #[serde(rename = "Mysore Silk")]
    MysoreSilk,
    #[serde(rename = "Tussar Silk")]
    TussarSilk,
    #[serde(rename = "Organza Silk")]
    OrganzaSilk,
    #[serde(rename = "Cotton Silk")]
    CottonSilk,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::KanchipuramSilk,
        Category::BanarasiSilk,
        Category::MysoreSilk,
        Category::TussarSilk,
        Category::OrganzaSilk,
        Category::CottonSilk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::KanchipuramSilk => "Kanchipuram Silk",
            Category::BanarasiSilk => "Banarasi Silk",
            Category::MysoreSilk => "Mysore Silk",
            Category::TussarSilk => "Tussar Silk",
            Category::OrganzaSilk => "Organza Silk",
            Category::CottonSilk => "Cotton Silk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| label_matches(c.label(), s))
            .ok_or_else(|| StorefrontError::unknown_category(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "Premavathi")]
    Premavathi,
    #[serde(rename = "Margazhi")]
    Margazhi,
    #[serde(rename = "Bridal Heritage")]
    BridalHeritage,
    #[serde(rename = "Festival Special")]
    FestivalSpecial,
    #[serde(rename = "Contemporary Elegance")]
    ContemporaryElegance,
    #[serde(rename = "Temple Collection")]
    TempleCollection,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Premavathi,
        Collection::Margazhi,
        Collection::BridalHeritage,
        Collection::FestivalSpecial,
        Collection::ContemporaryElegance,
        Collection::TempleCollection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Collection::Premavathi => "Premavathi",
            Collection::Margazhi => "Margazhi",
            Collection::BridalHeritage => "Bridal Heritage",
            Collection::FestivalSpecial => "Festival Special",
            Collection::ContemporaryElegance => "Contemporary Elegance",
            Collection::TempleCollection => "Temple Collection",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Collection {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Collection::ALL
            .into_iter()
            .find(|c| label_matches(c.label(), s))
            .ok_or_else(|| StorefrontError::unknown_collection(s))
    }
}

/// Accepts "Kanchipuram Silk", "kanchipuram silk" and "kanchipuram-silk".
fn label_matches(label: &str, input: &str) -> bool {
    let input = input.trim();
    label.eq_ignore_ascii_case(input) || label.replace(' ', "-").eq_ignore_ascii_case(input)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamil_name: Option<String>,
    /// Whole rupees.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    pub category: Category,
    pub collection: Collection,
    pub description: String,
    pub fabric: String,
    pub border_description: String,
    pub pallu_description: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Percentage off the original price, rounded down.
    ///
    /// `None` when there is no original price or it is not above the selling price;
    /// the catalog does not enforce `original_price >= price` on its own.
    pub fn discount_percent(&self) -> Option<u64> {
        match self.original_price {
            Some(original) if original > self.price => {
                Some((original - self.price) * 100 / original)
            }
            _ => None,
        }
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    tamil_name: &'static str,
    price: u64,
    original_price: Option<u64>,
    category: Category,
    collection: Collection,
    description: &'static str,
    fabric: &'static str,
    border: &'static str,
    pallu: &'static str,
    flags: (bool, bool, bool),
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "sg-001",
        name: "Royal Burgundy Bridal Silk",
        tamil_name: "அரச மெரூன் திருமண பட்டு",
        price: 45000,
        original_price: Some(52000),
        category: Category::KanchipuramSilk,
        collection: Collection::BridalHeritage,
        description: "An exquisite handwoven Kanchipuram silk saree in royal burgundy, adorned with intricate gold zari work. Perfect for the discerning bride who values tradition and elegance.",
        fabric: "Pure Mulberry Silk with 24K Gold Zari",
        border: "Wide temple border with peacock motifs in pure gold zari, spanning 4 inches with intricate detailing",
        pallu: "Grand pallu featuring traditional kalasam and mango motifs in rich gold zari weaving",
        flags: (true, false, true),
    },
    Seed {
        id: "sg-002",
        name: "Emerald Temple Silk",
        tamil_name: "மரகத கோவில் பட்டு",
        price: 38000,
        original_price: None,
        category: Category::KanchipuramSilk,
        collection: Collection::TempleCollection,
        description: "A stunning emerald green Kanchipuram silk with traditional temple border designs. The rich color symbolizes prosperity and new beginnings.",
        fabric: "Pure Kanchipuram Silk with Silver Zari",
        border: "Classic temple tower border with gopuram motifs in silver zari",
        pallu: "Elaborate pallu with deity motifs and floral patterns in contrasting zari",
        flags: (false, true, true),
    },
    Seed {
        id: "sg-003",
        name: "Royal Blue Celebration",
        tamil_name: "அரச நீல கொண்டாட்ட பட்டு",
        price: 32000,
        original_price: Some(36000),
        category: Category::BanarasiSilk,
        collection: Collection::FestivalSpecial,
        description: "A magnificent royal blue Banarasi silk saree with silver zari brocade work. Ideal for festivals and special celebrations.",
        fabric: "Pure Banarasi Silk with Silver Zari Brocade",
        border: "Elegant floral border with lotus motifs in silver zari",
        pallu: "Rich pallu with traditional paisley and floral jaal pattern",
        flags: (true, false, false),
    },
    Seed {
        id: "sg-004",
        name: "Golden Premavathi Silk",
        tamil_name: "தங்க பிரேமாவதி பட்டு",
        price: 55000,
        original_price: None,
        category: Category::KanchipuramSilk,
        collection: Collection::Premavathi,
        description: "From our signature Premavathi collection, this golden masterpiece features the finest handwoven silk with intricate traditional motifs passed down through generations.",
        fabric: "Premium Kanchipuram Silk with Pure Gold Zari",
        border: "Heritage border with traditional coin and peacock motifs in 24K gold zari",
        pallu: "Masterfully woven pallu with mythological scenes and floral scrollwork",
        flags: (false, true, true),
    },
    Seed {
        id: "sg-005",
        name: "Margazhi Moonlight",
        tamil_name: "மார்கழி நிலவு பட்டு",
        price: 42000,
        original_price: None,
        category: Category::MysoreSilk,
        collection: Collection::Margazhi,
        description: "Inspired by the sacred month of Margazhi, this ivory and gold silk saree captures the essence of early morning temple visits and divine serenity.",
        fabric: "Pure Mysore Silk with Gold Thread Work",
        border: "Delicate jasmine vine border with subtle gold thread accents",
        pallu: "Graceful pallu with kolam-inspired geometric patterns",
        flags: (true, false, true),
    },
    Seed {
        id: "sg-006",
        name: "Contemporary Rose Silk",
        tamil_name: "நவீன ரோஸ் பட்டு",
        price: 28000,
        original_price: None,
        category: Category::OrganzaSilk,
        collection: Collection::ContemporaryElegance,
        description: "A modern interpretation of traditional silk weaving, this rose pink organza silk blend features contemporary geometric patterns with a subtle shimmer.",
        fabric: "Organza Silk Blend with Copper Zari",
        border: "Modern geometric border with abstract floral motifs",
        pallu: "Minimalist pallu with scattered butis and contemporary patterns",
        flags: (false, false, false),
    },
    Seed {
        id: "sg-007",
        name: "Classic Magenta Bridal",
        tamil_name: "பாரம்பரிய மெஜந்தா திருமண பட்டு",
        price: 48000,
        original_price: None,
        category: Category::KanchipuramSilk,
        collection: Collection::BridalHeritage,
        description: "A timeless magenta bridal silk with elaborate gold zari work. This saree embodies the richness of South Indian bridal traditions.",
        fabric: "Pure Kanchipuram Silk with 22K Gold Zari",
        border: "Grand bridal border featuring elephants, peacocks, and temple towers",
        pallu: "Magnificent pallu with full mythological narrative in gold zari",
        flags: (false, true, false),
    },
    Seed {
        id: "sg-008",
        name: "Tussar Honey Gold",
        tamil_name: "தஸ்ஸார் தேன் தங்க பட்டு",
        price: 22000,
        original_price: None,
        category: Category::TussarSilk,
        collection: Collection::ContemporaryElegance,
        description: "A sophisticated tussar silk in warm honey gold tones with natural texture. Perfect for elegant daytime occasions.",
        fabric: "Pure Tussar Silk with Natural Dye",
        border: "Tribal-inspired border with natural motifs in earthy tones",
        pallu: "Textured pallu with hand-painted Madhubani-inspired designs",
        flags: (true, false, false),
    },
];

impl From<&Seed> for Product {
    fn from(seed: &Seed) -> Self {
        let (is_new, is_best_seller, is_featured) = seed.flags;
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            tamil_name: Some(seed.tamil_name.to_string()),
            price: seed.price,
            original_price: seed.original_price,
            category: seed.category,
            collection: seed.collection,
            description: seed.description.to_string(),
            fabric: seed.fabric.to_string(),
            border_description: seed.border.to_string(),
            pallu_description: seed.pallu.to_string(),
            is_new,
            is_best_seller,
            is_featured,
        }
    }
}

/// The full catalog in canonical order.
pub fn catalog() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(|| SEEDS.iter().map(Product::from).collect())
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    catalog().iter().find(|p| p.id == id)
}

fn section(pred: impl Fn(&Product) -> bool, limit: usize) -> Vec<&'static Product> {
    catalog().iter().filter(|p| pred(p)).take(limit).collect()
}

pub fn new_arrivals(limit: usize) -> Vec<&'static Product> {
    section(|p| p.is_new, limit)
}

pub fn best_sellers(limit: usize) -> Vec<&'static Product> {
    section(|p| p.is_best_seller, limit)
}

pub fn featured(limit: usize) -> Vec<&'static Product> {
    section(|p| p.is_featured, limit)
}

/// Format whole rupees with Indian digit grouping: `₹45,000`, `₹1,85,000`.
pub fn format_price(price: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(price).as_bytes();

    let mut result = String::with_capacity(digits.len() + digits.len() / 2 + 4);
    result.push('₹');

    if digits.len() <= 3 {
        // ASCII digits only
        result.extend(digits.iter().map(|&b| b as char));
        return result;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    // Leading group is 1 or 2 digits, the rest are pairs
    let first = head.len() % 2;
    for (i, &b) in head.iter().enumerate() {
        if i > 0 && (i + 2 - first) % 2 == 0 {
            result.push(',');
        }
        result.push(b as char);
    }
    result.push(',');
    result.extend(tail.iter().map(|&b| b as char));
    result
}
