use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of product categories.
///
/// Stored records always hold one of these variants; raw labels from
/// payloads and query strings are resolved via [`Category::parse`] before
/// they ever touch the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Books,
    Home,
    Sports,
    Toys,
    Beauty,
    Automotive,
    Other,
}

impl Category {
    /// All defined categories, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Toys,
        Category::Beauty,
        Category::Automotive,
        Category::Other,
    ];

    /// Canonical label for this category, as it appears on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
            Category::Beauty => "Beauty",
            Category::Automotive => "Automotive",
            Category::Other => "Other",
        }
    }

    /// Resolve a raw label case-insensitively. Returns `None` for anything
    /// outside the defined set; callers decide whether that is a validation
    /// error (payloads) or a no-op (query filters).
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored product record.
///
/// `id` and `created_at` are assigned once by the store and never change;
/// `updated_at` is refreshed on every mutation, including no-op patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full create/update payload.
///
/// Every field takes a serde default so a missing field deserializes to an
/// empty/zero value and surfaces through the validator as a rule violation
/// rather than a transport error. The category is carried as a raw label and
/// resolved against [`Category`] by the validator and the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Sparse patch payload.
///
/// Each field is tri-state at the boundary: absent (or JSON null) means
/// "leave unchanged", present means "replace with this value". `Some("")`
/// is an explicit empty value, distinct from absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Fixed demonstration set: twelve products spanning every category, with
/// staggered creation times. Illustrative seed data, not a contract.
pub fn demo_catalog() -> Vec<Product> {
    let now = Utc::now();
    let seed = [
        (
            "Laptop Dell XPS 15",
            129999,
            "High-performance laptop with 15-inch display",
            Category::Electronics,
            30,
        ),
        (
            "Wireless Mouse",
            2999,
            "Ergonomic wireless mouse with USB receiver",
            Category::Electronics,
            25,
        ),
        (
            "Cotton T-Shirt",
            1999,
            "Comfortable cotton t-shirt, available in multiple colors",
            Category::Clothing,
            20,
        ),
        (
            "Organic Coffee Beans",
            1599,
            "Premium organic coffee beans, 1kg package",
            Category::Food,
            15,
        ),
        (
            "Programming Book - Clean Code",
            3999,
            "A handbook of agile software craftsmanship",
            Category::Books,
            10,
        ),
        (
            "LED Desk Lamp",
            4599,
            "Adjustable LED desk lamp with touch control",
            Category::Home,
            8,
        ),
        (
            "Yoga Mat",
            2499,
            "Non-slip yoga mat with carrying strap",
            Category::Sports,
            5,
        ),
        (
            "Building Blocks Set",
            4999,
            "Educational building blocks for kids, 500 pieces",
            Category::Toys,
            3,
        ),
        (
            "Moisturizing Cream",
            3499,
            "Hydrating face cream with SPF 30",
            Category::Beauty,
            2,
        ),
        (
            "Car Phone Holder",
            1299,
            "Universal car phone mount with 360-degree rotation",
            Category::Automotive,
            1,
        ),
        (
            "Bluetooth Speaker",
            5999,
            "Portable waterproof Bluetooth speaker",
            Category::Electronics,
            0,
        ),
        (
            "Running Shoes",
            8999,
            "Lightweight running shoes with excellent cushioning",
            Category::Sports,
            0,
        ),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(i, (name, cents, description, category, days_ago))| {
            let stamp = now - Duration::days(days_ago);
            Product {
                id: i as u64 + 1,
                name: name.to_string(),
                price: Decimal::new(cents, 2),
                description: description.to_string(),
                category,
                created_at: stamp,
                updated_at: stamp,
            }
        })
        .collect()
}
