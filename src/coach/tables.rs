use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One axis of the footprint quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "electronics_freq")]
    ElectronicsFrequency,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Transport, Self::Shopping, Self::ElectronicsFrequency]
    }

    /// Field name used on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::ElectronicsFrequency => "electronics_freq",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::Transport => "How do you usually commute?",
            Self::Shopping => "What do you shop usually?",
            Self::ElectronicsFrequency => "How often do you buy new electronics?",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-choice weights in kg CO2e, keyed by dimension. Labels keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmissionTable {
    choices: BTreeMap<Dimension, Vec<(String, f64)>>,
}

impl EmissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(
        mut self,
        dimension: Dimension,
        label: impl Into<String>,
        weight: f64,
    ) -> Self {
        let label = label.into();
        let entries = self.choices.entry(dimension).or_default();
        match entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = weight,
            None => entries.push((label, weight)),
        }
        self
    }

    pub fn weight(&self, dimension: Dimension, label: &str) -> Option<f64> {
        self.choices
            .get(&dimension)?
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, weight)| *weight)
    }

    pub fn contains(&self, dimension: Dimension, label: &str) -> bool {
        self.weight(dimension, label).is_some()
    }

    pub fn labels(&self, dimension: Dimension) -> Vec<&str> {
        self.choices
            .get(&dimension)
            .map(|entries| entries.iter().map(|(label, _)| label.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Dimension, &str, f64)> + '_ {
        self.choices.iter().flat_map(|(dimension, entries)| {
            entries
                .iter()
                .map(move |(label, weight)| (*dimension, label.as_str(), *weight))
        })
    }
}

/// Tip strings keyed by the chosen label of a dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipTable {
    tips: HashMap<(Dimension, String), Vec<String>>,
}

impl TipTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tips(
        mut self,
        dimension: Dimension,
        label: impl Into<String>,
        tips: &[&str],
    ) -> Self {
        self.tips
            .entry((dimension, label.into()))
            .or_default()
            .extend(tips.iter().map(|tip| tip.to_string()));
        self
    }

    pub fn tips(&self, dimension: Dimension, label: &str) -> &[String] {
        self.tips
            .get(&(dimension, label.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A lower-footprint option suggested next to a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub carbon_score: f64,
    pub reason: String,
}

impl Alternative {
    pub fn new(name: impl Into<String>, carbon_score: f64, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            carbon_score,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntry {
    pub carbon_score: f64,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    entries: HashMap<String, ProductEntry>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(
        mut self,
        category: impl Into<String>,
        carbon_score: f64,
        alternatives: Vec<Alternative>,
    ) -> Self {
        self.entries.insert(
            category.into(),
            ProductEntry {
                carbon_score,
                alternatives,
            },
        );
        self
    }

    pub fn get(&self, category: &str) -> Option<&ProductEntry> {
        self.entries.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductEntry)> + '_ {
        self.entries
            .iter()
            .map(|(category, entry)| (category.as_str(), entry))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKeywords {
    pub category: String,
    pub keywords: Vec<String>,
}

/// Keyword lists per category. Iteration order is insertion order and decides ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryKeywordTable {
    categories: Vec<CategoryKeywords>,
}

impl CategoryKeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>, keywords: &[&str]) -> Self {
        let category = category.into();
        let keywords = keywords.iter().map(|keyword| keyword.to_lowercase());
        match self
            .categories
            .iter_mut()
            .find(|entry| entry.category == category)
        {
            Some(entry) => entry.keywords.extend(keywords),
            None => self.categories.push(CategoryKeywords {
                category,
                keywords: keywords.collect(),
            }),
        }
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryKeywords> {
        self.categories.iter()
    }
}

/// Inconsistency between the static tables, reported at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageGap {
    MissingCatalogEntry { category: String },
    MissingTips { dimension: Dimension, label: String },
    NegativeWeight { dimension: Dimension, label: String },
    AlternativeAboveBaseline { category: String, alternative: String },
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageGap::MissingCatalogEntry { category } => {
                write!(f, "category '{category}' has keywords but no catalog entry")
            }
            CoverageGap::MissingTips { dimension, label } => {
                write!(f, "no tips registered for {dimension} '{label}'")
            }
            CoverageGap::NegativeWeight { dimension, label } => {
                write!(f, "{dimension} '{label}' has a negative weight")
            }
            CoverageGap::AlternativeAboveBaseline {
                category,
                alternative,
            } => write!(
                f,
                "alternative '{alternative}' scores above the '{category}' baseline"
            ),
        }
    }
}

/// Immutable lookup data shared by the resolver and evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachTables {
    pub keywords: CategoryKeywordTable,
    pub emissions: EmissionTable,
    pub tips: TipTable,
    pub catalog: ProductCatalog,
    pub fallback_messages: Vec<String>,
}

impl CoachTables {
    pub fn standard() -> Self {
        Self {
            keywords: standard_keywords(),
            emissions: standard_emissions(),
            tips: standard_tips(),
            catalog: standard_catalog(),
            fallback_messages: vec![
                "Oops! We're still working on that one. Please try something else! 😊".to_string(),
                "Hmm, I didn't quite get that. Could you try another input? 🌱".to_string(),
            ],
        }
    }

    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let mut gaps = Vec::new();

        for entry in self.keywords.iter() {
            if self.catalog.get(&entry.category).is_none() {
                gaps.push(CoverageGap::MissingCatalogEntry {
                    category: entry.category.clone(),
                });
            }
        }

        for (dimension, label, weight) in self.emissions.entries() {
            if weight < 0.0 {
                gaps.push(CoverageGap::NegativeWeight {
                    dimension,
                    label: label.to_string(),
                });
            }
            if self.tips.tips(dimension, label).is_empty() {
                gaps.push(CoverageGap::MissingTips {
                    dimension,
                    label: label.to_string(),
                });
            }
        }

        let mut categories: Vec<_> = self.catalog.iter().collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        for (category, entry) in categories {
            for alternative in &entry.alternatives {
                if alternative.carbon_score > entry.carbon_score {
                    gaps.push(CoverageGap::AlternativeAboveBaseline {
                        category: category.to_string(),
                        alternative: alternative.name.clone(),
                    });
                }
            }
        }

        gaps
    }
}

fn standard_keywords() -> CategoryKeywordTable {
    CategoryKeywordTable::new()
        .with_category(
            "phone",
            &["phone", "mobile", "smartphone", "iphone", "android phone"],
        )
        .with_category("laptop", &["laptop", "notebook", "macbook", "chromebook"])
        .with_category(
            "clothing",
            &["t-shirt", "tshirt", "shirt", "jeans", "jacket", "hoodie"],
        )
        .with_category("shoes", &["shoes", "sneakers", "boots"])
}

fn standard_emissions() -> EmissionTable {
    use Dimension::*;

    EmissionTable::new()
        .with_choice(Transport, "Car", 2.3)
        .with_choice(Transport, "Bus", 0.8)
        .with_choice(Transport, "Bicycle", 0.05)
        .with_choice(Transport, "Walking", 0.0)
        .with_choice(Transport, "Electric Scooter", 0.2)
        .with_choice(Shopping, "Groceries & Food", 1.0)
        .with_choice(Shopping, "Clothing & Fashion", 2.5)
        .with_choice(Shopping, "Electronics & Gadgets", 3.0)
        .with_choice(Shopping, "Home & Living", 1.5)
        .with_choice(Shopping, "Beauty & Personal Care", 1.2)
        .with_choice(ElectronicsFrequency, "Every year", 2.5)
        .with_choice(ElectronicsFrequency, "Every 2-3 years", 1.0)
        .with_choice(ElectronicsFrequency, "Rarely", 0.3)
}

fn standard_tips() -> TipTable {
    use Dimension::*;

    TipTable::new()
        .with_tips(
            Transport,
            "Car",
            &[
                "Plan routes to avoid traffic jams: idling wastes fuel and CO₂!",
                "Share rides with colleagues heading the same way.",
            ],
        )
        .with_tips(
            Transport,
            "Bus",
            &[
                "Travel during off-peak hours to reduce congestion and emissions.",
                "Combine errands into a single trip along your bus route.",
            ],
        )
        .with_tips(
            Transport,
            "Bicycle",
            &[
                "Keep your bike tires well-inflated for easier rides.",
                "Invite a friend to join your cycling commute.",
            ],
        )
        .with_tips(
            Transport,
            "Walking",
            &[
                "Walk to local shops to cut emissions and get exercise.",
                "Pick shaded routes so walking stays pleasant year-round.",
            ],
        )
        .with_tips(
            Transport,
            "Electric Scooter",
            &[
                "Charge during off-peak hours to reduce grid load.",
                "Service the battery regularly to extend its life.",
            ],
        )
        .with_tips(
            Shopping,
            "Groceries & Food",
            &[
                "Freeze leftovers to reduce food waste.",
                "Buy seasonal produce from local growers.",
            ],
        )
        .with_tips(
            Shopping,
            "Clothing & Fashion",
            &[
                "Choose organic cotton or recycled fabrics.",
                "Swap or thrift clothes before buying new.",
            ],
        )
        .with_tips(
            Shopping,
            "Electronics & Gadgets",
            &[
                "Buy refurbished or certified pre-owned electronics.",
                "Recycle old gadgets through certified e-waste programs.",
            ],
        )
        .with_tips(
            Shopping,
            "Home & Living",
            &[
                "Use LED bulbs and smart power strips.",
                "Pick furniture made from certified sustainable wood.",
            ],
        )
        .with_tips(
            Shopping,
            "Beauty & Personal Care",
            &[
                "Switch to biodegradable or refillable products.",
                "Choose solid shampoo bars to skip plastic bottles.",
            ],
        )
        .with_tips(
            ElectronicsFrequency,
            "Every year",
            &[
                "Try using devices for 2-3 years instead of every year.",
                "Trade in your old device so it gets a second life.",
            ],
        )
        .with_tips(
            ElectronicsFrequency,
            "Every 2-3 years",
            &[
                "Keep software updated to improve efficiency.",
                "A new battery can add another year to your phone.",
            ],
        )
        .with_tips(
            ElectronicsFrequency,
            "Rarely",
            &[
                "You're eco-conscious already, keep it up! 💚",
                "Repair before replacing: you're already on the right track.",
            ],
        )
}

fn standard_catalog() -> ProductCatalog {
    ProductCatalog::new()
        .with_product(
            "phone",
            70.0,
            vec![Alternative::new(
                "Refurbished phone model X",
                50.0,
                "Refurbished devices skip most of the manufacturing footprint.",
            )],
        )
        .with_product(
            "laptop",
            150.0,
            vec![Alternative::new(
                "Eco-friendly laptop brand A",
                110.0,
                "Built from recycled aluminium with a repairable chassis.",
            )],
        )
        .with_product(
            "clothing",
            10.0,
            vec![Alternative::new(
                "Second-hand organic cotton tee",
                4.0,
                "Pre-owned garments avoid new fibre production and dyeing.",
            )],
        )
        .with_product(
            "shoes",
            14.0,
            vec![Alternative::new(
                "Resoled pair from a local cobbler",
                5.0,
                "Repairing soles keeps the uppers in use for years.",
            )],
        )
}
