//! Static dataset registry
//!
//! Literal agri-food statistics for Ireland, one typed record struct per
//! dataset. Nothing here is computed or loaded; every table is built from the
//! constants below.

use super::types::{Cell, Column, Record, Table};

// ============================================
// PRODUCTS
// ============================================

pub const PRODUCT: &str = "Product";
pub const EXPORT_VALUE: &str = "Export Value (€M, est.)";

/// Agri-food product with its estimated export value
#[derive(Debug, Clone, Copy)]
pub struct ProductExport {
    pub product: &'static str,
    pub export_value_meur: f64,
}

impl Record for ProductExport {
    const COLUMNS: &'static [Column] = &[Column::text(PRODUCT), Column::numeric(EXPORT_VALUE)];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.product), Cell::Number(self.export_value_meur)]
    }
}

pub const PRODUCTS: &[ProductExport] = &[
    ProductExport { product: "Beef", export_value_meur: 2100.0 },
    ProductExport { product: "Dairy (Butter, Cheese, Milk)", export_value_meur: 5200.0 },
    ProductExport { product: "Barley", export_value_meur: 340.0 },
    ProductExport { product: "Wheat", export_value_meur: 200.0 },
    ProductExport { product: "Oats", export_value_meur: 85.0 },
    ProductExport { product: "Potatoes", export_value_meur: 170.0 },
    ProductExport { product: "Lamb", export_value_meur: 290.0 },
    ProductExport { product: "Pork", export_value_meur: 320.0 },
    ProductExport { product: "Seafood (Salmon, Oysters)", export_value_meur: 450.0 },
    ProductExport { product: "Apples", export_value_meur: 60.0 },
    ProductExport { product: "Mushrooms", export_value_meur: 120.0 },
    ProductExport { product: "Honey", export_value_meur: 45.0 },
];

pub fn products() -> Table {
    Table::from_records("products", PRODUCTS)
}

// ============================================
// SUSTAINABLE INTENSIFICATION
// ============================================

pub const FARM: &str = "Farm";
pub const CARBON_OFFSET: &str = "Carbon Offset (tons)";
pub const REGENERATIVE_PRACTICES: &str = "Regenerative Practices (%)";

#[derive(Debug, Clone, Copy)]
pub struct FarmSustainability {
    pub farm: &'static str,
    pub carbon_offset_tons: f64,
    pub regenerative_practices_pct: f64,
}

impl Record for FarmSustainability {
    const COLUMNS: &'static [Column] = &[
        Column::text(FARM),
        Column::numeric(CARBON_OFFSET),
        Column::numeric(REGENERATIVE_PRACTICES),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.farm),
            Cell::Number(self.carbon_offset_tons),
            Cell::Number(self.regenerative_practices_pct),
        ]
    }
}

pub const SUSTAINABILITY: &[FarmSustainability] = &[
    FarmSustainability {
        farm: "Glanbia Ireland",
        carbon_offset_tons: 290_000.0,
        regenerative_practices_pct: 72.0,
    },
    FarmSustainability {
        farm: "Dairygold Co-op",
        carbon_offset_tons: 310_000.0,
        regenerative_practices_pct: 78.0,
    },
];

pub fn sustainability() -> Table {
    Table::from_records("sustainability", SUSTAINABILITY)
}

// ============================================
// AGTECH
// ============================================

pub const COMPANY: &str = "Company";
pub const AI_USAGE: &str = "AI Usage (%)";
pub const BLOCKCHAIN_INTEGRATION: &str = "Blockchain Integration (%)";

#[derive(Debug, Clone, Copy)]
pub struct AgTechAdoption {
    pub company: &'static str,
    pub ai_usage_pct: f64,
    pub blockchain_integration_pct: f64,
}

impl Record for AgTechAdoption {
    const COLUMNS: &'static [Column] = &[
        Column::text(COMPANY),
        Column::numeric(AI_USAGE),
        Column::numeric(BLOCKCHAIN_INTEGRATION),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.company),
            Cell::Number(self.ai_usage_pct),
            Cell::Number(self.blockchain_integration_pct),
        ]
    }
}

pub const AGTECH: &[AgTechAdoption] = &[
    AgTechAdoption { company: "CropBiome AI", ai_usage_pct: 82.0, blockchain_integration_pct: 60.0 },
    AgTechAdoption {
        company: "Agri-Tech Centre (Teagasc)",
        ai_usage_pct: 65.0,
        blockchain_integration_pct: 48.0,
    },
    AgTechAdoption { company: "ProvEye", ai_usage_pct: 70.0, blockchain_integration_pct: 40.0 },
    AgTechAdoption { company: "Micron Agritech", ai_usage_pct: 60.0, blockchain_integration_pct: 35.0 },
];

pub fn agtech() -> Table {
    Table::from_records("agtech", AGTECH)
}

// ============================================
// TALENT & HUMAN CAPITAL
// ============================================

pub const INITIATIVE: &str = "Initiative";
pub const YOUTH_PROGRAMS: &str = "Youth Programs";
pub const AWARENESS_CAMPAIGNS: &str = "Awareness Campaigns";

#[derive(Debug, Clone, Copy)]
pub struct TalentInitiative {
    pub initiative: &'static str,
    pub youth_programs: f64,
    pub awareness_campaigns: f64,
}

impl Record for TalentInitiative {
    const COLUMNS: &'static [Column] = &[
        Column::text(INITIATIVE),
        Column::numeric(YOUTH_PROGRAMS),
        Column::numeric(AWARENESS_CAMPAIGNS),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.initiative),
            Cell::Number(self.youth_programs),
            Cell::Number(self.awareness_campaigns),
        ]
    }
}

pub const TALENT: &[TalentInitiative] = &[
    TalentInitiative { initiative: "AgCreds (UCC)", youth_programs: 10.0, awareness_campaigns: 12.0 },
    TalentInitiative {
        initiative: "Young Farmers Program (Macra na Feirme)",
        youth_programs: 14.0,
        awareness_campaigns: 18.0,
    },
    TalentInitiative { initiative: "AgriAware Schools", youth_programs: 18.0, awareness_campaigns: 25.0 },
    TalentInitiative { initiative: "Teagasc Traineeships", youth_programs: 22.0, awareness_campaigns: 20.0 },
];

pub fn talent() -> Table {
    Table::from_records("talent", TALENT)
}

// ============================================
// CLIMATE RESILIENCE
// ============================================

pub const STRATEGY: &str = "Strategy";
pub const ADOPTION_RATE: &str = "Adoption Rate (%)";

#[derive(Debug, Clone, Copy)]
pub struct ResilienceStrategy {
    pub strategy: &'static str,
    pub adoption_rate_pct: f64,
}

impl Record for ResilienceStrategy {
    const COLUMNS: &'static [Column] = &[Column::text(STRATEGY), Column::numeric(ADOPTION_RATE)];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.strategy), Cell::Number(self.adoption_rate_pct)]
    }
}

pub const RESILIENCE: &[ResilienceStrategy] = &[
    ResilienceStrategy { strategy: "Peatland Restoration", adoption_rate_pct: 70.0 },
    ResilienceStrategy { strategy: "Low-emission slurry spreading", adoption_rate_pct: 80.0 },
    ResilienceStrategy { strategy: "Ag-climate PPPs", adoption_rate_pct: 62.0 },
    ResilienceStrategy { strategy: "Hedgerow Biodiversity", adoption_rate_pct: 68.0 },
];

pub fn resilience() -> Table {
    Table::from_records("resilience", RESILIENCE)
}

// ============================================
// FOOD INDUSTRY INNOVATION
// ============================================

pub const TREND: &str = "Trend";
pub const IMPACT_SCORE: &str = "Impact Score (0-100)";

#[derive(Debug, Clone, Copy)]
pub struct FoodTrend {
    pub trend: &'static str,
    pub impact_score: f64,
}

impl Record for FoodTrend {
    const COLUMNS: &'static [Column] = &[Column::text(TREND), Column::numeric(IMPACT_SCORE)];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.trend), Cell::Number(self.impact_score)]
    }
}

pub const FOOD_INNOVATION: &[FoodTrend] = &[
    FoodTrend { trend: "Functional Foods (GLP-1)", impact_score: 79.0 },
    FoodTrend { trend: "Clean Labels", impact_score: 84.0 },
    FoodTrend { trend: "Transparency Tech", impact_score: 91.0 },
    FoodTrend { trend: "Irish Regenerative Labels", impact_score: 76.0 },
    FoodTrend { trend: "Plant-based R&D", impact_score: 80.0 },
];

pub fn food_innovation() -> Table {
    Table::from_records("food_innovation", FOOD_INNOVATION)
}

// ============================================
// FOOD SECURITY & EQUITY
// ============================================

pub const ORGANIZATION: &str = "Organization";
pub const SMALLHOLDER_REACH: &str = "Smallholder Reach (thousands)";
pub const EQUITY_SCORE: &str = "Equity Model Score (0-100)";

#[derive(Debug, Clone, Copy)]
pub struct EquityProgram {
    pub organization: &'static str,
    pub smallholder_reach_k: f64,
    pub equity_score: f64,
}

impl Record for EquityProgram {
    const COLUMNS: &'static [Column] = &[
        Column::text(ORGANIZATION),
        Column::numeric(SMALLHOLDER_REACH),
        Column::numeric(EQUITY_SCORE),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.organization),
            Cell::Number(self.smallholder_reach_k),
            Cell::Number(self.equity_score),
        ]
    }
}

pub const FOOD_SECURITY: &[EquityProgram] = &[
    EquityProgram { organization: "Bord Bia", smallholder_reach_k: 850.0, equity_score: 81.0 },
    EquityProgram { organization: "FAO + Teagasc", smallholder_reach_k: 1250.0, equity_score: 88.0 },
    EquityProgram {
        organization: "Irish Organic Association",
        smallholder_reach_k: 560.0,
        equity_score: 75.0,
    },
    EquityProgram { organization: "Local Food Hubs", smallholder_reach_k: 320.0, equity_score: 70.0 },
];

pub fn food_security() -> Table {
    Table::from_records("food_security", FOOD_SECURITY)
}

/// Every dataset, in page order
pub fn all() -> Vec<Table> {
    vec![
        products(),
        sustainability(),
        agtech(),
        talent(),
        resilience(),
        food_innovation(),
        food_security(),
    ]
}
