//! Page composer
//!
//! The dashboard's fixed document: headline, introduction, the agri-food
//! landscape with its organization list, then six themed sections. Each
//! section pairs one dataset with one chart and a commentary block.

use crate::chart::{render, ChartArtifact, ChartKind, ChartResult, ChartSpec};
use crate::datasets::registry::{self, *};
use crate::datasets::Table;

use super::surface::{Surface, TextBlock};

/// Browser tab title
pub const PAGE_TITLE: &str = "IFAMA Ireland 2026 Insights Dashboard - Simulation Model";

/// Page headline
pub const HEADLINE: &str =
    "Ireland 2026: Agriculture & Food System Innovations - Simulation Prototype";

pub const INTRO: &str = "Welcome to the Ireland's insights dashboard. This interactive app showcases the key themes that will define Ireland's agricultural transformation leading into 2026.";

pub const ORGANIZATIONS_HEADER: &str = "Key Organizations in Ireland";

pub const ORGANIZATIONS: &str = "\
- **Teagasc** – Agriculture and Food Development Authority
- **Bord Bia** – Irish Food Board
- **Bord Iascaigh Mhara (BIM)** – Irish Sea Fisheries Board
- **Department of Agriculture, Food and the Marine (DAFM)**
- **Enterprise Ireland** – Agri-innovation and exports
- **Macra na Feirme** – Young farmer development
- **AgriAware** – Education and public engagement
- **Irish Farmers’ Association (IFA)** – National representation
- **Irish Organic Association** – Organic standards
- **UCC, UCD, TCD Agri-Food Research Centres** – Innovation and sustainability
";

/// One header, one chart and its commentary
#[derive(Debug, Clone)]
pub struct Section {
    pub header: &'static str,
    pub table: Table,
    pub spec: ChartSpec,
    pub commentary: &'static str,
}

impl Section {
    pub fn render(&self) -> ChartResult<ChartArtifact> {
        render(&self.table, &self.spec)
    }
}

/// Every charted section, in page order
pub fn sections() -> Vec<Section> {
    vec![
        Section {
            header: "Irish Agri-Food Landscape",
            table: registry::products(),
            spec: ChartSpec::new(
                ChartKind::Bar,
                "Top Agri-Food Products Exported by Ireland",
                PRODUCT,
            )
            .value(EXPORT_VALUE),
            commentary: "This bar chart highlights Ireland’s dominant agri-food exports, with dairy leading the market, followed by beef and seafood. It showcases product-specific value contributions to the national economy.",
        },
        Section {
            header: "1. Sustainable Intensification",
            table: registry::sustainability(),
            spec: ChartSpec::new(
                ChartKind::Bar,
                "Carbon-Neutral Farming & Regenerative Agriculture in Ireland",
                FARM,
            )
            .value(CARBON_OFFSET)
            .color(REGENERATIVE_PRACTICES),
            commentary: "Dairygold and Glanbia illustrate Ireland’s dual approach to productivity and sustainability, with high carbon offset values and impressive adoption of regenerative practices.",
        },
        Section {
            header: "2. AgTech Revolution",
            table: registry::agtech(),
            spec: ChartSpec::new(
                ChartKind::ScatterWithLabels,
                "AI and Blockchain in AgTech Supply Chains - Ireland",
                COMPANY,
            )
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION])
            .size(AI_USAGE),
            commentary: "Irish AgTech startups and institutions are leveraging AI and blockchain to drive innovation across the supply chain, with CropBiome AI leading adoption.",
        },
        Section {
            header: "3. Talent & Human Capital",
            table: registry::talent(),
            spec: ChartSpec::new(
                ChartKind::GroupedBar,
                "Human Capital Development in Irish Agriculture",
                INITIATIVE,
            )
            .values([YOUTH_PROGRAMS, AWARENESS_CAMPAIGNS]),
            commentary: "Irish institutions are heavily investing in attracting and training the next generation of agri professionals through practical and academic channels.",
        },
        Section {
            header: "4. Climate Resilience",
            table: registry::resilience(),
            spec: ChartSpec::new(
                ChartKind::Pie,
                "Adoption of Climate Resilient Strategies in Ireland",
                STRATEGY,
            )
            .value(ADOPTION_RATE),
            commentary: "Ireland’s environmental strategies emphasize biodiversity and emissions reduction, with strong public-private collaborations to scale resilience.",
        },
        Section {
            header: "5. Food Industry Innovation",
            table: registry::food_innovation(),
            spec: ChartSpec::new(
                ChartKind::Bar,
                "Emerging Trends in the Irish Food Industry",
                TREND,
            )
            .value(IMPACT_SCORE)
            .color(TREND),
            commentary: "Transparency, clean labels, and plant-based innovations are reshaping consumer demands and production methods across Ireland’s food industry.",
        },
        Section {
            header: "6. Food Security & Equity",
            table: registry::food_security(),
            spec: ChartSpec::new(
                ChartKind::ScatterWithLabels,
                "Inclusive Business Models for Food Equity in Ireland",
                ORGANIZATION,
            )
            .values([SMALLHOLDER_REACH, EQUITY_SCORE])
            .size(EQUITY_SCORE),
            commentary: "Inclusive food models ensure smallholder participation, particularly with public-sector initiatives like FAO-Teagasc setting a strong example.",
        },
    ]
}

/// Render every section's chart, in page order
pub fn charts() -> ChartResult<Vec<ChartArtifact>> {
    sections().iter().map(Section::render).collect()
}

fn emit_section<S: Surface>(surface: &mut S, section: &Section) -> ChartResult<()> {
    let chart = section.render()?;
    surface.text(TextBlock::Header(section.header.to_string()));
    surface.chart(&chart);
    surface.text(TextBlock::Info(section.commentary.to_string()));
    Ok(())
}

/// Compose the dashboard onto a surface
///
/// A chart that fails to render aborts composition before its section header
/// is emitted.
pub fn compose<S: Surface>(surface: &mut S) -> ChartResult<()> {
    surface.set_title(PAGE_TITLE);
    surface.text(TextBlock::Title(HEADLINE.to_string()));
    surface.text(TextBlock::Markdown(INTRO.to_string()));

    let sections = sections();
    if let Some((landscape, themes)) = sections.split_first() {
        emit_section(surface, landscape)?;

        surface.text(TextBlock::Subheader(ORGANIZATIONS_HEADER.to_string()));
        surface.text(TextBlock::Markdown(ORGANIZATIONS.to_string()));

        for section in themes {
            emit_section(surface, section)?;
        }
    }

    tracing::debug!(sections = sections.len(), "Composed dashboard");
    Ok(())
}
