//! Presentation surface
//!
//! The three primitives a hosting runtime must provide to display the
//! dashboard: a page title, text blocks and inline charts, in document order.

use crate::chart::ChartArtifact;

/// A block of static text on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    /// Page headline
    Title(String),
    /// Section header
    Header(String),
    /// Sub-section header
    Subheader(String),
    /// Prose in the markdown subset understood by `page::markdown`
    Markdown(String),
    /// Highlighted commentary under a chart
    Info(String),
}

/// Where the composed page is displayed
pub trait Surface {
    /// Register the page (window/tab) title
    fn set_title(&mut self, title: &str);

    /// Append a text block
    fn text(&mut self, block: TextBlock);

    /// Append a rendered chart inline
    fn chart(&mut self, chart: &ChartArtifact);
}
