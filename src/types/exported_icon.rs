//! File names produced by the icon exporter.
//!
//! The exporter writes `<namespace>__<item>.png`, with a third `__<state>`
//! segment for items rendered with extra component data, for example
//! `minecraft__potion__{'minecraft__potion_contents'__{potion__'minecraft__water'}}.png`.

/// Namespace the exporter uses for fluid renders.
pub const FLUID_NAMESPACE: &str = "fluid";

const SEPARATOR: &str = "__";

/// A parsed exporter file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub namespace: String,
    pub item: String,
    pub state: Option<String>,
}

impl ExportedIcon {
    /// Parse an exporter file name. Returns `None` for non-PNG names and for
    /// names without a namespace separator.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".png")?;
        let mut parts = stem.splitn(3, SEPARATOR);

        let namespace = parts.next()?;
        let item = parts.next()?;
        if item.is_empty() {
            return None;
        }
        let state = parts.next().map(str::to_string);

        Some(Self {
            namespace: namespace.to_string(),
            item: item.to_string(),
            state,
        })
    }

    /// The exporter file name for a stateless item.
    pub fn file_name_for(namespace: &str, item: &str) -> String {
        format!("{namespace}{SEPARATOR}{item}.png")
    }

    pub fn is_fluid(&self) -> bool {
        self.namespace == FLUID_NAMESPACE
    }

    /// True when the name carries extra state data.
    pub fn is_stateful(&self) -> bool {
        self.state.is_some()
    }
}
