use crate::types::*;

/// Assembly configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssembleOptions {
    /// Target page size; every output page uses the same size
    pub page_size: PageSize,

    /// Page orientation
    pub orientation: Orientation,

    /// Placement of the scaled image on each page
    pub placement: PlacementPolicy,

    /// Title written into the PDF /Info dictionary
    pub title: Option<String>,
}

impl AssembleOptions {
    /// Page dimensions in points with orientation applied
    pub fn page_dimensions_pt(&self) -> (f32, f32) {
        self.page_size.dimensions_with_orientation(self.orientation)
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| AssembleError::Config(format!("failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AssembleError::Config(format!("failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
