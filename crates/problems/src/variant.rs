use std::fmt;

/// Which transform chain a problem is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Oscillated and shifted, but axis-aligned.
    Separable,
    /// Rotated by a dense orthogonal matrix.
    Rotated,
    /// Rotated by permuted orthogonal blocks, for large dimensions.
    BlockRotated,
}

impl Variant {
    /// Returns the tag describing the structure of the landscape.
    #[must_use]
    pub fn structural_tag(self) -> &'static str {
        match self {
            Self::Separable => "1-separable",
            Self::Rotated => "3-ill-conditioned",
            Self::BlockRotated => "large_scale_block_rotated",
        }
    }

    /// Returns the name of the suite problems of this variant belong to.
    #[must_use]
    pub fn suite(self) -> &'static str {
        match self {
            Self::Separable | Self::Rotated => "bbob",
            Self::BlockRotated => "bbob-largescale",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Separable => "separable",
            Self::Rotated => "rotated",
            Self::BlockRotated => "block-rotated",
        })
    }
}
