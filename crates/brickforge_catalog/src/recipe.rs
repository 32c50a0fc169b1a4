//! # Minifigure Recipes
//!
//! A recipe is a minifigure's required-parts list plus display metadata.
//! Recipes arrive pre-fetched and well-formed from the catalog snapshot;
//! construction still validates the basics so a malformed entry cannot
//! reach the matcher.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::part::{PartFlags, PartRef};

/// One line of a minifigure recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPart {
    /// The part slot this line requires.
    #[serde(flatten)]
    pub part: PartRef,
    /// Catalog display name of the part.
    #[serde(default)]
    pub part_name: String,
    /// Display name of the color.
    #[serde(default)]
    pub color_name: String,
    /// Units required per built copy.
    pub quantity: u32,
    /// Alternate/counterpart/extra/spare markers.
    #[serde(flatten)]
    pub flags: PartFlags,
}

impl RequiredPart {
    /// Creates a regular required part with no flags set.
    #[must_use]
    pub fn new(
        part: PartRef,
        part_name: impl Into<String>,
        color_name: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            part,
            part_name: part_name.into(),
            color_name: color_name.into(),
            quantity,
            flags: PartFlags::NONE,
        }
    }

    /// Sets the part flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: PartFlags) -> Self {
        self.flags = flags;
        self
    }

    /// True when this line participates in matching.
    #[inline]
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        self.flags.is_regular()
    }
}

/// A minifigure recipe: identity, display metadata, and required parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifigRecipe {
    /// BrickLink minifigure id, e.g. `"sw0001"`.
    pub minifig_id: String,
    /// Display name.
    pub name: String,
    /// Release year when the catalog knows it.
    #[serde(default)]
    pub year_released: Option<u16>,
    /// Catalog category name.
    #[serde(default)]
    pub category_name: String,
    /// Required parts, regular and otherwise.
    pub parts: Vec<RequiredPart>,
}

impl MinifigRecipe {
    /// Creates a recipe with basic validation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecipe`] if the parts list is empty.
    pub fn new(
        minifig_id: impl Into<String>,
        name: impl Into<String>,
        parts: Vec<RequiredPart>,
    ) -> Result<Self, CatalogError> {
        let minifig_id = minifig_id.into();
        if parts.is_empty() {
            return Err(CatalogError::InvalidRecipe {
                minifig_id,
                reason: "recipe must have at least one part".to_string(),
            });
        }
        Ok(Self {
            minifig_id,
            name: name.into(),
            year_released: None,
            category_name: String::new(),
            parts,
        })
    }

    /// Sets the release year.
    #[must_use]
    pub const fn with_year(mut self, year: u16) -> Self {
        self.year_released = Some(year);
        self
    }

    /// Sets the category name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = category.into();
        self
    }

    /// Iterates over the regular parts - the ones matching considers.
    pub fn regular_parts(&self) -> impl Iterator<Item = &RequiredPart> {
        self.parts.iter().filter(|p| p.is_regular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipe_rejected() {
        let result = MinifigRecipe::new("sw0001", "Luke Skywalker", vec![]);
        assert!(matches!(result, Err(CatalogError::InvalidRecipe { .. })));
    }

    #[test]
    fn test_regular_parts_filter() {
        let recipe = MinifigRecipe::new(
            "sw0001",
            "Luke Skywalker",
            vec![
                RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 1),
                RequiredPart::new(PartRef::new("973", 15), "Torso", "White", 1)
                    .with_flags(PartFlags::ALTERNATE),
                RequiredPart::new(PartRef::new("970c00", 15), "Legs", "White", 1)
                    .with_flags(PartFlags::SPARE),
            ],
        )
        .unwrap();
        let regular: Vec<_> = recipe.regular_parts().collect();
        assert_eq!(regular.len(), 2);
        assert!(regular.iter().all(|p| p.is_regular()));
    }

    #[test]
    fn test_builder_metadata() {
        let recipe = MinifigRecipe::new(
            "cas123",
            "Knight",
            vec![RequiredPart::new(PartRef::new("3626", 4), "Head", "Red", 1)],
        )
        .unwrap()
        .with_year(1987)
        .with_category("Castle");
        assert_eq!(recipe.year_released, Some(1987));
        assert_eq!(recipe.category_name, "Castle");
    }
}
