//! The sparse field observation record.
//!
//! Every field is optional: a forager rarely records more than a handful of
//! characters, and the engine must behave sensibly at any level of
//! completeness. Missing fields are expected state, never errors.
//!
//! `ObservationField` gives rules and questions a uniform, typed handle on a
//! field; its declaration order is the deterministic tie-break order used by
//! the question selector.

use serde::{Deserialize, Serialize};

/// A single observed value, as seen by rule predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Categorical or free text ("woodland", "convex", prose notes).
    Text(String),
    /// Measurement in the field's natural unit (centimetres here).
    Number(f64),
    /// Yes/no character (ring present, milk exuded).
    Flag(bool),
    /// Calendar month 1-12.
    Month(u32),
    /// Multi-valued text (nearby tree kinds).
    List(Vec<String>),
}

/// Typed handle for each observation field.
///
/// Declaration order is stable and meaningful: it is the tie-break order for
/// question ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationField {
    CapDiameterCm,
    CapColor,
    CapShape,
    CapSurface,
    GillType,
    GillColor,
    GillAttachment,
    GillSpacing,
    StemPresent,
    StemHeightCm,
    StemColor,
    RingPresent,
    VolvaPresent,
    StemBase,
    FleshTexture,
    BruisingColor,
    MilkPresent,
    MilkColor,
    SporePrintColor,
    Habitat,
    Substrate,
    GrowthPattern,
    NearbyTrees,
    SeasonMonth,
    Smell,
    DescriptionNotes,
}

impl ObservationField {
    /// Every field in declaration order.
    pub const ALL: [ObservationField; 26] = [
        ObservationField::CapDiameterCm,
        ObservationField::CapColor,
        ObservationField::CapShape,
        ObservationField::CapSurface,
        ObservationField::GillType,
        ObservationField::GillColor,
        ObservationField::GillAttachment,
        ObservationField::GillSpacing,
        ObservationField::StemPresent,
        ObservationField::StemHeightCm,
        ObservationField::StemColor,
        ObservationField::RingPresent,
        ObservationField::VolvaPresent,
        ObservationField::StemBase,
        ObservationField::FleshTexture,
        ObservationField::BruisingColor,
        ObservationField::MilkPresent,
        ObservationField::MilkColor,
        ObservationField::SporePrintColor,
        ObservationField::Habitat,
        ObservationField::Substrate,
        ObservationField::GrowthPattern,
        ObservationField::NearbyTrees,
        ObservationField::SeasonMonth,
        ObservationField::Smell,
        ObservationField::DescriptionNotes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationField::CapDiameterCm => "cap_diameter_cm",
            ObservationField::CapColor => "cap_color",
            ObservationField::CapShape => "cap_shape",
            ObservationField::CapSurface => "cap_surface",
            ObservationField::GillType => "gill_type",
            ObservationField::GillColor => "gill_color",
            ObservationField::GillAttachment => "gill_attachment",
            ObservationField::GillSpacing => "gill_spacing",
            ObservationField::StemPresent => "stem_present",
            ObservationField::StemHeightCm => "stem_height_cm",
            ObservationField::StemColor => "stem_color",
            ObservationField::RingPresent => "ring_present",
            ObservationField::VolvaPresent => "volva_present",
            ObservationField::StemBase => "stem_base",
            ObservationField::FleshTexture => "flesh_texture",
            ObservationField::BruisingColor => "bruising_color",
            ObservationField::MilkPresent => "milk_present",
            ObservationField::MilkColor => "milk_color",
            ObservationField::SporePrintColor => "spore_print_color",
            ObservationField::Habitat => "habitat",
            ObservationField::Substrate => "substrate",
            ObservationField::GrowthPattern => "growth_pattern",
            ObservationField::NearbyTrees => "nearby_trees",
            ObservationField::SeasonMonth => "season_month",
            ObservationField::Smell => "smell",
            ObservationField::DescriptionNotes => "description_notes",
        }
    }
}

impl std::fmt::Display for ObservationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sparse record of what was seen in the field.
///
/// Built incrementally by a UI form, natural-language extraction or feature
/// inference; the engine never mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_diameter_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_surface: Option<String>,
    /// What the underside of the cap carries: "gills", "pores", "ridges",
    /// "teeth" or "none".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gill_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gill_attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gill_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volva_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesh_texture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bruising_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milk_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milk_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spore_print_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_trees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smell: Option<String>,
    /// Unstructured diagnostic prose; mined by the notes preprocessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_notes: Option<String>,
}

impl Observation {
    /// Uniform field access for rule evaluation.
    pub fn field(&self, field: ObservationField) -> Option<FieldValue> {
        match field {
            ObservationField::CapDiameterCm => self.cap_diameter_cm.map(FieldValue::Number),
            ObservationField::CapColor => self.cap_color.clone().map(FieldValue::Text),
            ObservationField::CapShape => self.cap_shape.clone().map(FieldValue::Text),
            ObservationField::CapSurface => self.cap_surface.clone().map(FieldValue::Text),
            ObservationField::GillType => self.gill_type.clone().map(FieldValue::Text),
            ObservationField::GillColor => self.gill_color.clone().map(FieldValue::Text),
            ObservationField::GillAttachment => self.gill_attachment.clone().map(FieldValue::Text),
            ObservationField::GillSpacing => self.gill_spacing.clone().map(FieldValue::Text),
            ObservationField::StemPresent => self.stem_present.map(FieldValue::Flag),
            ObservationField::StemHeightCm => self.stem_height_cm.map(FieldValue::Number),
            ObservationField::StemColor => self.stem_color.clone().map(FieldValue::Text),
            ObservationField::RingPresent => self.ring_present.map(FieldValue::Flag),
            ObservationField::VolvaPresent => self.volva_present.map(FieldValue::Flag),
            ObservationField::StemBase => self.stem_base.clone().map(FieldValue::Text),
            ObservationField::FleshTexture => self.flesh_texture.clone().map(FieldValue::Text),
            ObservationField::BruisingColor => self.bruising_color.clone().map(FieldValue::Text),
            ObservationField::MilkPresent => self.milk_present.map(FieldValue::Flag),
            ObservationField::MilkColor => self.milk_color.clone().map(FieldValue::Text),
            ObservationField::SporePrintColor => {
                self.spore_print_color.clone().map(FieldValue::Text)
            }
            ObservationField::Habitat => self.habitat.clone().map(FieldValue::Text),
            ObservationField::Substrate => self.substrate.clone().map(FieldValue::Text),
            ObservationField::GrowthPattern => self.growth_pattern.clone().map(FieldValue::Text),
            ObservationField::NearbyTrees => self.nearby_trees.clone().map(FieldValue::List),
            ObservationField::SeasonMonth => self.season_month.map(FieldValue::Month),
            ObservationField::Smell => self.smell.clone().map(FieldValue::Text),
            ObservationField::DescriptionNotes => {
                self.description_notes.clone().map(FieldValue::Text)
            }
        }
    }

    /// Whether a field carries a value.
    pub fn has(&self, field: ObservationField) -> bool {
        self.field(field).is_some()
    }

    /// Fields that carry a value, in declaration order.
    pub fn observed_fields(&self) -> Vec<ObservationField> {
        ObservationField::ALL
            .iter()
            .copied()
            .filter(|f| self.has(*f))
            .collect()
    }

    /// Number of populated fields.
    pub fn observed_count(&self) -> usize {
        self.observed_fields().len()
    }

    /// True when nothing at all was recorded.
    pub fn is_empty(&self) -> bool {
        self.observed_count() == 0
    }

    /// Overlay `later` onto `self`: fields already set in `self` win, so an
    /// explicit earlier answer is never clobbered by a follow-up pass.
    /// Supports the external multi-turn loop, which re-supplies the
    /// accumulated observation each call.
    pub fn merge(&self, later: &Observation) -> Observation {
        Observation {
            cap_diameter_cm: self.cap_diameter_cm.or(later.cap_diameter_cm),
            cap_color: self.cap_color.clone().or_else(|| later.cap_color.clone()),
            cap_shape: self.cap_shape.clone().or_else(|| later.cap_shape.clone()),
            cap_surface: self
                .cap_surface
                .clone()
                .or_else(|| later.cap_surface.clone()),
            gill_type: self.gill_type.clone().or_else(|| later.gill_type.clone()),
            gill_color: self.gill_color.clone().or_else(|| later.gill_color.clone()),
            gill_attachment: self
                .gill_attachment
                .clone()
                .or_else(|| later.gill_attachment.clone()),
            gill_spacing: self
                .gill_spacing
                .clone()
                .or_else(|| later.gill_spacing.clone()),
            stem_present: self.stem_present.or(later.stem_present),
            stem_height_cm: self.stem_height_cm.or(later.stem_height_cm),
            stem_color: self.stem_color.clone().or_else(|| later.stem_color.clone()),
            ring_present: self.ring_present.or(later.ring_present),
            volva_present: self.volva_present.or(later.volva_present),
            stem_base: self.stem_base.clone().or_else(|| later.stem_base.clone()),
            flesh_texture: self
                .flesh_texture
                .clone()
                .or_else(|| later.flesh_texture.clone()),
            bruising_color: self
                .bruising_color
                .clone()
                .or_else(|| later.bruising_color.clone()),
            milk_present: self.milk_present.or(later.milk_present),
            milk_color: self.milk_color.clone().or_else(|| later.milk_color.clone()),
            spore_print_color: self
                .spore_print_color
                .clone()
                .or_else(|| later.spore_print_color.clone()),
            habitat: self.habitat.clone().or_else(|| later.habitat.clone()),
            substrate: self.substrate.clone().or_else(|| later.substrate.clone()),
            growth_pattern: self
                .growth_pattern
                .clone()
                .or_else(|| later.growth_pattern.clone()),
            nearby_trees: self
                .nearby_trees
                .clone()
                .or_else(|| later.nearby_trees.clone()),
            season_month: self.season_month.or(later.season_month),
            smell: self.smell.clone().or_else(|| later.smell.clone()),
            description_notes: self
                .description_notes
                .clone()
                .or_else(|| later.description_notes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_observation() {
        let obs = Observation::default();
        assert!(obs.is_empty());
        assert_eq!(obs.observed_count(), 0);
        for f in ObservationField::ALL {
            assert!(obs.field(f).is_none());
        }
    }

    #[test]
    fn test_field_access_matches_struct() {
        let obs = Observation {
            cap_diameter_cm: Some(7.5),
            gill_type: Some("gills".to_string()),
            ring_present: Some(true),
            season_month: Some(10),
            nearby_trees: Some(vec!["birch".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            obs.field(ObservationField::CapDiameterCm),
            Some(FieldValue::Number(7.5))
        );
        assert_eq!(
            obs.field(ObservationField::GillType),
            Some(FieldValue::Text("gills".to_string()))
        );
        assert_eq!(
            obs.field(ObservationField::RingPresent),
            Some(FieldValue::Flag(true))
        );
        assert_eq!(
            obs.field(ObservationField::SeasonMonth),
            Some(FieldValue::Month(10))
        );
        assert_eq!(obs.observed_count(), 5);
    }

    #[test]
    fn test_merge_never_clobbers_earlier_values() {
        let earlier = Observation {
            habitat: Some("woodland".to_string()),
            ..Default::default()
        };
        let later = Observation {
            habitat: Some("grassland".to_string()),
            substrate: Some("soil".to_string()),
            ..Default::default()
        };
        let merged = earlier.merge(&later);
        assert_eq!(merged.habitat.as_deref(), Some("woodland"));
        assert_eq!(merged.substrate.as_deref(), Some("soil"));
    }

    #[test]
    fn test_serde_skips_missing_fields() {
        let obs = Observation {
            gill_type: Some("pores".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"gill_type":"pores"}"#);
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
