//! City layout: restaurant and house placements loaded from `config/city.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::mission::{
    host::SiteDirectory,
    types::{Site, SiteId, SiteKind},
};

const CONFIG_PATH: &str = "config/city.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCityConfig {
    restaurants: Vec<RawSite>,
    houses: Vec<RawSite>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawSite {
    name: String,
    x: f32,
    z: f32,
    #[serde(default = "default_site_color")]
    color: [u8; 3],
}

fn default_site_color() -> [u8; 3] {
    [200, 200, 200]
}

impl RawSite {
    fn new(name: &str, x: f32, z: f32, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            x,
            z,
            color,
        }
    }
}

impl Default for RawCityConfig {
    fn default() -> Self {
        Self {
            restaurants: vec![RawSite::new("Central Kitchen", 0.0, -60.0, [255, 128, 0])],
            houses: vec![
                RawSite::new("Smith House", -70.0, 30.0, [230, 153, 153]),
                RawSite::new("Garcia House", 70.0, 30.0, [153, 230, 153]),
                RawSite::new("Lopez Villa", -50.0, 70.0, [153, 153, 230]),
                RawSite::new("Perez Residence", 50.0, 70.0, [230, 230, 153]),
                RawSite::new("Diaz Apartments", 0.0, 70.0, [230, 153, 230]),
            ],
        }
    }
}

/// One placed building.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePlacement {
    pub site: Site,
    pub color: Color,
}

/// Resolved city layout with stable site ids (restaurants first, then houses).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CityLayout {
    placements: Vec<SitePlacement>,
}

impl Default for CityLayout {
    fn default() -> Self {
        RawCityConfig::default().into()
    }
}

impl CityLayout {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml_str(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawCityConfig>(data).map(Into::into)
    }

    pub fn placements(&self) -> &[SitePlacement] {
        &self.placements
    }
}

impl From<RawCityConfig> for CityLayout {
    fn from(value: RawCityConfig) -> Self {
        let tagged = value
            .restaurants
            .into_iter()
            .map(|raw| (SiteKind::Restaurant, raw))
            .chain(value.houses.into_iter().map(|raw| (SiteKind::House, raw)));

        let placements = tagged
            .enumerate()
            .map(|(index, (kind, raw))| SitePlacement {
                site: Site::new(
                    SiteId::new(index as u32),
                    kind,
                    raw.name,
                    Some(Vec3::new(raw.x, 0.0, raw.z)),
                ),
                color: Color::srgb_u8(raw.color[0], raw.color[1], raw.color[2]),
            })
            .collect();

        Self { placements }
    }
}

impl SiteDirectory for CityLayout {
    fn sites(&self, kind: SiteKind) -> Vec<Site> {
        self.placements
            .iter()
            .filter(|placement| placement.site.kind == kind)
            .map(|placement| placement.site.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_one_restaurant_and_five_houses() {
        let layout = CityLayout::default();
        let restaurants = layout.sites(SiteKind::Restaurant);
        let houses = layout.sites(SiteKind::House);

        assert_eq!(restaurants.len(), 1);
        assert_eq!(houses.len(), 5);
        assert_eq!(restaurants[0].position, Some(Vec3::new(0.0, 0.0, -60.0)));
        assert_eq!(houses[0].id, SiteId::new(1));
    }

    #[test]
    fn toml_layout_assigns_sequential_ids() {
        let layout = CityLayout::from_toml_str(
            r#"
            [[restaurants]]
            name = "Noodle Bar"
            x = 10.0
            z = 5.0

            [[restaurants]]
            name = "Pizza Corner"
            x = -10.0
            z = 5.0
            color = [255, 0, 0]

            [[houses]]
            name = "Blue Cottage"
            x = 0.0
            z = 40.0
            "#,
        )
        .expect("valid toml");

        let ids: Vec<u32> = layout
            .placements()
            .iter()
            .map(|placement| placement.site.id.get())
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(layout.sites(SiteKind::House)[0].name, "Blue Cottage");
    }

    #[test]
    fn empty_sections_produce_empty_directory() {
        let layout = CityLayout::from_toml_str("restaurants = []\nhouses = []").unwrap();
        assert!(layout.sites(SiteKind::Restaurant).is_empty());
        assert!(layout.sites(SiteKind::House).is_empty());
    }
}
