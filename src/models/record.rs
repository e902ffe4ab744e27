//! Entity-agnostic row and identifier types shared by the repository and middleware.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::{TABLE_SITES, TABLE_SPECIES, TABLE_SURVEYS};
use crate::errors::ApiError;
use crate::models::{Site, Species, Survey};

/// The entity types served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Species,
    Sites,
    Surveys,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Sites, Resource::Species, Resource::Surveys];

    /// The first path segment of the resource's routes.
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Species => "species",
            Resource::Sites => "sites",
            Resource::Surveys => "surveys",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Resource::Species => TABLE_SPECIES,
            Resource::Sites => TABLE_SITES,
            Resource::Surveys => TABLE_SURVEYS,
        }
    }

    pub fn from_segment(segment: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.segment() == segment)
    }

    /// Parse a raw path segment into this resource's key type.
    pub fn parse_id(&self, raw: &str) -> Result<EntityId, ApiError> {
        match self {
            Resource::Species => parse_species_id(raw).map(EntityId::Species),
            Resource::Sites => Ok(EntityId::Site(raw.to_string())),
            Resource::Surveys => parse_survey_id(raw).map(EntityId::Survey),
        }
    }
}

pub fn parse_species_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        ApiError::MalformedIdentifier(format!("Invalid species ID '{}': expected an integer", raw))
    })
}

pub fn parse_survey_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::MalformedIdentifier(format!("Invalid survey ID '{}': expected a UUID", raw))
    })
}

/// A primary key, typed per entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityId {
    Species(i32),
    Site(String),
    Survey(Uuid),
}

impl EntityId {
    pub fn resource(&self) -> Resource {
        match self {
            EntityId::Species(_) => Resource::Species,
            EntityId::Site(_) => Resource::Sites,
            EntityId::Survey(_) => Resource::Surveys,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Species(id) => write!(f, "{}", id),
            EntityId::Site(id) => write!(f, "{}", id),
            EntityId::Survey(id) => write!(f, "{}", id),
        }
    }
}

/// One row of any entity table. Serializes as the bare row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Species(Species),
    Site(Site),
    Survey(Survey),
}

impl Record {
    /// Column name to value mapping for the row.
    pub fn to_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
