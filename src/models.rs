use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::movie;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    pub actors: Vec<String>,
}

impl From<movie::Model> for Movie {
    fn from(model: movie::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            release_year: model.release_year,
            actors: model.actors.0,
        }
    }
}

// Loosely typed so a wrong type is a validation error, not a rejection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub release_year: Option<Value>,
    #[serde(default)]
    pub actors: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub actors: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub actors: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("title must be a non-empty string")]
    InvalidTitle,
    #[error("releaseYear is required")]
    MissingReleaseYear,
    #[error("releaseYear must be a positive whole number")]
    InvalidReleaseYear,
    #[error("actors must be a list of names")]
    InvalidActors,
    #[error("no fields to update")]
    Empty,
}

impl MovieInput {
    pub fn validate(self) -> Result<MoviePatch, ValidationError> {
        let title = self.title.map(parse_title).transpose()?;
        let release_year = self.release_year.map(parse_release_year).transpose()?;
        let actors = self.actors.map(parse_actors).transpose()?;

        Ok(MoviePatch { title, release_year, actors })
    }
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_year.is_none() && self.actors.is_none()
    }

    pub fn into_new(self) -> Result<NewMovie, ValidationError> {
        Ok(NewMovie {
            title: self.title.ok_or(ValidationError::MissingTitle)?,
            release_year: self.release_year.ok_or(ValidationError::MissingReleaseYear)?,
            actors: self.actors.unwrap_or_default(),
        })
    }
}

fn parse_title(value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::InvalidTitle),
    }
}

fn parse_release_year(value: Value) -> Result<i32, ValidationError> {
    let year = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0).map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    year.filter(|y| *y > 0)
        .and_then(|y| i32::try_from(y).ok())
        .ok_or(ValidationError::InvalidReleaseYear)
}

fn parse_actors(value: Value) -> Result<Vec<String>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::InvalidActors);
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(name) => Ok(name),
            _ => Err(ValidationError::InvalidActors),
        })
        .collect()
}

pub fn split_actors(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|a| !a.is_empty()).map(str::to_string).collect()
}

#[derive(Debug, Deserialize)]
pub struct MovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub actors: String,
}

impl From<MovieForm> for MovieInput {
    fn from(form: MovieForm) -> Self {
        Self {
            title: Some(Value::String(form.title)),
            release_year: Some(Value::String(form.release_year)),
            actors: Some(Value::Array(
                split_actors(&form.actors).into_iter().map(Value::String).collect(),
            )),
        }
    }
}
