use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CubeState, Face, Faces, TransformError};

/// Describes the cube to start from: its size and the colour of each face.
///
/// ```toml
/// size = 4
///
/// [stickers]
/// U = "white"
/// L = "orange"
/// F = "green"
/// R = "red"
/// B = "blue"
/// D = "yellow"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeConfig {
    pub size: usize,
    pub stickers: Stickers,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse the cube configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("The configured cube has an invalid shape: {0}")]
    Shape(#[from] TransformError),
}

/// The colour of every face.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StickersRepr", into = "StickersRepr")]
pub struct Stickers(Faces<String>);

impl Stickers {
    #[must_use]
    pub fn new(colours: Faces<String>) -> Self {
        Stickers(colours)
    }

    #[must_use]
    pub fn colour(&self, face: Face) -> &str {
        &self.0[face]
    }
}

impl std::fmt::Debug for Stickers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        StickersRepr::from(self.clone()).fmt(f)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
struct StickersRepr {
    U: String,
    L: String,
    F: String,
    R: String,
    B: String,
    D: String,
}

impl From<StickersRepr> for Stickers {
    fn from(value: StickersRepr) -> Self {
        Stickers(Faces::new([
            value.U, value.L, value.F, value.R, value.B, value.D,
        ]))
    }
}

impl From<Stickers> for StickersRepr {
    fn from(value: Stickers) -> Self {
        let [u, l, f, r, b, d] = value.0.into_inner();
        StickersRepr {
            U: u,
            L: l,
            F: f,
            R: r,
            B: b,
            D: d,
        }
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            size: 3,
            stickers: Stickers(Faces::new(
                ["white", "orange", "green", "red", "blue", "yellow"].map(String::from),
            )),
        }
    }
}

impl CubeConfig {
    pub fn from_toml_str(config: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config)?)
    }

    /// The solved cube this configuration describes.
    pub fn build(&self) -> Result<CubeState<String>, ConfigError> {
        Ok(CubeState::solved(self.size, self.stickers.0.clone())?)
    }
}
