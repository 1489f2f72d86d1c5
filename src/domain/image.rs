// Copyright (c) 2025 - Cowboy AI, Inc.
//! OS Image Entity
//!
//! The remote API offers a closed catalog of operating-system images,
//! addressed by tag. Summary payloads only carry the identifying fields;
//! `market_apps` and `storage_types` stay empty until the detail endpoint
//! delivers them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::validation::EnumError;

/// Image lookup error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("image with id {0} not found")]
    NotFound(ImageId),
}

/// Closed set of OS image tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    #[serde(rename = "UBUNTU_24_04_64BIT")]
    Ubuntu2404,
    #[serde(rename = "UBUNTU_22_04_64BIT")]
    Ubuntu2204,
    #[serde(rename = "UBUNTU_20_04_64BIT")]
    Ubuntu2004,
    #[serde(rename = "DEBIAN_12_64BIT")]
    Debian12,
    #[serde(rename = "DEBIAN_11_64BIT")]
    Debian11,
    #[serde(rename = "DEBIAN_10_64BIT")]
    Debian10,
    #[serde(rename = "ALMALINUX_8_64BIT")]
    AlmaLinux8,
    #[serde(rename = "ALMALINUX_9_64BIT")]
    AlmaLinux9,
    #[serde(rename = "ROCKY_LINUX_8_64BIT")]
    RockyLinux8,
    #[serde(rename = "ROCKY_LINUX_9_64BIT")]
    RockyLinux9,
    #[serde(rename = "CENTOS_7_64BIT")]
    CentOs7,
    #[serde(rename = "FREEBSD_13_64BIT")]
    FreeBsd13,
    #[serde(rename = "FREEBSD_14_64BIT")]
    FreeBsd14,
    #[serde(rename = "ARCH_LINUX_64BIT")]
    ArchLinux,
    #[serde(rename = "WINDOWS_SERVER_2016_STANDARD_64BIT")]
    WindowsServer2016,
    #[serde(rename = "WINDOWS_SERVER_2019_STANDARD_64BIT")]
    WindowsServer2019,
    #[serde(rename = "WINDOWS_SERVER_2022_STANDARD_64BIT")]
    WindowsServer2022,
}

impl ImageId {
    /// Get the canonical image tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ubuntu2404 => "UBUNTU_24_04_64BIT",
            Self::Ubuntu2204 => "UBUNTU_22_04_64BIT",
            Self::Ubuntu2004 => "UBUNTU_20_04_64BIT",
            Self::Debian12 => "DEBIAN_12_64BIT",
            Self::Debian11 => "DEBIAN_11_64BIT",
            Self::Debian10 => "DEBIAN_10_64BIT",
            Self::AlmaLinux8 => "ALMALINUX_8_64BIT",
            Self::AlmaLinux9 => "ALMALINUX_9_64BIT",
            Self::RockyLinux8 => "ROCKY_LINUX_8_64BIT",
            Self::RockyLinux9 => "ROCKY_LINUX_9_64BIT",
            Self::CentOs7 => "CENTOS_7_64BIT",
            Self::FreeBsd13 => "FREEBSD_13_64BIT",
            Self::FreeBsd14 => "FREEBSD_14_64BIT",
            Self::ArchLinux => "ARCH_LINUX_64BIT",
            Self::WindowsServer2016 => "WINDOWS_SERVER_2016_STANDARD_64BIT",
            Self::WindowsServer2019 => "WINDOWS_SERVER_2019_STANDARD_64BIT",
            Self::WindowsServer2022 => "WINDOWS_SERVER_2022_STANDARD_64BIT",
        }
    }

    /// Parse from the canonical image tag
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        Self::all()
            .iter()
            .find(|id| id.as_str() == value)
            .copied()
            .ok_or_else(|| EnumError::cannot_find(value))
    }

    /// All declared image tags
    pub fn all() -> &'static [ImageId] {
        &[
            Self::Ubuntu2404,
            Self::Ubuntu2204,
            Self::Ubuntu2004,
            Self::Debian12,
            Self::Debian11,
            Self::Debian10,
            Self::AlmaLinux8,
            Self::AlmaLinux9,
            Self::RockyLinux8,
            Self::RockyLinux9,
            Self::CentOs7,
            Self::FreeBsd13,
            Self::FreeBsd14,
            Self::ArchLinux,
            Self::WindowsServer2016,
            Self::WindowsServer2019,
            Self::WindowsServer2022,
        ]
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operating-system image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    pub version: String,
    pub family: String,
    pub flavour: String,
    pub architecture: String,
    pub market_apps: Vec<String>,
    pub storage_types: Vec<String>,
}

/// Image catalog with lookup by tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Images(Vec<Image>);

impl Images {
    pub fn new(images: Vec<Image>) -> Self {
        Self(images)
    }

    /// Find the image with the given tag
    pub fn find_by_id(&self, id: ImageId) -> Result<&Image, ImageError> {
        self.0
            .iter()
            .find(|image| image.id == id)
            .ok_or(ImageError::NotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ubuntu() -> Image {
        Image {
            id: ImageId::Ubuntu2404,
            name: "Ubuntu 24.04 LTS (x86_64)".to_string(),
            version: "24.04".to_string(),
            family: "Ubuntu".to_string(),
            flavour: "ubuntu".to_string(),
            architecture: "64bit".to_string(),
            market_apps: vec![],
            storage_types: vec!["LOCAL".to_string(), "CENTRAL".to_string()],
        }
    }

    #[test]
    fn test_image_id_round_trip() {
        for id in ImageId::all() {
            assert_eq!(ImageId::try_from_str(id.as_str()).unwrap(), *id);
        }
        assert!(ImageId::try_from_str("TEMPLEOS_64BIT").is_err());
    }

    #[test]
    fn test_find_by_id() {
        let images = Images::new(vec![ubuntu()]);
        assert_eq!(
            images.find_by_id(ImageId::Ubuntu2404).unwrap().family,
            "Ubuntu"
        );
    }

    #[test]
    fn test_find_by_id_embeds_queried_id() {
        let images = Images::new(vec![ubuntu()]);
        let err = images.find_by_id(ImageId::Debian12).unwrap_err();
        assert_eq!(err.to_string(), "image with id DEBIAN_12_64BIT not found");
    }
}
