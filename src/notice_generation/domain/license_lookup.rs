use super::Coordinate;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root element name of XML lookup documents
const XML_ROOT_ELEMENT: &str = "license-lookup";

/// How a version specifier is compared against an artifact version
///
/// Deserialized through `FromStr` in every format, so names are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionMatchType {
    /// String equality
    #[default]
    Exact,
    /// Regular expression that must match the whole version
    Regex,
}

impl VersionMatchType {
    fn is_exact(&self) -> bool {
        matches!(self, VersionMatchType::Exact)
    }
}

impl FromStr for VersionMatchType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "exact" => Ok(VersionMatchType::Exact),
            "regex" => Ok(VersionMatchType::Regex),
            _ => Err(format!(
                "Invalid version type: '{}'. Please specify 'exact' or 'regex'",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for VersionMatchType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for VersionMatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionMatchType::Exact => write!(f, "exact"),
            VersionMatchType::Regex => write!(f, "regex"),
        }
    }
}

/// Version specifier refining a lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappedVersion {
    pub value: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "VersionMatchType::is_exact"
    )]
    pub match_type: VersionMatchType,
    /// License for matching versions; falls back to the entry's license when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl MappedVersion {
    pub fn exact(value: impl Into<String>, license: Option<String>) -> Self {
        Self {
            value: value.into(),
            match_type: VersionMatchType::Exact,
            license,
        }
    }

    pub fn regex(pattern: impl Into<String>, license: Option<String>) -> Self {
        Self {
            value: pattern.into(),
            match_type: VersionMatchType::Regex,
            license,
        }
    }
}

/// License lookup entry for one (group, artifact)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLicense {
    pub group_id: String,
    pub artifact_id: String,
    /// Human-readable artifact name used in the NOTICE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(
        rename = "version",
        alias = "versions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub versions: Vec<MappedVersion>,
}

impl ArtifactLicense {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        license: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            name: None,
            license,
            versions: Vec::new(),
        }
    }

    /// Skeleton entry for an artifact whose license still has to be filled in
    pub fn stub(coordinate: &Coordinate) -> Self {
        let mut entry = Self::new(coordinate.group_id(), coordinate.artifact_id(), None);
        entry
            .versions
            .push(MappedVersion::exact(coordinate.version(), None));
        entry
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: MappedVersion) -> Self {
        self.versions.push(version);
        self
    }
}

/// A structured lookup document: a sequence of license entries
///
/// Lookup sources and the generated stub mapping file share this schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseLookupDocument {
    #[serde(rename = "artifact", alias = "artifacts", default)]
    pub artifacts: Vec<ArtifactLicense>,
}

impl LicenseLookupDocument {
    pub fn new(artifacts: Vec<ArtifactLicense>) -> Self {
        Self { artifacts }
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Parses a raw document according to its format
    ///
    /// # Errors
    /// Returns `NoticeError::LookupSourceError` naming the source if the
    /// content is malformed or an entry lacks its group or artifact id
    pub fn parse(raw: &RawLookupDocument) -> std::result::Result<Self, NoticeError> {
        let parsed = match raw.format() {
            LookupFormat::Xml => Self::from_xml(raw.content()),
            LookupFormat::Yaml => {
                serde_yaml_ng::from_str::<Self>(raw.content()).map_err(anyhow::Error::from)
            }
            LookupFormat::Json => {
                serde_json::from_str::<Self>(raw.content()).map_err(anyhow::Error::from)
            }
            LookupFormat::Toml => {
                toml::from_str::<Self>(raw.content()).map_err(anyhow::Error::from)
            }
        };

        parsed
            .map(Self::normalized)
            .and_then(|document| {
                document.validate()?;
                Ok(document)
            })
            .map_err(|e| NoticeError::LookupSourceError {
                resource: raw.resource().to_string(),
                details: format!("{:#}", e),
            })
    }

    /// Serializes the document as `license-lookup` XML
    pub fn to_xml(&self) -> Result<String> {
        let xml_document = XmlLicenseLookup::from(self);

        let mut body = String::new();
        let mut serializer =
            quick_xml::se::Serializer::with_root(&mut body, Some(XML_ROOT_ELEMENT))?;
        serializer.indent(' ', 2);
        xml_document.serialize(serializer)?;

        Ok(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
            body
        ))
    }

    fn from_xml(content: &str) -> Result<Self> {
        let xml_document: XmlLicenseLookup = quick_xml::de::from_str(content)?;
        xml_document.try_into()
    }

    /// Trims all values and turns blank optional values into `None`
    fn normalized(mut self) -> Self {
        for entry in &mut self.artifacts {
            entry.group_id = entry.group_id.trim().to_string();
            entry.artifact_id = entry.artifact_id.trim().to_string();
            entry.name = trimmed(entry.name.take());
            entry.license = trimmed(entry.license.take());
            for version in &mut entry.versions {
                version.value = version.value.trim().to_string();
                version.license = trimmed(version.license.take());
            }
        }
        self
    }

    fn validate(&self) -> Result<()> {
        for (i, entry) in self.artifacts.iter().enumerate() {
            if entry.group_id.is_empty() {
                anyhow::bail!("artifact[{}]: groupId must not be empty", i);
            }
            if entry.artifact_id.is_empty() {
                anyhow::bail!(
                    "artifact[{}] ({}): artifactId must not be empty",
                    i,
                    entry.group_id
                );
            }
            if let Some(j) = entry.versions.iter().position(|v| v.value.is_empty()) {
                anyhow::bail!(
                    "artifact[{}] ({}:{}): version[{}] must not be empty",
                    i,
                    entry.group_id,
                    entry.artifact_id,
                    j
                );
            }
        }
        Ok(())
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Serialization format of a lookup document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupFormat {
    #[default]
    Xml,
    Yaml,
    Json,
    Toml,
}

impl LookupFormat {
    /// Picks the format from a file name or URL extension; XML when unknown
    pub fn from_reference(reference: &str) -> Self {
        let path = reference
            .split(['?', '#'])
            .next()
            .unwrap_or(reference)
            .to_lowercase();

        if path.ends_with(".yml") || path.ends_with(".yaml") {
            LookupFormat::Yaml
        } else if path.ends_with(".json") {
            LookupFormat::Json
        } else if path.ends_with(".toml") {
            LookupFormat::Toml
        } else {
            LookupFormat::Xml
        }
    }
}

/// Unparsed lookup data as returned by a lookup source loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLookupDocument {
    resource: String,
    format: LookupFormat,
    content: String,
}

impl RawLookupDocument {
    /// Creates a raw document, inferring the format from the resource name
    pub fn new(resource: impl Into<String>, content: impl Into<String>) -> Self {
        let resource = resource.into();
        Self {
            format: LookupFormat::from_reference(&resource),
            resource,
            content: content.into(),
        }
    }

    /// Name of the file, URL or resource the content came from
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn format(&self) -> LookupFormat {
        self.format
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// quick-xml needs attribute and text fields marked with `@` and `$text`,
// so XML goes through its own mirror of the schema.

#[derive(Debug, Serialize, Deserialize)]
struct XmlLicenseLookup {
    #[serde(rename = "artifact", default)]
    artifacts: Vec<XmlArtifact>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlArtifact {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(rename = "version", default, skip_serializing_if = "Vec::is_empty")]
    versions: Vec<XmlVersion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlVersion {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    match_type: Option<String>,
    #[serde(rename = "@license", default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<&LicenseLookupDocument> for XmlLicenseLookup {
    fn from(document: &LicenseLookupDocument) -> Self {
        let artifacts = document
            .artifacts
            .iter()
            .map(|entry| XmlArtifact {
                group_id: entry.group_id.clone(),
                artifact_id: entry.artifact_id.clone(),
                name: entry.name.clone(),
                license: entry.license.clone(),
                versions: entry
                    .versions
                    .iter()
                    .map(|version| XmlVersion {
                        match_type: (!version.match_type.is_exact())
                            .then(|| version.match_type.to_string()),
                        license: version.license.clone(),
                        value: version.value.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { artifacts }
    }
}

impl TryFrom<XmlLicenseLookup> for LicenseLookupDocument {
    type Error = anyhow::Error;

    fn try_from(xml_document: XmlLicenseLookup) -> Result<Self> {
        let mut artifacts = Vec::with_capacity(xml_document.artifacts.len());
        for xml_entry in xml_document.artifacts {
            let mut versions = Vec::with_capacity(xml_entry.versions.len());
            for xml_version in xml_entry.versions {
                let match_type = match xml_version.match_type.as_deref() {
                    Some(raw) => raw.parse::<VersionMatchType>().map_err(|e| {
                        anyhow::anyhow!(
                            "{}:{}: {}",
                            xml_entry.group_id,
                            xml_entry.artifact_id,
                            e
                        )
                    })?,
                    None => VersionMatchType::Exact,
                };
                versions.push(MappedVersion {
                    value: xml_version.value,
                    match_type,
                    license: xml_version.license,
                });
            }
            artifacts.push(ArtifactLicense {
                group_id: xml_entry.group_id,
                artifact_id: xml_entry.artifact_id,
                name: xml_entry.name,
                license: xml_entry.license,
                versions,
            });
        }
        Ok(Self { artifacts })
    }
}
