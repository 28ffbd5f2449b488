//! Closed SPDX vocabularies.
//!
//! Every vocabulary maps to and from its SPDX text exhaustively. Unknown text
//! is an error rather than a silent default, and each enum carries a
//! `Missing` variant standing for "not provided" which is never serialized
//! and never parsed.

use crate::error::SpdxError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! spdx_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            /// Not provided
            #[default]
            Missing,
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every provided (non-missing) value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical SPDX text; empty for `Missing`.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    Self::Missing => "",
                    $( Self::$variant => $text ),+
                }
            }

            #[must_use]
            pub const fn is_missing(&self) -> bool {
                matches!(self, Self::Missing)
            }
        }

        impl FromStr for $name {
            type Err = SpdxError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text $(| $alias)* => Ok(Self::$variant), )+
                    _ => Err(SpdxError::unknown_vocabulary($kind, s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

spdx_vocabulary! {
    /// Checksum algorithms accepted by SPDX 2.3.
    pub enum ChecksumAlgorithm ("checksum algorithm") {
        Sha1 => "SHA1",
        Sha224 => "SHA224",
        Sha256 => "SHA256",
        Sha384 => "SHA384",
        Sha512 => "SHA512",
        Sha3_256 => "SHA3-256",
        Sha3_384 => "SHA3-384",
        Sha3_512 => "SHA3-512",
        Blake2b256 => "BLAKE2b-256",
        Blake2b384 => "BLAKE2b-384",
        Blake2b512 => "BLAKE2b-512",
        Blake3 => "BLAKE3",
        Md2 => "MD2",
        Md4 => "MD4",
        Md5 => "MD5",
        Md6 => "MD6",
        Adler32 => "ADLER32",
    }
}

spdx_vocabulary! {
    /// Relationship kinds between SPDX elements.
    pub enum RelationshipType ("relationship type") {
        Describes => "DESCRIBES",
        DescribedBy => "DESCRIBED_BY",
        Contains => "CONTAINS",
        ContainedBy => "CONTAINED_BY",
        DependsOn => "DEPENDS_ON",
        DependencyOf => "DEPENDENCY_OF",
        DependencyManifestOf => "DEPENDENCY_MANIFEST_OF",
        BuildDependencyOf => "BUILD_DEPENDENCY_OF",
        DevDependencyOf => "DEV_DEPENDENCY_OF",
        OptionalDependencyOf => "OPTIONAL_DEPENDENCY_OF",
        ProvidedDependencyOf => "PROVIDED_DEPENDENCY_OF",
        TestDependencyOf => "TEST_DEPENDENCY_OF",
        RuntimeDependencyOf => "RUNTIME_DEPENDENCY_OF",
        ExampleOf => "EXAMPLE_OF",
        Generates => "GENERATES",
        GeneratedFrom => "GENERATED_FROM",
        AncestorOf => "ANCESTOR_OF",
        DescendantOf => "DESCENDANT_OF",
        VariantOf => "VARIANT_OF",
        DistributionArtifact => "DISTRIBUTION_ARTIFACT",
        PatchFor => "PATCH_FOR",
        PatchApplied => "PATCH_APPLIED",
        CopyOf => "COPY_OF",
        FileAdded => "FILE_ADDED",
        FileDeleted => "FILE_DELETED",
        FileModified => "FILE_MODIFIED",
        ExpandedFromArchive => "EXPANDED_FROM_ARCHIVE",
        DynamicLink => "DYNAMIC_LINK",
        StaticLink => "STATIC_LINK",
        DataFileOf => "DATA_FILE_OF",
        TestCaseOf => "TEST_CASE_OF",
        BuildToolOf => "BUILD_TOOL_OF",
        DevToolOf => "DEV_TOOL_OF",
        TestOf => "TEST_OF",
        TestToolOf => "TEST_TOOL_OF",
        DocumentationOf => "DOCUMENTATION_OF",
        OptionalComponentOf => "OPTIONAL_COMPONENT_OF",
        MetafileOf => "METAFILE_OF",
        PackageOf => "PACKAGE_OF",
        Amends => "AMENDS",
        PrerequisiteFor => "PREREQUISITE_FOR",
        HasPrerequisite => "HAS_PREREQUISITE",
        RequirementDescriptionFor => "REQUIREMENT_DESCRIPTION_FOR",
        SpecificationFor => "SPECIFICATION_FOR",
        Other => "OTHER",
    }
}

spdx_vocabulary! {
    /// Annotation kinds.
    pub enum AnnotationType ("annotation type") {
        Review => "REVIEW",
        Other => "OTHER",
    }
}

spdx_vocabulary! {
    /// External reference categories. Tag-value documents historically use
    /// underscores, JSON documents use hyphens; both are accepted.
    pub enum ReferenceCategory ("external reference category") {
        Security => "SECURITY",
        PackageManager => "PACKAGE-MANAGER" | "PACKAGE_MANAGER",
        PersistentId => "PERSISTENT-ID" | "PERSISTENT_ID",
        Other => "OTHER",
    }
}

spdx_vocabulary! {
    /// File content types.
    pub enum FileType ("file type") {
        Source => "SOURCE",
        Binary => "BINARY",
        Archive => "ARCHIVE",
        Application => "APPLICATION",
        Audio => "AUDIO",
        Image => "IMAGE",
        Text => "TEXT",
        Video => "VIDEO",
        Documentation => "DOCUMENTATION",
        Spdx => "SPDX",
        Other => "OTHER",
    }
}

spdx_vocabulary! {
    /// Primary purpose of a package.
    pub enum PrimaryPackagePurpose ("primary package purpose") {
        Application => "APPLICATION",
        Framework => "FRAMEWORK",
        Library => "LIBRARY",
        Container => "CONTAINER",
        OperatingSystem => "OPERATING-SYSTEM" | "OPERATING_SYSTEM",
        Device => "DEVICE",
        Firmware => "FIRMWARE",
        Source => "SOURCE",
        Archive => "ARCHIVE",
        File => "FILE",
        Install => "INSTALL",
        Other => "OTHER",
    }
}
