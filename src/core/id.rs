//! Message id generation strategies.
//!
//! The visitor calls the configured strategy exactly once per finalized
//! message (external messages carry their own id and skip it).

use std::hash::Hasher;

use clap::ValueEnum;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::data::{MessageMetadata, Part};

/// Computes a stable identifier for a message.
pub trait IdGenerator {
    fn generate_id(
        &self,
        key: Option<&str>,
        parts: &[Part],
        metadata: &MessageMetadata,
    ) -> String;
}

/// Uses the message key; unnamed messages get a content fingerprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyIdGenerator;

impl IdGenerator for KeyIdGenerator {
    fn generate_id(
        &self,
        key: Option<&str>,
        parts: &[Part],
        metadata: &MessageMetadata,
    ) -> String {
        match key {
            Some(key) => key.to_string(),
            None => format!(
                "MSG_UNNAMED_{:016X}",
                fingerprint(metadata.meaning.as_deref(), parts)
            ),
        }
    }
}

/// Derives the id from the message content alone, so identical texts share
/// one id unless their meaning (or key, when no meaning is given) differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerprintIdGenerator;

impl IdGenerator for FingerprintIdGenerator {
    fn generate_id(
        &self,
        key: Option<&str>,
        parts: &[Part],
        metadata: &MessageMetadata,
    ) -> String {
        let salt = metadata.meaning.as_deref().or(key);
        fingerprint(salt, parts).to_string()
    }
}

/// Configuration-level selector for the id strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Key,
    Fingerprint,
}

impl IdStrategy {
    pub fn generator(self) -> &'static dyn IdGenerator {
        match self {
            IdStrategy::Key => &KeyIdGenerator,
            IdStrategy::Fingerprint => &FingerprintIdGenerator,
        }
    }
}

fn fingerprint(salt: Option<&str>, parts: &[Part]) -> u64 {
    let mut hasher = FxHasher::default();
    if let Some(salt) = salt {
        hasher.write(salt.as_bytes());
    }
    hasher.write_u8(0xff);
    for part in parts {
        match part {
            Part::Text(text) => {
                hasher.write_u8(0);
                hasher.write(text.as_bytes());
            }
            Part::Placeholder(name) => {
                hasher.write_u8(1);
                hasher.write(name.as_bytes());
            }
        }
    }
    hasher.finish()
}
