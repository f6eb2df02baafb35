//! Credential record format
//!
//! One record per line, three fields joined by a single delimiter:
//! `username:salt:digest`. Usernames, salts, and digests are constrained to
//! alphabets that cannot contain the delimiter, so no escaping is needed.

/// Field separator for the on-disk record format.
pub const FIELD_DELIMITER: char = ':';

/// A stored credential: the salted digest for one username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub salt: String,
    pub digest: String,
}

impl CredentialRecord {
    /// Serializes the record as a single line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.username, FIELD_DELIMITER, self.salt, FIELD_DELIMITER, self.digest
        )
    }

    /// Parses one line of the store. Returns `None` for malformed lines
    /// (wrong field count), including blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim_end().split(FIELD_DELIMITER).collect();
        if fields.len() != 3 {
            return None;
        }
        Some(Self {
            username: fields[0].to_string(),
            salt: fields[1].to_string(),
            digest: fields[2].to_string(),
        })
    }
}
