//! Cloud provider classification based on the reverse DNS hostname.
//!
//! These are naming heuristics, not authoritative provider signals: anyone
//! controlling a PTR record can pick a hostname that matches.

use crate::LookupRecord;

const EC2_PREFIX: &str = "ec2-";
const GCP_SUFFIX: &str = ".bc.googleusercontent.com";
const GOOGLE_BOT_SUFFIX: &str = ".googlebot.com";

pub fn is_ec2_hostname(hostname: &str) -> bool {
    hostname.starts_with(EC2_PREFIX)
}

pub fn is_gcp_hostname(hostname: &str) -> bool {
    hostname.ends_with(GCP_SUFFIX)
}

pub fn is_google_bot_hostname(hostname: &str) -> bool {
    hostname.ends_with(GOOGLE_BOT_SUFFIX)
}

impl LookupRecord {
    /// Whether the hostname follows the AWS EC2 public DNS naming scheme.
    pub fn is_ec2(&self) -> bool {
        is_ec2_hostname(&self.hostname)
    }

    /// Whether the hostname belongs to a Google Compute Engine instance.
    pub fn is_gcp(&self) -> bool {
        is_gcp_hostname(&self.hostname)
    }

    pub fn is_google_bot(&self) -> bool {
        is_google_bot_hostname(&self.hostname)
    }
}
