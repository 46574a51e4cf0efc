//! Zone backend implementations

mod clouddns;

pub use clouddns::CloudDnsClient;
