use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct KeyPairInfo {
    pub key_name: String,
    pub key_fingerprint: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateKeyPairRequest {
    pub key_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateKeyPairResponse {
    pub key_name: String,
    pub key_fingerprint: String,
    /// PEM-encoded private key. Returned exactly once, at creation.
    pub key_material: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImportKeyPairRequest {
    pub key_name: String,
    pub public_key_material: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImportKeyPairResponse {
    pub key_name: String,
    pub key_fingerprint: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteKeyPairRequest {
    pub key_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeKeyPairsRequest {
    pub key_names: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeKeyPairsResponse {
    pub key_pairs: Vec<KeyPairInfo>,
}
