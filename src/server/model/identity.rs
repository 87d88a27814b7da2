/// Identity asserted by the provider after successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub email: String,
    /// Profile picture URL from the provider, if any.
    pub picture: Option<String>,
}
