use addv_domain::SubnetKey;

/// Additive, never-decremented set of subnets excluded from future
/// assignments. There is no opt-back-in operation.
pub trait OptOutLedger: Send + Sync {
    fn opt_out(&self, subnet: &SubnetKey);
    fn is_opted_out(&self, subnet: &SubnetKey) -> bool;
}
