use addv_application::ports::OptOutLedger;
use addv_domain::SubnetKey;
use dashmap::DashSet;

/// Additive opt-out set. There is deliberately no removal operation
/// anywhere in this type; opting back in is not a feature this system
/// exposes.
#[derive(Default)]
pub struct DashSetOptOutLedger {
    subnets: DashSet<SubnetKey>,
}

impl DashSetOptOutLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptOutLedger for DashSetOptOutLedger {
    fn opt_out(&self, subnet: &SubnetKey) {
        self.subnets.insert(subnet.clone());
    }

    fn is_opted_out(&self, subnet: &SubnetKey) -> bool {
        self.subnets.contains(subnet)
    }
}
