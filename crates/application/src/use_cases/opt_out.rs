use crate::ports::{EventSink, OptOutLedger};
use addv_domain::SubnetKey;
use std::sync::Arc;

/// Records a reporter's fire-and-forget opt-out: logged unconditionally,
/// and additively recorded in the ledger by subnet so that
/// `select_batch` stops assigning work to it.
pub struct OptOutUseCase {
    opt_out: Arc<dyn OptOutLedger>,
    prefix_len: u8,
    events: Arc<dyn EventSink>,
}

impl OptOutUseCase {
    pub fn new(opt_out: Arc<dyn OptOutLedger>, prefix_len: u8, events: Arc<dyn EventSink>) -> Self {
        Self {
            opt_out,
            prefix_len,
            events,
        }
    }

    /// Logs OPTOUT unconditionally, even when the reporter's IP could not
    /// be determined (e.g. a proxy-misconfiguration case); the subnet is
    /// only recorded in the ledger when `reporter_ip` is present and parses.
    pub async fn execute(&self, reporter_ip: Option<&str>) {
        self.events.optout(reporter_ip.unwrap_or_default()).await;
        if let Some(ip) = reporter_ip {
            if let Ok(subnet) = SubnetKey::of(ip, self.prefix_len) {
                self.opt_out.opt_out(&subnet);
            }
        }
    }
}
