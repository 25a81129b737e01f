use super::HttpLookupClient;
use crate::notice_generation::domain::RawLookupDocument;
use crate::ports::outbound::LookupSourceLoader;
use crate::shared::Result;

/// RoutingLookupLoader dispatching lookup references by scheme
///
/// `http://` and `https://` references go to the remote loader, everything
/// else is read by the local loader.
pub struct RoutingLookupLoader<F, H> {
    local: F,
    remote: H,
}

impl<F, H> RoutingLookupLoader<F, H>
where
    F: LookupSourceLoader,
    H: LookupSourceLoader,
{
    pub fn new(local: F, remote: H) -> Self {
        Self { local, remote }
    }
}

impl<F, H> LookupSourceLoader for RoutingLookupLoader<F, H>
where
    F: LookupSourceLoader,
    H: LookupSourceLoader,
{
    fn load(&self, reference: &str) -> Result<RawLookupDocument> {
        if HttpLookupClient::is_remote(reference) {
            self.remote.load(reference)
        } else {
            self.local.load(reference)
        }
    }
}
